use std::{fs, io};

use probscript::{
    error::Error,
    interpreter::{evaluator::core::Interpreter, value::core::Value},
    parse_program, run_source,
};
use rand::{SeedableRng, rngs::StdRng};
use walkdir::WalkDir;

#[test]
fn bundled_scripts_run() {
    let mut count = 0;

    for entry in
        WalkDir::new("scripts").into_iter()
                               .filter_map(Result::ok)
                               .filter(|e| e.path().extension().is_some_and(|ext| ext == "psc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = run_source(&content, 123, &mut io::sink()) {
            panic!("Script {path:?} failed:\n{content}\nError: {e}");
        }
    }

    assert!(count > 0, "No scripts found in scripts/");
}

#[test]
fn readme_examples_work() {
    let content = fs::read_to_string("README.md").expect("README.md should exist");
    let blocks = extract_dsl_blocks(&content);
    assert!(!blocks.is_empty(), "No probscript examples found in README.md");

    for (i, code) in blocks.into_iter().enumerate() {
        if let Err(e) = run_source(&code, 123, &mut io::sink()) {
            panic!("README example {} failed:\n{}\nError: {}", i + 1, code, e);
        }
    }
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```probscript") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn run(src: &str, seed: u64) -> Result<String, Error> {
    let mut out = Vec::new();
    run_source(src, seed, &mut out)?;
    Ok(String::from_utf8(out).expect("output is UTF-8"))
}

fn assert_success(src: &str, expected: &str) {
    match run(src, 123) {
        Ok(out) => assert_eq!(out, expected, "unexpected output for:\n{src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match run(src, 123) {
        Ok(out) => panic!("Script succeeded but was expected to fail, printed {out:?}"),
        Err(e) => e,
    }
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_success("x = 3\ny = x * 2\nprint y\n", "6\n");
    assert_success("print 8 - 5\n", "3\n");
    assert_success("print 10 / 4\n", "2.5\n");
    assert_success("x = 1\nx = x + 1\nprint x\n", "2\n");
}

#[test]
fn operator_precedence_and_associativity() {
    assert_success("print 1 + 2 * 3\n", "7\n");
    assert_success("print (1 + 2) * 3\n", "9\n");
    assert_success("print 10 - 4 - 3\n", "3\n");
    assert_success("print 16 / 4 / 2\n", "2\n");
    assert_success("print -2 * -3\n", "6\n");
    assert_success("print --4\n", "4\n");
    assert_success("print 1 + 1 == 2\n", "1\n");
    assert_success("print 1 < 2 == 1\n", "1\n");
}

#[test]
fn comparisons_yield_one_or_zero() {
    assert_success("print 3 > 2\nprint 3 < 2\n", "1\n0\n");
    assert_success("print 2 >= 2\nprint 2 <= 1\n", "1\n0\n");
    assert_success("print 2 == 2\nprint 2 != 2\n", "1\n0\n");
}

#[test]
fn number_formatting() {
    assert_success("print 0.1\n", "0.1\n");
    assert_success("print 6.0\n", "6\n");
    assert_success("print 0 - 0\nprint -0\n", "0\n0\n");
    assert_success("print 1 / 3 * 3\n", "1\n");
}

#[test]
fn if_runs_body_only_when_non_zero() {
    assert_success("x = 0\nif 1 { x = 1 }\nprint x\n", "1\n");
    assert_success("x = 0\nif 0 { x = 1 }\nprint x\n", "0\n");
    assert_success("x = 0\nif -0.5 { x = 1 }\nprint x\n", "1\n");
}

#[test]
fn repeat_counts() {
    assert_success("n = 0\nrepeat 3 { n = n + 1 }\nprint n\n", "3\n");
    assert_success("n = 7\nrepeat 0 { n = 0 }\nprint n\n", "7\n");
    assert_success("n = 0\nrepeat 2.9 { n = n + 1 }\nprint n\n", "2\n");
    assert_success("n = 0\nrepeat 2 { repeat 3 { n = n + 1 } }\nprint n\n", "6\n");
    assert_success("repeat 2 { print 1 }\n", "1\n1\n");
}

#[test]
fn blocks_share_one_namespace() {
    assert_success("{ x = 4 }\nprint x\n", "4\n");
    assert_success("repeat 1 { y = 2 }\nprint y\n", "2\n");
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    assert_success("// header\n\nx = 1 // trailing\n\n\nprint x\n", "1\n");
}

#[test]
fn collect_and_get_stat() {
    assert_success("collect s 1\ncollect s 2\ncollect s 3\nprint get_stat(\"mean\", s)\n",
                   "2\n");
    assert_success("collect s 4\ncollect s 1\ncollect s 3\ncollect s 2\n\
                    print get_stat(\"variance\", s)\nprint get_stat(\"median\", s)\n\
                    print get_stat(\"count\", s)\n",
                   "1.25\n2.5\n4\n");
    assert_success("i = 0\nrepeat 4 { i = i + 1\ncollect x i\ncollect y 2 * i }\n\
                    print get_stat(\"covariance\", x, y)\n",
                   "2.5\n");
    assert_success("collect s 1\ncollect s 2\ncollect s 3\ncollect s 4\n\
                    print get_stat(\"central_moment\", s, 2)\nprint get_stat(\"moment\", s, 1)\n",
                   "1.25\n2.5\n");
}

#[test]
fn sample_names_are_separate_from_variables() {
    assert_success("s = 10\ncollect s 1\ncollect s 3\nprint s\nprint get_stat(\"mean\", s)\n",
                   "10\n2\n");
}

#[test]
fn same_seed_gives_same_output() {
    let src = "repeat 5 { print uniform(0, 100) }\nprint normal(3, 2)\n";

    let first = run(src, 42).expect("script runs");
    let second = run(src, 42).expect("script runs");
    assert_eq!(first, second);
    assert_eq!(first.lines().count(), 6);
}

#[test]
fn different_seeds_give_different_draws() {
    let src = "print uniform()\n";
    assert_ne!(run(src, 1).expect("script runs"), run(src, 2).expect("script runs"));
}

#[test]
fn distribution_defaults() {
    assert_success("ok = 1\nrepeat 200 { u = uniform()\nif u < 0 { ok = 0 }\nif u >= 1 { ok = 0 } }\nprint ok\n",
                   "1\n");
    assert_success("ok = 1\nrepeat 200 { u = uniform(5)\nif u < 0 { ok = 0 }\nif u >= 5 { ok = 0 } }\nprint ok\n",
                   "1\n");
    assert_success("repeat 3000 { collect z normal(10) }\nprint get_stat(\"mean\", z) > 9.8\n",
                   "1\n");
}

#[test]
fn lexical_errors() {
    assert!(matches!(assert_failure("x = 1 # 2\n"), Error::Lex(_)));
    assert!(matches!(assert_failure("x = 1 ! 2\n"), Error::Lex(_)));
    assert!(matches!(assert_failure("print get_stat(\"mean, s)\n"), Error::Lex(_)));
    assert!(matches!(assert_failure("x = 1.2.3\n"), Error::Lex(_)));
}

#[test]
fn parse_errors() {
    assert!(matches!(assert_failure("x 1\n"), Error::Parse(_)));
    assert!(matches!(assert_failure("print (1 + 2\n"), Error::Parse(_)));
    assert!(matches!(assert_failure("repeat 2 { x = 1\n"), Error::Parse(_)));
    assert!(matches!(assert_failure("print get_stat(mean, s)\n"), Error::Parse(_)));
    assert!(matches!(assert_failure("collect 5\n"), Error::Parse(_)));
}

#[test]
fn parse_errors_prevent_any_output() {
    let mut out = Vec::new();
    assert!(run_source("print 1\nprint (\n", 123, &mut out).is_err());
    assert!(out.is_empty());
}

#[test]
fn runtime_errors() {
    for src in ["x = uniform(5, 5)\n",
                "x = uniform(0)\n",
                "x = normal(0, 0)\n",
                "x = normal(0, -1)\n",
                "print get_stat(\"mean\", s)\n",
                "x = 1 / 0\n",
                "repeat -1 {}\n",
                "print y\n",
                "print sqrt(-1)\n",
                "print pow(10, 400)\n",
                "x = pow(10, 300)\nprint x * x\n",
                "print foo(1)\n",
                "collect s 1\nprint mean(s)\n",
                "print sqrt(1, 2)\n",
                "print uniform(1, 2, 3)\n",
                "collect s 1\nprint get_stat(\"mode\", s)\n",
                "collect s 1\nprint get_stat(\"mean\", s, 2)\n",
                "collect s 1\nprint get_stat(\"moment\", s)\n",
                "collect s 1\nprint get_stat(\"moment\", s, 1.5)\n",
                "collect s 1\nprint get_stat(\"mean\", s + 1)\n",
                "collect x 1\ncollect y 1\ncollect y 2\nprint get_stat(\"covariance\", x, y)\n",
                "collect x 1\ncollect x 1\ncollect y 1\ncollect y 2\nprint get_stat(\"corr\", x, y)\n",
                "print \"text\"\n"]
    {
        let err = assert_failure(src);
        assert!(matches!(err, Error::Runtime(_)), "expected runtime error for {src:?}, got {err}");
    }
}

#[test]
fn output_before_a_runtime_error_is_kept() {
    let mut out = Vec::new();
    let err = run_source("print 1\nprint 2 / 0\nprint 3\n", 123, &mut out).unwrap_err();

    assert_eq!(out, b"1\n");
    assert!(err.to_string().contains("line 2"), "{err}");
}

#[test]
fn error_messages_carry_positions() {
    let err = assert_failure("x = 1\ny = (2\n");
    assert!(err.to_string().starts_with("Parse error at line 3"), "{err}");

    let err = assert_failure("x = 1\n  y = @\n");
    assert_eq!(err.to_string(),
               "Lexical error at line 2, column 7: unexpected character '@'");

    let err = assert_failure("x = 1\nprint y\n");
    assert!(err.to_string().contains("line 2"), "{err}");
    assert!(err.to_string().contains("'y'"), "{err}");
}

#[test]
fn implicit_statistics_point_to_get_stat() {
    let err = assert_failure("collect s 1\nprint median(s)\n");
    assert!(err.to_string().contains("get_stat"), "{err}");
}

#[test]
fn print_stat_is_an_unknown_function() {
    let err = assert_failure("collect s 1\nprint print_stat(\"mean\")\n");
    assert!(err.to_string().contains("unknown function 'print_stat'"), "{err}");
}

fn run_with_rng(src: &str, seed: u64) -> (Vec<u8>, Interpreter) {
    let program = parse_program(src).unwrap_or_else(|e| panic!("Script failed to parse: {e}"));
    let mut interpreter = Interpreter::with_rng(StdRng::seed_from_u64(seed));
    let mut out = Vec::new();
    interpreter.execute_program(&program, &mut out)
               .unwrap_or_else(|e| panic!("Script failed: {e}"));
    (out, interpreter)
}

#[test]
fn repeat_collects_one_value_per_iteration() {
    let (_, interpreter) = run_with_rng("repeat 0 { collect s 1 }\nrepeat 3 { collect t 1 }\n", 5);
    let env = interpreter.environment();

    assert!(!env.has_sample("s"));
    assert_eq!(env.sample("s"), None);
    assert_eq!(env.sample("t"), Some(&[Value::Number(1.0); 3][..]));
}

#[test]
fn injected_generators_with_the_same_seed_agree() {
    let src = "repeat 4 { collect u uniform(-1, 1)\nprint normal(0, 2) }\nprint get_stat(\"mean\", u)\n";

    let (first, first_interpreter) = run_with_rng(src, 2024);
    let (second, second_interpreter) = run_with_rng(src, 2024);
    assert_eq!(first, second);
    assert_eq!(first_interpreter.environment().sample("u"),
               second_interpreter.environment().sample("u"));
    assert_eq!(first_interpreter.environment().sample("u").map(<[Value]>::len), Some(4));

    assert_eq!(String::from_utf8(first).expect("output is UTF-8"),
               run(src, 2024).expect("script runs"));
}

#[test]
fn overflow_names_the_operator() {
    let err = assert_failure("x = pow(10, 300)\nprint x * x\n");
    assert_eq!(err.to_string(),
               "Runtime error on line 2: '*' produced a non-finite result");

    let err = assert_failure("x = pow(10, 308)\nprint -x - x\n");
    assert!(err.to_string().contains("'-' produced a non-finite result"), "{err}");
}

#[test]
fn get_stat_argument_errors_point_at_the_argument() {
    let err = assert_failure("collect s 1\nprint get_stat(\"mean\",\n  s + 1)\n");
    assert!(matches!(err, Error::Runtime(_)));
    assert!(err.to_string().starts_with("Runtime error on line 3"), "{err}");

    let err = assert_failure("collect s 1\nprint get_stat(\"moment\", s,\n  0.5)\n");
    assert!(err.to_string().starts_with("Runtime error on line 3"), "{err}");
}

#[test]
fn huge_repeat_counts_are_rejected() {
    let err = assert_failure("repeat pow(10, 300) { x = 1 }\n");
    assert!(matches!(err, Error::Runtime(_)));
    assert!(err.to_string().contains("repeat count"), "{err}");
    assert!(err.to_string().ends_with("is too large"), "{err}");
}

#[test]
fn negation() {
    assert_success("x = 2\nprint -x\nprint -(x - 5)\nprint -0 * 1\n", "-2\n3\n0\n");
}

use std::io::{self, Write};

use tracing::debug;

use crate::{error::Error, interpreter::evaluator::core::DEFAULT_SEED, run_source};

/// Which phase a failing scenario is expected to stop in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Tokenizing.
    Lex,
    /// Parsing.
    Parse,
    /// Execution.
    Runtime,
}

/// What a scenario must produce.
#[derive(Debug, Clone, Copy)]
pub enum Expected {
    /// The script succeeds and prints exactly this.
    Output(&'static str),
    /// The script fails in the given phase.
    Failure(Phase),
}

/// A named script with its expected outcome.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    /// Short name shown in the report.
    pub name:     &'static str,
    /// Script source.
    pub source:   &'static str,
    /// Seed for the random generator.
    pub seed:     u64,
    /// Expected outcome.
    pub expected: Expected,
}

const fn output(name: &'static str, source: &'static str, expected: &'static str) -> Scenario {
    Scenario { name,
               source,
               seed: DEFAULT_SEED,
               expected: Expected::Output(expected) }
}

const fn failure(name: &'static str, source: &'static str, phase: Phase) -> Scenario {
    Scenario { name,
               source,
               seed: DEFAULT_SEED,
               expected: Expected::Failure(phase) }
}

/// The built-in scenarios, in report order.
pub const SCENARIOS: &[Scenario] = &[
    output("assignment and print", "x = 3\ny = x * 2\nprint y\n", "6\n"),
    output("precedence", "print 1 + 2 * 3\nprint (1 + 2) * 3\n", "7\n9\n"),
    output("negation", "print -2 - -3\n", "1\n"),
    output("comparisons", "print 3 > 2\nprint 2 == 3\nprint 2 <= 2\n", "1\n0\n1\n"),
    output("if", "x = 0\nif 2 > 1 { x = 1 }\nif 0 { x = 2 }\nprint x\n", "1\n"),
    output("repeat", "n = 0\nrepeat 3 { n = n + 1 }\nprint n\n", "3\n"),
    output("repeat zero times", "n = 5\nrepeat 0 { n = 0 }\nprint n\n", "5\n"),
    output("repeat truncates", "n = 0\nrepeat 2.9 { n = n + 1 }\nprint n\n", "2\n"),
    output("mean", "collect s 1\ncollect s 2\ncollect s 3\nprint get_stat(\"mean\", s)\n", "2\n"),
    output("variance and median",
           "i = 0\nrepeat 4 { i = i + 1\n  collect s i }\n\
            print get_stat(\"variance\", s)\nprint get_stat(\"median\", s)\n\
            collect s 10\nprint get_stat(\"median\", s)\n",
           "1.25\n2.5\n3\n"),
    output("stddev",
           "collect s 1\ncollect s 2\ncollect s 3\ncollect s 4\n\
            print get_stat(\"stddev\", s) == sqrt(get_stat(\"variance\", s))\n",
           "1\n"),
    output("central moment",
           "collect s 1\ncollect s 2\ncollect s 3\ncollect s 4\n\
            print get_stat(\"central_moment\", s, 2)\nprint get_stat(\"moment\", s, 0)\n",
           "1.25\n1\n"),
    output("covariance and correlation",
           "i = 0\nrepeat 4 { i = i + 1\n  collect x i\n  collect y 2 * i }\n\
            print get_stat(\"covariance\", x, y)\nprint get_stat(\"corr\", x, y) > 0.999999\n",
           "2.5\n1\n"),
    output("uniform stays in range",
           "ok = 1\nrepeat 100 { u = uniform(2, 3)\n  if u < 2 { ok = 0 }\n  if u >= 3 { ok = 0 } }\nprint ok\n",
           "1\n"),
    output("pow", "print pow(2, 10)\n", "1024\n"),
    failure("empty uniform range", "x = uniform(5, 5)\n", Phase::Runtime),
    failure("non-positive sigma", "x = normal(0, 0)\n", Phase::Runtime),
    failure("mean of empty sample", "print get_stat(\"mean\", s)\n", Phase::Runtime),
    failure("division by zero", "x = 1 / 0\n", Phase::Runtime),
    failure("negative repeat", "repeat -1 {}\n", Phase::Runtime),
    failure("undefined variable", "print y\n", Phase::Runtime),
    failure("implicit statistic", "collect s 1\nprint mean(s)\n", Phase::Runtime),
    failure("get_stat needs a string", "print get_stat(mean, s)\n", Phase::Parse),
    failure("unclosed block", "repeat 2 { x = 1\n", Phase::Parse),
    failure("unexpected character", "x = 1 # 2\n", Phase::Lex),
];

/// Runs one scenario and describes the mismatch, if any.
fn check(scenario: &Scenario) -> Option<String> {
    let mut out = Vec::new();
    let result = run_source(scenario.source, scenario.seed, &mut out);
    let printed = String::from_utf8_lossy(&out);

    match (scenario.expected, result) {
        (Expected::Output(want), Ok(())) if printed == want => None,
        (Expected::Output(want), Ok(())) => Some(format!("expected output {want:?}, got {printed:?}")),
        (Expected::Output(_), Err(e)) => Some(format!("unexpected error: {e}")),
        (Expected::Failure(phase), Ok(())) => {
            Some(format!("expected a {phase:?} error, but the script succeeded"))
        },
        (Expected::Failure(phase), Err(e)) => {
            let matched = matches!((phase, &e),
                                   (Phase::Lex, Error::Lex(_))
                                   | (Phase::Parse, Error::Parse(_))
                                   | (Phase::Runtime, Error::Runtime(_)));
            (!matched).then(|| format!("expected a {phase:?} error, got: {e}"))
        },
    }
}

/// Runs every scenario in [`SCENARIOS`], writing one `ok`/`FAILED` line per
/// scenario and a summary line to `out`.
///
/// # Returns
/// The number of failed scenarios.
///
/// # Example
/// ```
/// let mut report = Vec::new();
/// let failures = probscript::selftest::run_all(&mut report).unwrap();
///
/// assert_eq!(failures, 0);
/// assert!(String::from_utf8(report).unwrap().ends_with("0 failed\n"));
/// ```
pub fn run_all<W: Write>(out: &mut W) -> io::Result<usize> {
    let mut failures = 0;

    for scenario in SCENARIOS {
        match check(scenario) {
            None => writeln!(out, "ok      {}", scenario.name)?,
            Some(reason) => {
                failures += 1;
                debug!(scenario = scenario.name, %reason, "scenario failed");
                writeln!(out, "FAILED  {}: {reason}", scenario.name)?;
            },
        }
    }

    writeln!(out,
             "{} passed, {failures} failed",
             SCENARIOS.len() - failures)?;
    Ok(failures)
}

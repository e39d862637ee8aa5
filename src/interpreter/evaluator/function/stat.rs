use rand::RngCore;

use crate::{
    ast::Expr,
    error::{RuntimeError, StatError},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
    statistics,
    util::num::{moment_order, usize_to_f64_checked},
};

/// A statistic `get_stat` knows how to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    /// Arithmetic mean.
    Mean,
    /// Population variance.
    Variance,
    /// Population standard deviation.
    StdDev,
    /// Median.
    Median,
    /// Number of values.
    Count,
    /// Raw moment of order `k`.
    Moment,
    /// Central moment of order `k`.
    CentralMoment,
    /// Population covariance of two samples.
    Covariance,
    /// Pearson correlation of two samples.
    Correlation,
}

/// How a statistic's trailing arguments are shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Form {
    /// `get_stat(name, sample)`
    Single,
    /// `get_stat(name, sample, k)`
    WithOrder,
    /// `get_stat(name, sample, other_sample)`
    Paired,
}

impl Statistic {
    /// Looks up a statistic by the name used in scripts.
    ///
    /// `corr` is accepted as a short form of `correlation`.
    ///
    /// # Example
    /// ```
    /// use probscript::interpreter::evaluator::function::stat::Statistic;
    ///
    /// assert_eq!(Statistic::from_name("corr"), Some(Statistic::Correlation));
    /// assert_eq!(Statistic::from_name("mode"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let stat = match name {
            "mean" => Self::Mean,
            "variance" => Self::Variance,
            "stddev" => Self::StdDev,
            "median" => Self::Median,
            "count" => Self::Count,
            "moment" => Self::Moment,
            "central_moment" => Self::CentralMoment,
            "covariance" => Self::Covariance,
            "correlation" | "corr" => Self::Correlation,
            _ => return None,
        };
        Some(stat)
    }

    const fn form(self) -> Form {
        match self {
            Self::Mean | Self::Variance | Self::StdDev | Self::Median | Self::Count => Form::Single,
            Self::Moment | Self::CentralMoment => Form::WithOrder,
            Self::Covariance | Self::Correlation => Form::Paired,
        }
    }

    const fn usage(self) -> &'static str {
        match self.form() {
            Form::Single => "get_stat(\"<stat>\", <sample>)",
            Form::WithOrder => "get_stat(\"<stat>\", <sample>, <k>)",
            Form::Paired => "get_stat(\"<stat>\", <sample>, <other sample>)",
        }
    }
}

/// Extracts a bare sample name, rejecting any other expression.
fn sample_name<'a>(expr: &'a Expr, position: &str) -> EvalResult<&'a str> {
    match expr {
        Expr::Variable { name, .. } => Ok(name),
        other => Err(RuntimeError::InvalidStatArguments { details: format!("{position} argument must be a sample name"),
                                                          line:    other.line_number(), }),
    }
}

impl<R: RngCore> Interpreter<R> {
    /// Evaluates `get_stat(stat_name, sample [, k_or_sample])`.
    ///
    /// The sample arguments are names looked up in the environment, never
    /// evaluated as expressions. A sample that was never collected counts as
    /// empty.
    ///
    /// # Errors
    /// - `UnknownStatistic` if the name is not recognized.
    /// - `InvalidStatArguments` if the argument count or kinds do not fit
    ///   the statistic.
    /// - `Statistics` if the engine rejects the sample(s).
    pub(crate) fn eval_get_stat(&mut self, arguments: &[Expr], line: usize) -> EvalResult<Value> {
        let Some(Expr::Str { text: stat_name, .. }) = arguments.first() else {
            return Err(RuntimeError::InvalidStatArguments { details: "first argument must be a string literal naming the statistic".to_string(),
                                                            line });
        };
        let stat =
            Statistic::from_name(stat_name).ok_or_else(|| RuntimeError::UnknownStatistic {
                                               name: stat_name.clone(),
                                               line,
                                           })?;

        let expected = match stat.form() {
            Form::Single => 2,
            Form::WithOrder | Form::Paired => 3,
        };
        if arguments.len() != expected {
            return Err(RuntimeError::InvalidStatArguments { details: format!("'{stat_name}' expects {}, got {} argument(s)",
                                                                             stat.usage(),
                                                                             arguments.len()),
                                                            line });
        }

        let sample = sample_name(&arguments[1], "second")?;
        let xs = self.environment.sample_numbers(sample);
        let wrap = |source: StatError, sample: String| RuntimeError::Statistics { statistic: stat_name.clone(),
                                                                                   sample,
                                                                                   source,
                                                                                   line };

        let result = match stat {
            Statistic::Mean => statistics::mean(&xs),
            Statistic::Variance => statistics::variance(&xs),
            Statistic::StdDev => statistics::stddev(&xs),
            Statistic::Median => statistics::median(&xs),
            Statistic::Count => {
                let n = statistics::count(&xs).map_err(|e| wrap(e, sample.to_string()))?;
                return Ok(Value::Number(usize_to_f64_checked(n, line)?));
            },
            Statistic::Moment | Statistic::CentralMoment => {
                let order = &arguments[2];
                let k = moment_order(self.eval(order)?.as_number(), order.line_number())?;
                if stat == Statistic::Moment {
                    statistics::moment(&xs, k)
                } else {
                    statistics::central_moment(&xs, k)
                }
            },
            Statistic::Covariance | Statistic::Correlation => {
                let other = sample_name(&arguments[2], "third")?;
                let ys = self.environment.sample_numbers(other);
                let paired = if stat == Statistic::Covariance {
                    statistics::covariance(&xs, &ys)
                } else {
                    statistics::correlation(&xs, &ys)
                };
                let value = paired.map_err(|e| wrap(e, format!("{sample}, {other}")))?;
                return Value::finite(value, stat_name, line);
            },
        };

        let value = result.map_err(|e| wrap(e, sample.to_string()))?;
        Value::finite(value, stat_name, line)
    }
}

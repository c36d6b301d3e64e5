//! Checked ffmpeg calls

use crate::c::describe;
use crate::error::AvError;
use std::borrow::Cow;
use std::ffi::c_int;
use std::fmt;

/// How a return code is compared against the expected value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Comparison {
    /// Whether `lhs <op> rhs` holds
    pub fn holds(self, lhs: c_int, rhs: c_int) -> bool {
        match self {
            Self::Eq => lhs == rhs,
            Self::Ne => lhs != rhs,
            Self::Lt => lhs < rhs,
            Self::Le => lhs <= rhs,
            Self::Gt => lhs > rhs,
            Self::Ge => lhs >= rhs,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
        })
    }
}

/// Check the return code of an ffmpeg call.
///
/// # Arguments
///
/// * `label` - The name of the call, used in the log output and the returned error
/// * `result` - The code the call returned
/// * `comparison` - How `result` is compared against `expected`
/// * `expected` - The value `result` should compare favourably with
///
/// Returns `result` unchanged when the comparison holds.
pub fn check<S>(
    label: S,
    result: c_int,
    comparison: Comparison,
    expected: c_int,
) -> Result<c_int, AvError>
where
    S: Into<Cow<'static, str>>,
{
    if comparison.holds(result, expected) {
        return Ok(result);
    }

    let err = AvError::from_code(label, result);
    match err {
        AvError::EndOfFile { .. } | AvError::Again { .. } => {
            log::debug!("{} returned {}", err.label(), err);
        }
        _ => {
            log::warn!(
                "comparing {} ({}) {} {} fails, reason: {}",
                err.label(),
                result,
                comparison,
                expected,
                describe(result)
            );
        }
    }

    Err(err)
}

/// Check the return code of an ffmpeg call where any negative value is a failure
#[inline]
pub fn ensure<S>(label: S, result: c_int) -> Result<c_int, AvError>
where
    S: Into<Cow<'static, str>>,
{
    check(label, result, Comparison::Ge, 0)
}

/// Evaluate an ffmpeg call, returning early with an [`AvError`](crate::AvError) if it failed
#[macro_export]
macro_rules! try_av {
    ($e:expr, $label:expr) => {{
        let res = $e;
        if res < 0 {
            return Err($crate::AvError::from_code($label, res).into());
        }
        res
    }};
}

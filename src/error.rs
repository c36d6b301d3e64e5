use crate::c::describe;
use crate::convert::{is_again, is_eof, AVERROR_EAGAIN, AVERROR_EOF};
use std::borrow::Cow;
use std::ffi::c_int;

/// A failed ffmpeg call
#[non_exhaustive]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AvError {
    /// The call reached the end of its input
    #[error("{label}: end of file")]
    EndOfFile { label: Cow<'static, str> },
    /// The call needs more input (or output to be drained) before it can make progress
    #[error("{label}: resource temporarily unavailable")]
    Again { label: Cow<'static, str> },
    #[error("{label} failed with code {code}: {reason}")]
    Call {
        label: Cow<'static, str>,
        code: c_int,
        reason: String,
    },
}

impl AvError {
    /// Classify a failing return code from the ffmpeg call named by `label`
    pub fn from_code<S>(label: S, code: c_int) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        let label = label.into();

        if is_eof(code) {
            Self::EndOfFile { label }
        } else if is_again(code) {
            Self::Again { label }
        } else {
            Self::Call {
                label,
                code,
                reason: describe(code),
            }
        }
    }

    /// The raw `AVERROR` code
    pub fn code(&self) -> c_int {
        match self {
            Self::EndOfFile { .. } => AVERROR_EOF,
            Self::Again { .. } => AVERROR_EAGAIN,
            Self::Call { code, .. } => *code,
        }
    }

    /// The name of the call that failed
    pub fn label(&self) -> &str {
        match self {
            Self::EndOfFile { label } | Self::Again { label } | Self::Call { label, .. } => label,
        }
    }

    /// Whether the call reached the end of its input
    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::EndOfFile { .. })
    }

    /// Whether the call should be retried once more input is available
    #[inline]
    pub fn is_again(&self) -> bool {
        matches!(self, Self::Again { .. })
    }
}

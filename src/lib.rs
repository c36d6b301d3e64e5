mod c;
mod check;
mod convert;
mod error;

pub use c::describe;
pub use check::{check, ensure, Comparison};
pub use convert::{
    from_av_error, is_again, is_again_or_eof, is_eof, to_av_error, AVERROR_EAGAIN, AVERROR_EOF,
};
pub use error::AvError;

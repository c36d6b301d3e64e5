//! Conversions between platform errno values and ffmpeg `AVERROR` codes

use std::ffi::c_int;

/// ffmpeg's end of file sentinel
pub const AVERROR_EOF: c_int = ffmpeg::AVERROR_EOF;

/// `AVERROR(EAGAIN)`, returned when a codec needs more input before it can produce output
pub const AVERROR_EAGAIN: c_int = to_av_error(libc::EAGAIN);

/// Convert an error number into ffmpeg's negated representation.
///
/// Every non-zero input maps to `-|e|`, so codes that are already negative pass through
/// unchanged and `0` stays `0`. `i32::MIN` is already negative and is returned as is.
#[inline]
pub const fn to_av_error(e: c_int) -> c_int {
    if e > 0 {
        -e
    } else {
        e
    }
}

/// Recover the positive error number from an `AVERROR` code (ffmpeg's `AVUNERROR`).
///
/// Saturates at `i32::MAX` for `i32::MIN`.
#[inline]
pub const fn from_av_error(e: c_int) -> c_int {
    e.saturating_abs()
}

/// Check whether `e` is ffmpeg's end of file sentinel
#[inline]
pub const fn is_eof(e: c_int) -> bool {
    e == AVERROR_EOF
}

/// Check whether `e` is `AVERROR(EAGAIN)`
#[inline]
pub const fn is_again(e: c_int) -> bool {
    e == AVERROR_EAGAIN
}

/// Whether a receive loop (`avcodec_receive_frame`, `av_bsf_receive_packet`) should stop draining
#[inline]
pub const fn is_again_or_eof(e: c_int) -> bool {
    is_again(e) || is_eof(e)
}

//! Internal helpers to interface with the c ffmpeg code

use std::ffi::{c_char, c_int, CStr};

const ERROR_BUFFER_SIZE: usize = ffmpeg::AV_ERROR_MAX_STRING_SIZE as usize;

/// Get ffmpeg's description of an error code.
///
/// Codes ffmpeg does not know about still produce a generic "Error number N occurred" message.
pub fn describe(code: c_int) -> String {
    let mut buf = [0 as c_char; ERROR_BUFFER_SIZE];

    // av_strerror always null terminates within the given size, even when it returns < 0
    unsafe {
        ffmpeg::av_strerror(code, buf.as_mut_ptr(), buf.len());
        CStr::from_ptr(buf.as_ptr()).to_string_lossy().into_owned()
    }
}

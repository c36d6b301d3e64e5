use averror::{
    check, describe, ensure, to_av_error, try_av, AvError, Comparison, AVERROR_EAGAIN, AVERROR_EOF,
};

#[test]
fn comparisons() {
    assert!(Comparison::Eq.holds(0, 0));
    assert!(!Comparison::Eq.holds(-1, 0));
    assert!(Comparison::Ne.holds(-1, 0));
    assert!(Comparison::Lt.holds(-1, 0));
    assert!(!Comparison::Lt.holds(0, 0));
    assert!(Comparison::Le.holds(0, 0));
    assert!(Comparison::Gt.holds(1, 0));
    assert!(Comparison::Ge.holds(0, 0));
    assert!(!Comparison::Ge.holds(-1, 0));

    assert_eq!(Comparison::Ge.to_string(), ">=");
    assert_eq!(Comparison::Ne.to_string(), "!=");
}

#[test]
fn passing_check_returns_result() {
    assert_eq!(check("avformat_open_input", 0, Comparison::Eq, 0), Ok(0));
    assert_eq!(check("av_read_frame", 3, Comparison::Ge, 0), Ok(3));
    assert_eq!(ensure("avcodec_open2", 0), Ok(0));
}

#[test]
fn failing_check_keeps_code() {
    let code = to_av_error(libc::ENOENT);
    let err = check("avformat_open_input", code, Comparison::Eq, 0).unwrap_err();

    assert_eq!(err.code(), code);
    assert_eq!(err.label(), "avformat_open_input");
    assert!(!err.is_eof());
    assert!(!err.is_again());
    match err {
        AvError::Call { reason, .. } => assert_eq!(reason, describe(code)),
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn eof_and_again_are_classified() {
    let err = ensure("av_read_frame", AVERROR_EOF).unwrap_err();
    assert!(err.is_eof());
    assert_eq!(err.code(), AVERROR_EOF);
    assert_eq!(err.to_string(), "av_read_frame: end of file");

    let err = ensure("avcodec_receive_frame", AVERROR_EAGAIN).unwrap_err();
    assert!(err.is_again());
    assert_eq!(err.code(), AVERROR_EAGAIN);
}

#[test]
fn error_display() {
    let code = to_av_error(libc::EINVAL);
    let err = AvError::from_code(String::from("av_bsf_alloc"), code);
    assert_eq!(
        err.to_string(),
        format!("av_bsf_alloc failed with code {}: {}", code, describe(code))
    );
}

#[test]
fn descriptions() {
    assert_eq!(describe(AVERROR_EOF), "End of file");
    assert!(!describe(to_av_error(libc::ENOENT)).is_empty());
}

fn open(result: i32) -> Result<i32, AvError> {
    let res = try_av!(result, "avformat_open_input");
    Ok(res + 1)
}

#[test]
fn try_av_macro() {
    assert_eq!(open(0), Ok(1));
    assert!(open(AVERROR_EOF).unwrap_err().is_eof());
    assert_eq!(open(-5).unwrap_err().code(), -5);
}

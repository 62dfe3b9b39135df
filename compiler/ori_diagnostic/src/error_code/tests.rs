use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E0003.as_str(), "E0003");
}

#[test]
fn test_from_str_round_trips_every_code() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(code));
    }
    assert_eq!("e1006".parse::<ErrorCode>(), Ok(ErrorCode::E1006));
    assert_eq!("E9999".parse::<ErrorCode>(), Err(()));
}

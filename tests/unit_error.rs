use trak::error::{exit_codes, Error, JsonError};

#[test]
fn exit_codes_map_correctly() {
    let not_found = Error::TaskNotFound(12);
    assert_eq!(not_found.exit_code(), exit_codes::USER_ERROR);

    let empty = Error::EmptyDescription;
    assert_eq!(empty.exit_code(), exit_codes::USER_ERROR);

    let status = Error::InvalidStatus("finished".to_string());
    assert_eq!(status.exit_code(), exit_codes::USER_ERROR);

    let io = Error::Io(std::io::Error::other("boom"));
    assert_eq!(io.exit_code(), exit_codes::OPERATION_FAILED);
}

#[test]
fn json_error_includes_code() {
    let err = Error::TaskNotFound(3);
    let json = JsonError::from(&err);
    assert_eq!(json.code, exit_codes::USER_ERROR);
    assert!(json.error.contains("Task not found: 3"));
}

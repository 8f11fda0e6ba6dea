use super::*;

#[test]
fn can_format_rebalance_error() {
    let error = RebalanceError::InvalidInput("station roster is empty".to_string());

    assert_eq!(error.kind(), "InvalidInput");
    assert_eq!(error.message(), "station roster is empty");
    assert_eq!(error.to_string(), "InvalidInput: station roster is empty");
}

#[test]
fn can_create_generic_error_from_message() {
    let error = GenericError::from(format!("cannot open {} file", "config"));

    assert_eq!(error, GenericError::from("cannot open config file"));
    assert_eq!(error.to_string(), "cannot open config file");
}

use sledger_logger::{Logger, LoggerError};

#[test]
fn second_init_is_a_subscriber_error() {
    let _first = Logger::builder().name("integration-twice").init().expect("first init");

    let err = Logger::builder().name("integration-twice-again").init().expect_err("second init");
    assert!(matches!(err, LoggerError::Subscriber { .. }));
}

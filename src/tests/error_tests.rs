use crate::error::EventSystemError;

#[test]
fn test_dispatcher_poisoned_display() {
    let error = EventSystemError::DispatcherPoisoned {
        operation: "dispatch",
    };

    assert_eq!(
        error.to_string(),
        "Attempted to operate on a poisoned event dispatcher during 'dispatch'"
    );
}

#[test]
fn test_error_is_std_error() {
    fn assert_std_error<E: std::error::Error + Send + Sync + 'static>() {}
    assert_std_error::<EventSystemError>();
}

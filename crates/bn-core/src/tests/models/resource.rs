use crate::{CoreError, Resource};

#[test]
fn test_loading_is_not_terminal() {
    let state: Resource<u32> = Resource::Loading;
    assert!(state.is_loading());
    assert!(!state.is_terminal());
    assert!(state.value().is_none());
}

#[test]
fn test_success_exposes_value() {
    let state = Resource::Success(7);
    assert!(state.is_success());
    assert!(state.is_terminal());
    assert_eq!(state.value(), Some(&7));
    assert_eq!(state.into_value(), Some(7));
}

#[test]
fn test_error_keeps_message_and_cause() {
    let cause = CoreError::validation("email", "Email cannot be empty");
    let state: Resource<()> = Resource::error_with_cause("Email cannot be empty", cause);

    assert!(state.is_error());
    assert_eq!(state.error_message(), Some("Email cannot be empty"));

    let cause = state.cause().unwrap();
    assert!(cause.downcast_ref::<CoreError>().is_some());
}

#[test]
fn test_error_without_cause() {
    let state: Resource<()> = Resource::error("boom");
    assert_eq!(state.error_message(), Some("boom"));
    assert!(state.cause().is_none());
}

#[test]
fn test_map_only_touches_success() {
    let mapped = Resource::Success(2).map(|v| v * 10);
    assert_eq!(mapped.value(), Some(&20));

    let loading: Resource<i32> = Resource::Loading;
    assert!(loading.map(|v| v * 10).is_loading());

    let failed: Resource<i32> = Resource::error("nope");
    assert_eq!(failed.map(|v| v * 10).error_message(), Some("nope"));
}

//! Error taxonomy and context tests.

use parley_foundation::{Error, ErrorContext, ErrorKind};

#[test]
fn configuration_errors_are_distinguishable() {
    let err = Error::configuration("bad overlay");
    assert!(err.is_configuration());
    assert!(format!("{err}").contains("bad overlay"));
}

#[test]
fn syntax_error_message_is_the_display() {
    let err = Error::syntax("expected integer, got \"many\"");
    assert_eq!(format!("{err}"), "expected integer, got \"many\"");
    assert!(!err.is_configuration());
}

#[test]
fn enforcement_rejection_names_the_value() {
    let err = Error::enforcement("emerald");
    assert!(matches!(
        err.kind,
        ErrorKind::EnforcementRejection { .. }
    ));
    assert!(format!("{err}").contains("emerald"));
}

#[test]
fn context_carries_cursor_for_diagnostics() {
    let err = Error::syntax("expected integer").with_context(
        ErrorContext::new()
            .with_input("give alice many")
            .with_cursor(11),
    );

    assert_eq!(err.cursor(), Some(11));
    let context = err.context.as_ref().unwrap();
    assert_eq!(context.input.as_deref(), Some("give alice many"));
}

#[test]
fn cursor_is_none_without_context() {
    assert_eq!(Error::incomplete_command().cursor(), None);
}

#[test]
fn missing_executor_uses_caller_message() {
    let err = Error::missing_executor("players only");
    assert_eq!(format!("{err}"), "players only");
}

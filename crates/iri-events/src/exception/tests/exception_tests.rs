#![cfg(test)]

use crate::exception::{Exception, EXCEPTION_MARKER};

#[test]
fn test_exception_display() {
    let err = Exception::new("main:main.rs:3", "something broke");
    assert_eq!(
        format!("{}", err),
        "[Exception caught] - main:main.rs:3\nsomething broke"
    );
    assert_eq!(err.location(), "main:main.rs:3");
    assert_eq!(err.message(), "something broke");
}

#[test]
fn test_exception_append_keeps_order() {
    let mut err = Exception::new("loc", "[Tag] - ");
    err.append("first");
    err.append(" - ");
    err.append("second");

    assert_eq!(err.message(), "[Tag] - first - second");
    assert_eq!(err.what(), "[Exception caught] - loc\n[Tag] - first - second");
}

#[test]
fn test_exception_with_builder_matches_append() {
    let mut appended = Exception::new("loc", "a");
    appended.append("b");
    let built = Exception::new("loc", "a").with("b");
    assert_eq!(appended, built);
}

#[test]
fn test_exception_empty_inputs() {
    let err = Exception::new("", "");
    assert_eq!(err.to_string(), format!("{}\n", EXCEPTION_MARKER));
}

#[test]
fn test_here_macro_points_at_call_site() {
    let line = line!() + 1;
    let location = crate::here!();

    assert!(location.contains(file!()), "location was {}", location);
    assert!(location.ends_with(&format!(":{}", line)), "location was {}", location);
    assert!(location.starts_with(module_path!()));
}

#[test]
fn test_exception_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    let err = Exception::new("loc", "msg");
    takes_error(&err);
}

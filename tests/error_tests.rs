// Host-side tests for error reporting.

#![allow(dead_code)]
mod error {
    include!("../src/error.rs");
}

use error::*;

#[test]
fn missing_element_names_the_id() {
    let e = ToggleError::missing("register-link");
    assert_eq!(
        e,
        ToggleError::MissingElement {
            id: "register-link".to_string()
        }
    );
    assert_eq!(e.to_string(), "missing #register-link");
}

#[test]
fn other_errors_describe_themselves() {
    assert_eq!(ToggleError::NoDocument.to_string(), "no document");
    let e = ToggleError::Listener {
        id: "login".to_string(),
        reason: "TypeError".to_string(),
    };
    assert_eq!(e.to_string(), "failed to register listener on #login: TypeError");
}

#[test]
fn converts_into_anyhow_with_context() {
    use anyhow::Context;
    let r: Result<(), ToggleError> = Err(ToggleError::missing("container"));
    let e = r.context("mounting panel toggle").unwrap_err();
    assert_eq!(e.to_string(), "mounting panel toggle");
    assert_eq!(e.root_cause().to_string(), "missing #container");
}

use super::*;

#[test]
fn submits_with_both_fields_filled() {
    assert!(can_submit(false, "ada", "Sup3r$ecret"));
}

#[test]
fn never_submits_while_busy() {
    assert!(!can_submit(true, "ada", "Sup3r$ecret"));
}

#[test]
fn requires_a_username() {
    assert!(!can_submit(false, "", "Sup3r$ecret"));
    assert!(!can_submit(false, "   ", "Sup3r$ecret"));
}

#[test]
fn requires_a_password() {
    assert!(!can_submit(false, "ada", ""));
}

#[test]
fn password_whitespace_is_not_trimmed() {
    // Passwords are sent verbatim, so whitespace counts as a value.
    assert!(can_submit(false, "ada", " "));
}

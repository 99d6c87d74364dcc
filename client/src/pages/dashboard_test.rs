use super::*;

fn sample_user() -> UserProfile {
    UserProfile {
        id: 7,
        email: "ada@example.com".to_owned(),
        username: "ada".to_owned(),
        first_name: Some("Ada".to_owned()),
        last_name: Some("Lovelace".to_owned()),
        is_active: true,
    }
}

#[test]
fn full_name_joins_both_parts() {
    assert_eq!(display_name(&sample_user()), "Ada Lovelace");
}

#[test]
fn full_name_drops_missing_parts() {
    let mut user = sample_user();
    user.last_name = None;
    assert_eq!(display_name(&user), "Ada");

    user.first_name = None;
    assert_eq!(display_name(&user), "");
}

#[test]
fn unchanged_fields_are_not_sent() {
    let update = profile_changes(&sample_user(), "ada@example.com", "Ada", "Lovelace");
    assert_eq!(update, ProfileUpdate::default());
}

#[test]
fn changed_email_is_sent_alone() {
    let update = profile_changes(&sample_user(), "countess@example.com", "Ada", "Lovelace");
    assert_eq!(update.email.as_deref(), Some("countess@example.com"));
    assert_eq!(update.first_name, None);
    assert_eq!(update.last_name, None);
}

#[test]
fn cleared_name_is_sent_as_empty_string() {
    let update = profile_changes(&sample_user(), "ada@example.com", "Ada", "");
    assert_eq!(update.last_name.as_deref(), Some(""));
    assert_eq!(update.first_name, None);
}

#[test]
fn names_absent_on_the_profile_compare_as_empty() {
    let mut user = sample_user();
    user.first_name = None;
    let update = profile_changes(&user, "ada@example.com", "", "Lovelace");
    assert_eq!(update, ProfileUpdate::default());
}

#[test]
fn username_and_password_never_ride_along() {
    let update = profile_changes(&sample_user(), "countess@example.com", "Augusta", "King");
    assert_eq!(update.username, None);
    assert_eq!(update.password, None);
}

#[test]
fn showcase_copy_is_present() {
    assert_eq!(WORKOUT_STATS.len(), 4);
    assert!(WORKOUT_STATS.iter().all(|(value, label)| !value.is_empty() && !label.is_empty()));
    assert!(RECOMMENDATIONS.iter().all(|text| !text.is_empty()));
    assert!(!ASSISTANT_MESSAGE.is_empty());
}

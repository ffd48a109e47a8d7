use super::*;
use proptest::prelude::*;

#[test]
fn single_admin_for_owner_one() {
    assert_eq!(
        resolve_admins(&OwnerId::from("Owner-1")),
        vec!["admin-1@example.com"]
    );
}

#[test]
fn trailing_zero_still_yields_one_admin() {
    assert_eq!(
        resolve_admins(&OwnerId::from("Owner-0")),
        vec!["admin-1@example.com"]
    );
}

#[test]
fn trailing_digit_sets_admin_count() {
    let admins = resolve_admins(&OwnerId::from("Owner-5"));
    assert_eq!(admins.len(), 5);
    assert_eq!(admins[0], "admin-1@example.com");
    assert_eq!(admins[4], "admin-5@example.com");
}

#[test]
fn only_the_last_character_counts() {
    assert_eq!(resolve_admins(&OwnerId::from("Owner-19")).len(), 9);
    assert_eq!(resolve_admins(&OwnerId::from("Owner-20")).len(), 1);
}

#[test]
fn non_digit_suffix_yields_one_admin() {
    assert_eq!(resolve_admins(&OwnerId::from("Owner-x")).len(), 1);
    assert_eq!(resolve_admins(&OwnerId::from("Owner-Eigener-Service-1é")).len(), 1);
}

#[test]
fn empty_owner_has_no_admins() {
    assert!(resolve_admins(&OwnerId::default()).is_empty());
}

proptest! {
    #[test]
    fn prop_admin_count_follows_trailing_digit(prefix in "[A-Za-z-]{0,12}", digit in 0u32..10) {
        let owner = OwnerId(format!("{prefix}{digit}"));
        let expected = if digit == 0 { 1 } else { digit as usize };
        prop_assert_eq!(resolve_admins(&owner).len(), expected);
    }

    #[test]
    fn prop_non_digit_suffix_yields_one(owner in "[A-Za-z0-9-]{0,12}[A-Za-z_.@-]") {
        prop_assert_eq!(resolve_admins(&OwnerId(owner)).len(), 1);
    }
}

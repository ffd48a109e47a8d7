use shared::{domain::OwnerId, records::AdminList};

/// Derives the admin contacts of an owning identity.
///
/// The count is the identity's trailing decimal digit. A trailing `0` or a
/// non-digit both yield a single admin; an empty identity yields none.
pub fn resolve_admins(owner: &OwnerId) -> AdminList {
    let Some(last) = owner.as_str().chars().last() else {
        return AdminList::new();
    };
    let count = match last.to_digit(10) {
        Some(0) | None => 1,
        Some(digit) => digit as usize,
    };
    (1..=count)
        .map(|index| format!("admin-{index}@example.com"))
        .collect()
}

#[cfg(test)]
#[path = "tests/admins_tests.rs"]
mod tests;

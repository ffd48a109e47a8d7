use shared::{
    domain::{EntityId, OwnerId},
    records::{DetailRecord, SubRecord},
};

use crate::admins::resolve_admins;

pub const SUB_RECORDS_PER_DETAIL: usize = 7;

/// Synthesises the full details record of a service.
///
/// An empty identifier is the "nothing selected" state and yields the
/// default record. The admin-lookup owner (`uowner`) is always the first
/// sub-record's owner, so every service resolves to `Owner-1`.
pub fn resolve_details(entity: &EntityId) -> DetailRecord {
    if entity.is_empty() {
        return DetailRecord::default();
    }

    let users: Vec<SubRecord> = (1..=SUB_RECORDS_PER_DETAIL)
        .map(|index| SubRecord {
            name: format!("host:h{index}-of-{entity}"),
            address: format!("10.1.2.{index}"),
            owner: OwnerId(format!("Owner-{index}")),
        })
        .collect();
    let uowner = users
        .first()
        .map(|user| user.owner.clone())
        .unwrap_or_default();
    let admins = resolve_admins(&uowner);

    DetailRecord {
        name: entity.clone(),
        description: format!("Description of {entity}"),
        owner: format!("Owner-{entity}"),
        users,
        uowner,
        admins,
        ..DetailRecord::default()
    }
}

#[cfg(test)]
#[path = "tests/details_tests.rs"]
mod tests;

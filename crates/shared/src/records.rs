use serde::{Deserialize, Serialize};

use crate::domain::{EntityId, OwnerId, ShowUsers};

/// Administrator contacts derived from an owning identity.
pub type AdminList = Vec<String>;

/// A host-like entry listed under a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubRecord {
    pub name: String,
    pub address: String,
    pub owner: OwnerId,
}

/// Everything the details pane shows for one selected service.
///
/// The default value is the "nothing selected" record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    pub name: EntityId,
    pub description: String,
    /// Display label only. Admin lookups go through `uowner`.
    pub owner: String,
    pub query_params: String,
    pub show_users: ShowUsers,
    pub users: Vec<SubRecord>,
    pub uowner: OwnerId,
    pub admins: AdminList,
}

impl DetailRecord {
    pub fn is_selected(&self) -> bool {
        !self.name.is_empty()
    }
}

/// One combo widget for the duration of a single response.
///
/// `items` is `None` while the menu is closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboState {
    pub name: String,
    pub active_item: String,
    pub items: Option<Vec<String>>,
}

impl ComboState {
    pub fn closed(name: impl Into<String>, active_item: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            active_item: active_item.into(),
            items: None,
        }
    }

    /// Widget with every piece of content dropped except its name.
    pub fn cleared(name: impl Into<String>) -> Self {
        Self::closed(name, String::new())
    }

    pub fn is_open(&self) -> bool {
        self.items.is_some()
    }
}

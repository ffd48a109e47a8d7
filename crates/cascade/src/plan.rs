use serde::Serialize;
use shared::{
    domain::{Category, EntityId, OwnerId, ShowUsers},
    records::{AdminList, ComboState, DetailRecord},
};

use crate::catalog::EntityList;

/// One client interaction, with every parameter it carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    InitialLoad,
    CategoryChange {
        service_type: String,
        show_users: ShowUsers,
        /// Raw request path and query, echoed for bookmarking.
        request_uri: String,
    },
    EntitySelection {
        entity: EntityId,
        show_users: ShowUsers,
    },
    VisibilityToggle {
        state: ShowUsers,
        entity: EntityId,
    },
    AdminExpansion {
        owner: OwnerId,
    },
    Combo(ComboRequest),
}

impl Interaction {
    pub fn kind(&self) -> InteractionKind {
        match self {
            Self::InitialLoad => InteractionKind::InitialLoad,
            Self::CategoryChange { .. } => InteractionKind::CategoryChange,
            Self::EntitySelection { .. } => InteractionKind::EntitySelection,
            Self::VisibilityToggle { .. } => InteractionKind::VisibilityToggle,
            Self::AdminExpansion { .. } => InteractionKind::AdminExpansion,
            Self::Combo(request) => match request.action {
                ComboAction::ShowMenu => InteractionKind::ShowMenu,
                ComboAction::HideMenu => InteractionKind::HideMenu,
                ComboAction::Set { .. } => InteractionKind::SetCombo,
                ComboAction::Reset => InteractionKind::ResetCombo,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    InitialLoad,
    CategoryChange,
    EntitySelection,
    VisibilityToggle,
    AdminExpansion,
    ShowMenu,
    HideMenu,
    SetCombo,
    ResetCombo,
}

impl InteractionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InitialLoad => "initial_load",
            Self::CategoryChange => "category_change",
            Self::EntitySelection => "entity_selection",
            Self::VisibilityToggle => "visibility_toggle",
            Self::AdminExpansion => "admin_expansion",
            Self::ShowMenu => "show_menu",
            Self::HideMenu => "hide_menu",
            Self::SetCombo => "set_combo",
            Self::ResetCombo => "reset_combo",
        }
    }
}

/// Parameters shared by every combo widget request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboRequest {
    pub action: ComboAction,
    pub name: String,
    pub active_item: String,
    pub search: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComboAction {
    ShowMenu,
    HideMenu,
    Set { selected: String },
    Reset,
}

/// A category's service list together with its default selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceListState {
    /// The key as the client sent it, known or not.
    pub service_type: String,
    pub category: Option<Category>,
    pub services: EntityList,
    pub details: DetailRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminPanel {
    pub uowner: OwnerId,
    pub admins: AdminList,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageState {
    pub history: ComboState,
    pub owner: ComboState,
    pub services: ServiceListState,
}

/// Fully resolved state for one response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "state", rename_all = "snake_case")]
pub enum RenderPlan {
    InitialLoad(PageState),
    CategoryChange(ServiceListState),
    EntitySelection(DetailRecord),
    VisibilityToggle(DetailRecord),
    AdminExpansion(AdminPanel),
    ComboMenu(ComboState),
    ComboCleared(ComboState),
    ComboValue(ComboState),
}

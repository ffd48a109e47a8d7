use std::fmt;

use serde::{Deserialize, Serialize};

/// Every fragment the renderer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FragmentName {
    Page,
    ServiceList,
    Details,
    Admins,
    Menu,
    Combo,
    SelectedService,
    ShowUsersState,
}

impl FragmentName {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::ServiceList => "service-list",
            Self::Details => "details",
            Self::Admins => "admins",
            Self::Menu => "menu",
            Self::Combo => "combo",
            Self::SelectedService => "selected-service",
            Self::ShowUsersState => "show-users",
        }
    }
}

impl fmt::Display for FragmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapMode {
    /// Replaces the region the triggering element targeted.
    InPlace,
    /// Carries its own region id and is merged independently.
    OutOfBand,
}

/// A DOM region, addressed by CSS selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Region(String);

impl Region {
    pub const SERVICE_LIST: &'static str = "service-list";
    pub const DETAILS: &'static str = "details";
    pub const ADMINS: &'static str = "admins";
    pub const SELECTED_SERVICE: &'static str = "selected-service";
    pub const SHOW_USERS: &'static str = "show-users";

    pub fn body() -> Self {
        Self("body".to_string())
    }

    pub fn element(id: &str) -> Self {
        Self(format!("#{id}"))
    }

    pub fn combo(name: &str) -> Self {
        Self::element(&format!("combo-{name}"))
    }

    pub fn menu(name: &str) -> Self {
        Self::element(&format!("menu-{name}"))
    }

    pub fn selector(&self) -> &str {
        &self.0
    }

    /// The bare element id, or the selector itself for non-id regions.
    pub fn element_id(&self) -> &str {
        self.0.strip_prefix('#').unwrap_or(&self.0)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

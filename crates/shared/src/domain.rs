use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! label_newtype {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

// Names a service (or any list entry); the join key for every derived record.
label_newtype!(EntityId);
// Owning identity; the key for admin derivation.
label_newtype!(OwnerId);

/// Which synthetic service list a request is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Owner,
    User,
    Visible,
    Search,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::User,
        Category::Owner,
        Category::Visible,
        Category::Search,
    ];

    /// Keys are matched exactly; anything else is an unknown category.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "owner" => Some(Self::Owner),
            "user" => Some(Self::User),
            "visible" => Some(Self::Visible),
            "search" => Some(Self::Search),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::User => "user",
            Self::Visible => "visible",
            Self::Search => "search",
        }
    }

    pub fn prefix(self) -> &'static str {
        match self {
            Self::Owner => "Genutzter",
            Self::User => "Eigener",
            Self::Visible => "Nutzbarer",
            Self::Search => "Gesuchter",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The combo widgets the page knows how to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComboKind {
    History,
    Owner,
}

impl ComboKind {
    /// Matches the `Name` the client sends back with every combo request.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Stand" => Some(Self::History),
            "Owner" => Some(Self::Owner),
            _ => None,
        }
    }

    pub fn wire_name(self) -> &'static str {
        match self {
            Self::History => "Stand",
            Self::Owner => "Owner",
        }
    }
}

/// Whether the details pane lists its sub-records.
///
/// `Unspecified` is the empty value: the client decides. Anything the
/// client sends besides `on`/`off` is kept as-is so it can be echoed back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShowUsers {
    #[default]
    Unspecified,
    On,
    Off,
    Other(String),
}

impl ShowUsers {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "" => Self::Unspecified,
            "on" => Self::On,
            "off" => Self::Off,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Unspecified => "",
            Self::On => "on",
            Self::Off => "off",
            Self::Other(raw) => raw.as_str(),
        }
    }

    /// Only an explicit `off` hides the users.
    pub fn is_off(&self) -> bool {
        *self == Self::Off
    }
}

impl From<String> for ShowUsers {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<ShowUsers> for String {
    fn from(show_users: ShowUsers) -> Self {
        match show_users {
            ShowUsers::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ShowUsers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;

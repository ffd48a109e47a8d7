use thiserror::Error;

use crate::fragment::FragmentName;

/// A fragment could not be produced. Fatal for the current response only.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    #[error("fragment `{fragment}` failed to render: {message}")]
    Template {
        fragment: FragmentName,
        message: String,
    },
    #[error("fragment `{fragment}` cannot render a `{payload}` payload")]
    PayloadMismatch {
        fragment: FragmentName,
        payload: &'static str,
    },
}

impl RenderError {
    pub fn template(fragment: FragmentName, message: impl Into<String>) -> Self {
        Self::Template {
            fragment,
            message: message.into(),
        }
    }

    pub fn fragment(&self) -> FragmentName {
        match self {
            Self::Template { fragment, .. } | Self::PayloadMismatch { fragment, .. } => *fragment,
        }
    }
}

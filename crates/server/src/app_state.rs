use std::sync::Arc;

use cascade::{Catalog, FragmentRenderer};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) catalog: Catalog,
    pub(crate) renderer: Arc<dyn FragmentRenderer>,
}

//! Stateless selection cascade.
//!
//! Each request's parameters are turned into an [`Interaction`], rebuilt into
//! a complete [`RenderPlan`] and laid out as an ordered list of fragments.
//! Every step is a pure function of its inputs.

pub mod admins;
pub mod catalog;
pub mod compose;
pub mod details;
pub mod plan;
pub mod query;
pub mod reconstruct;
pub mod render;

pub use admins::resolve_admins;
pub use catalog::{list_for, Catalog, EntityList, ListSource};
pub use compose::{compose, Fragment, Payload};
pub use details::resolve_details;
pub use plan::{
    AdminPanel, ComboAction, ComboRequest, Interaction, InteractionKind, PageState, RenderPlan,
    ServiceListState,
};
pub use query::last_path_segment;
pub use reconstruct::reconstruct;
pub use render::{render_all, FragmentRenderer};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

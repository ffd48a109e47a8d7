use shared::{
    fragment::{FragmentName, Region, SwapMode},
    records::{ComboState, DetailRecord},
};

use crate::plan::{AdminPanel, PageState, RenderPlan, ServiceListState};

/// The data a single fragment renders from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload<'a> {
    Page(&'a PageState),
    ServiceList(&'a ServiceListState),
    Details(&'a DetailRecord),
    Admins(&'a AdminPanel),
    Menu(&'a ComboState),
    Combo(&'a ComboState),
    /// A hidden input the client sends back on its next request.
    Hidden {
        field: &'static str,
        value: &'a str,
    },
}

impl Payload<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Page(_) => "page",
            Self::ServiceList(_) => "service_list",
            Self::Details(_) => "details",
            Self::Admins(_) => "admins",
            Self::Menu(_) => "menu",
            Self::Combo(_) => "combo",
            Self::Hidden { .. } => "hidden",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment<'a> {
    pub name: FragmentName,
    pub target: Region,
    pub swap: SwapMode,
    pub payload: Payload<'a>,
}

impl<'a> Fragment<'a> {
    pub fn in_place(name: FragmentName, target: Region, payload: Payload<'a>) -> Self {
        Self {
            name,
            target,
            swap: SwapMode::InPlace,
            payload,
        }
    }

    pub fn is_out_of_band(&self) -> bool {
        self.swap == SwapMode::OutOfBand
    }

    pub fn details(details: &'a DetailRecord, swap: SwapMode) -> Self {
        Self {
            name: FragmentName::Details,
            target: Region::element(Region::DETAILS),
            swap,
            payload: Payload::Details(details),
        }
    }

    pub fn service_list(state: &'a ServiceListState) -> Self {
        Self::in_place(
            FragmentName::ServiceList,
            Region::element(Region::SERVICE_LIST),
            Payload::ServiceList(state),
        )
    }

    pub fn combo(combo: &'a ComboState) -> Self {
        Self::in_place(
            FragmentName::Combo,
            Region::combo(&combo.name),
            Payload::Combo(combo),
        )
    }

    pub fn selected_service(details: &'a DetailRecord, swap: SwapMode) -> Self {
        Self {
            name: FragmentName::SelectedService,
            target: Region::element(Region::SELECTED_SERVICE),
            swap,
            payload: Payload::Hidden {
                field: "service",
                value: details.name.as_str(),
            },
        }
    }

    pub fn show_users(details: &'a DetailRecord, swap: SwapMode) -> Self {
        Self {
            name: FragmentName::ShowUsersState,
            target: Region::element(Region::SHOW_USERS),
            swap,
            payload: Payload::Hidden {
                field: "showUsers",
                value: details.show_users.as_str(),
            },
        }
    }
}

/// Orders the fragments a plan produces.
///
/// The primary fragment comes first, then hidden-state echoes, then any
/// secondary panel. Regions the interaction did not touch are left alone.
pub fn compose(plan: &RenderPlan) -> Vec<Fragment<'_>> {
    match plan {
        RenderPlan::InitialLoad(page) => vec![Fragment::in_place(
            FragmentName::Page,
            Region::body(),
            Payload::Page(page),
        )],
        RenderPlan::CategoryChange(state) => vec![
            Fragment::service_list(state),
            Fragment::selected_service(&state.details, SwapMode::OutOfBand),
            Fragment::show_users(&state.details, SwapMode::OutOfBand),
            Fragment::details(&state.details, SwapMode::OutOfBand),
        ],
        RenderPlan::EntitySelection(details) => vec![
            Fragment::details(details, SwapMode::InPlace),
            Fragment::selected_service(details, SwapMode::OutOfBand),
            Fragment::show_users(details, SwapMode::OutOfBand),
        ],
        RenderPlan::VisibilityToggle(details) => vec![
            Fragment::details(details, SwapMode::InPlace),
            Fragment::show_users(details, SwapMode::OutOfBand),
        ],
        RenderPlan::AdminExpansion(panel) => vec![Fragment::in_place(
            FragmentName::Admins,
            Region::element(Region::ADMINS),
            Payload::Admins(panel),
        )],
        RenderPlan::ComboMenu(combo) | RenderPlan::ComboCleared(combo) => {
            vec![Fragment::in_place(
                FragmentName::Menu,
                Region::menu(&combo.name),
                Payload::Menu(combo),
            )]
        }
        RenderPlan::ComboValue(combo) => vec![Fragment::combo(combo)],
    }
}

#[cfg(test)]
#[path = "tests/compose_tests.rs"]
mod tests;

use shared::{
    domain::{Category, ComboKind, EntityId, ShowUsers},
    records::{ComboState, DetailRecord},
};

use crate::{
    admins::resolve_admins,
    catalog::Catalog,
    details::resolve_details,
    plan::{
        AdminPanel, ComboAction, ComboRequest, Interaction, PageState, RenderPlan,
        ServiceListState,
    },
    query::unescape_query,
};

/// Rebuilds the complete state a response needs from one interaction.
///
/// Nothing is remembered between calls: every value is derived from the
/// interaction and the catalog, lists first, then details, then admins.
pub fn reconstruct(catalog: &Catalog, interaction: Interaction) -> RenderPlan {
    match interaction {
        Interaction::InitialLoad => RenderPlan::InitialLoad(PageState {
            history: default_combo(catalog, ComboKind::History),
            owner: default_combo(catalog, ComboKind::Owner),
            services: service_list(catalog, &catalog.initial_category),
        }),
        Interaction::CategoryChange {
            service_type,
            show_users,
            request_uri,
        } => {
            let mut state = service_list(catalog, &service_type);
            state.details.show_users = show_users;
            state.details.query_params = unescape_query(&request_uri).unwrap_or_default();
            RenderPlan::CategoryChange(state)
        }
        Interaction::EntitySelection { entity, show_users } => {
            RenderPlan::EntitySelection(details_with(&entity, show_users))
        }
        Interaction::VisibilityToggle { state, entity } => {
            RenderPlan::VisibilityToggle(details_with(&entity, state))
        }
        Interaction::AdminExpansion { owner } => RenderPlan::AdminExpansion(AdminPanel {
            admins: resolve_admins(&owner),
            uowner: owner,
        }),
        Interaction::Combo(request) => combo_plan(catalog, request),
    }
}

/// The list for `service_type` with its first entry pre-resolved.
///
/// List-derived details start with their users hidden.
pub fn service_list(catalog: &Catalog, service_type: &str) -> ServiceListState {
    let category = Category::parse(service_type);
    let services = catalog.services(category, "");
    let mut details = services
        .first()
        .map(resolve_details)
        .unwrap_or_default();
    details.show_users = ShowUsers::Off;
    ServiceListState {
        service_type: service_type.to_string(),
        category,
        services,
        details,
    }
}

fn details_with(entity: &EntityId, show_users: ShowUsers) -> DetailRecord {
    let mut details = resolve_details(entity);
    details.show_users = show_users;
    details
}

fn default_combo(catalog: &Catalog, kind: ComboKind) -> ComboState {
    ComboState::closed(kind.wire_name(), catalog.combo_default(kind))
}

fn combo_plan(catalog: &Catalog, request: ComboRequest) -> RenderPlan {
    let ComboRequest {
        action,
        name,
        active_item,
        search,
    } = request;

    match action {
        ComboAction::ShowMenu => {
            // Searching for the current value means the user has not typed yet.
            let search = if search == active_item {
                ""
            } else {
                search.as_str()
            };
            let items = ComboKind::parse(&name)
                .map(|kind| catalog.choices(kind, search))
                .unwrap_or_default();
            RenderPlan::ComboMenu(ComboState {
                name,
                active_item,
                items: Some(items),
            })
        }
        ComboAction::HideMenu => RenderPlan::ComboCleared(ComboState::cleared(name)),
        ComboAction::Set { selected } => {
            RenderPlan::ComboValue(ComboState::closed(name, selected))
        }
        ComboAction::Reset => RenderPlan::ComboValue(ComboState::closed(name, active_item)),
    }
}

#[cfg(test)]
#[path = "tests/reconstruct_tests.rs"]
mod tests;

use super::*;
use crate::{
    catalog::Catalog,
    plan::{ComboAction, ComboRequest, Interaction},
    reconstruct::reconstruct,
};
use shared::domain::{EntityId, OwnerId, ShowUsers};

fn names(fragments: &[Fragment<'_>]) -> Vec<FragmentName> {
    fragments.iter().map(|fragment| fragment.name).collect()
}

#[test]
fn initial_load_is_a_single_page() {
    let plan = reconstruct(&Catalog::default(), Interaction::InitialLoad);
    let fragments = compose(&plan);
    assert_eq!(names(&fragments), vec![FragmentName::Page]);
    assert_eq!(fragments[0].target, Region::body());
    assert!(!fragments[0].is_out_of_band());
}

#[test]
fn category_change_echoes_state_before_details_panel() {
    let plan = reconstruct(
        &Catalog::default(),
        Interaction::CategoryChange {
            service_type: "user".into(),
            show_users: ShowUsers::On,
            request_uri: "/services/user?showUsers=on".into(),
        },
    );
    let fragments = compose(&plan);
    assert_eq!(
        names(&fragments),
        vec![
            FragmentName::ServiceList,
            FragmentName::SelectedService,
            FragmentName::ShowUsersState,
            FragmentName::Details,
        ]
    );
    assert!(!fragments[0].is_out_of_band());
    assert!(fragments[1..].iter().all(Fragment::is_out_of_band));
    assert_eq!(
        fragments[1].payload,
        Payload::Hidden {
            field: "service",
            value: "Eigener-Service-1",
        }
    );
    assert_eq!(
        fragments[2].payload,
        Payload::Hidden {
            field: "showUsers",
            value: "on",
        }
    );
}

#[test]
fn entity_selection_echoes_selected_service() {
    let plan = reconstruct(
        &Catalog::default(),
        Interaction::EntitySelection {
            entity: EntityId::from("Eigener-Service-9"),
            show_users: ShowUsers::Unspecified,
        },
    );
    let fragments = compose(&plan);
    assert_eq!(
        names(&fragments),
        vec![
            FragmentName::Details,
            FragmentName::SelectedService,
            FragmentName::ShowUsersState,
        ]
    );
    assert_eq!(fragments[0].target.selector(), "#details");
    assert_eq!(
        fragments[1].payload,
        Payload::Hidden {
            field: "service",
            value: "Eigener-Service-9",
        }
    );
}

#[test]
fn visibility_toggle_renders_only_details_visibly() {
    let plan = reconstruct(
        &Catalog::default(),
        Interaction::VisibilityToggle {
            state: ShowUsers::On,
            entity: EntityId::from("Eigener-Service-1"),
        },
    );
    let fragments = compose(&plan);
    assert_eq!(
        names(&fragments),
        vec![FragmentName::Details, FragmentName::ShowUsersState]
    );
    let Payload::Details(details) = fragments[0].payload else {
        panic!("expected details payload");
    };
    assert_eq!(details.show_users, ShowUsers::On);
    assert_eq!(details.users.len(), 7);
}

#[test]
fn admin_expansion_targets_admin_panel() {
    let plan = reconstruct(
        &Catalog::default(),
        Interaction::AdminExpansion {
            owner: OwnerId::from("Owner-2"),
        },
    );
    let fragments = compose(&plan);
    assert_eq!(names(&fragments), vec![FragmentName::Admins]);
    assert_eq!(fragments[0].target.selector(), "#admins");
}

#[test]
fn combo_fragments_target_their_widget() {
    let catalog = Catalog::default();
    let request = |action| {
        Interaction::Combo(ComboRequest {
            action,
            name: "Stand".into(),
            active_item: "today".into(),
            search: String::new(),
        })
    };

    let menu = reconstruct(&catalog, request(ComboAction::ShowMenu));
    let fragments = compose(&menu);
    assert_eq!(names(&fragments), vec![FragmentName::Menu]);
    assert_eq!(fragments[0].target.selector(), "#menu-Stand");

    let hidden = reconstruct(&catalog, request(ComboAction::HideMenu));
    assert_eq!(compose(&hidden)[0].target.selector(), "#menu-Stand");

    let reset = reconstruct(&catalog, request(ComboAction::Reset));
    let fragments = compose(&reset);
    assert_eq!(names(&fragments), vec![FragmentName::Combo]);
    assert_eq!(fragments[0].target.element_id(), "combo-Stand");
}

#[test]
fn show_users_echo_keeps_client_value() {
    let plan = reconstruct(
        &Catalog::default(),
        Interaction::VisibilityToggle {
            state: ShowUsers::parse("ON"),
            entity: EntityId::from("Eigener-Service-3"),
        },
    );
    let fragments = compose(&plan);
    assert_eq!(
        fragments[1].payload,
        Payload::Hidden {
            field: "showUsers",
            value: "ON",
        }
    );
}

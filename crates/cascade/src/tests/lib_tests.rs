use crate::{compose, reconstruct, resolve_details, Catalog, Fragment, Interaction, Payload, RenderPlan};
use shared::{
    domain::{EntityId, OwnerId, ShowUsers},
    fragment::FragmentName,
};

/// Hidden inputs a browser would hold between requests.
#[derive(Debug, Default)]
struct ClientState {
    service: String,
    show_users: String,
}

impl ClientState {
    fn absorb(&mut self, fragments: &[Fragment<'_>]) {
        for fragment in fragments {
            if let Payload::Hidden { field, value } = fragment.payload {
                match field {
                    "service" => self.service = value.to_string(),
                    "showUsers" => self.show_users = value.to_string(),
                    other => panic!("unexpected hidden field {other}"),
                }
            }
        }
    }
}

fn initial_client(catalog: &Catalog) -> ClientState {
    let RenderPlan::InitialLoad(page) = reconstruct(catalog, Interaction::InitialLoad) else {
        panic!("expected initial load plan");
    };
    ClientState {
        service: page.services.details.name.to_string(),
        show_users: page.services.details.show_users.to_string(),
    }
}

#[test]
fn hidden_state_carries_selection_across_requests() {
    let catalog = Catalog::default();
    let mut client = initial_client(&catalog);
    assert_eq!(client.service, "Eigener-Service-1");
    assert_eq!(client.show_users, "off");

    let plan = reconstruct(
        &catalog,
        Interaction::EntitySelection {
            entity: EntityId::from("Eigener-Service-12"),
            show_users: ShowUsers::parse(&client.show_users),
        },
    );
    client.absorb(&compose(&plan));
    assert_eq!(client.service, "Eigener-Service-12");
    assert_eq!(client.show_users, "off");

    let plan = reconstruct(
        &catalog,
        Interaction::VisibilityToggle {
            state: ShowUsers::On,
            entity: EntityId(client.service.clone()),
        },
    );
    let fragments = compose(&plan);
    client.absorb(&fragments);
    assert_eq!(client.show_users, "on");
    let Payload::Details(details) = fragments[0].payload else {
        panic!("expected details payload");
    };
    assert_eq!(details.name.as_str(), "Eigener-Service-12");
    assert_eq!(details.users.len(), 7);

    let plan = reconstruct(
        &catalog,
        Interaction::CategoryChange {
            service_type: "owner".into(),
            show_users: ShowUsers::parse(&client.show_users),
            request_uri: "/services/owner?showUsers=on".into(),
        },
    );
    client.absorb(&compose(&plan));
    assert_eq!(client.service, "Genutzter-Service-1");
    assert_eq!(client.show_users, "on");
}

#[test]
fn identical_interactions_reconstruct_identical_plans() {
    let catalog = Catalog::default();
    let selection = || Interaction::EntitySelection {
        entity: EntityId::from("Eigener-Service-6"),
        show_users: ShowUsers::Unspecified,
    };
    let first = reconstruct(&catalog, selection());
    let second = reconstruct(&catalog, selection());
    assert_eq!(first, second);
    assert_eq!(compose(&first), compose(&second));
}

#[test]
fn admin_panel_follows_detail_owner() {
    let catalog = Catalog::default();
    let RenderPlan::EntitySelection(details) = reconstruct(
        &catalog,
        Interaction::EntitySelection {
            entity: EntityId::from("Gesuchter-Service-4"),
            show_users: ShowUsers::Off,
        },
    ) else {
        panic!("expected entity selection plan");
    };

    let plan = reconstruct(
        &catalog,
        Interaction::AdminExpansion {
            owner: OwnerId(details.uowner.to_string()),
        },
    );
    let fragments = compose(&plan);
    assert_eq!(fragments.len(), 1);
    assert_eq!(fragments[0].name, FragmentName::Admins);
    let Payload::Admins(panel) = fragments[0].payload else {
        panic!("expected admins payload");
    };
    assert_eq!(panel.admins, details.admins);
}

#[test]
fn large_category_default_matches_first_entry() {
    let catalog = Catalog::default();
    let RenderPlan::CategoryChange(state) = reconstruct(
        &catalog,
        Interaction::CategoryChange {
            service_type: "owner".into(),
            show_users: ShowUsers::Unspecified,
            request_uri: "/services/owner".into(),
        },
    ) else {
        panic!("expected category change plan");
    };
    assert_eq!(state.services.len(), 21_845);
    let mut expected = resolve_details(&state.services[0]);
    expected.query_params = "/services/owner".into();
    assert_eq!(state.details, expected);
}

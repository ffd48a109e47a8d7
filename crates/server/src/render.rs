use askama::Template;
use cascade::{AdminPanel, Fragment, FragmentRenderer, PageState, Payload, ServiceListState};
use shared::{
    domain::Category,
    error::RenderError,
    fragment::{FragmentName, SwapMode},
    records::{ComboState, DetailRecord},
};

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.8/dist/css/bootstrap.min.css";

/// Renders fragments with compile-time askama templates.
///
/// Built once at startup and shared by every request.
#[derive(Debug, Clone)]
pub struct AskamaRenderer {
    htmx_src: String,
}

impl AskamaRenderer {
    pub fn new(htmx_src: impl Into<String>) -> Self {
        Self {
            htmx_src: htmx_src.into(),
        }
    }

    fn render_page(&self, page: &PageState) -> Result<String, RenderError> {
        let combos = [&page.history, &page.owner]
            .into_iter()
            .map(|combo| self.render(&Fragment::combo(combo)))
            .collect::<Result<Vec<_>, _>>()?;
        let details = &page.services.details;
        let tabs = Category::ALL.into_iter().map(Category::key).collect();

        PageTemplate {
            htmx_src: &self.htmx_src,
            bootstrap_css: BOOTSTRAP_CSS,
            combos,
            tabs,
            service_list: self.render(&Fragment::service_list(&page.services))?,
            details: self.render(&Fragment::details(details, SwapMode::InPlace))?,
            selected_service: self
                .render(&Fragment::selected_service(details, SwapMode::InPlace))?,
            show_users: self.render(&Fragment::show_users(details, SwapMode::InPlace))?,
        }
        .render()
        .map_err(|e| RenderError::template(FragmentName::Page, e.to_string()))
    }
}

impl FragmentRenderer for AskamaRenderer {
    fn render(&self, fragment: &Fragment<'_>) -> Result<String, RenderError> {
        let id = fragment.target.element_id();
        let oob = fragment.swap == SwapMode::OutOfBand;
        let rendered = match (fragment.name, fragment.payload) {
            (FragmentName::Page, Payload::Page(page)) => return self.render_page(page),
            (FragmentName::ServiceList, Payload::ServiceList(state)) => {
                ServiceListTemplate { id, oob, state }.render()
            }
            (FragmentName::Details, Payload::Details(details)) => DetailsTemplate {
                id,
                oob,
                details,
                users_visible: !details.show_users.is_off(),
            }
            .render(),
            (FragmentName::Admins, Payload::Admins(panel)) => {
                AdminsTemplate { id, oob, panel }.render()
            }
            (FragmentName::Menu, Payload::Menu(combo)) => MenuTemplate {
                id,
                oob,
                combo_id: format!("combo-{}", combo.name),
                open: combo.is_open(),
                entries: menu_entries(combo),
            }
            .render(),
            (FragmentName::Combo, Payload::Combo(combo)) => ComboTemplate {
                id,
                oob,
                menu_id: format!("menu-{}", combo.name),
                combo,
            }
            .render(),
            (
                FragmentName::SelectedService | FragmentName::ShowUsersState,
                Payload::Hidden { field, value },
            ) => HiddenTemplate {
                id,
                oob,
                field,
                value,
            }
            .render(),
            (name, payload) => {
                return Err(RenderError::PayloadMismatch {
                    fragment: name,
                    payload: payload.kind(),
                })
            }
        };
        rendered.map_err(|e| RenderError::template(fragment.name, e.to_string()))
    }
}

fn menu_entries(combo: &ComboState) -> Vec<MenuEntry<'_>> {
    combo
        .items
        .iter()
        .flatten()
        .map(|item| MenuEntry {
            label: item,
            active: *item == combo.active_item,
        })
        .collect()
}

struct MenuEntry<'a> {
    label: &'a str,
    active: bool,
}

#[derive(Template)]
#[template(
    source = r##"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Services</title>
    <link href="{{ bootstrap_css }}" rel="stylesheet">
    <script src="{{ htmx_src }}"></script>
  </head>
  <body class="container py-4">
    {{ selected_service|safe }}
    {{ show_users|safe }}
    <div class="row mb-3">
      {% for combo in combos %}
      <div class="col">{{ combo|safe }}</div>
      {% endfor %}
    </div>
    <ul class="nav nav-tabs mb-3">
      {% for tab in tabs %}
      <li class="nav-item">
        <a href="#" class="nav-link" hx-get="/services/{{ tab }}" hx-target="#service-list" hx-swap="outerHTML" hx-include="#show-users">{{ tab }}</a>
      </li>
      {% endfor %}
    </ul>
    <div class="row">
      <div class="col-4">{{ service_list|safe }}</div>
      <div class="col-8">{{ details|safe }}</div>
    </div>
  </body>
</html>"##,
    ext = "html"
)]
struct PageTemplate<'a> {
    htmx_src: &'a str,
    bootstrap_css: &'a str,
    combos: Vec<String>,
    tabs: Vec<&'static str>,
    service_list: String,
    details: String,
    selected_service: String,
    show_users: String,
}

#[derive(Template)]
#[template(
    source = r##"<div id="{{ id }}" class="service-list" data-service-type="{{ state.service_type }}"{% if oob %} hx-swap-oob="true"{% endif %}>
  <p class="small text-muted">{{ state.services.len() }} services</p>
  <ul class="list-group">
    {% for service in state.services %}
    <li class="list-group-item" hx-get="/details/{{ service|urlencode }}" hx-target="#details" hx-swap="outerHTML" hx-include="#show-users">{{ service }}</li>
    {% endfor %}
  </ul>
</div>"##,
    ext = "html"
)]
struct ServiceListTemplate<'a> {
    id: &'a str,
    oob: bool,
    state: &'a ServiceListState,
}

#[derive(Template)]
#[template(
    source = r##"<div id="{{ id }}" class="service-details" data-show-users="{{ details.show_users }}"{% if oob %} hx-swap-oob="true"{% endif %}>
  {% if details.is_selected() %}
  <h5>{{ details.name }}</h5>
  <p>{{ details.description }}</p>
  <dl class="row">
    <dt class="col-3">Owner</dt>
    <dd class="col-9">{{ details.owner }}</dd>
    <dt class="col-3">Responsible</dt>
    <dd class="col-9">
      <a href="#" hx-get="/admins/{{ details.uowner|urlencode }}" hx-target="#admins" hx-swap="outerHTML">{{ details.uowner }}</a>
      <span class="badge text-bg-secondary">{{ details.admins.len() }} admins</span>
    </dd>
  </dl>
  <div id="admins" class="admins"></div>
  {% if !details.query_params.is_empty() %}
  <a class="bookmark" href="{{ details.query_params }}">Bookmark this view</a>
  {% endif %}
  <div class="btn-group my-2">
    <button type="button" class="btn btn-outline-primary{% if users_visible %} active{% endif %}" hx-get="/showUsers/on" hx-target="#{{ id }}" hx-swap="outerHTML" hx-include="#selected-service">Show users</button>
    <button type="button" class="btn btn-outline-primary{% if !users_visible %} active{% endif %}" hx-get="/showUsers/off" hx-target="#{{ id }}" hx-swap="outerHTML" hx-include="#selected-service">Hide users</button>
  </div>
  {% if users_visible %}
  <table class="table table-sm users">
    <thead><tr><th>Name</th><th>Address</th><th>Owner</th></tr></thead>
    <tbody>
      {% for user in details.users %}
      <tr><td>{{ user.name }}</td><td>{{ user.address }}</td><td>{{ user.owner }}</td></tr>
      {% endfor %}
    </tbody>
  </table>
  {% endif %}
  {% else %}
  <p class="text-muted">No service selected</p>
  {% endif %}
</div>"##,
    ext = "html"
)]
struct DetailsTemplate<'a> {
    id: &'a str,
    oob: bool,
    details: &'a DetailRecord,
    users_visible: bool,
}

#[derive(Template)]
#[template(
    source = r##"<div id="{{ id }}" class="admins"{% if oob %} hx-swap-oob="true"{% endif %}>
  {% if !panel.uowner.is_empty() %}
  <h6>Admins of {{ panel.uowner }}</h6>
  <ul class="list-unstyled">
    {% for admin in panel.admins %}
    <li><a href="mailto:{{ admin }}">{{ admin }}</a></li>
    {% endfor %}
  </ul>
  {% endif %}
</div>"##,
    ext = "html"
)]
struct AdminsTemplate<'a> {
    id: &'a str,
    oob: bool,
    panel: &'a AdminPanel,
}

#[derive(Template)]
#[template(
    source = r##"<div id="{{ id }}" class="combo position-relative"{% if oob %} hx-swap-oob="true"{% endif %}>
  <input type="hidden" name="Name" value="{{ combo.name }}">
  <input type="hidden" name="ActiveItem" value="{{ combo.active_item }}">
  <div class="input-group">
    <input type="search" class="form-control" name="Search" value="{{ combo.active_item }}" autocomplete="off" hx-get="/showMenu" hx-trigger="focus, input changed delay:250ms" hx-target="#{{ menu_id }}" hx-swap="outerHTML" hx-include="closest .combo">
    <button type="button" class="btn btn-outline-secondary" hx-get="/resetCombo" hx-target="#{{ id }}" hx-swap="outerHTML" hx-include="closest .combo">&times;</button>
  </div>
  <div id="{{ menu_id }}" class="combo-menu"></div>
</div>"##,
    ext = "html"
)]
struct ComboTemplate<'a> {
    id: &'a str,
    oob: bool,
    menu_id: String,
    combo: &'a ComboState,
}

#[derive(Template)]
#[template(
    source = r##"<div id="{{ id }}" class="combo-menu"{% if oob %} hx-swap-oob="true"{% endif %}>
  {% if open %}
  <ul class="dropdown-menu show">
    {% for entry in entries %}
    <li><a href="#" class="dropdown-item{% if entry.active %} active{% endif %}" hx-get="/setCombo/{{ entry.label|urlencode }}" hx-target="#{{ combo_id }}" hx-swap="outerHTML" hx-include="closest .combo">{{ entry.label }}</a></li>
    {% endfor %}
    {% if entries.is_empty() %}
    <li><span class="dropdown-item-text text-muted">No matches</span></li>
    {% endif %}
    <li><a href="#" class="dropdown-item text-muted" hx-get="/hideMenu" hx-target="#{{ id }}" hx-swap="outerHTML" hx-include="closest .combo">Close</a></li>
  </ul>
  {% endif %}
</div>"##,
    ext = "html"
)]
struct MenuTemplate<'a> {
    id: &'a str,
    oob: bool,
    combo_id: String,
    open: bool,
    entries: Vec<MenuEntry<'a>>,
}

#[derive(Template)]
#[template(
    source = r##"<input type="hidden" id="{{ id }}" name="{{ field }}" value="{{ value }}"{% if oob %} hx-swap-oob="true"{% endif %}>"##,
    ext = "html"
)]
struct HiddenTemplate<'a> {
    id: &'a str,
    oob: bool,
    field: &'a str,
    value: &'a str,
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;

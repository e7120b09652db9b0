//! Pill badge for a ticket's status.

use leptos::prelude::*;
use tickets::status;

/// Badge for `status_key`. Renders nothing for keys outside the registry.
#[component]
pub fn StatusBadge(#[prop(into)] status_key: String) -> impl IntoView {
    status::lookup(&status_key).map(|s| {
        view! { <span class=s.badge_class()>{s.label}</span> }
    })
}

use crate::layout::global_context::use_global_context;
use crate::layout::left::sidebar::dashboard_for;
use crate::system::auth::context::use_session;
use contracts::shared::nav::{find_active, nav_items_for};
use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
            {children()}
        </div>
    }
}

/// Heading of the section the current path belongs to.
///
/// Section bodies (tables, maps, charts) are rendered elsewhere; paths
/// outside the menu fall back to the dashboard name.
#[component]
pub fn PageOutline() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_session().ok();

    let heading = move || {
        let role = session.and_then(|s| s.with(|s| s.role));
        let dashboard = dashboard_for(role);
        let pathname = ctx.pathname.get();
        let items = nav_items_for(dashboard, role.map(|r| r.as_str()));
        find_active(&items, &pathname)
            .map(|entry| entry.title.clone())
            .unwrap_or_else(|| dashboard.display_name().to_string())
    };

    view! {
        <section class="page-outline">
            <h1 class="page-outline__title">{heading}</h1>
            <p class="page-outline__path">{move || ctx.pathname.get()}</p>
        </section>
    }
}

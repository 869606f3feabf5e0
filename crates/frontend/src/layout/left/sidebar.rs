//! Sidebar built from the role-aware navigation menu.
//! Entries with `items` render as collapsible groups.

use crate::layout::global_context::use_global_context;
use crate::shared::icons::{icon, nav_icon};
use crate::system::auth::context::use_session;
use contracts::enums::{Dashboard, UserRole};
use contracts::shared::nav::{is_nav_item_active, nav_items_for, NavEntry};
use leptos::prelude::*;

/// Dashboard whose menu the sidebar shows
pub fn dashboard_for(role: Option<UserRole>) -> Dashboard {
    role.map(|r| r.dashboard()).unwrap_or(Dashboard::Admin)
}

fn render_entry(entry: NavEntry, pathname: String, depth: usize, expanded: RwSignal<Vec<String>>) -> AnyView {
    let active = is_nav_item_active(&entry, &pathname);
    let has_children = !entry.items.is_empty();
    let padding = format!("{}px", 12 + depth * 10);
    let key = entry.key.clone();

    let content = view! {
        <div class="app-sidebar__item-content">
            {entry.icon.map(nav_icon)}
            <span>{entry.title.clone()}</span>
        </div>
    };

    if has_children {
        let key_for_click = key.clone();
        let key_for_chevron = key.clone();
        let key_for_show = key;
        let children = StoredValue::new(entry.items);

        return view! {
            <div>
                <div
                    class="app-sidebar__item"
                    class:app-sidebar__item--active=active
                    style:padding-left=padding
                    on:click=move |_| {
                        let key = key_for_click.clone();
                        expanded.update(move |keys| {
                            if let Some(pos) = keys.iter().position(|k| k == &key) {
                                keys.remove(pos);
                            } else {
                                keys.push(key);
                            }
                        });
                    }
                >
                    {content}
                    <div
                        class="app-sidebar__chevron"
                        class:app-sidebar__chevron--expanded=move || expanded.get().contains(&key_for_chevron)
                    >
                        {icon("chevron-right")}
                    </div>
                </div>
                <Show when=move || expanded.get().contains(&key_for_show)>
                    <div class="app-sidebar__children">
                        {
                            let pathname = pathname.clone();
                            children
                                .get_value()
                                .into_iter()
                                .map(|child| render_entry(child, pathname.clone(), depth + 1, expanded))
                                .collect_view()
                        }
                    </div>
                </Show>
            </div>
        }
        .into_any();
    }

    match entry.href.clone().filter(|_| !entry.disabled) {
        Some(href) => view! {
            <a
                class="app-sidebar__item"
                class:app-sidebar__item--active=active
                style:padding-left=padding
                href=href
                target=entry.external.then_some("_blank")
                aria-current=active.then_some("page")
            >
                {content}
            </a>
        }
        .into_any(),
        None => view! {
            <div
                class="app-sidebar__item app-sidebar__item--disabled"
                style:padding-left=padding
            >
                {content}
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();

    let session = match use_session() {
        Ok(session) => session,
        Err(e) => {
            log::error!("{}", e);
            return view! { <div class="app-sidebar__content error-message">{e.to_string()}</div> }
                .into_any();
        }
    };

    let expanded = RwSignal::new(Vec::<String>::new());

    view! {
        <nav class="app-sidebar__content">
            {move || {
                let role = session.with(|s| s.role);
                let dashboard = dashboard_for(role);
                let pathname = ctx.pathname.get();
                nav_items_for(dashboard, role.map(|r| r.as_str()))
                    .into_iter()
                    .map(|entry| render_entry(entry, pathname.clone(), 0, expanded))
                    .collect_view()
            }}
        </nav>
    }
    .into_any()
}

//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle, the application title, the signed-in
//! user and the sign-out action.

use crate::layout::global_context::{redirect_to, use_global_context};
use crate::shared::icons::icon;
use crate::system::auth::context::{do_sign_out, use_session};
use contracts::shared::paths;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_session().ok();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let sign_out = move |_| {
        if let Some(session) = session {
            do_sign_out(session);
        }
        redirect_to(paths::auth::SIGN_IN);
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    let user_label = move || {
        session
            .and_then(|s| {
                s.with(|s| {
                    s.display_name
                        .clone()
                        .or_else(|| s.role_token().map(str::to_string))
                })
            })
            .unwrap_or_else(|| "Guest".to_string())
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">{ctx.title()}</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    <span>{user_label}</span>
                </div>

                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=sign_out
                >
                    {icon("log-out")}
                    "Sign Out"
                </Button>
            </div>
        </div>
    }
}

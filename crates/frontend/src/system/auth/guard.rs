use contracts::shared::paths;
use leptos::prelude::*;

use super::context::use_session;
use crate::layout::global_context::redirect_to;

/// Component that requires a signed-in session.
/// Redirects to the sign-in page otherwise.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = use_session().ok();
    let is_authenticated =
        move || session.map(|s| s.with(|s| s.is_authenticated())).unwrap_or(false);

    Effect::new(move |_| {
        if !is_authenticated() {
            log::info!("No authentication found, redirecting to sign-in");
            redirect_to(paths::auth::SIGN_IN);
        }
    });

    view! {
        <Show
            when=is_authenticated
            fallback=|| view! { <div class="auth-guard__pending">"Redirecting to sign-in..."</div> }
        >
            {children()}
        </Show>
    }
}

use crate::layout::center::PageOutline;
use crate::layout::global_context::{redirect_to, use_global_context};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::RequireSession;
use crate::system::pages::sign_in::SignInPage;
use contracts::shared::paths;
use contracts::system::auth::Session;
use leptos::prelude::*;
// No client-side router: the page is chosen from the location path once.

/// Where a signed-in visitor of a public page is sent instead
pub fn landing_redirect(pathname: &str, session: &Session) -> Option<&'static str> {
    if paths::is_public_path(pathname) {
        session.home_path()
    } else {
        None
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <PageOutline /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_global_context();
    let pathname = ctx.pathname.get_untracked();

    if !paths::is_public_path(&pathname) {
        return view! {
            <RequireSession>
                <MainLayout />
            </RequireSession>
        }
        .into_any();
    }

    let redirect = use_session()
        .ok()
        .and_then(|session| session.with_untracked(|s| landing_redirect(&pathname, s)));
    match redirect {
        Some(home) => {
            log::info!("Already signed in, redirecting to {}", home);
            redirect_to(home);
            view! { <div class="auth-guard__pending">"Redirecting..."</div> }.into_any()
        }
        None => view! { <SignInPage /> }.into_any(),
    }
}

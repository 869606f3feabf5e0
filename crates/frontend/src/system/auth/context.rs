use contracts::enums::AccountType;
use contracts::shared::config::AppConfig;
use contracts::system::auth::{Session, SessionError};
use leptos::prelude::*;

use super::{api, storage};

/// Session context provider component
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let session = RwSignal::new(storage::load_session());
    provide_context(session);

    children()
}

/// Session signal of the surrounding `SessionProvider`
pub fn use_session() -> Result<RwSignal<Session>, SessionError> {
    use_context::<RwSignal<Session>>().ok_or(SessionError::OutsideProvider)
}

/// Sign in, persist the session and publish it to the provider
pub async fn do_sign_in(
    session: RwSignal<Session>,
    config: &AppConfig,
    account_type: AccountType,
    email: String,
    password: String,
) -> Result<(), String> {
    let signed_in = api::sign_in(&config.api, account_type, email, password)
        .await
        .map_err(|e| {
            log::warn!("Sign-in failed: {}", e);
            e.to_string()
        })?;

    log::info!(
        "Signed in as {}",
        signed_in.role_token().unwrap_or("unknown")
    );
    storage::save_session(&signed_in);
    session.set(signed_in);
    Ok(())
}

/// Drop the session everywhere
pub fn do_sign_out(session: RwSignal<Session>) {
    storage::clear_session();
    session.set(Session::default());
    log::info!("Signed out");
}

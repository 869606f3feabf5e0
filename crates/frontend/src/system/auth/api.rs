use contracts::enums::AccountType;
use contracts::shared::config::ApiConfig;
use contracts::system::auth::{Session, SignInRequest, SignInResponse};
use gloo_net::http::Request;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Connection error. Please try again later.")]
    Network(#[from] gloo_net::Error),

    #[error("{0}")]
    Rejected(String),

    #[error("The server did not grant a known role")]
    UnknownRole,
}

/// Sign in against the `*_login/` endpoint of the account type
pub async fn sign_in(
    api: &ApiConfig,
    account_type: AccountType,
    email: String,
    password: String,
) -> Result<Session, AuthError> {
    let request = SignInRequest { email, password };
    let url = api.endpoint(account_type.login_endpoint());
    log::debug!("Signing in as {} via {}", account_type.code(), url);

    let response = Request::post(&url).json(&request)?.send().await?;
    let ok = response.ok();
    let status = response.status();
    let body = response.json::<SignInResponse>().await?;

    if !ok {
        return Err(AuthError::Rejected(
            body.error
                .unwrap_or_else(|| format!("Authentication failed ({})", status)),
        ));
    }

    let session = Session::from_sign_in(account_type, &body);
    if !session.is_authenticated() {
        return Err(AuthError::UnknownRole);
    }
    Ok(session)
}

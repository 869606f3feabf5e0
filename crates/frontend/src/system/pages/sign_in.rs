use contracts::enums::AccountType;
use contracts::shared::paths;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::global_context::{redirect_to, use_global_context};
use crate::system::auth::context::{do_sign_in, use_session};

#[component]
pub fn SignInPage() -> impl IntoView {
    let ctx = use_global_context();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let account_type = RwSignal::new(AccountType::default());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let session = match use_session() {
        Ok(session) => session,
        Err(e) => {
            log::error!("{}", e);
            return view! { <div class="error-message">{e.to_string()}</div> }.into_any();
        }
    };

    let submit = move || {
        let email_val = email.get_untracked();
        let password_val = password.get_untracked();
        let account = account_type.get_untracked();
        let config = ctx.config.get_value();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match do_sign_in(session, &config, account, email_val, password_val).await {
                Ok(()) => {
                    let home = session
                        .with_untracked(|s| s.role.map(|r| r.dashboard().home_path()))
                        .unwrap_or(paths::HOME);
                    redirect_to(home);
                }
                Err(e) => {
                    set_error_message.set(Some(e));
                    set_is_loading.set(false);
                }
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit();
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>{ctx.title()}</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <div class="login-account-types">
                    {AccountType::selectable()
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <Button
                                    appearance=move || {
                                        if account_type.get() == kind {
                                            ButtonAppearance::Primary
                                        } else {
                                            ButtonAppearance::Subtle
                                        }
                                    }
                                    on_click=move |_| account_type.set(kind)
                                >
                                    {kind.display_name()}
                                </Button>
                            }
                        })
                        .collect_view()}
                </div>

                <form on:submit=on_submit>
                    <div class="form__group">
                        <Label>"Email address"</Label>
                        <Input
                            value=email
                            input_type=InputType::Email
                            placeholder="name@example.com"
                            disabled=Signal::derive(move || is_loading.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Password"</Label>
                        <Input
                            value=password
                            input_type=InputType::Password
                            disabled=Signal::derive(move || is_loading.get())
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
    .into_any()
}

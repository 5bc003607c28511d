//! Login page with username/password form and QQ OAuth button.

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::state::login::LoginForm;

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_default();
    let form = RwSignal::new(LoginForm::default());
    let busy = RwSignal::new(false);

    let submit_config = config.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(credentials) = form.try_update(LoginForm::validate).flatten() else {
            return;
        };
        let remember = form.with_untracked(|f| f.remember);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let controller = crate::pages::login_controller::BrowserLoginController::browser(submit_config.clone());
            leptos::task::spawn_local(async move {
                let outcome = controller.submit_validated(&credentials, remember).await;
                form.update(|f| outcome.apply_to(f));
                if outcome.keeps_page() {
                    busy.set(false);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&submit_config, credentials, remember);
        }
    };

    let on_qq_login = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let controller = crate::pages::login_controller::BrowserLoginController::browser(config.clone());
            leptos::task::spawn_local(async move {
                controller.qq_login().await.ok();
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &config;
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"User Login"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        name="username"
                        placeholder="Username or mobile"
                        prop:value=move || form.with(|f| f.username.clone())
                        on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                        on:blur=move |_| form.update(LoginForm::validate_username)
                    />
                    <Show when=move || form.with(|f| f.error_username)>
                        <p class="login-message login-message--error">"please fill in username"</p>
                    </Show>
                    <input
                        class="login-input"
                        type="password"
                        name="pwd"
                        placeholder="Password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        on:blur=move |_| form.update(LoginForm::validate_password)
                    />
                    <Show when=move || form.with(|f| f.error_pwd)>
                        <p class="login-message login-message--error">
                            {move || form.with(|f| f.error_pwd_message.clone())}
                        </p>
                    </Show>
                    <label class="login-remember">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.remember)
                            on:change=move |ev| form.update(|f| f.remember = event_target_checked(&ev))
                        />
                        "Remember me"
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Log in"
                    </button>
                </form>
                <div class="login-divider"></div>
                <a href="#" class="login-button login-button--qq" on:click=on_qq_login>
                    "Log in with QQ"
                </a>
            </div>
        </div>
    }
}

//! Login page: username-or-email plus password.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::session::Session;

/// Guard for the submit handler: one request at a time, both fields filled.
fn can_submit(busy: bool, username: &str, password: &str) -> bool {
    !busy && !username.trim().is_empty() && !password.is_empty()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);

    let busy = move || session.get().is_loading();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let username_value = username.get();
        let password_value = password.get();
        if !can_submit(busy(), &username_value, &password_value) {
            return;
        }
        form_error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match session.login(&username_value, &password_value).await {
                Ok(()) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/dashboard");
                    }
                }
                Err(message) => form_error.set(Some(message)),
            }
        });
    };

    view! {
        <div class="auth-container">
            <div class="card">
                <div class="auth-header">
                    <h1 class="auth-title">"FitFusion"</h1>
                    <h2 class="auth-subtitle">"Sign in to your account"</h2>
                </div>

                <Show when=move || form_error.get().is_some()>
                    <div class="form-error my-4">{move || form_error.get().unwrap_or_default()}</div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username" class="form-label">"Username or Email"</label>
                        <input
                            id="username"
                            name="username"
                            type="text"
                            required
                            class="form-input"
                            placeholder="Username or Email"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="password" class="form-label">"Password"</label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            required
                            class="form-input"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>

                    <button type="submit" class="btn btn-primary btn-full my-4" disabled=busy>
                        {move || if busy() { "Signing in..." } else { "Sign in" }}
                    </button>

                    <div class="text-center my-4">
                        <p>"Don't have an account? " <a href="/register">"Register"</a></p>
                    </div>
                </form>
            </div>
        </div>
    }
}

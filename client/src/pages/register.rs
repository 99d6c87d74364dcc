//! Registration page: new-account form with client-side password checks.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(any(test, feature = "hydrate"))]
use wire::RegisterRequest;

use crate::state::session::Session;
use crate::util::password::validate_password;

/// Guard for the submit handler: one request at a time, required fields filled.
/// The name fields are optional and never block a submit.
fn can_submit(busy: bool, email: &str, username: &str, password: &str) -> bool {
    !busy && !email.trim().is_empty() && !username.trim().is_empty() && !password.is_empty()
}

/// Assembles the payload forwarded to the backend user-create endpoint.
/// Blank name fields stay empty strings, which the backend treats as unset.
#[cfg(any(test, feature = "hydrate"))]
fn build_register_request(
    email: &str,
    username: &str,
    password: &str,
    first_name: &str,
    last_name: &str,
) -> RegisterRequest {
    RegisterRequest {
        email: email.to_owned(),
        username: username.to_owned(),
        password: password.to_owned(),
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<Session>();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);

    let busy = move || session.get().is_loading();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get();
        let username_value = username.get();
        let password_value = password.get();
        if !can_submit(busy(), &email_value, &username_value, &password_value) {
            return;
        }
        form_error.set(None);

        // Reject weak passwords before anything leaves the browser, with the
        // same rules the backend enforces.
        if let Err(issue) = validate_password(&password_value) {
            form_error.set(Some(issue.to_string()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let request = build_register_request(
                &email_value,
                &username_value,
                &password_value,
                &first_name.get(),
                &last_name.get(),
            );
            leptos::task::spawn_local(async move {
                if let Err(message) = session.register(&request).await {
                    form_error.set(Some(message));
                    return;
                }
                // Fresh accounts sign straight in with the submitted credentials.
                match session.login(&request.username, &request.password).await {
                    Ok(()) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/dashboard");
                        }
                    }
                    Err(message) => form_error.set(Some(message)),
                }
            });
        }
    };

    view! {
        <div class="auth-container">
            <div class="card">
                <div class="auth-header">
                    <h1 class="auth-title">"FitFusion"</h1>
                    <h2 class="auth-subtitle">"Create an account"</h2>
                </div>

                <Show when=move || form_error.get().is_some()>
                    <div class="form-error my-4">{move || form_error.get().unwrap_or_default()}</div>
                </Show>

                <form on:submit=on_submit>
                    <div class="grid grid-2">
                        <div class="form-group">
                            <label for="first_name" class="form-label">"First Name"</label>
                            <input
                                id="first_name"
                                name="first_name"
                                type="text"
                                class="form-input"
                                placeholder="First Name"
                                prop:value=move || first_name.get()
                                on:input=move |ev| first_name.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="last_name" class="form-label">"Last Name"</label>
                            <input
                                id="last_name"
                                name="last_name"
                                type="text"
                                class="form-input"
                                placeholder="Last Name"
                                prop:value=move || last_name.get()
                                on:input=move |ev| last_name.set(event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <div class="form-group">
                        <label for="email" class="form-label">"Email Address"</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            autocomplete="email"
                            required
                            class="form-input"
                            placeholder="Email Address"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="username" class="form-label">"Username"</label>
                        <input
                            id="username"
                            name="username"
                            type="text"
                            required
                            class="form-input"
                            placeholder="Username"
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
                            placeholder="Password (at least 8 chars, including A-Z, a-z, 0-9, special)"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <small class="form-hint">
                            "Password must contain at least 8 characters, one uppercase letter, \
                             one lowercase letter, one number, and one special character."
                        </small>
                    </div>

                    <button type="submit" class="btn btn-primary btn-full my-4" disabled=busy>
                        {move || if busy() { "Creating account..." } else { "Create account" }}
                    </button>

                    <div class="text-center my-4">
                        <p>"Already have an account? " <a href="/login">"Sign in"</a></p>
                    </div>
                </form>
            </div>
        </div>
    }
}

//! Dashboard page: the signed-in profile overview.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route. The unauthenticated redirect waits for the session
//! restore to settle, so a page reload shows the orbit loader instead of
//! bouncing straight to `/login`. Workout figures and recommendations are
//! canned showcase content revealed after a short "analyzing" shimmer;
//! profile edits go through the session so every surface sees the
//! refreshed user.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wire::{ProfileUpdate, UserProfile};

use crate::components::starfield::Starfield;
use crate::state::session::Session;
use crate::util::starfield::StarfieldSpec;

/// Backdrop seed; fixed so SSR and hydration render the same sky.
const SKY_SEED: u64 = 0xda5b_0a2d;

/// Canned activity figures shown once the shimmer clears.
const WORKOUT_STATS: [(&str, &str); 4] =
    [("12", "Workouts"), ("5.2", "Hours"), ("840", "Calories"), ("4", "Days active")];

/// Canned insight lines attributed to the assistant.
const RECOMMENDATIONS: [&str; 2] = [
    "Try increasing your cardio workouts to improve endurance",
    "Your strength progress is excellent, consider adding more compound exercises",
];

const ASSISTANT_MESSAGE: &str = "Based on your recent activity, I've created a personalized \
                                 workout plan for this week. Would you like to see it?";

/// "First Last" with missing parts dropped instead of leaving stray spaces.
fn display_name(user: &UserProfile) -> String {
    let first = user.first_name.as_deref().unwrap_or("");
    let last = user.last_name.as_deref().unwrap_or("");
    format!("{first} {last}").trim().to_owned()
}

/// Builds the partial update for the edit dialog. Only fields that differ
/// from the current profile are sent; a cleared name goes out as an empty
/// string so the backend blanks it.
fn profile_changes(
    current: &UserProfile,
    email: &str,
    first_name: &str,
    last_name: &str,
) -> ProfileUpdate {
    let mut update = ProfileUpdate::default();
    if email != current.email {
        update.email = Some(email.to_owned());
    }
    if first_name != current.first_name.as_deref().unwrap_or("") {
        update.first_name = Some(first_name.to_owned());
    }
    if last_name != current.last_name.as_deref().unwrap_or("") {
        update.last_name = Some(last_name.to_owned());
    }
    update
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();

    crate::util::auth::install_unauth_redirect(session, use_navigate());

    // Short canned "AI analyzing" shimmer before the figures appear. Runs
    // once, starting when the session is known to be authenticated.
    let analyzing = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::time::Duration;

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        let started = RwSignal::new(false);
        Effect::new(move || {
            if started.get() || !session.get().is_authenticated() {
                return;
            }
            started.set(true);
            let alive = alive_task.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(Duration::from_millis(2000)).await;
                if alive.load(Ordering::Relaxed) {
                    analyzing.set(false);
                }
            });
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    // Edit-profile dialog state.
    let show_edit = RwSignal::new(false);
    let on_edit = move |_| show_edit.set(true);
    let on_edit_cancel = Callback::new(move |()| show_edit.set(false));

    // Dropping the session to Idle trips the installed redirect.
    let on_logout = move |_| session.logout();

    let current_user = move || session.get().user().cloned();
    let full_name = move || current_user().as_ref().map(display_name).unwrap_or_default();
    let username = move || current_user().map(|user| user.username).unwrap_or_default();
    let email = move || current_user().map(|user| user.email).unwrap_or_default();
    let active = move || current_user().is_some_and(|user| user.is_active);

    view! {
        <Show
            when=move || session.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="flex justify-center items-center" style="height: 100vh">
                        <div class="text-center">
                            <div class="ai-orbit-loader">
                                <div class="ai-orbit-circle"></div>
                                <div class="ai-orbit-path"></div>
                                <div class="ai-orbit-path"></div>
                                <div class="ai-orbit-path"></div>
                                <div class="ai-orbit-dot"></div>
                                <div class="ai-orbit-dot"></div>
                                <div class="ai-orbit-dot"></div>
                            </div>
                            <p class="mt-4 ai-glow-text">
                                {move || {
                                    if session.get().is_loading() {
                                        "Loading your dashboard..."
                                    } else {
                                        "Redirecting to login..."
                                    }
                                }}
                            </p>
                        </div>
                    </div>
                }
            }
        >
            <div class="fade-in neural-bg">
                <Starfield spec=StarfieldSpec::DASHBOARD seed=SKY_SEED/>

                <div class="neural-lines">
                    <div class="neural-line"></div>
                    <div class="neural-line"></div>
                    <div class="neural-line"></div>
                    <div class="neural-line"></div>
                    <div class="neural-line"></div>
                </div>

                <header class="dashboard-header glass">
                    <div class="container">
                        <div class="flex justify-between items-center">
                            <h1 class="dashboard-title ai-glow-text">"Dashboard"</h1>
                            <button class="btn btn-danger" on:click=on_logout>
                                "Logout"
                            </button>
                        </div>
                    </div>
                </header>

                <main class="container">
                    <div class="dashboard-content">
                        <div class="ai-card">
                            <div class="profile-card-header">
                                <div>
                                    <h3 class="profile-card-title">"User Profile"</h3>
                                    <p class="profile-card-subtitle">
                                        "Personal details and fitness information"
                                    </p>
                                </div>
                                <button class="btn btn-secondary" on:click=on_edit>
                                    "Edit Profile"
                                </button>
                            </div>
                            <dl class="profile-card-body">
                                <div class="profile-info-row">
                                    <dt class="profile-info-label">"Full name"</dt>
                                    <dd class="profile-info-value">{full_name}</dd>
                                </div>
                                <div class="profile-info-row">
                                    <dt class="profile-info-label">"Username"</dt>
                                    <dd class="profile-info-value">{username}</dd>
                                </div>
                                <div class="profile-info-row">
                                    <dt class="profile-info-label">"Email address"</dt>
                                    <dd class="profile-info-value">{email}</dd>
                                </div>
                                <div class="profile-info-row">
                                    <dt class="profile-info-label">"Status"</dt>
                                    <dd class="profile-info-value">
                                        <Show
                                            when=active
                                            fallback=|| {
                                                view! {
                                                    <span class="badge badge-danger">"Inactive"</span>
                                                }
                                            }
                                        >
                                            <span class="ai-badge">"Active"</span>
                                        </Show>
                                    </dd>
                                </div>
                            </dl>
                        </div>

                        <div class="grid grid-2 my-4">
                            <div class="ai-card ai-float">
                                <h3 class="profile-card-title">"Workout Stats"</h3>
                                <p class="profile-card-subtitle mb-4">
                                    "Your fitness activity overview"
                                </p>
                                <Show
                                    when=move || !analyzing.get()
                                    fallback=|| {
                                        view! {
                                            <div
                                                class="flex justify-center items-center"
                                                style="height: 150px"
                                            >
                                                <div class="ai-waveform">
                                                    <div class="ai-waveform-bar"></div>
                                                    <div class="ai-waveform-bar"></div>
                                                    <div class="ai-waveform-bar"></div>
                                                    <div class="ai-waveform-bar"></div>
                                                    <div class="ai-waveform-bar"></div>
                                                    <div class="ai-waveform-bar"></div>
                                                    <div class="ai-waveform-bar"></div>
                                                </div>
                                                <p class="ml-3">"AI analyzing your data..."</p>
                                            </div>
                                        }
                                    }
                                >
                                    <div class="stat-grid">
                                        {WORKOUT_STATS
                                            .iter()
                                            .map(|(value, label)| {
                                                view! {
                                                    <div class="stat-item ai-glow-element">
                                                        <p class="stat-value">{*value}</p>
                                                        <p class="stat-label">{*label}</p>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </Show>
                            </div>

                            <div class="ai-card ai-float" style="animation-delay: 0.2s">
                                <h3 class="profile-card-title">"AI Recommendations"</h3>
                                <p class="profile-card-subtitle mb-4">
                                    "Personalized insights for you"
                                </p>
                                <Show
                                    when=move || !analyzing.get()
                                    fallback=|| {
                                        view! {
                                            <div
                                                class="flex justify-center items-center"
                                                style="height: 150px"
                                            >
                                                <div class="ai-chat-dots">
                                                    <div class="ai-chat-dot"></div>
                                                    <div class="ai-chat-dot"></div>
                                                    <div class="ai-chat-dot"></div>
                                                </div>
                                                <p class="ml-3">"AI generating recommendations..."</p>
                                            </div>
                                        }
                                    }
                                >
                                    <ul class="recommendation-list">
                                        {RECOMMENDATIONS
                                            .iter()
                                            .map(|text| {
                                                view! {
                                                    <li class="recommendation-item">
                                                        <div class="recommendation-icon">"⚡"</div>
                                                        <p>{*text}</p>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </Show>
                            </div>
                        </div>

                        <div class="ai-card">
                            <h3 class="profile-card-title">"AI Training Assistant"</h3>
                            <p class="profile-card-subtitle mb-4">
                                "Ask me anything about your fitness journey"
                            </p>
                            <div class="ai-chat">{ASSISTANT_MESSAGE}</div>
                            <div class="ai-chat-dots">
                                <div class="ai-chat-dot"></div>
                                <div class="ai-chat-dot"></div>
                                <div class="ai-chat-dot"></div>
                            </div>
                        </div>
                    </div>
                </main>

                <Show when=move || show_edit.get()>
                    <EditProfileDialog on_cancel=on_edit_cancel/>
                </Show>
            </div>
        </Show>
    }
}

/// Modal dialog for editing the signed-in profile.
///
/// Submitting closes the dialog and hands the update to the session, whose
/// `Loading` state swaps the page for the loader until the result settles.
/// The spawned future therefore touches nothing dialog-scoped after the
/// await; failures surface through the session state.
#[component]
fn EditProfileDialog(on_cancel: Callback<()>) -> impl IntoView {
    let session = expect_context::<Session>();

    let initial = session.get_untracked().user().cloned();
    let email = RwSignal::new(initial.as_ref().map(|user| user.email.clone()).unwrap_or_default());
    let first_name = RwSignal::new(
        initial.as_ref().and_then(|user| user.first_name.clone()).unwrap_or_default(),
    );
    let last_name = RwSignal::new(
        initial.as_ref().and_then(|user| user.last_name.clone()).unwrap_or_default(),
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get();
        if email_value.trim().is_empty() {
            return;
        }
        let Some(current) = session.get_untracked().user().cloned() else {
            return;
        };
        let update = profile_changes(&current, &email_value, &first_name.get(), &last_name.get());
        on_cancel.run(());
        if update == ProfileUpdate::default() {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(message) = session.update_profile(&update).await {
                log::warn!("profile update failed: {message}");
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = update;
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog card" on:click=move |ev| ev.stop_propagation()>
                <h3 class="profile-card-title">"Edit Profile"</h3>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="edit_email" class="form-label">"Email Address"</label>
                        <input
                            id="edit_email"
                            name="email"
                            type="email"
                            required
                            class="form-input"
                            placeholder="Email Address"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="grid grid-2">
                        <div class="form-group">
                            <label for="edit_first_name" class="form-label">"First Name"</label>
                            <input
                                id="edit_first_name"
                                name="first_name"
                                type="text"
                                class="form-input"
                                placeholder="First Name"
                                prop:value=move || first_name.get()
                                on:input=move |ev| first_name.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="edit_last_name" class="form-label">"Last Name"</label>
                            <input
                                id="edit_last_name"
                                name="last_name"
                                type="text"
                                class="form-input"
                                placeholder="Last Name"
                                prop:value=move || last_name.get()
                                on:input=move |ev| last_name.set(event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <div class="dialog-actions">
                        <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary">"Save changes"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}

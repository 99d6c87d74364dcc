//! Public landing page with the canned AI-assistant showcase.
//!
//! SYSTEM CONTEXT
//! ==============
//! Purely decorative marketing surface: starfield backdrop, hero copy, and
//! an assistant box that cycles through hardcoded fitness tips with a
//! typewriter reveal. The only session-aware element is the nav, which
//! swaps Log in / Sign up for a Dashboard link once authenticated.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;

use crate::components::starfield::Starfield;
use crate::state::session::Session;
use crate::util::starfield::StarfieldSpec;

/// Backdrop seed; fixed so SSR and hydration render the same sky.
const SKY_SEED: u64 = 0x0f17_f051;

/// Shown in the assistant box before the first reply finishes typing.
const GREETING: &str = "Hi! I'm your AI fitness assistant. How can I help you today?";

/// Canned assistant replies, cycled in order.
const ASSISTANT_REPLIES: [&str; 9] = [
    "To reduce muscle soreness, make sure you're properly warming up, staying hydrated, and getting adequate protein and rest between workouts.",
    "Based on your fitness goals, I recommend focusing on compound exercises like squats, deadlifts, and bench press to maximize muscle growth.",
    "To improve your endurance, try incorporating HIIT (High-Intensity Interval Training) into your routine 2-3 times per week.",
    "For weight loss, combining strength training with cardio and maintaining a caloric deficit of 300-500 calories per day is generally effective.",
    "For better recovery, consider adding stretching or yoga to your routine and ensure you're getting 7-9 hours of quality sleep each night.",
    "Try to vary your workout routine every 4-6 weeks to prevent plateaus and keep your body challenged.",
    "Proper form is more important than heavy weights. Start with lighter weights to master technique before increasing load.",
    "Don't forget to include mobility work in your routine. Dynamic stretching before workouts and static stretching after can improve flexibility.",
    "Nutrition is just as important as exercise. Aim for a balanced diet with adequate protein, complex carbs, and healthy fats.",
];

/// Reply for a cycle position; wraps around the canned list.
#[cfg(any(test, feature = "hydrate"))]
fn nth_reply(index: usize) -> &'static str {
    ASSISTANT_REPLIES[index % ASSISTANT_REPLIES.len()]
}

/// First `chars` characters of `text`, respecting char boundaries.
#[cfg(any(test, feature = "hydrate"))]
fn typed_prefix(text: &str, chars: usize) -> &str {
    text.char_indices().nth(chars).map_or(text, |(byte_index, _)| &text[..byte_index])
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let session = expect_context::<Session>();

    let prompt = RwSignal::new(String::new());
    let response = RwSignal::new(String::new());
    let streaming = RwSignal::new(true);
    // Bumped by a manual prompt so the typing loop restarts immediately.
    let generation = RwSignal::new(0_u64);
    let reply_index = RwSignal::new(0_usize);

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::time::Duration;

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                let generation_at_start = generation.get_untracked();
                let reply = nth_reply(reply_index.get_untracked());
                let total = reply.chars().count();
                streaming.set(true);
                let mut interrupted = false;
                for shown in 0..=total {
                    gloo_timers::future::sleep(Duration::from_millis(30)).await;
                    if !alive_task.load(Ordering::Relaxed) {
                        return;
                    }
                    if generation.get_untracked() != generation_at_start {
                        interrupted = true;
                        break;
                    }
                    response.set(typed_prefix(reply, shown).to_owned());
                }
                if interrupted {
                    continue;
                }
                streaming.set(false);
                gloo_timers::future::sleep(Duration::from_secs(5)).await;
                if !alive_task.load(Ordering::Relaxed) {
                    return;
                }
                if generation.get_untracked() == generation_at_start {
                    reply_index.update(|i| *i = (*i + 1) % ASSISTANT_REPLIES.len());
                }
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    // A manual prompt skips ahead in the rotation instead of calling a
    // real model.
    let on_prompt = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if prompt.get().trim().is_empty() {
            return;
        }
        prompt.set(String::new());
        response.set(String::new());
        reply_index.update(|i| *i = (*i + 1) % ASSISTANT_REPLIES.len());
        generation.update(|g| *g += 1);
    };

    let assistant_text = move || {
        let text = response.get();
        if text.is_empty() { GREETING.to_owned() } else { text }
    };

    view! {
        <div class="fade-in neural-bg">
            <Starfield spec=StarfieldSpec::LANDING seed=SKY_SEED/>

            <header class="header glass">
                <div class="container">
                    <nav class="nav">
                        <div>
                            <a href="/" class="logo ai-glow-text">"FitFusion"</a>
                        </div>
                        <div class="nav-links">
                            <Show
                                when=move || session.get().is_authenticated()
                                fallback=|| {
                                    view! {
                                        <a href="/login">"Log in"</a>
                                        <a href="/register" class="btn btn-primary ai-glow-element">
                                            "Sign up"
                                        </a>
                                    }
                                }
                            >
                                <a href="/dashboard" class="btn btn-primary ai-glow-element">
                                    "Dashboard"
                                </a>
                            </Show>
                        </div>
                    </nav>
                </div>
            </header>

            <div class="hero">
                <div class="ai-badge">"AI-Powered"</div>
                <h1 class="hero-title"><span>"Your Ultimate Fitness Companion"</span></h1>
                <p class="hero-text">
                    "Track your workouts, monitor your progress, and achieve your fitness goals with FitFusion, the AI-powered fitness solution."
                </p>

                <form class="prompt-form" on:submit=on_prompt>
                    <input
                        type="text"
                        class="prompt-input glass"
                        placeholder="Ask me anything about fitness, nutrition, or workout plans..."
                        prop:value=move || prompt.get()
                        on:input=move |ev| prompt.set(event_target_value(&ev))
                    />
                    <button type="submit" class="prompt-button ai-glow-element">"➤"</button>
                </form>

                <div class="ai-chat-container">
                    <div class="ai-chat">{assistant_text}</div>
                    <div
                        class="ai-chat-dots"
                        style:opacity=move || if streaming.get() { "1" } else { "0.5" }
                    >
                        <div class="ai-chat-dot"></div>
                        <div class="ai-chat-dot"></div>
                        <div class="ai-chat-dot"></div>
                    </div>
                </div>
            </div>

            <div class="features">
                <div class="container">
                    <div class="features-header">
                        <h2 class="features-subtitle">"Powered by AI"</h2>
                        <p class="features-title">"Everything you need to track your fitness journey"</p>
                        <p class="features-description">
                            "FitFusion provides all the tools you need to monitor your workouts, track your progress, and achieve your fitness goals with AI-powered insights."
                        </p>
                    </div>

                    <div class="feature-grid">
                        <FeatureCard
                            title="Real-time Tracking"
                            description="Track your workouts in real-time and get instant feedback on your performance to optimize your training."
                        />
                        <FeatureCard
                            title="AI-Powered Insights"
                            description="Get personalized recommendations and insights based on your workout history and performance data."
                        />
                        <FeatureCard
                            title="Personalized Plans"
                            description="Get customized workout plans that adapt to your goals, fitness level, and available equipment."
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}

/// One marketing card in the features band.
#[component]
fn FeatureCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="ai-card ai-float">
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
            <div class="ai-waveform">
                <div class="ai-waveform-bar"></div>
                <div class="ai-waveform-bar"></div>
                <div class="ai-waveform-bar"></div>
                <div class="ai-waveform-bar"></div>
                <div class="ai-waveform-bar"></div>
                <div class="ai-waveform-bar"></div>
                <div class="ai-waveform-bar"></div>
            </div>
        </div>
    }
}

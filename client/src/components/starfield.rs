//! Animated night-sky backdrop shared by the landing and dashboard pages.
//!
//! DESIGN
//! ======
//! The layout is generated from a per-page constant seed, so the server
//! render and the hydrated client produce identical markup and hydration
//! never tears the backdrop down. All movement is pure CSS.

use leptos::prelude::*;

use crate::util::starfield::{StarfieldSpec, generate};

/// Full-bleed decorative star layer. Sits behind the page content.
#[component]
pub fn Starfield(spec: StarfieldSpec, seed: u64) -> impl IntoView {
    let layout = generate(&spec, seed);

    let clusters = layout
        .clusters
        .iter()
        .map(|cluster| view! { <div class="star-cluster" style=cluster.style()></div> })
        .collect_view();

    let stars = layout
        .stars
        .iter()
        .map(|star| {
            let sparkle = star
                .sparkle_style()
                .map(|style| view! { <div class="sparkle" style=style></div> });
            view! {
                <div class="star" style=star.style()></div>
                {sparkle}
            }
        })
        .collect_view();

    let particles = layout
        .particles
        .iter()
        .map(|particle| view! { <div class="particle" style=particle.style()></div> })
        .collect_view();

    let shooting_stars = layout
        .shooting_stars
        .iter()
        .map(|streak| view! { <div class="shooting-star" style=streak.style()></div> })
        .collect_view();

    view! {
        <div class="stars-container" aria-hidden="true">
            {clusters}
            {stars}
            {particles}
            {shooting_stars}
        </div>
    }
}

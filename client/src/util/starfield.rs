//! Deterministic starfield layout generation for the animated backdrops.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing and dashboard pages render a layered night sky: star
//! clusters, twinkling stars (some with a sparkle halo), slow drifting
//! particles, and occasional shooting stars. All motion runs in CSS; this
//! module only decides where everything sits and which animation each
//! element gets.
//!
//! DESIGN
//! ======
//! Layouts are produced by a seeded [`SmallRng`], so the server-rendered
//! markup and the hydrated client agree on every element. Positions are
//! percentages of the container, which keeps the layout independent of
//! viewport size.

#[cfg(test)]
#[path = "starfield_test.rs"]
mod starfield_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// CSS animation assigned to a star, with its per-animation parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum StarMotion {
    Twinkle,
    /// Slow drift along a fixed offset, in px.
    Diagonal { move_x: f64, move_y: f64 },
    /// Small orbit around the anchor point, radius in px.
    Circular { orbit_radius: f64 },
    Pulse,
    /// Free drift inside a slightly larger box, in px.
    Wander { move_x: f64, move_y: f64 },
}

impl StarMotion {
    /// Name of the CSS keyframes the element binds to.
    #[must_use]
    pub fn css_name(&self) -> &'static str {
        match self {
            Self::Twinkle => "twinkle",
            Self::Diagonal { .. } => "diagonal",
            Self::Circular { .. } => "circular",
            Self::Pulse => "pulse",
            Self::Wander { .. } => "wander",
        }
    }

    fn vars(&self) -> String {
        match self {
            Self::Twinkle | Self::Pulse => String::new(),
            Self::Diagonal { move_x, move_y } | Self::Wander { move_x, move_y } => {
                format!("--move-x:{move_x:.2}px;--move-y:{move_y:.2}px;")
            }
            Self::Circular { orbit_radius } => format!("--orbit-radius:{orbit_radius:.2}px;"),
        }
    }
}

/// A dense glow spot behind the stars.
#[derive(Clone, Debug, PartialEq)]
pub struct Cluster {
    pub x: f64,
    pub y: f64,
}

impl Cluster {
    #[must_use]
    pub fn style(&self) -> String {
        format!("left:{:.3}%;top:{:.3}%;", self.x, self.y)
    }
}

/// Halo rendered behind a large star.
#[derive(Clone, Debug, PartialEq)]
pub struct Sparkle {
    pub size: f64,
    pub duration: f64,
    pub delay: f64,
}

/// A single animated star.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub duration: f64,
    pub delay: f64,
    pub motion: StarMotion,
    pub sparkle: Option<Sparkle>,
}

impl Star {
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "left:{x:.3}%;top:{y:.3}%;width:{size:.2}px;height:{size:.2}px;\
             --duration:{duration:.2}s;--delay:{delay:.2}s;--star-animation:{name};{vars}",
            x = self.x,
            y = self.y,
            size = self.size,
            duration = self.duration,
            delay = self.delay,
            name = self.motion.css_name(),
            vars = self.motion.vars(),
        )
    }

    /// Style for the sparkle halo, centered on the star by the stylesheet.
    #[must_use]
    pub fn sparkle_style(&self) -> Option<String> {
        self.sparkle.as_ref().map(|sparkle| {
            format!(
                "left:{x:.3}%;top:{y:.3}%;width:{size:.2}px;height:{size:.2}px;\
                 --duration:{duration:.2}s;--delay:{delay:.2}s;",
                x = self.x,
                y = self.y,
                size = sparkle.size,
                duration = sparkle.duration,
                delay = sparkle.delay,
            )
        })
    }
}

/// A slow drifting dust particle with a three-leg drift path.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub duration: f64,
    pub delay: f64,
    pub drift: [(f64, f64); 3],
    pub opacity: f64,
}

impl Particle {
    #[must_use]
    pub fn style(&self) -> String {
        let [(x1, y1), (x2, y2), (x3, y3)] = self.drift;
        format!(
            "left:{x:.3}%;top:{y:.3}%;width:{size:.2}px;height:{size:.2}px;\
             --duration:{duration:.2}s;--delay:{delay:.2}s;\
             --move-x:{x1:.2}px;--move-y:{y1:.2}px;--move-x2:{x2:.2}px;--move-y2:{y2:.2}px;\
             --move-x3:{x3:.2}px;--move-y3:{y3:.2}px;opacity:{opacity:.2};",
            x = self.x,
            y = self.y,
            size = self.size,
            duration = self.duration,
            delay = self.delay,
            opacity = self.opacity,
        )
    }
}

/// A streak that crosses part of the sky and restarts.
#[derive(Clone, Debug, PartialEq)]
pub struct ShootingStar {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
    pub duration: f64,
    pub delay: f64,
    pub distance: f64,
}

impl ShootingStar {
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "left:{:.3}%;top:{:.3}%;--angle:{:.2}deg;--duration:{:.2}s;--delay:{:.2}s;--distance:{:.0};",
            self.x, self.y, self.angle, self.duration, self.delay, self.distance,
        )
    }
}

/// Everything one page renders into its backdrop container.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct StarfieldLayout {
    pub clusters: Vec<Cluster>,
    pub stars: Vec<Star>,
    pub particles: Vec<Particle>,
    pub shooting_stars: Vec<ShootingStar>,
}

/// Density and range knobs for one page's backdrop.
#[derive(Clone, Debug, PartialEq)]
pub struct StarfieldSpec {
    pub clusters: usize,
    pub stars: usize,
    /// Star size is `0.5 + r * star_size_spread` px.
    pub star_size_spread: f64,
    /// Stars above this size are sparkle candidates.
    pub sparkle_threshold: f64,
    /// A candidate sparkles when a unit draw exceeds this.
    pub sparkle_gate: f64,
    /// Sparkle size is `size * (base + r * spread)`.
    pub sparkle_scale_base: f64,
    pub sparkle_scale_spread: f64,
    pub particles: usize,
    /// Particle size is `1 + r * particle_size_spread` px.
    pub particle_size_spread: f64,
    /// Particle duration is `15 + r * particle_duration_spread` s.
    pub particle_duration_spread: f64,
    /// Each drift leg spans `-particle_drift..particle_drift` px.
    pub particle_drift: f64,
    pub particle_opacity_base: f64,
    pub particle_opacity_spread: f64,
    pub shooting_stars: usize,
    pub shooting_duration_base: f64,
    pub shooting_duration_spread: f64,
    pub shooting_delay_spread: f64,
}

impl StarfieldSpec {
    /// Dense sky for the landing hero.
    pub const LANDING: Self = Self {
        clusters: 3,
        stars: 120,
        star_size_spread: 2.5,
        sparkle_threshold: 2.0,
        sparkle_gate: 0.6,
        sparkle_scale_base: 4.0,
        sparkle_scale_spread: 4.0,
        particles: 30,
        particle_size_spread: 3.0,
        particle_duration_spread: 20.0,
        particle_drift: 40.0,
        particle_opacity_base: 0.2,
        particle_opacity_spread: 0.3,
        shooting_stars: 8,
        shooting_duration_base: 6.0,
        shooting_duration_spread: 10.0,
        shooting_delay_spread: 15.0,
    };

    /// Calmer sky behind the dashboard cards.
    pub const DASHBOARD: Self = Self {
        clusters: 2,
        stars: 90,
        star_size_spread: 2.0,
        sparkle_threshold: 1.8,
        sparkle_gate: 0.7,
        sparkle_scale_base: 3.0,
        sparkle_scale_spread: 3.0,
        particles: 20,
        particle_size_spread: 2.0,
        particle_duration_spread: 15.0,
        particle_drift: 30.0,
        particle_opacity_base: 0.15,
        particle_opacity_spread: 0.25,
        shooting_stars: 5,
        shooting_duration_base: 8.0,
        shooting_duration_spread: 12.0,
        shooting_delay_spread: 20.0,
    };
}

const MOTION_COUNT: usize = 5;

/// Build the full backdrop layout for `spec` from a fixed `seed`.
#[must_use]
pub fn generate(spec: &StarfieldSpec, seed: u64) -> StarfieldLayout {
    let mut rng = SmallRng::seed_from_u64(seed);
    let clusters = (0..spec.clusters)
        .map(|_| Cluster { x: rng.random_range(0.0..100.0), y: rng.random_range(0.0..100.0) })
        .collect();
    let stars = (0..spec.stars).map(|_| generate_star(spec, &mut rng)).collect();
    let particles = (0..spec.particles).map(|_| generate_particle(spec, &mut rng)).collect();
    let shooting_stars =
        (0..spec.shooting_stars).map(|_| generate_shooting_star(spec, &mut rng)).collect();
    StarfieldLayout { clusters, stars, particles, shooting_stars }
}

fn generate_star(spec: &StarfieldSpec, rng: &mut SmallRng) -> Star {
    let x = rng.random_range(0.0..100.0);
    let y = rng.random_range(0.0..100.0);
    let size = 0.5 + rng.random::<f64>() * spec.star_size_spread;
    let duration = rng.random_range(3.0..10.0);
    let delay = rng.random_range(0.0..5.0);
    let motion = match rng.random_range(0..MOTION_COUNT) {
        0 => StarMotion::Twinkle,
        1 => StarMotion::Diagonal {
            move_x: rng.random_range(-10.0..10.0),
            move_y: rng.random_range(-10.0..10.0),
        },
        2 => StarMotion::Circular { orbit_radius: rng.random_range(2.0..10.0) },
        3 => StarMotion::Pulse,
        _ => StarMotion::Wander {
            move_x: rng.random_range(-15.0..15.0),
            move_y: rng.random_range(-15.0..15.0),
        },
    };
    // Only large stars roll for a sparkle halo.
    let sparkle = if size > spec.sparkle_threshold && rng.random::<f64>() > spec.sparkle_gate {
        let scale = spec.sparkle_scale_base + rng.random::<f64>() * spec.sparkle_scale_spread;
        Some(Sparkle { size: size * scale, duration: duration * 1.5, delay: delay + 0.5 })
    } else {
        None
    };
    Star { x, y, size, duration, delay, motion, sparkle }
}

fn generate_particle(spec: &StarfieldSpec, rng: &mut SmallRng) -> Particle {
    let x = rng.random_range(0.0..100.0);
    let y = rng.random_range(0.0..100.0);
    let size = 1.0 + rng.random::<f64>() * spec.particle_size_spread;
    let duration = 15.0 + rng.random::<f64>() * spec.particle_duration_spread;
    let delay = rng.random_range(0.0..10.0);
    let drift_span = -spec.particle_drift..spec.particle_drift;
    let mut leg =
        || (rng.random_range(drift_span.clone()), rng.random_range(drift_span.clone()));
    let drift = [leg(), leg(), leg()];
    let opacity = spec.particle_opacity_base + rng.random::<f64>() * spec.particle_opacity_spread;
    Particle { x, y, size, duration, delay, drift, opacity }
}

fn generate_shooting_star(spec: &StarfieldSpec, rng: &mut SmallRng) -> ShootingStar {
    ShootingStar {
        x: rng.random_range(0.0..100.0),
        // Streaks start in the top half of the sky.
        y: rng.random_range(0.0..50.0),
        angle: rng.random_range(15.0..45.0),
        duration: spec.shooting_duration_base + rng.random::<f64>() * spec.shooting_duration_spread,
        delay: rng.random::<f64>() * spec.shooting_delay_spread,
        distance: rng.random_range(200.0..500.0),
    }
}

use super::*;

#[test]
fn same_seed_same_sky() {
    let a = generate(&StarfieldSpec::LANDING, 42);
    let b = generate(&StarfieldSpec::LANDING, 42);
    assert_eq!(a, b);
}

#[test]
fn different_seeds_differ() {
    let a = generate(&StarfieldSpec::LANDING, 1);
    let b = generate(&StarfieldSpec::LANDING, 2);
    assert_ne!(a, b);
}

#[test]
fn landing_counts_match_spec() {
    let layout = generate(&StarfieldSpec::LANDING, 7);
    assert_eq!(layout.clusters.len(), 3);
    assert_eq!(layout.stars.len(), 120);
    assert_eq!(layout.particles.len(), 30);
    assert_eq!(layout.shooting_stars.len(), 8);
}

#[test]
fn dashboard_counts_match_spec() {
    let layout = generate(&StarfieldSpec::DASHBOARD, 7);
    assert_eq!(layout.clusters.len(), 2);
    assert_eq!(layout.stars.len(), 90);
    assert_eq!(layout.particles.len(), 20);
    assert_eq!(layout.shooting_stars.len(), 5);
}

#[test]
fn positions_stay_inside_the_container() {
    let layout = generate(&StarfieldSpec::LANDING, 11);
    for star in &layout.stars {
        assert!((0.0..100.0).contains(&star.x));
        assert!((0.0..100.0).contains(&star.y));
    }
    for particle in &layout.particles {
        assert!((0.0..100.0).contains(&particle.x));
        assert!((0.0..100.0).contains(&particle.y));
    }
}

#[test]
fn landing_star_sizes_and_timings_stay_in_range() {
    let layout = generate(&StarfieldSpec::LANDING, 13);
    for star in &layout.stars {
        assert!((0.5..3.0).contains(&star.size), "size {}", star.size);
        assert!((3.0..10.0).contains(&star.duration));
        assert!((0.0..5.0).contains(&star.delay));
    }
}

#[test]
fn dashboard_star_sizes_cap_lower() {
    let layout = generate(&StarfieldSpec::DASHBOARD, 13);
    for star in &layout.stars {
        assert!(star.size < 2.5);
    }
}

#[test]
fn sparkles_only_halo_large_stars() {
    let layout = generate(&StarfieldSpec::LANDING, 17);
    let mut seen = 0;
    for star in &layout.stars {
        if let Some(sparkle) = &star.sparkle {
            seen += 1;
            assert!(star.size > 2.0, "sparkle on a small star ({})", star.size);
            let scale = sparkle.size / star.size;
            assert!(scale > 3.99 && scale < 8.01, "sparkle scale {scale}");
            assert!((sparkle.duration - star.duration * 1.5).abs() < f64::EPSILON);
            assert!((sparkle.delay - (star.delay + 0.5)).abs() < f64::EPSILON);
        }
    }
    // 120 stars at these odds always yields a few.
    assert!(seen > 0);
}

#[test]
fn shooting_stars_start_in_the_top_half() {
    let layout = generate(&StarfieldSpec::LANDING, 19);
    for streak in &layout.shooting_stars {
        assert!((0.0..50.0).contains(&streak.y));
        assert!((15.0..45.0).contains(&streak.angle));
        assert!((200.0..500.0).contains(&streak.distance));
        assert!((6.0..16.0).contains(&streak.duration));
        assert!((0.0..15.0).contains(&streak.delay));
    }
}

#[test]
fn particle_opacity_stays_subtle() {
    let layout = generate(&StarfieldSpec::DASHBOARD, 23);
    for particle in &layout.particles {
        assert!((0.15..0.4).contains(&particle.opacity), "opacity {}", particle.opacity);
        assert!((15.0..30.0).contains(&particle.duration));
    }
}

#[test]
fn particle_drift_respects_the_page_knob() {
    let layout = generate(&StarfieldSpec::DASHBOARD, 29);
    for particle in &layout.particles {
        for (dx, dy) in particle.drift {
            assert!((-30.0..30.0).contains(&dx), "drift x {dx}");
            assert!((-30.0..30.0).contains(&dy), "drift y {dy}");
        }
    }
}

#[test]
fn star_style_carries_animation_and_units() {
    let star = Star {
        x: 12.5,
        y: 40.0,
        size: 2.25,
        duration: 4.5,
        delay: 1.0,
        motion: StarMotion::Diagonal { move_x: -3.0, move_y: 7.5 },
        sparkle: None,
    };
    let style = star.style();
    assert!(style.contains("left:12.500%;"));
    assert!(style.contains("width:2.25px;"));
    assert!(style.contains("--star-animation:diagonal;"));
    assert!(style.contains("--move-x:-3.00px;"));
    assert!(style.contains("--move-y:7.50px;"));
}

#[test]
fn circular_star_style_carries_orbit_radius() {
    let star = Star {
        x: 1.0,
        y: 2.0,
        size: 1.0,
        duration: 3.0,
        delay: 0.0,
        motion: StarMotion::Circular { orbit_radius: 6.5 },
        sparkle: None,
    };
    assert!(star.style().contains("--orbit-radius:6.50px;"));
    assert!(!star.style().contains("--move-x"));
}

#[test]
fn sparkle_style_shares_the_star_anchor() {
    let star = Star {
        x: 30.0,
        y: 60.0,
        size: 2.4,
        duration: 4.0,
        delay: 0.5,
        motion: StarMotion::Twinkle,
        sparkle: Some(Sparkle { size: 12.0, duration: 6.0, delay: 1.0 }),
    };
    let style = star.sparkle_style().expect("sparkle style");
    assert!(style.contains("left:30.000%;"));
    assert!(style.contains("top:60.000%;"));
    assert!(style.contains("width:12.00px;"));
}

#[test]
fn shooting_star_style_has_unitless_distance() {
    let streak =
        ShootingStar { x: 5.0, y: 10.0, angle: 30.0, duration: 8.0, delay: 2.0, distance: 350.4 };
    let style = streak.style();
    assert!(style.contains("--angle:30.00deg;"));
    assert!(style.ends_with("--distance:350;"));
}

#[test]
fn motion_names_match_the_stylesheet() {
    assert_eq!(StarMotion::Twinkle.css_name(), "twinkle");
    assert_eq!(StarMotion::Diagonal { move_x: 0.0, move_y: 0.0 }.css_name(), "diagonal");
    assert_eq!(StarMotion::Circular { orbit_radius: 1.0 }.css_name(), "circular");
    assert_eq!(StarMotion::Pulse.css_name(), "pulse");
    assert_eq!(StarMotion::Wander { move_x: 0.0, move_y: 0.0 }.css_name(), "wander");
}

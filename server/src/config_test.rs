use super::*;

fn config(backend_url: &str) -> Config {
    Config { backend_url: backend_url.to_owned(), port: DEFAULT_PORT }
}

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_proxy_env() {
    unsafe {
        std::env::remove_var("FITFUSION_API_URL");
        std::env::remove_var("PORT");
    }
}

#[test]
fn from_env_defaults_then_reads_overrides() {
    unsafe { clear_proxy_env() };
    let cfg = Config::from_env();
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(cfg.port, DEFAULT_PORT);

    unsafe {
        std::env::set_var("FITFUSION_API_URL", "https://api.example.test/");
        std::env::set_var("PORT", "4173");
    }
    let cfg = Config::from_env();
    assert_eq!(cfg.backend_url, "https://api.example.test");
    assert_eq!(cfg.port, 4173);

    unsafe { std::env::set_var("PORT", "not-a-port") };
    assert_eq!(Config::from_env().port, DEFAULT_PORT);

    unsafe { clear_proxy_env() };
}

#[test]
fn user_create_url_targets_the_users_collection() {
    let cfg = config("http://localhost:8000");
    assert_eq!(cfg.user_create_url(), "http://localhost:8000/api/v1/users/");
}

#[test]
fn relay_url_keeps_the_path_and_query() {
    let cfg = config("http://localhost:8000");
    assert_eq!(
        cfg.relay_url("v1/workouts", Some("page=2&size=10")),
        "http://localhost:8000/api/v1/workouts?page=2&size=10"
    );
}

#[test]
fn relay_url_drops_an_absent_or_empty_query() {
    let cfg = config("http://localhost:8000");
    assert_eq!(cfg.relay_url("v1/users/me", None), "http://localhost:8000/api/v1/users/me");
    assert_eq!(cfg.relay_url("v1/users/me", Some("")), "http://localhost:8000/api/v1/users/me");
}

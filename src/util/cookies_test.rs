use super::*;

// =============================================================
// Attribute formatting
// =============================================================

#[test]
fn default_config_is_seven_days_strict_root() {
    let config = CookieConfig::default();
    assert_eq!(config.max_age_days, 7);
    assert_eq!(config.path, "/");
    assert_eq!(config.same_site, SameSite::Strict);
}

#[test]
fn set_cookie_carries_configured_attributes() {
    let out = format_set_cookie("session", "abc", &CookieConfig::default());
    assert_eq!(out, "session=abc; Max-Age=604800; Path=/; SameSite=Strict");
}

#[test]
fn clear_cookie_expires_immediately() {
    let out = format_clear_cookie("session", &CookieConfig::default());
    assert_eq!(out, "session=; Max-Age=0; Path=/");
}

#[test]
fn lax_policy_is_spelled_out() {
    let config = CookieConfig { same_site: SameSite::Lax, ..CookieConfig::default() };
    assert!(format_set_cookie("a", "b", &config).ends_with("SameSite=Lax"));
}

// =============================================================
// Header parsing
// =============================================================

#[test]
fn parse_cookie_finds_named_value() {
    assert_eq!(parse_cookie("a=1; session=abc; b=2", "session"), Some("abc".to_owned()));
}

#[test]
fn parse_cookie_misses_absent_name() {
    assert_eq!(parse_cookie("a=1; b=2", "session"), None);
}

#[test]
fn parse_cookie_ignores_name_prefix_collisions() {
    assert_eq!(parse_cookie("sessionx=1; session=2", "session"), Some("2".to_owned()));
}

#[test]
fn parse_cookie_keeps_equals_in_value() {
    assert_eq!(parse_cookie("token=a=b", "token"), Some("a=b".to_owned()));
}

// tests/logging_level.rs

use tracing::Level;

use coursegate::cli::LogLevel;
use coursegate::logging::{log_directive, parse_level_str};

#[test]
fn cli_level_wins_over_environment() {
    assert_eq!(
        log_directive(Some(LogLevel::Debug), Some("trace")),
        "warn,coursegate=debug"
    );
}

#[test]
fn bare_env_level_is_scoped_to_this_crate() {
    assert_eq!(log_directive(None, Some(" Warning ")), "warn,coursegate=warn");
    assert_eq!(log_directive(None, Some("TRACE")), "warn,coursegate=trace");
}

#[test]
fn env_directive_is_passed_through() {
    let directive = "coursegate::resolve=trace,notify=info";
    assert_eq!(log_directive(None, Some(directive)), directive);
}

#[test]
fn defaults_to_info_for_this_crate() {
    assert_eq!(log_directive(None, None), "warn,coursegate=info");
    assert_eq!(log_directive(None, Some("   ")), "warn,coursegate=info");
}

#[test]
fn level_names_parse_case_insensitively() {
    assert_eq!(parse_level_str("ERROR"), Some(Level::ERROR));
    assert_eq!(parse_level_str("warning"), Some(Level::WARN));
    assert_eq!(parse_level_str("debug\n"), Some(Level::DEBUG));
    assert_eq!(parse_level_str("loud"), None);
}

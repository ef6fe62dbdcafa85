use url::Url;

use crate::integrations::IntegrationConfig;

pub const DEFAULT_TRACKER_MODULE_URL: &str = "/vendor/session-tracker.js";
pub const DEFAULT_SCHEDULING_URL: &str = "https://calendly.com/agency/intro-call";

#[cfg(debug_assertions)]
pub fn is_development() -> bool {
    true
}

#[cfg(not(debug_assertions))]
pub fn is_development() -> bool {
    false
}

// Values are inlined at build time; there is no process environment in the browser.
fn build_env(key: &str) -> Option<String> {
    let value = match key {
        "SESSION_TRACKER_SERVER_URL" => option_env!("SESSION_TRACKER_SERVER_URL"),
        "SESSION_TRACKER_SITE_ID" => option_env!("SESSION_TRACKER_SITE_ID"),
        "SESSION_TRACKER_RECORDING" => option_env!("SESSION_TRACKER_RECORDING"),
        "SESSION_TRACKER_MODULE_URL" => option_env!("SESSION_TRACKER_MODULE_URL"),
        "SCHEDULING_URL" => option_env!("SCHEDULING_URL"),
        "LEAD_INTAKE_URL" => option_env!("LEAD_INTAKE_URL"),
        _ => None,
    };
    value.map(str::to_string)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(value: Option<String>) -> bool {
    matches!(
        value.as_deref().map(str::trim).map(str::to_ascii_lowercase).as_deref(),
        Some("1" | "true" | "yes" | "on")
    )
}

/// Session tracker configuration resolved from an arbitrary key lookup.
pub fn session_tracker_config_from<F>(lookup: F, debug_mode: bool) -> IntegrationConfig
where
    F: Fn(&str) -> Option<String>,
{
    IntegrationConfig {
        server_url: non_blank(lookup("SESSION_TRACKER_SERVER_URL")),
        site_id: non_blank(lookup("SESSION_TRACKER_SITE_ID")),
        recording: parse_flag(lookup("SESSION_TRACKER_RECORDING")),
        debug_mode,
    }
}

pub fn session_tracker_config() -> IntegrationConfig {
    session_tracker_config_from(build_env, is_development())
}

pub fn session_tracker_module_url() -> String {
    non_blank(build_env("SESSION_TRACKER_MODULE_URL"))
        .unwrap_or_else(|| DEFAULT_TRACKER_MODULE_URL.to_string())
}

pub fn scheduling_url() -> String {
    non_blank(build_env("SCHEDULING_URL")).unwrap_or_else(|| DEFAULT_SCHEDULING_URL.to_string())
}

/// Origin the scheduling widget posts messages from, taken from
/// [`scheduling_url`] so a self-hosted or white-label widget still talks to
/// the bridge.
pub fn scheduling_origin() -> String {
    origin_of(&scheduling_url())
        .or_else(|| origin_of(DEFAULT_SCHEDULING_URL))
        .unwrap_or_default()
}

/// `scheme://host[:port]` of `raw`, or `None` for unparseable and opaque URLs.
pub fn origin_of(raw: &str) -> Option<String> {
    let origin = Url::parse(raw.trim()).ok()?.origin();
    origin.is_tuple().then(|| origin.ascii_serialization())
}

pub fn lead_intake_url() -> Option<String> {
    non_blank(build_env("LEAD_INTAKE_URL"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_complete_config() {
        let config = session_tracker_config_from(
            lookup(&[
                ("SESSION_TRACKER_SERVER_URL", "https://track.example.com"),
                ("SESSION_TRACKER_SITE_ID", "site-42"),
                ("SESSION_TRACKER_RECORDING", "true"),
            ]),
            false,
        );
        assert_eq!(config.server_url.as_deref(), Some("https://track.example.com"));
        assert_eq!(config.site_id.as_deref(), Some("site-42"));
        assert!(config.recording);
        assert!(!config.debug_mode);
        assert!(config.init_options().is_some());
    }

    #[test]
    fn test_blank_values_are_absent() {
        let config = session_tracker_config_from(
            lookup(&[
                ("SESSION_TRACKER_SERVER_URL", "   "),
                ("SESSION_TRACKER_SITE_ID", "site-42"),
            ]),
            true,
        );
        assert!(config.server_url.is_none());
        assert!(config.init_options().is_none());
    }

    #[test]
    fn test_recording_flag_parsing() {
        for (raw, expected) in [("1", true), ("YES", true), (" on ", true), ("0", false), ("false", false), ("", false)] {
            let config = session_tracker_config_from(lookup(&[("SESSION_TRACKER_RECORDING", raw)]), false);
            assert_eq!(config.recording, expected, "flag {:?}", raw);
        }
        let config = session_tracker_config_from(lookup(&[]), false);
        assert!(!config.recording);
    }

    #[test]
    fn test_defaults_without_build_env() {
        assert!(!session_tracker_module_url().is_empty());
        assert!(scheduling_url().starts_with("https://"));
        assert_eq!(scheduling_origin(), origin_of(&scheduling_url()).unwrap());
    }

    #[test]
    fn test_origin_follows_configured_host() {
        assert_eq!(
            origin_of("https://calendly.com/agency/intro-call").as_deref(),
            Some("https://calendly.com")
        );
        assert_eq!(
            origin_of(" https://book.example.org:8443/team/intro?x=1 ").as_deref(),
            Some("https://book.example.org:8443")
        );
        assert_eq!(origin_of("https://cal.example.com:443/a").as_deref(), Some("https://cal.example.com"));
        assert_eq!(origin_of("not a url"), None);
        assert_eq!(origin_of("data:text/plain,hi"), None);
    }
}

//! Gate configuration baked into the browser bundle.
//!
//! The browser has no process environment, so `ADMIN_EMAILS` and
//! `REVOKE_NON_ADMIN_SESSIONS` are read at compile time. Paths keep their
//! defaults because the router mounts fixed routes.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use school_portal::GateConfig;
use school_portal::config::ConfigError;

/// Config for this build. Invalid build-time values fall back to the defaults.
pub fn gate_config() -> GateConfig {
    config_from(option_env!("ADMIN_EMAILS"), option_env!("REVOKE_NON_ADMIN_SESSIONS")).unwrap_or_else(|err| {
        log::error!("invalid build-time gate config: {err}; using defaults");
        GateConfig::default()
    })
}

fn config_from(admin_emails: Option<&str>, revoke: Option<&str>) -> Result<GateConfig, ConfigError> {
    GateConfig::from_lookup(|key| match key {
        "ADMIN_EMAILS" => admin_emails.map(str::to_owned),
        "REVOKE_NON_ADMIN_SESSIONS" => revoke.map(str::to_owned),
        _ => None,
    })
}

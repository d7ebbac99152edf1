use once_cell::sync::Lazy;
use serde_derive::Deserialize;

pub static CONFIG: Lazy<Config> = Lazy::new(|| Config::new().expect("Config could not be loaded."));

#[derive(Debug, Deserialize)]
pub struct General {
    pub log_level: log::Level,
    /// Main loop period in milliseconds.
    pub tick_millis: u64,
}

/// How the simulated location stack behaves for this run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// Always-authorized device following the configured route.
    Authorized,
    /// While-in-use authorization, same route.
    WhenInUse,
    /// Permission not decided yet; the simulated user grants on request.
    NotDetermined,
    /// Permission denied.
    Denied,
    /// Parental controls forbid location access.
    Restricted,
    /// Location services off at the OS level.
    Disabled,
    /// Authorized, but the fix is lost shortly after launch.
    SignalLost,
}

#[derive(Debug, Deserialize)]
pub struct ScriptedEvent {
    /// Main loop tick at which the event fires.
    pub at_tick: u64,
    /// See `parse_event` in main.rs for the accepted forms.
    pub event: String,
}

#[derive(Debug, Deserialize)]
pub struct Simulation {
    pub scenario: Scenario,
    /// Device track as `[latitude, longitude]` pairs, walked by the
    /// authorized scenarios.
    pub route: Vec<[f64; 2]>,
    /// User interactions to replay against the screen.
    pub script: Vec<ScriptedEvent>,
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub general: General,
    pub simulation: Simulation,
}

impl Config {
    pub fn new() -> Result<Self, config::ConfigError> {
        let mut s = config::Config::new();

        // Start off by merging in the "default" configuration file
        s.merge(config::File::with_name("config/default"))?;

        // Add in a local configuration file
        // This file shouldn't be checked in to git
        s.merge(config::File::with_name("config/local").required(false))?;

        s.try_into()
    }
}

//! Generator constants and host configuration.

use std::time::Duration;

use winit::dpi::LogicalSize;

use shardfall_engine::logging::LoggingConfig;
use shardfall_engine::paint::Color;
use shardfall_engine::window::RuntimeConfig;

// ── Generator constants ───────────────────────────────────────────────────

/// Maximum number of triangles retained in the shape buffer.
pub const MAX_SHAPES: usize = 200;

/// Stroke width, in pixels, used by `Renderer::draw_line`.
pub const LINE_WIDTH: f32 = 4.0;

/// Area every generated triangle is normalized to, in unit-square coordinates.
pub const TARGET_AREA: f64 = 0.01;

/// Exponent shaping the biased scalar distribution.
pub const BIAS_EXPONENT: f64 = 1.25;

/// Factor applied to a channel weight by a bump.
pub const BUMP_FACTOR: f64 = 2.0;

/// Squared norm the color weights are rescaled to after every bump.
pub const ENERGY_BUDGET: f64 = 1.5;

/// Starting weight of every channel.
pub const INITIAL_WEIGHT: f64 = 0.5;

/// Over-scan margin on each side of the unit square.
///
/// Normalized coordinates in `[-OVERSCAN, 1 + OVERSCAN]` cover the surface.
pub const OVERSCAN: f64 = 0.2;

pub const TICK_PERIOD: Duration = Duration::from_millis(10);

/// Quiet period after the first resize of a burst before the full repaint.
pub const RESIZE_SETTLE: Duration = Duration::from_millis(1);

// ── Host configuration ────────────────────────────────────────────────────

pub const SEED_VAR: &str = "SHARDFALL_SEED";
pub const LOG_VAR: &str = "SHARDFALL_LOG";

/// Host-side knobs: window, background, RNG seed, logging.
#[derive(Debug, Clone)]
pub struct Config {
    pub title:        String,
    pub initial_size: LogicalSize<f64>,
    pub background:   Color,

    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed:         Option<u64>,

    pub logging:      LoggingConfig,

    /// Raw `SHARDFALL_SEED` value that failed to parse, reported once logging is up.
    rejected_seed:    Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title:         "shardfall".to_string(),
            initial_size:  LogicalSize::new(1280.0, 720.0),
            background:    Color::WHITE,
            seed:          None,
            logging:       LoggingConfig {
                env_var: Some(LOG_VAR),
                ..LoggingConfig::default()
            },
            rejected_seed: None,
        }
    }
}

impl Config {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(SEED_VAR) {
            match parse_seed(&raw) {
                Some(seed) => config.seed = Some(seed),
                None => config.rejected_seed = Some(raw),
            }
        }

        config
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title:        self.title.clone(),
            initial_size: self.initial_size,
        }
    }

    /// Logs the effective configuration. Call after the logger is initialized.
    pub fn log_summary(&self) {
        if let Some(raw) = &self.rejected_seed {
            log::warn!("ignoring {SEED_VAR}={raw:?}: expected an unsigned integer");
        }
        match self.seed {
            Some(seed) => log::info!("seed {seed}"),
            None => log::info!("seed from entropy"),
        }
        log::info!(
            "capacity {MAX_SHAPES}, tick {}ms, target area {TARGET_AREA}",
            TICK_PERIOD.as_millis()
        );
    }
}

/// Parses a seed as a decimal or `0x`-prefixed hexadecimal `u64`.
pub fn parse_seed(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => raw.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_host() {
        let config = Config::default();
        assert_eq!(config.title, "shardfall");
        assert_eq!(config.background, Color::WHITE);
        assert_eq!(config.seed, None);
        assert_eq!(config.logging.env_var, Some(LOG_VAR));
    }

    #[test]
    fn seed_is_read_from_lookup() {
        let config = Config::from_lookup(|name| (name == SEED_VAR).then(|| " 42 ".to_string()));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.rejected_seed, None);
    }

    #[test]
    fn invalid_seed_falls_back_to_entropy() {
        let config = Config::from_lookup(|_| Some("forty-two".to_string()));
        assert_eq!(config.seed, None);
        assert_eq!(config.rejected_seed.as_deref(), Some("forty-two"));
    }

    #[test]
    fn parse_seed_accepts_hex() {
        assert_eq!(parse_seed("0xff"), Some(255));
        assert_eq!(parse_seed("0XFF"), Some(255));
        assert_eq!(parse_seed("-1"), None);
        assert_eq!(parse_seed(""), None);
    }

    #[test]
    fn runtime_config_carries_window_settings() {
        let rc = Config::default().runtime_config();
        assert_eq!(rc.title, "shardfall");
        assert_eq!(rc.initial_size, LogicalSize::new(1280.0, 720.0));
    }
}

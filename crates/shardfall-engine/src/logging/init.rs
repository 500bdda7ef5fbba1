use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "shardfall=debug,wgpu=warn").
///
/// `env_var` names an environment variable consulted when no explicit filter
/// is given; `RUST_LOG` is the fallback after that.
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub env_var: Option<&'static str>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            env_var: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Resolves the filter string: explicit filter, then `env_var`, then `RUST_LOG`.
    /// Blank variables are skipped.
    fn resolve_filter(&self) -> Option<String> {
        self.resolve_filter_with(|name| std::env::var(name).ok())
    }

    fn resolve_filter_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        if let Some(filter) = &self.env_filter {
            return Some(filter.clone());
        }
        self.env_var
            .into_iter()
            .chain(std::iter::once("RUST_LOG"))
            .find_map(|name| lookup(name).filter(|f| !f.trim().is_empty()))
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Idempotent; subsequent calls are ignored. Call early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.resolve_filter() {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                // Keep wgpu's per-frame chatter out of the default output.
                builder
                    .filter_level(log::LevelFilter::Info)
                    .filter_module("wgpu_core", log::LevelFilter::Warn)
                    .filter_module("wgpu_hal", log::LevelFilter::Warn)
                    .filter_module("naga", log::LevelFilter::Warn);
            }
        }

        builder.write_style(config.write_style);
        builder.init();

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name| {
            vars.iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    fn app_config() -> LoggingConfig {
        LoggingConfig {
            env_var: Some("SHARDFALL_LOG"),
            ..Default::default()
        }
    }

    #[test]
    fn explicit_filter_wins() {
        let config = LoggingConfig {
            env_filter: Some("debug".to_string()),
            ..app_config()
        };
        let lookup = env(&[("SHARDFALL_LOG", "trace"), ("RUST_LOG", "warn")]);
        assert_eq!(config.resolve_filter_with(lookup).as_deref(), Some("debug"));
    }

    #[test]
    fn app_variable_precedes_rust_log() {
        let lookup = env(&[("SHARDFALL_LOG", "trace"), ("RUST_LOG", "warn")]);
        assert_eq!(app_config().resolve_filter_with(lookup).as_deref(), Some("trace"));
    }

    #[test]
    fn blank_app_variable_falls_through_to_rust_log() {
        let lookup = env(&[("SHARDFALL_LOG", "  "), ("RUST_LOG", "debug")]);
        assert_eq!(app_config().resolve_filter_with(lookup).as_deref(), Some("debug"));
    }

    #[test]
    fn blank_or_missing_everywhere_uses_default() {
        assert_eq!(app_config().resolve_filter_with(env(&[("RUST_LOG", "")])), None);
        assert_eq!(app_config().resolve_filter_with(env(&[])), None);
    }
}

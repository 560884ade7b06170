//! Logger initialization for the renderer binary.
//!
//! Library code only talks to the `log` facade. What ends up on stderr at
//! each level:
//! - `info`: scene setup, FPS line, counter report at exit
//! - `warn`: frame budget overruns, render queue overflow
//! - `debug`: per-frame stage timings and scope timers
//! - `trace`: per-populate clip statistics

use log::LevelFilter;
use std::sync::Once;

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Explicit `env_logger` directive string, e.g. "scanline_engine=debug".
    /// Takes precedence over `RUST_LOG`.
    pub filter: Option<String>,
    /// Level used when neither `filter` nor `RUST_LOG` is set.
    pub default_level: LevelFilter,
    /// Millisecond timestamps line up frame warnings with the FPS log.
    pub timestamps: bool,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            default_level: LevelFilter::Info,
            timestamps: true,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Directive string actually applied, given the value of `RUST_LOG`.
    pub fn resolve_filter(&self, rust_log: Option<&str>) -> String {
        match (&self.filter, rust_log) {
            (Some(filter), _) => filter.clone(),
            (None, Some(env)) if !env.trim().is_empty() => env.to_string(),
            _ => self.default_level.to_string().to_lowercase(),
        }
    }
}

static INIT: Once = Once::new();

/// Install `env_logger` as the global logger. Only the first call has any
/// effect, and an already-installed logger (e.g. from a test harness) is
/// left in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let rust_log = std::env::var("RUST_LOG").ok();
        let filter = config.resolve_filter(rust_log.as_deref());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);
        builder.write_style(config.write_style);
        if config.timestamps {
            builder.format_timestamp_millis();
        } else {
            builder.format_timestamp(None);
        }

        if builder.try_init().is_ok() {
            log::debug!("logging initialized with filter \"{filter}\"");
        }
    });
}

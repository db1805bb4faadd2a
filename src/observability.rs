//! Logging setup and structured diagnostic hooks.
//!
//! The `log` facade is used everywhere in the crate; `init_logging` installs the
//! `env_logger` backend exactly once per process. Output goes to stderr so the
//! binary's stdout carries nothing but the response document.

use std::io::Write;
use std::sync::Once;

use crate::config::EncoderConfig;

static INIT_LOGGER: Once = Once::new();

/// Installs the global logger using the level from `config`.
///
/// `RUST_LOG`, when set, takes precedence over the configured level. Calls after
/// the first are no-ops.
pub fn init_logging(config: &EncoderConfig) {
    let level = config.log_level;
    INIT_LOGGER.call_once(move || {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(level.into());
        builder.parse_env("RUST_LOG");

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });
        builder.target(env_logger::Target::Stderr);

        let _ = builder.try_init();
    });
}

/// Logs a structured key-value metric line at debug level.
///
/// # Example
/// ```
/// use run_length_encoder::log_metric;
/// let input_chars = 11;
/// log_metric!("event" = "encode", "input_chars" = input_chars);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        if $crate::__log::log_enabled!($crate::__log::Level::Debug) {
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+
            $crate::__log::debug!("RLE_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}

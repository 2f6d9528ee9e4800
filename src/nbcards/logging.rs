//! Logger bootstrap for the binary.
//!
//! Library code only talks to the `log` facade. The binary calls [`init`]
//! once; `RUST_LOG` overrides the level picked here.

use log::LevelFilter;

/// Default level: `warn`, or `info` when `verbose` is set.
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    }
}

/// Installs `env_logger` on stderr. Calling it again is a no-op.
pub fn init(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(default_level(verbose))
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env();
    // A second init (tests, embedding) keeps the first logger.
    let _ = builder.try_init();
}

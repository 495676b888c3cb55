use std::io;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize stderr logging.
///
/// `RUST_LOG` wins when set. Otherwise `-v` shows lexer recoveries and
/// `-vv` shows everything.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbosity {
            0 => "warn",
            1 => "jsx_lexer=debug,jsx_lex=debug",
            _ => "trace",
        })
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .init();
}

use crate::cli::Args;
use crate::logging::consts::{DEFAULT_DIRECTIVE, VERBOSE_DIRECTIVE};
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub mod consts;

/// Logs go to stderr so stdout carries only the rendered map or navigation target.
/// `RUST_LOG` takes precedence over `--verbose`.
pub fn init(args: &Args) {
    let directive = if args.verbose {
        VERBOSE_DIRECTIVE
    } else {
        DEFAULT_DIRECTIVE
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(
            directive
                .parse()
                .expect("Built-in logging directive should be valid."),
        )
    });
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_timer(UtcTime::rfc_3339()),
        )
        .init();
}

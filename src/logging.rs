use tracing_subscriber::EnvFilter;

use crate::flags::Flags;

/// Sends `tracing` output to stderr. `RUST_LOG` wins over the flags.
pub fn init(flags: &Flags) {
    let default_level = if flags.is_set("debug") {
        "debug"
    } else if flags.is_set("quiet") {
        "error"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bsh={}", default_level)));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

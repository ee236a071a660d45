use tracing_subscriber::EnvFilter;

/// Installs a global `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// On Lambda the log sink stamps every line itself, so timestamps and ANSI
/// colours are left out there.
pub fn init(on_lambda: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if on_lambda {
        builder.with_ansi(false).without_time().init();
    } else {
        builder.init();
    }
}

use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber: compact lines on stderr, plus JSON lines
/// in `log_file` when given. `verbose` lowers the default level to DEBUG,
/// which traces every store query. `RUST_LOG` overrides both.
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let _ = try_init(verbose, log_file);
}

/// Like [`init`], but reports instead of panicking when a subscriber is already set.
pub fn try_init(
    verbose: bool,
    log_file: Option<PathBuf>,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    if let Some(log_path) = log_file {
        let dir = match log_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let _ = std::fs::create_dir_all(&dir);
        let name = log_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "blogql.log".into());

        // Rotated daily as `<name>.YYYY-MM-DD`
        let file_layer = fmt::layer()
            .with_writer(tracing_appender::rolling::daily(dir, name))
            .with_ansi(false)
            .json();

        subscriber.with(file_layer).try_init()
    } else {
        subscriber.try_init()
    }
}

fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("blogql={}", level)
}

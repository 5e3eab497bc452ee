use std::fs;
use std::io::IsTerminal;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogConfig;

const LOG_FILE_NAME: &str = "themeport.log";

#[derive(Debug, Clone, Copy, Default)]
pub struct Verbosity {
    pub verbose: u8,
    pub quiet: bool,
}

/// Level directive for the given verbosity; `-v` flags override the
/// configured level.
pub fn log_level(config: &LogConfig, verbosity: Verbosity) -> String {
    match verbosity.verbose {
        0 => config.level.clone(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Console logging goes to stderr so stdout stays reserved for progress
/// lines. `RUST_LOG` takes precedence over both config and flags.
pub fn init_tracing(config: &LogConfig, verbosity: Verbosity) {
    static TRACE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

    let file_writer = config.dir.as_ref().and_then(|log_dir| {
        if let Err(error) = fs::create_dir_all(log_dir) {
            eprintln!(
                "warning: failed to create log dir {}: {error}",
                log_dir.display()
            );
            return None;
        }
        let appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        let _ = TRACE_GUARD.set(guard);
        Some(non_blocking)
    });

    let level = log_level(config, verbosity);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let console_layer = (!verbosity.quiet).then(|| {
        tracing_subscriber::fmt::layer()
            .with_ansi(std::io::stderr().is_terminal())
            .with_writer(std::io::stderr)
    });
    let file_layer = file_writer.map(|writer| {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(writer)
    });

    if let Err(error) = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
    {
        eprintln!("warning: failed to initialize tracing subscriber: {error}");
    }
}

use chrono::Local;
use std::env;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Set up tracing: pretty ANSI output on stdout plus a plain, timestamped
/// log file. Level comes from `TRACING_LEVEL`, default `info`; the log
/// directory from `LOG_DIR`, default `./logs`. The returned guard must stay
/// alive for the duration of the run so buffered file output is flushed.
pub fn init_logger() -> impl Drop {
    let default_filter = "info";
    let filter = env::var("TRACING_LEVEL").unwrap_or_else(|_| default_filter.to_string());
    let filter_layer = EnvFilter::new(filter);

    let log_dir = env::var("LOG_DIR").unwrap_or_else(|_| "./logs".to_string());
    let file_name = format!("photo-mirror-{}.log", Local::now().format("%Y%m%d-%H%M%S"));

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stdout)
                .with_file(false)
                .pretty()
                .without_time()
                .with_ansi(true),
        )
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .with(filter_layer)
        .init();

    guard
}

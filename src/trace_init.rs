/// Flushes buffered trace output when dropped. Hold it for the life of the
/// process.
#[must_use = "dropping the guard stops trace output"]
pub struct TraceGuard {
    #[cfg(feature = "trace")]
    _worker: Option<tracing_appender::non_blocking::WorkerGuard>,
}

#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &std::path::Path) -> TraceGuard {
    use std::sync::Once;

    static INIT: Once = Once::new();

    let mut worker = None;
    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, "termtable-trace.jsonl");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        worker = Some(guard);

        tracing_subscriber::fmt()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("termtable=debug,termtable_core=debug")
                }),
            )
            .init();
    });
    TraceGuard { _worker: worker }
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) -> TraceGuard {
    TraceGuard {}
}

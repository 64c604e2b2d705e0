use tracing::info;
use crate::core::domain::{Configuration, LogFormat};
use crate::core::events::DomainEvent;
use crate::gateway::events::EventPublisher;

// TracingPublisher writes each event as one INFO line through the installed subscriber.
#[derive(Debug, Default)]
pub struct TracingPublisher {}

impl TracingPublisher {
    pub fn new() -> Self {
        Self {}
    }
}

impl EventPublisher for TracingPublisher {
    fn publish(&self, event: DomainEvent) {
        info!(kind = %event.kind, key = %event.key, "{}", event.message);
    }
}

// Installs the process-wide subscriber. Call once, at program entry.
pub fn setup_tracing(config: &Configuration) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(config.ansi)
        .without_time()
        .with_writer(std::io::stdout);

    match config.log_format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

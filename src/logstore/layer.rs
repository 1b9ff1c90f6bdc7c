use super::store::LogStore;
use std::fmt::Write;
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

/// Tracing layer that mirrors every event into a shared [`LogStore`].
///
/// Category is the event target (module path); the message is prefixed with
/// the level so `/logs/error` style filters work on the stored text.
pub struct CaptureLayer {
    store: Arc<LogStore>,
}

impl CaptureLayer {
    pub fn new(store: Arc<LogStore>) -> Self {
        Self { store }
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let meta = event.metadata();
        self.store
            .append(meta.target(), format!("{} {}", meta.level(), visitor.message));
    }
}

/// Extracts the `message` field from an event, ignoring structured fields
#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        }
    }
}

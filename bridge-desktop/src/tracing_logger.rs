use bridge_traits::logging::{LogLevel, Logger};
use std::borrow::Cow;
use std::error::Error as StdError;

macro_rules! emit {
    ($level:expr, $($args:tt)+) => {
        match $level {
            LogLevel::Trace => tracing::trace!($($args)+),
            LogLevel::Debug => tracing::debug!($($args)+),
            LogLevel::Info => tracing::info!($($args)+),
            LogLevel::Warn => tracing::warn!($($args)+),
            LogLevel::Error => tracing::error!($($args)+),
        }
    };
}

/// Logger that hands every line to the `tracing` facade.
///
/// The tag is recorded as the `tag` field, prefixed with `tag_prefix` when one
/// is configured, and errors are recorded as the `error` field.
#[derive(Debug, Clone, Default)]
pub struct TracingLogger {
    tag_prefix: Option<String>,
}

impl TracingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag_prefix(prefix: impl Into<String>) -> Self {
        Self {
            tag_prefix: Some(prefix.into()),
        }
    }

    fn tag<'a>(&self, tag: &'a str) -> Cow<'a, str> {
        match &self.tag_prefix {
            Some(prefix) => Cow::Owned(format!("{}{}", prefix, tag)),
            None => Cow::Borrowed(tag),
        }
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, tag: &str, message: &str) {
        let tag = self.tag(tag);
        emit!(level, tag = %tag, "{}", message);
    }

    fn log_with_error(
        &self,
        level: LogLevel,
        tag: &str,
        message: &str,
        error: &(dyn StdError + 'static),
    ) {
        let tag = self.tag(tag);
        emit!(level, tag = %tag, error = %error, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    #[derive(Debug, Clone)]
    struct Captured {
        level: tracing::Level,
        fields: HashMap<String, String>,
    }

    #[derive(Clone, Default)]
    struct CaptureLayer {
        events: Arc<Mutex<Vec<Captured>>>,
    }

    #[derive(Default)]
    struct FieldVisitor(HashMap<String, String>);

    impl Visit for FieldVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0.insert(field.name().to_string(), format!("{:?}", value));
        }
    }

    impl<S: Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = FieldVisitor::default();
            event.record(&mut visitor);
            self.events.lock().unwrap().push(Captured {
                level: *event.metadata().level(),
                fields: visitor.0,
            });
        }
    }

    fn capture(f: impl FnOnce()) -> Vec<Captured> {
        let layer = CaptureLayer::default();
        let events = layer.events.clone();
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, f);
        let captured = events.lock().unwrap().clone();
        captured
    }

    #[test]
    fn test_forwards_level_tag_and_message() {
        let events = capture(|| {
            let logger = TracingLogger::new();
            logger.warn("Sync", "slow request");
            logger.debug("Sync", "retrying");
        });

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].level, tracing::Level::WARN);
        assert_eq!(events[0].fields["tag"], "Sync");
        assert_eq!(events[0].fields["message"], "slow request");
        assert_eq!(events[1].level, tracing::Level::DEBUG);
    }

    #[test]
    fn test_applies_tag_prefix() {
        let events = capture(|| {
            TracingLogger::with_tag_prefix("fore.").info("Main", "started");
        });

        assert_eq!(events[0].fields["tag"], "fore.Main");
    }

    #[test]
    fn test_records_error_field() {
        let error = std::io::Error::new(std::io::ErrorKind::Other, "bad disk");
        let events = capture(|| {
            TracingLogger::new().log_with_error(LogLevel::Error, "Io", "write failed", &error);
        });

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, tracing::Level::ERROR);
        assert_eq!(events[0].fields["error"], "bad disk");
        assert_eq!(events[0].fields["message"], "write failed");
    }
}

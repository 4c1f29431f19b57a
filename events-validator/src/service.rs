//! The validation stage itself: one message in, exactly one emission out.

use std::path::Path;

use anyhow::Result;
use common_telemetry::{Channel, Emission, Event, PipelineError, RouteSink};
use metrics::counter;
use tracing::{debug, error, info, warn};

use crate::config::ValidatorConfig;
use crate::engine::{ValidationEngine, ValidationReport};
use crate::metrics_const::{
    INVALID_EVENTS_TOTAL_COUNTER, MALFORMED_EVENTS_TOTAL_COUNTER, SKIPPED_EVENTS_TOTAL_COUNTER,
    UNEXPECTED_FAILURES_TOTAL_COUNTER, VALID_EVENTS_TOTAL_COUNTER,
};
use crate::resolver::resolve_schema_path;
use crate::schemas::SchemaSource;
use crate::source::EventSource;

/// Schema validation stage.
///
/// Per message, the terminal outcomes are:
/// - payload never parsed → raw message to the malformed channel;
/// - no schema artifact for the event → marked skipped, success channel
///   (an unknown event type must never block the pipeline);
/// - document valid → marked success, success channel;
/// - document invalid → failed channel with the first violation's field
///   pointer; the document itself stays unmarked (annotation is a
///   downstream consumer's responsibility);
/// - any other fault → untouched event to the error channel with the
///   fault's message.
///
/// Every outcome is exactly one emission; only sink faults propagate.
pub struct EventsValidator<S, V> {
    config: ValidatorConfig,
    schemas: S,
    engine: V,
}

impl<S: SchemaSource, V: ValidationEngine> EventsValidator<S, V> {
    pub fn new(config: ValidatorConfig, schemas: S, engine: V) -> Self {
        Self {
            config,
            schemas,
            engine,
        }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Process one message end to end.
    pub fn process<Src, R>(&self, source: &Src, sink: &R) -> Result<(), PipelineError>
    where
        Src: EventSource + ?Sized,
        R: RouteSink + ?Sized,
    {
        let mut event = match source.event() {
            Ok(event) => event,
            Err(e) => {
                warn!(error = %e, "malformed payload, routing the raw message");
                counter!(MALFORMED_EVENTS_TOTAL_COUNTER).increment(1);
                sink.emit(
                    Channel::Malformed,
                    Emission::Raw {
                        payload: source.message().to_string(),
                        diagnostic: Some(e.to_string()),
                    },
                )?;
                return Ok(());
            }
        };

        let schema_path = resolve_schema_path(
            &event,
            &self.config.telemetry_schema_path,
            &self.config.summary_schema_path,
        );

        if !self.schemas.exists(&schema_path) {
            info!(
                mid = event.mid().unwrap_or_default(),
                schema = %schema_path.display(),
                "no schema for event, skipping validation"
            );
            counter!(SKIPPED_EVENTS_TOTAL_COUNTER).increment(1);
            event.mark_skipped();
            sink.emit(Channel::Success, Emission::Event(event))?;
            return Ok(());
        }

        match self.validate(&event, &schema_path) {
            Ok(report) if report.is_success() => {
                debug!(mid = event.mid().unwrap_or_default(), "validation success");
                counter!(VALID_EVENTS_TOTAL_COUNTER).increment(1);
                event.mark_success();
                sink.emit(Channel::Success, Emission::Event(event))?;
            }
            Ok(report) => {
                let pointer = report.first_pointer().unwrap_or_default().to_string();
                warn!(
                    mid = event.mid().unwrap_or_default(),
                    pointer = %pointer,
                    "validation failed"
                );
                counter!(INVALID_EVENTS_TOTAL_COUNTER).increment(1);
                // The document goes out unmarked; failure annotation is the
                // downstream consumer's call.
                sink.emit(
                    Channel::Failed,
                    Emission::Annotated {
                        event,
                        info: format!("Invalid field:{pointer}"),
                    },
                )?;
            }
            Err(e) => {
                error!(
                    error = ?e,
                    mid = event.mid().unwrap_or_default(),
                    "unexpected failure, passing the event through to the error channel"
                );
                counter!(UNEXPECTED_FAILURES_TOTAL_COUNTER).increment(1);
                sink.emit(
                    Channel::Error,
                    Emission::Annotated {
                        event,
                        info: format!("{e:#}"),
                    },
                )?;
            }
        }

        Ok(())
    }

    fn validate(&self, event: &Event, schema_path: &Path) -> Result<ValidationReport> {
        let schema = self.schemas.load(schema_path)?;
        self.engine.validate(&schema, &event.to_value())
    }
}

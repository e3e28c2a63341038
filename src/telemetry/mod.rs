pub mod recorder;

pub use recorder::{TelemetryRecord, TelemetrySink, TelemetryWriter};

use log::{debug, info};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// Call once at startup of a binary or test that embeds the crate; the library never calls it
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info) // Default level
            .filter_module("kinometa", log::LevelFilter::Debug) // More verbose for our crate
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .init();

        info!("Logging system initialized");
    });
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log the outcome of normalizing a single payload
    pub fn normalized(kind: &str, provider_id: Option<i64>, produced: bool) {
        match (provider_id, produced) {
            (Some(id), true) => debug!("Normalize: {} #{} mapped", kind, id),
            (Some(id), false) => debug!("Normalize: {} #{} skipped, no usable data", kind, id),
            (None, true) => debug!("Normalize: {} mapped", kind),
            (None, false) => debug!("Normalize: {} skipped, payload absent", kind),
        }
    }

    /// Log entries discarded while normalizing a list
    pub fn dropped_entries(kind: &str, dropped: usize, total: usize) {
        if dropped > 0 {
            debug!(
                "Normalize: dropped {}/{} {} entries without usable data",
                dropped, total, kind
            );
        }
    }

    /// Log a field that was present but could not be interpreted
    pub fn unparseable_field(field: &str, value: &str) {
        debug!("Normalize: ignoring unparseable {} '{}'", field, value);
    }
}

//! Shared logging utilities for consistent tracing across both pages

use crate::types::PageId;
use chrono::{DateTime, Utc};
use tracing::{error, info};

/// Build the per-crate filter directive for a base level
fn level_filter(base_level: &str) -> String {
    format!("storefront={base_level},cart={base_level},shared={base_level}")
}

/// Initialize tracing subscriber with an optional log level
///
/// Safe to call more than once; later calls are ignored by the subscriber.
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let base_level = log_level.unwrap_or("info");
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_filter(base_level)));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for page-aware info logging
#[macro_export]
macro_rules! page_info {
    ($page_id:expr, $($arg:tt)*) => {
        tracing::info!(
            page = %$page_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for page-aware warning logging
#[macro_export]
macro_rules! page_warn {
    ($page_id:expr, $($arg:tt)*) => {
        tracing::warn!(
            page = %$page_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for page-aware error logging
#[macro_export]
macro_rules! page_error {
    ($page_id:expr, $($arg:tt)*) => {
        tracing::error!(
            page = %$page_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for page-aware debug logging
#[macro_export]
macro_rules! page_debug {
    ($page_id:expr, $($arg:tt)*) => {
        tracing::debug!(
            page = %$page_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(page_id: &PageId, details: &str) {
    info!(
        page = %page_id,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(page_id: &PageId, reason: &str) {
    info!(
        page = %page_id,
        timestamp = format_timestamp(),
        "🛑 Leaving page: {}",
        reason
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(page_id: &PageId, context: &str, error: &dyn std::fmt::Display) {
    error!(
        page = %page_id,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(page_id: &PageId, message: &str) {
    info!(
        page = %page_id,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}

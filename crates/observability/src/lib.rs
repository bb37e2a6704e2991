//! Tracing and logging (shared setup).

/// Initialize process-wide observability (tracing/logging).
///
/// Output format comes from `LOG_FORMAT` (`json` by default, `pretty` for
/// human-readable lines). This is safe to call multiple times; subsequent calls
/// become no-ops.
pub fn init() {
    tracing::init(tracing::LogFormat::from_env());
}

/// Tracing configuration (filters, layers).
pub mod tracing;

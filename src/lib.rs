pub mod spatial;

// ============================================================================
// Profiling Macros
// ============================================================================

/// Log kernel statistics only when the perf_stats feature is enabled.
///
/// Used by the pathfinder and the visibility engine to report search sizes
/// and marked-cell counts. When the perf_stats feature is disabled, this
/// macro compiles to nothing - zero runtime cost.
///
/// # Example
/// ```ignore
/// profile_log!("[PATHFINDING] {} nodes allocated", arena.len());
/// ```
///
/// # Zero-Cost Abstraction
/// When compiled without the `perf_stats` feature, this expands to an empty block.
/// Even the arguments (e.g., `arena.len()`) are not evaluated.
#[macro_export]
#[cfg(feature = "perf_stats")]
macro_rules! profile_log {
    ($($arg:tt)*) => {
        bevy::prelude::debug!($($arg)*);
    };
}

#[macro_export]
#[cfg(not(feature = "perf_stats"))]
macro_rules! profile_log {
    ($($arg:tt)*) => {};
}

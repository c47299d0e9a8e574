//! Application state for the HTTP server.

use ep_core::SuggestionLimits;

use crate::Config;

/// Shared application state passed to all handlers.
///
/// Holds only immutable settings; every request computes its result from
/// scratch.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    /// Bounds applied to every suggestion request
    pub limits: SuggestionLimits,
}

impl AppState {
    /// Create a new application state with the given suggestion limits.
    pub const fn new(limits: SuggestionLimits) -> Self {
        Self { limits }
    }

    pub const fn from_config(config: &Config) -> Self {
        Self::new(config.suggestion_limits())
    }
}

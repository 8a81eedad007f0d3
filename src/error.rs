//! Error types for the interaction core.
//!
//! Every variant is a synchronous precondition failure: the caller handed in
//! configuration that cannot produce a meaningful result. Absence cases
//! (unknown object id, nothing under the cursor) are expressed with `Option`
//! at the call sites, not through this enum.

use thiserror::Error;

/// Errors reported by camera, viewport and animation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ViewerError {
    /// Viewport dimensions must both be positive.
    #[error("viewport dimensions must be positive, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    /// Vertical field of view must lie strictly between 0 and 180 degrees.
    #[error("vertical field of view must be in (0, 180) degrees, got {0}")]
    InvalidFov(f32),

    /// A min/max pair (camera bounds, bounce limits) is inverted or collapsed.
    #[error("invalid range: min {min} must be less than max {max}")]
    InvalidRange { min: f32, max: f32 },
}

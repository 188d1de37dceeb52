//! Error types for the shadow study.

use thiserror::Error;

use crate::types::{CompassDirection, ObstacleOrientation};

/// Result type alias for operations in this crate.
pub type Result<T> = std::result::Result<T, ShadowError>;

#[derive(Debug, Error)]
pub enum ShadowError {
    /// The shadow-cast direction runs along the obstacle instead of across it.
    #[error(
        "obstacle running {orientation} cannot cast its shadow {direction} \
         (shadow direction must be perpendicular to the obstacle)"
    )]
    NotPerpendicular {
        orientation: ObstacleOrientation,
        direction: CompassDirection,
    },

    #[error("invalid obstacle height {value} m (must be positive)")]
    InvalidHeight { value: f64 },

    #[error("invalid latitude {value}° (must be between -90° and +90°)")]
    InvalidLatitude { value: f64 },

    #[error("invalid longitude {value}° (must be between -180° and +180°)")]
    InvalidLongitude { value: f64 },

    #[error("unrecognized seasonal event '{tag}'")]
    InvalidEvent { tag: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShadowError {
    /// True for errors caused by the study inputs rather than by the caller's code.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::NotPerpendicular { .. }
                | Self::InvalidHeight { .. }
                | Self::InvalidLatitude { .. }
                | Self::InvalidLongitude { .. }
                | Self::Config(_)
        )
    }
}

impl From<serde_json::Error> for ShadowError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

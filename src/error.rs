//! Error types for the outer surfaces (tuning, renderer, host)
//!
//! The simulation itself never fails; only setup can.

/// Top-level error for the game hosts
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Tuning error: {0}")]
    Tuning(#[from] TuningError),

    #[error("Renderer error: {0}")]
    Renderer(String),

    #[error("Host error: {0}")]
    Host(String),
}

/// Rejected balance values
#[derive(thiserror::Error, Debug)]
pub enum TuningError {
    #[error("Invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },

    #[error("shield_durability must be within 1..={max} (got {value})")]
    ShieldDurability { value: u8, max: u8 },

    #[error("{field} must be within [0, 1] (got {value})")]
    NotProbability { field: &'static str, value: f32 },

    #[error("projectile speed range is inverted ({min} > {max})")]
    InvertedSpeedRange { min: f32, max: f32 },

    #[error("shield pickup of radius {radius} does not fit a {width}x{height} screen")]
    PickupTooLarge { radius: f32, width: f32, height: f32 },
}

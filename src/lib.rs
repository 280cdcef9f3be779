//! Grid Snake - a fixed-tick arcade snake game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state, clock)
//! - `notifier`: Event observers (audio, logging)
//! - `renderer`: Read-only views of the simulation (text grid, browser canvas)
//! - `settings`: Persisted preferences and field/tuning configuration
//! - `tuning`: Data-driven game balance

pub mod error;
pub mod notifier;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod audio;

pub use error::{Result, SimError};
pub use settings::Settings;
pub use tuning::{SpeedStep, Tuning};

/// Game configuration constants
pub mod consts {
    /// Edge length of one grid cell (pixels)
    pub const CELL_SIZE: i32 = 20;
    /// Default play field (pixels)
    pub const FIELD_WIDTH: i32 = 400;
    pub const FIELD_HEIGHT: i32 = 400;

    /// Points per apple
    pub const APPLE_REWARD: u64 = 2;

    /// Ticks per second at the start of a session
    pub const BASE_TICK_RATE: u32 = 5;
    /// Faster rate once the score is above the first threshold
    pub const FIRST_SPEED_THRESHOLD: u64 = 10;
    pub const FIRST_SPEED_RATE: u32 = 9;
    /// Fastest rate once the score is above the second threshold
    pub const SECOND_SPEED_THRESHOLD: u64 = 25;
    pub const SECOND_SPEED_RATE: u32 = 12;

    /// Maximum ticks run per clock update to prevent spiral of death
    pub const MAX_CATCHUP_TICKS: u32 = 4;
    /// Longest frame the clock accepts (ms)
    pub const MAX_FRAME_MS: f64 = 250.0;
}

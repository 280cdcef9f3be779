//! Crate error type
//!
//! Gameplay outcomes (rejected turns, collisions) are not errors; they are
//! state transitions. Only construction and placement can fail.

use thiserror::Error;

/// Errors raised while building or running a session
#[derive(Debug, Error)]
pub enum SimError {
    /// Field dimensions must be positive multiples of the cell size
    #[error("invalid field {width}x{height} for cell size {cell_size}")]
    InvalidField {
        width: i32,
        height: i32,
        cell_size: i32,
    },

    /// Speed table is unusable (zero rate, unordered steps)
    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    /// Snake or apple do not fit the field they were given
    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    /// Every cell on the field is occupied by the snake
    #[error("no free cell for apple after {attempts} attempts ({occupied}/{capacity} cells occupied)")]
    PlacementExhausted {
        attempts: u32,
        occupied: usize,
        capacity: usize,
    },

    #[error("settings could not be parsed: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("settings could not be read: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SimError::InvalidField {
            width: 410,
            height: 400,
            cell_size: 20,
        };
        assert_eq!(err.to_string(), "invalid field 410x400 for cell size 20");

        let err = SimError::PlacementExhausted {
            attempts: 64,
            occupied: 4,
            capacity: 4,
        };
        assert!(err.to_string().contains("4/4"));

        let err = SimError::InvalidLayout("apple on snake".into());
        assert_eq!(err.to_string(), "invalid layout: apple on snake");
    }

    #[test]
    fn test_json_error_converts() {
        let parse = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: SimError = parse.into();
        assert!(matches!(err, SimError::Settings(_)));
    }
}

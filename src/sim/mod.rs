//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed ticks only
//! - Seeded RNG only
//! - Commands enter through `TickInput`, never mid-tick
//! - No rendering or platform dependencies

pub mod apple;
pub mod clock;
pub mod collision;
pub mod geometry;
pub mod input;
pub mod snake;
pub mod state;
pub mod tick;

pub use apple::{Apple, MAX_PLACEMENT_ATTEMPTS};
pub use clock::Clock;
pub use collision::{TerminalCause, check_acquisition, check_terminal, terminal_cause};
pub use geometry::{Cell, Field, Rect, intersects, rect_of};
pub use input::{InputArbiter, direction_for_key, pointer_candidates};
pub use snake::{Direction, Snake};
pub use state::{GameEvent, GamePhase, GameState, RngState};
pub use tick::{TickInput, tick};

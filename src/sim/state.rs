//! Session state
//!
//! Everything a renderer reads and everything needed to replay a session
//! lives here. The session owns the snake, the apple and the score; only
//! `tick` mutates them.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::apple::Apple;
use super::collision::TerminalCause;
use super::geometry::{Cell, Field};
use super::snake::Snake;
use crate::error::{Result, SimError};
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ticks are being applied (including before the first steer)
    Running,
    /// Session ended; terminal
    GameOver,
}

/// Things that happened during a tick, drained by the front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Apple eaten; `apple` is where the new one was placed
    AppleEaten { score: u64, apple: Cell },
    /// Score crossed a speed threshold
    SpeedChanged { interval_ms: u32 },
    /// Session ended
    GameOver { cause: TerminalCause, score: u64 },
}

/// RNG state wrapper for serialization
///
/// Each placement gets its own generator derived from the seed and a running
/// stream counter, so a snapshot restores the exact apple sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Generator for the next placement
    pub fn next_rng(&mut self) -> Pcg32 {
        let mixed = self
            .seed
            .wrapping_add(self.stream.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        self.stream += 1;
        Pcg32::seed_from_u64(mixed)
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng_state: RngState,
    pub field: Field,
    pub tuning: Tuning,
    pub snake: Snake,
    pub apple: Apple,
    pub score: u64,
    pub phase: GamePhase,
    /// Set together with `GamePhase::GameOver`
    pub cause: Option<TerminalCause>,
    /// Applied ticks
    pub time_ticks: u64,
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// New session with default field and tuning
    pub fn new(seed: u64) -> Result<Self> {
        Self::with_config(seed, Field::default(), Tuning::default())
    }

    /// New session: idle snake in the top-left cell, apple on a free cell
    pub fn with_config(seed: u64, field: Field, tuning: Tuning) -> Result<Self> {
        field.validate()?;
        tuning.validate()?;

        let snake = Snake::new(field.cell_at(0, 0));
        let mut rng_state = RngState::new(seed);
        let apple = Apple::randomize(&mut rng_state.next_rng(), &field, |p| snake.occupies(p))?;

        log::info!(
            "Session started: seed={} field={}x{} cell={}",
            seed,
            field.width,
            field.height,
            field.cell_size
        );

        Ok(Self {
            seed,
            rng_state,
            field,
            tuning,
            snake,
            apple,
            score: 0,
            phase: GamePhase::Running,
            cause: None,
            time_ticks: 0,
            events: Vec::new(),
        })
    }

    /// Session with an explicit snake and apple (scenarios, tests)
    ///
    /// Every segment and the apple must be grid cells of `field`, and the
    /// apple must not sit on the snake.
    pub fn from_parts(seed: u64, field: Field, tuning: Tuning, snake: Snake, apple: Apple) -> Result<Self> {
        field.validate()?;
        tuning.validate()?;
        check_layout(&field, &snake, &apple)?;
        Ok(Self {
            seed,
            rng_state: RngState::new(seed),
            field,
            tuning,
            snake,
            apple,
            score: 0,
            phase: GamePhase::Running,
            cause: None,
            time_ticks: 0,
            events: Vec::new(),
        })
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Milliseconds between ticks at the current score
    pub fn tick_interval_ms(&self) -> f64 {
        self.tuning.interval_ms(self.score)
    }

    /// Re-roll the apple onto a cell the snake does not occupy
    pub fn place_apple(&mut self) -> Result<()> {
        let snake = &self.snake;
        let apple = Apple::randomize(&mut self.rng_state.next_rng(), &self.field, |p| snake.occupies(p))?;
        log::debug!("Apple placed at ({}, {})", apple.position().x, apple.position().y);
        self.apple = apple;
        Ok(())
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Events queued since the last drain
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }
}

fn check_layout(field: &Field, snake: &Snake, apple: &Apple) -> Result<()> {
    if snake.is_empty() {
        return Err(SimError::InvalidLayout("snake has no segments".into()));
    }
    if snake.cell_size() != field.cell_size {
        return Err(SimError::InvalidLayout(format!(
            "snake cell size {} differs from field cell size {}",
            snake.cell_size(),
            field.cell_size
        )));
    }
    if let Some(cell) = snake.body().iter().find(|c| !field.fits(c)) {
        return Err(SimError::InvalidLayout(format!(
            "snake segment ({}, {}) is not a field cell",
            cell.pos.x, cell.pos.y
        )));
    }
    if !field.fits(&apple.cell()) {
        return Err(SimError::InvalidLayout(format!(
            "apple ({}, {}) is not a field cell",
            apple.position().x,
            apple.position().y
        )));
    }
    if snake.occupies(apple.position()) {
        return Err(SimError::InvalidLayout("apple is on the snake".into()));
    }
    Ok(())
}

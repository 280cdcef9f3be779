//! Fixed timestep simulation tick
//!
//! One tick: apply the latched heading, move the snake, resolve the apple,
//! then check for a terminal collision.

use serde::{Deserialize, Serialize};

use super::collision::{TerminalCause, check_acquisition, terminal_cause};
use super::snake::Direction;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Heading latched for this tick, if any
    pub direction: Option<Direction>,
}

impl TickInput {
    pub fn steer(direction: Direction) -> Self {
        Self {
            direction: Some(direction),
        }
    }
}

/// Advance the session by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Nothing changes once the session is over
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    if let Some(dir) = input.direction {
        state.snake.set_heading(dir);
    }
    state.snake.advance();

    if check_acquisition(&state.snake.head(), &state.apple) {
        let interval_before = state.tick_interval_ms();

        state.snake.grow();
        state.score += state.tuning.reward;

        if let Err(err) = state.place_apple() {
            log::warn!("{}", err);
            end_session(state, TerminalCause::BoardFull);
            return;
        }

        log::debug!("Apple eaten, score {}", state.score);
        state.push_event(GameEvent::AppleEaten {
            score: state.score,
            apple: state.apple.cell(),
        });

        let interval = state.tick_interval_ms();
        if interval < interval_before {
            log::info!("Speed up at score {}: {:.0} ms per tick", state.score, interval);
            state.push_event(GameEvent::SpeedChanged {
                interval_ms: interval.round() as u32,
            });
        }
    }

    if let Some(cause) = terminal_cause(&state.snake, &state.field) {
        end_session(state, cause);
    }
}

fn end_session(state: &mut GameState, cause: TerminalCause) {
    state.phase = GamePhase::GameOver;
    state.cause = Some(cause);
    log::info!(
        "Game over ({}) after {} ticks, score {}",
        cause.as_str(),
        state.time_ticks,
        state.score
    );
    state.push_event(GameEvent::GameOver {
        cause,
        score: state.score,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Apple, Cell, Field, Snake};
    use crate::tuning::Tuning;
    use glam::IVec2;

    fn scenario(snake: Snake, apple: Cell) -> GameState {
        let field = Field::new(200, 200, 20).unwrap();
        GameState::from_parts(1, field, Tuning::default(), snake, Apple::at(apple)).unwrap()
    }

    fn heading_right(cells: &[(i32, i32)]) -> Snake {
        let cells = cells.iter().map(|&(x, y)| Cell::new(x, y, 20));
        Snake::from_segments(cells, IVec2::new(20, 0)).unwrap()
    }

    #[test]
    fn test_idle_tick_does_not_move() {
        let mut state = GameState::new(12345).unwrap();
        let head = state.snake.head();
        tick(&mut state, &TickInput::default());
        assert_eq!(state.snake.head(), head);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_eat_apple() {
        let snake = heading_right(&[(40, 100), (20, 100)]);
        let mut state = scenario(snake, Cell::new(60, 100, 20));

        tick(&mut state, &TickInput::default());

        assert_eq!(state.score, 2);
        assert_eq!(state.snake.len(), 3);
        assert!(!state.snake.occupies(state.apple.position()));
        let events = state.drain_events();
        assert!(matches!(events[0], GameEvent::AppleEaten { score: 2, .. }));
        assert!(state.events().is_empty());
    }

    #[test]
    fn test_wall_ends_session() {
        let snake = heading_right(&[(180, 0)]);
        let mut state = scenario(snake, Cell::new(0, 100, 20));

        tick(&mut state, &TickInput::default());

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.cause, Some(TerminalCause::Wall));
        let events = state.drain_events();
        assert_eq!(
            events,
            vec![GameEvent::GameOver {
                cause: TerminalCause::Wall,
                score: 0
            }]
        );
    }

    #[test]
    fn test_no_mutation_after_game_over() {
        let snake = heading_right(&[(180, 0)]);
        let mut state = scenario(snake, Cell::new(0, 100, 20));
        tick(&mut state, &TickInput::default());
        assert!(state.is_over());
        state.drain_events();

        let snake = state.snake.clone();
        let apple = state.apple;
        let ticks = state.time_ticks;
        for dir in crate::sim::Direction::ALL {
            tick(&mut state, &TickInput::steer(dir));
        }
        assert_eq!(state.snake, snake);
        assert_eq!(state.apple, apple);
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.events().is_empty());
    }

    #[test]
    fn test_bite_own_body() {
        // Five in a row; a tight clockwise loop runs into the body
        let snake = heading_right(&[(100, 60), (80, 60), (60, 60), (40, 60), (20, 60)]);
        let mut state = scenario(snake, Cell::new(180, 180, 20));

        tick(&mut state, &TickInput::steer(Direction::Down));
        tick(&mut state, &TickInput::steer(Direction::Left));
        assert_eq!(state.phase, GamePhase::Running);
        tick(&mut state, &TickInput::steer(Direction::Up));
        assert_eq!(state.snake.head().pos, IVec2::new(80, 60));
        assert_eq!(state.cause, Some(TerminalCause::SelfCollision));
    }

    #[test]
    fn test_reversal_is_ignored() {
        let snake = heading_right(&[(60, 60), (40, 60), (20, 60)]);
        let mut state = scenario(snake, Cell::new(180, 180, 20));
        tick(&mut state, &TickInput::steer(Direction::Left));
        assert_eq!(state.snake.head().pos, IVec2::new(80, 60));
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_speed_change_event() {
        let snake = heading_right(&[(40, 100)]);
        let mut state = scenario(snake, Cell::new(60, 100, 20));
        state.score = 10;

        tick(&mut state, &TickInput::default());

        assert_eq!(state.score, 12);
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::SpeedChanged { interval_ms: 111 }));
    }

    #[test]
    fn test_filling_the_board_ends_session() {
        // 2x1 field: a stacked two-segment snake on the left cell, apple on the right
        let field = Field::new(40, 20, 20).unwrap();
        let snake = heading_right(&[(0, 0), (0, 0)]);
        let apple = Apple::at(Cell::new(20, 0, 20));
        let mut state = GameState::from_parts(3, field, Tuning::default(), snake, apple).unwrap();

        tick(&mut state, &TickInput::default());

        assert!(state.snake.occupies(IVec2::new(0, 0)));
        assert!(state.snake.occupies(IVec2::new(20, 0)));
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.score, 2);
        assert_eq!(state.cause, Some(TerminalCause::BoardFull));
        assert!(state.is_over());
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::GameOver {
                cause: TerminalCause::BoardFull,
                score: 2
            }]
        );
    }

    #[test]
    fn test_eating_with_room_left_keeps_running() {
        // 3x1 field: after the apple one cell is still free
        let field = Field::new(60, 20, 20).unwrap();
        let snake = heading_right(&[(0, 0)]);
        let apple = Apple::at(Cell::new(20, 0, 20));
        let mut state = GameState::from_parts(3, field, Tuning::default(), snake, apple).unwrap();

        tick(&mut state, &TickInput::default());

        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 2);
        assert!(!state.snake.occupies(state.apple.position()));
        assert!(matches!(state.apple.position().x, 0 | 40));
    }
}

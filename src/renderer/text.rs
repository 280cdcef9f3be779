//! Plain-text view of a session
//!
//! One character per cell, row by row, followed by a status line. Used by
//! the native binary and handy in test failure output.

use std::fmt::Write;

use crate::sim::{GamePhase, GameState};

pub const HEAD: char = '@';
pub const BODY: char = 'o';
pub const APPLE: char = '*';
pub const EMPTY: char = '.';

/// Draw the field as a character grid plus score/phase line
pub fn render_text(state: &GameState) -> String {
    let field = &state.field;
    let (cols, rows) = (field.columns(), field.rows());
    let mut grid = vec![vec![EMPTY; cols as usize]; rows as usize];

    let mut put = |x: i32, y: i32, ch: char| {
        let (col, row) = (x / field.cell_size, y / field.cell_size);
        if (0..cols).contains(&col) && (0..rows).contains(&row) && x >= 0 && y >= 0 {
            grid[row as usize][col as usize] = ch;
        }
    };

    put(state.apple.position().x, state.apple.position().y, APPLE);
    // Tail first so the head wins on shared cells
    for cell in state.snake.body().iter().skip(1).rev() {
        put(cell.pos.x, cell.pos.y, BODY);
    }
    let head = state.snake.head();
    put(head.pos.x, head.pos.y, HEAD);

    let mut out = String::with_capacity(((cols + 1) * (rows + 1)) as usize);
    for row in grid {
        out.extend(row);
        out.push('\n');
    }

    let phase = match (state.phase, state.cause) {
        (GamePhase::GameOver, Some(cause)) => format!("game over ({})", cause.as_str()),
        (GamePhase::GameOver, None) => "game over".to_string(),
        (GamePhase::Running, _) => "running".to_string(),
    };
    let _ = write!(out, "score {} | length {} | {}", state.score, state.snake.len(), phase);
    out
}

//! Canvas 2D renderer for the browser build
//!
//! Draws straight from `GameState` each frame; holds no game state of its own.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::sim::GameState;

const BACKGROUND: &str = "#C9E4C5";
const GRID_LINE: &str = "#B5CDA3";
const SNAKE_FILL: &str = "#ff6347";
const OUTLINE: &str = "#2d2d2d";
const APPLE_FILL: &str = "#2d2d2d";

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    /// Size the canvas to the field and grab its 2D context
    pub fn new(canvas: &HtmlCanvasElement, state: &GameState) -> Option<Self> {
        canvas.set_width(state.field.width as u32);
        canvas.set_height(state.field.height as u32);
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            width: state.field.width as f64,
            height: state.field.height as f64,
        })
    }

    pub fn render(&self, state: &GameState) {
        self.paint_field(state.field.cell_size as f64);
        self.paint_snake(state);
        self.paint_apple(state);
        if state.is_over() {
            self.paint_game_over();
        }
    }

    fn paint_field(&self, cell: f64) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(BACKGROUND);
        ctx.set_stroke_style_str(GRID_LINE);
        ctx.fill_rect(0.0, 0.0, self.width, self.height);

        ctx.begin_path();
        let mut x = 0.0;
        while x < self.width {
            ctx.move_to(x, 0.0);
            ctx.line_to(x, self.height);
            x += cell;
        }
        let mut y = 0.0;
        while y < self.height {
            ctx.move_to(0.0, y);
            ctx.line_to(self.width, y);
            y += cell;
        }
        ctx.stroke();
    }

    fn paint_snake(&self, state: &GameState) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(SNAKE_FILL);
        ctx.set_stroke_style_str(OUTLINE);
        for cell in state.snake.body() {
            let (x, y, s) = (cell.pos.x as f64, cell.pos.y as f64, cell.size as f64);
            ctx.fill_rect(x, y, s, s);
            ctx.stroke_rect(x, y, s, s);
        }
    }

    fn paint_apple(&self, state: &GameState) {
        let cell = state.apple.cell();
        let s = cell.size as f64;
        self.ctx.set_fill_style_str(APPLE_FILL);
        self.ctx.fill_rect(cell.pos.x as f64, cell.pos.y as f64, s, s);
    }

    fn paint_game_over(&self) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(OUTLINE);
        ctx.set_font("30px monospace");
        ctx.set_text_align("center");
        let _ = ctx.fill_text("game over", self.width / 2.0, self.height / 2.0);
    }
}

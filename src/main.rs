//! Grid Snake entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use grid_snake::Settings;
    use grid_snake::audio::AudioManager;
    use grid_snake::notifier::dispatch;
    use grid_snake::renderer::CanvasRenderer;
    use grid_snake::sim::{Clock, GameState, InputArbiter};

    /// Game instance holding all state
    struct Game {
        settings: Settings,
        state: GameState,
        clock: Clock,
        input: InputArbiter,
        renderer: CanvasRenderer,
        audio: AudioManager,
        score_label: Option<Element>,
        last_time: f64,
    }

    impl Game {
        /// Run due ticks and forward events to audio
        fn update(&mut self, time: f64) {
            let elapsed = if self.last_time > 0.0 { time - self.last_time } else { 0.0 };
            self.last_time = time;

            self.clock.update(&mut self.state, &mut self.input, elapsed);
            let events = self.state.drain_events();
            dispatch(&mut self.audio, &events);
        }

        fn render(&self) {
            self.renderer.render(&self.state);
            if let Some(label) = &self.score_label {
                label.set_text_content(Some(&self.state.score.to_string()));
            }
        }

        /// Fresh session; the old one is dropped, never reset in place
        fn restart(&mut self) {
            let seed = js_sys::Date::now() as u64;
            match GameState::with_config(seed, self.settings.field, self.settings.tuning.clone()) {
                Ok(state) => {
                    self.state = state;
                    self.clock = Clock::new();
                    self.input = InputArbiter::new();
                    self.last_time = 0.0;
                    log::info!("Game restarted with seed: {}", seed);
                }
                Err(err) => log::error!("Restart failed: {}", err),
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Grid Snake starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let settings = Settings::load();
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let state = GameState::with_config(seed, settings.field, settings.tuning.clone())
            .expect("Failed to start session");
        let renderer = CanvasRenderer::new(&canvas, &state).expect("no 2d context");
        let audio = AudioManager::new(settings.audio.clone());
        let score_label = document.query_selector("#score span").ok().flatten();

        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            settings,
            state,
            clock: Clock::new(),
            input: InputArbiter::new(),
            renderer,
            audio,
            score_label,
            last_time: 0.0,
        }));

        setup_input_handlers(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Grid Snake running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Keyboard
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                g.audio.resume();
                let key = event.key();
                match key.as_str() {
                    "Enter" | " " if g.state.is_over() => g.restart(),
                    "m" | "M" => {
                        let muted = g.settings.toggle_mute();
                        g.audio.set_muted(muted);
                        g.settings.save();
                        log::info!("Muted: {}", muted);
                    }
                    _ => {
                        let Game { state, input, .. } = &mut *g;
                        if grid_snake::sim::direction_for_key(&key).is_some() {
                            event.prevent_default();
                            input.submit_key(&state.snake, &key);
                        }
                    }
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse/touch click steers toward the pointer
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let pointer = Vec2::new(
                    event.client_x() as f32 - rect.left() as f32,
                    event.client_y() as f32 - rect.top() as f32,
                );
                let mut g = game.borrow_mut();
                g.audio.resume();
                let Game { state, input, .. } = &mut *g;
                input.submit_pointer(&state.snake, &state.field, pointer);
            });
            let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::time::{SystemTime, UNIX_EPOCH};

    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use grid_snake::Settings;
    use grid_snake::notifier::{LogNotifier, dispatch};
    use grid_snake::renderer::render_text;
    use grid_snake::sim::{Clock, Direction, GameState, InputArbiter};

    /// 60 Hz frames, like a browser animation loop
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Give up after five simulated minutes
    const MAX_FRAMES: u32 = 60 * 60 * 5;
    /// Chance per frame that the scripted player presses a key
    const PRESS_CHANCE: f64 = 0.05;

    /// Play one session with a seeded random key stream and print the result
    pub fn run(settings_path: Option<String>) -> grid_snake::Result<()> {
        let settings = match settings_path {
            Some(path) => Settings::load_from(path)?,
            None => Settings::default(),
        };
        let seed = settings.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default()
        });

        let mut state = GameState::with_config(seed, settings.field, settings.tuning.clone())?;
        let mut input = InputArbiter::new();
        let mut clock = Clock::new();
        let mut notifier = LogNotifier;
        let mut keys = Pcg32::seed_from_u64(seed.rotate_left(17));

        for _ in 0..MAX_FRAMES {
            if clock.is_halted() {
                break;
            }
            if keys.random_bool(PRESS_CHANCE) {
                let dir = Direction::ALL[keys.random_range(0..Direction::ALL.len())];
                input.submit(&state.snake, dir);
            }
            clock.update(&mut state, &mut input, FRAME_MS);
            dispatch(&mut notifier, &state.drain_events());
        }

        println!("{}", render_text(&state));
        println!("seed {} | ticks {}", seed, state.time_ticks);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Grid Snake (native) starting...");

    if let Err(err) = headless::run(std::env::args().nth(1)) {
        log::error!("{}", err);
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

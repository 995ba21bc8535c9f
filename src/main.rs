//! Speaker Cam entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use speaker_cam::consts::*;
    use speaker_cam::input::{Direction, InputState};
    use speaker_cam::renderer::Renderer;
    use speaker_cam::sim::{GamePhase, GameState, tick};
    use speaker_cam::{HighScore, Settings};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: Option<Renderer>,
        input: InputState,
        accumulator: f64,
        last_time: f64,
        high_score: HighScore,
        settings: Settings,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
        // Track phase so the high score is persisted once per run
        last_phase: GamePhase,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                state: GameState::new(seed),
                renderer: None,
                input: InputState::new(),
                accumulator: 0.0,
                last_time: 0.0,
                high_score: HighScore::load(),
                settings: Settings::load(),
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
                last_phase: GamePhase::Playing,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt_ms: f64, time: f64) {
            let dt = dt_ms.min(100.0);
            self.accumulator += dt;

            // Input pulses expire against the wall clock, so sample with it
            let input = self.input.sample(js_sys::Date::now());
            let mut substeps = 0;
            while self.accumulator >= TICK_MS && substeps < MAX_SUBSTEPS {
                tick(&mut self.state, &input);
                self.accumulator -= TICK_MS;
                substeps += 1;
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
            let oldest = self.frame_times[self.frame_index];
            if oldest > 0.0 {
                let elapsed = time - oldest;
                if elapsed > 0.0 {
                    self.fps = (60_000.0 / elapsed).round() as u32;
                }
            }

            // Persist the high score on the transition into GameOver
            if self.state.phase != self.last_phase {
                if self.state.phase == GamePhase::GameOver {
                    if self.high_score.record(self.state.score) {
                        self.high_score.save();
                    }
                    log::info!("Game over at score {}", self.state.score.floor());
                }
                self.last_phase = self.state.phase;
            }
        }

        /// Render the current frame
        fn render(&self) {
            if let Some(ref renderer) = self.renderer {
                renderer.render(&self.state);
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            if let Some(el) = document.get_element_by_id("lives") {
                let hearts = "❤️".repeat(self.state.lives as usize);
                el.set_text_content(Some(&format!("Lives: {hearts}")));
            }

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&format!("Score: {}", self.state.score.floor() as u64)));
            }

            if let Some(el) = document.get_element_by_id("fps") {
                if self.settings.show_fps {
                    let _ = el.set_attribute("class", "");
                    el.set_text_content(Some(&self.fps.to_string()));
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }

            // Show/hide game over panel
            if let Some(el) = document.get_element_by_id("game-over") {
                if self.state.phase == GamePhase::GameOver {
                    let _ = el.set_attribute("class", "");
                    if let Some(score_el) = document.get_element_by_id("final-score") {
                        score_el.set_text_content(Some(&format!(
                            "Your score: {}",
                            self.state.score.floor() as u64
                        )));
                    }
                    if let Some(hs_el) = document.get_element_by_id("high-score") {
                        hs_el.set_text_content(Some(&format!(
                            "High score: {}",
                            self.high_score.points.floor() as u64
                        )));
                    }
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }

        /// Reset game state for a new run
        fn restart(&mut self, seed: u64) {
            self.state = GameState::new(seed);
            self.accumulator = 0.0;
            self.input.clear();
            self.last_phase = GamePhase::Playing;
            log::info!("Game restarted with seed: {}", seed);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Speaker Cam starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(PLAYFIELD_WIDTH as u32);
        canvas.set_height(PLAYFIELD_HEIGHT as u32);

        let seed = js_sys::Date::now() as u64;
        let mut game = Game::new(seed);
        let swipe_enabled = game.settings.swipe_controls;
        match Renderer::new(&canvas, game.settings.reduced_flash) {
            Ok(renderer) => game.renderer = Some(renderer),
            Err(e) => log::error!("Failed to create renderer: {:?}", e),
        }

        let game = Rc::new(RefCell::new(game));
        log::info!("Game initialized with seed: {}", seed);

        setup_keyboard(game.clone());
        setup_hold_buttons(&document, game.clone());
        if swipe_enabled {
            setup_swipe(&document, game.clone());
        }
        setup_restart_button(&document, game.clone());
        prevent_touch_scroll(&document);

        request_animation_frame(game);

        log::info!("Speaker Cam running!");
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                // Held keys do nothing once the run is over
                if g.state.phase == GamePhase::GameOver {
                    return;
                }
                if g.input.key_down(&event.key()) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().input.key_up(&event.key()) {
                    event.prevent_default();
                }
            });
            let _ = web_sys::window()
                .unwrap()
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Press-and-hold directional buttons, with mouse fallbacks for desktop
    fn setup_hold_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        let buttons = [
            ("up-button", Direction::Up),
            ("down-button", Direction::Down),
            ("left-button", Direction::Left),
            ("right-button", Direction::Right),
        ];

        for (id, dir) in buttons {
            let Some(button) = document.get_element_by_id(id) else {
                log::warn!("Missing control button #{id}");
                continue;
            };

            for event_name in ["touchstart", "mousedown"] {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                    event.prevent_default();
                    game.borrow_mut().input.press(dir);
                });
                let _ = button
                    .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
                closure.forget();
            }

            for event_name in ["touchend", "touchcancel", "mouseup", "mouseleave"] {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                    event.prevent_default();
                    game.borrow_mut().input.release(dir);
                });
                let _ = button
                    .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    /// Swipe anywhere on the game container pulses a pan direction
    fn setup_swipe(document: &Document, game: Rc<RefCell<Game>>) {
        let Some(container) = document.get_element_by_id("game-container") else {
            log::warn!("Missing #game-container, swipe controls disabled");
            return;
        };

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.changed_touches().get(0) {
                    game.borrow_mut()
                        .input
                        .begin_swipe(touch.screen_x() as f32, touch.screen_y() as f32);
                }
            });
            let _ = container
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.changed_touches().get(0) {
                    let now = js_sys::Date::now();
                    game.borrow_mut().input.end_swipe(
                        touch.screen_x() as f32,
                        touch.screen_y() as f32,
                        now,
                    );
                }
            });
            let _ = container
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(document: &Document, game: Rc<RefCell<Game>>) {
        if let Some(btn) = document.get_element_by_id("restart-button") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let seed = js_sys::Date::now() as u64;
                game.borrow_mut().restart(seed);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Keep touch drags on the page from scrolling it while playing
    fn prevent_touch_scroll(document: &Document) {
        let opts = web_sys::AddEventListenerOptions::new();
        opts.set_passive(false);
        let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
            event.prevent_default();
        });
        let _ = document.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
        closure.forget();
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

            let dt = if g.last_time > 0.0 {
                time - g.last_time
            } else {
                TICK_MS
            };
            g.last_time = time;

            g.update(dt, time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use speaker_cam::consts::*;
    use speaker_cam::sim::{GamePhase, GameState, TickInput, tick};

    env_logger::init();
    log::info!("Speaker Cam (native) starting...");

    // Headless demo: a simple chase policy pans the frame toward the speaker
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = GameState::new(seed);

    for _ in 0..60 * 30 {
        let frame_cx = state.frame.x + state.frame.width / 2.0;
        let frame_cy = state.frame.y + state.frame.height / 2.0;
        let speaker_cx = state.speaker.rect.x + state.speaker.rect.width / 2.0;
        let speaker_cy = state.speaker.rect.y + state.speaker.rect.height / 2.0;
        let input = TickInput {
            up: speaker_cy < frame_cy - CAMERA_SPEED,
            down: speaker_cy > frame_cy + CAMERA_SPEED,
            left: speaker_cx < frame_cx - CAMERA_SPEED,
            right: speaker_cx > frame_cx + CAMERA_SPEED,
        };
        tick(&mut state, &input);
        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    log::info!(
        "Demo run finished: score {}, lives left {}",
        state.score.floor(),
        state.lives
    );
    println!("Run with `trunk serve` for the playable web version.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

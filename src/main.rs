//! Canvas Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use canvas_pong::consts::MAX_FRAME_DT;
    use canvas_pong::renderer::canvas::CanvasSurface;
    use canvas_pong::renderer::draw_frame;
    use canvas_pong::sim::{GameEvent, GameState, Scores, TickInput, tick};
    use canvas_pong::tuning::{DeviceTier, Tuning};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: CanvasSurface,
        input: TickInput,
        last_time: f64,
    }

    /// Viewport class from the window width; resolved once at startup
    fn classify_device(viewport_width: f32) -> DeviceTier {
        if viewport_width <= 600.0 {
            DeviceTier::Mobile
        } else if viewport_width <= 1024.0 {
            DeviceTier::Tablet
        } else {
            DeviceTier::Desktop
        }
    }

    fn viewport_size(window: &web_sys::Window) -> (f32, f32) {
        let w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32;
        let h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32;
        (w, h)
    }

    /// Set the CSS display property of an element by id
    fn set_display(document: &Document, id: &str, value: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            if let Ok(el) = el.dyn_into::<web_sys::HtmlElement>() {
                let _ = el.style().set_property("display", value);
            }
        }
    }

    /// Push the current score pair into the score element
    fn display_score(scores: &Scores) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(el) = document.get_element_by_id("score") {
            el.set_inner_html(&format!(
                "<div style=\"color:red\">{}</div> : <div style=\"color:blue\">{}</div>",
                scores.bot, scores.player
            ));
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Canvas Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Canvas fills the viewport
        let (width, height) = viewport_size(&window);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let tier = classify_device(width);
        let tuning = Tuning::load(tier);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("context lookup failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(width, height, tuning, seed),
            surface: CanvasSurface::new(ctx),
            input: TickInput::default(),
            last_time: 0.0,
        }));

        log::info!(
            "Game initialized: {}x{}, {} tier, seed {}",
            width,
            height,
            tier.as_str(),
            seed
        );

        setup_keyboard(game.clone());
        setup_touch_controls(&document, game.clone());
        setup_play_button(&document, game.clone());
        setup_resize(&canvas, game.clone());

        // Start the frame loop; the sim stays frozen until the play button
        // opens the run gate.
        request_animation_frame(game);

        log::info!("Canvas Pong running!");
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" | "a" => g.input.move_left = true,
                    "ArrowRight" | "d" => g.input.move_right = true,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" | "a" => g.input.move_left = false,
                    "ArrowRight" | "d" => g.input.move_right = false,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// On-screen press/release regions for touch devices.
    ///
    /// Press and release, not click: the intent flag stays up for as long as
    /// the finger stays down, exactly like a held key.
    fn setup_touch_controls(document: &Document, game: Rc<RefCell<Game>>) {
        let bindings: [(&str, fn(&mut TickInput, bool)); 2] = [
            ("control-left", |input, down| input.move_left = down),
            ("control-right", |input, down| input.move_right = down),
        ];

        for (id, apply) in bindings {
            let Some(el) = document.get_element_by_id(id) else {
                log::warn!("Touch control #{id} not found");
                continue;
            };

            {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                    event.prevent_default();
                    apply(&mut game.borrow_mut().input, true);
                });
                let _ = el.add_event_listener_with_callback(
                    "touchstart",
                    closure.as_ref().unchecked_ref(),
                );
                closure.forget();
            }

            {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                    event.prevent_default();
                    apply(&mut game.borrow_mut().input, false);
                });
                let _ = el.add_event_listener_with_callback(
                    "touchend",
                    closure.as_ref().unchecked_ref(),
                );
                closure.forget();
            }
        }
    }

    fn setup_play_button(document: &Document, game: Rc<RefCell<Game>>) {
        if let Some(btn) = document.get_element_by_id("play-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut g = game.borrow_mut();
                g.state.start();
                display_score(&g.state.scores);
                drop(g);

                let document = web_sys::window().unwrap().document().unwrap();
                set_display(&document, "play-btn", "none");
                set_display(&document, "info", "none");
                set_display(&document, "control-left", "block");
                set_display(&document, "control-right", "block");

                log::info!("Game started");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let window = web_sys::window().unwrap();
            let (width, height) = viewport_size(&window);
            canvas.set_width(width as u32);
            canvas.set_height(height as u32);
            // Positions are not re-clamped here; the next tick handles it
            game.borrow_mut().state.resize(width, height);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
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

            // Delta since the previous callback, in seconds. The first frame
            // has no previous timestamp, so it advances nothing.
            let dt = if g.last_time > 0.0 {
                (((time - g.last_time) / 1000.0) as f32).min(MAX_FRAME_DT)
            } else {
                0.0
            };
            g.last_time = time;

            let input = g.input;
            let events = tick(&mut g.state, &input, dt);
            for event in events {
                match event {
                    GameEvent::PlayerScored => log::info!("Player scores"),
                    GameEvent::BotScored => log::info!("Bot scores"),
                }
                display_score(&g.state.scores);
            }

            let Game {
                ref mut surface,
                ref state,
                ..
            } = *g;
            draw_frame(surface, state);
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
    use canvas_pong::sim::{GameState, TickInput, tick};
    use canvas_pong::tuning::{DeviceTier, Tuning};

    env_logger::init();
    log::info!("Canvas Pong (native) starting...");
    log::info!("Native mode is a headless smoke run - build for wasm32 to play");

    // Let the bot rally against an idle player for a simulated minute
    let tuning = Tuning::load(DeviceTier::Desktop);
    let mut state = GameState::new(800.0, 600.0, tuning, 42);
    state.start();

    let input = TickInput::default();
    for _ in 0..3600 {
        tick(&mut state, &input, 1.0 / 60.0);
    }

    log::info!(
        "After 60 simulated seconds: bot {} / player {}",
        state.scores.bot,
        state.scores.player
    );
    println!("bot {} : {} player", state.scores.bot, state.scores.player);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

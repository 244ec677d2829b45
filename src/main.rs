//! Coin Rush entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{FocusEvent, KeyboardEvent, MouseEvent};

    use coin_rush::platform::web::{DomFeedback, PerformanceTime, ids};
    use coin_rush::{Feedback, Game, Settings};

    // Hooks into the page's renderer; both are optional
    #[wasm_bindgen(inline_js = "
        export function render_scene(json) {
            if (typeof window.renderScene === 'function') {
                window.renderScene(json);
            }
        }

        export function resize_viewport(width, height) {
            if (typeof window.resizeViewport === 'function') {
                window.resizeViewport(width, height);
            }
        }
    ")]
    extern "C" {
        fn render_scene(json: &str);
        fn resize_viewport(width: f64, height: f64);
    }

    /// Game plus the page it talks to
    struct App {
        game: Game<PerformanceTime>,
        feedback: DomFeedback,
    }

    impl App {
        fn frame(&mut self) {
            self.game.frame(&mut self.feedback);
            match self.game.snapshot().to_json() {
                Ok(json) => render_scene(&json),
                Err(e) => log::error!("Scene snapshot failed: {e}"),
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Coin Rush starting...");

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        let settings = Settings::load();
        let seed = settings.seed.unwrap_or(js_sys::Date::now() as u64);
        let game = Game::new(&settings, seed, PerformanceTime::new());
        let mut feedback = DomFeedback::new(&document, settings.effective_volume());
        feedback.refresh_hud(&game.hud());

        log::info!("Game initialized with seed: {}", seed);

        let app = Rc::new(RefCell::new(App { game, feedback }));

        setup_keyboard(&window, app.clone());
        setup_start_button(&document, app.clone());
        setup_auto_pause(&window, app.clone());
        setup_resize(&window);

        // Start game loop
        request_animation_frame(app);

        log::info!("Coin Rush running!");
    }

    fn setup_keyboard(window: &web_sys::Window, app: Rc<RefCell<App>>) {
        for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.repeat() && pressed {
                    return;
                }
                if app.borrow_mut().game.key(&event.code(), pressed) {
                    // Arrow keys would otherwise scroll the page
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_start_button(document: &web_sys::Document, app: Rc<RefCell<App>>) {
        let Some(btn) = document.get_element_by_id(ids::START_BUTTON) else {
            log::warn!("Missing start button #{}", ids::START_BUTTON);
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let mut app = app.borrow_mut();
            let app = &mut *app;
            app.feedback.unlock_audio();
            app.game.start(&mut app.feedback);
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_auto_pause(window: &web_sys::Window, app: Rc<RefCell<App>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: FocusEvent| {
            let mut app = app.borrow_mut();
            let app = &mut *app;
            app.game.blur(&mut app.feedback);
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_resize(window: &web_sys::Window) {
        let notify = |window: &web_sys::Window| {
            let width = window.inner_width().ok().and_then(|v| v.as_f64());
            let height = window.inner_height().ok().and_then(|v| v.as_f64());
            if let (Some(w), Some(h)) = (width, height) {
                resize_viewport(w, h);
            }
        };
        notify(window);

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if let Some(window) = web_sys::window() {
                notify(&window);
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        app.borrow_mut().frame();
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Coin Rush (native) starting...");
    log::info!("Native mode runs a headless autopilot session - use `trunk serve` to play");

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(1);
    let seconds: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(120);

    run_headless(seed, seconds);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Let the autopilot play a whole session at a fixed 60 Hz
#[cfg(not(target_arch = "wasm32"))]
fn run_headless(seed: u64, seconds: u32) {
    use coin_rush::feedback::{RecordingFeedback, Tone};
    use coin_rush::platform::ManualTime;
    use coin_rush::sim::GamePhase;
    use coin_rush::{Game, Settings};

    const FRAME_MS: f64 = 1000.0 / 60.0;

    let settings = Settings::load();
    let time = ManualTime::new(0.0);
    let mut game = Game::new(&settings, seed, time.clone());
    let mut feedback = RecordingFeedback::new();

    game.autopilot = true;
    game.start(&mut feedback);

    let frames = seconds as u64 * 60;
    for _ in 0..frames {
        time.advance(FRAME_MS);
        game.frame(&mut feedback);
        if game.state.phase == GamePhase::Won {
            break;
        }
    }

    let hud = game.hud();
    println!("\nSeed {seed}: {:?} after {}s", game.state.phase, hud.time_text());
    println!(
        "  score {}, coins left {}, pickups {}, obstacle hits {}",
        hud.score,
        game.state.coins.len(),
        feedback.count(Tone::Pickup),
        feedback.count(Tone::Hit),
    );
    if let Some(message) = feedback.messages.last() {
        println!("  {message}");
    }
}

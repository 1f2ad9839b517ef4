//! Arc Ball entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{
        CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, HtmlImageElement,
        KeyboardEvent, MouseEvent, TouchEvent,
    };

    use arc_ball::GameConfig;
    use arc_ball::audio::{AudioManager, SoundEffect};
    use arc_ball::platform::{Action, FrameScheduler, InputEvent, Session, map_input};
    use arc_ball::renderer::draw_frame;
    use arc_ball::sim::{Command, GameEvent, LoopControl};

    const CANVAS_ID: &str = "gameCanvas";
    const BALL_IMAGE_SRC: &str = "ball.png";

    /// Game instance holding all state
    struct Game {
        session: Session,
        frames: FrameScheduler,
        ctx: CanvasRenderingContext2d,
        ball_image: Option<HtmlImageElement>,
        audio: AudioManager,
    }

    impl Game {
        fn draw(&mut self) {
            draw_frame(&mut self.ctx, &self.session.state, self.ball_image.as_ref());
        }

        /// Forward simulation events to sound and DOM overlays
        fn dispatch_events(&mut self) {
            for event in self.session.state.drain_events() {
                if let Some(effect) = SoundEffect::for_event(&event) {
                    self.audio.play(effect);
                }
                match event {
                    GameEvent::ShowSummary { score } => show_summary(score),
                    GameEvent::HideSummary => hide_summary(),
                    _ => {}
                }
            }
        }
    }

    /// Read the optional `data-config` JSON and size the arena to the canvas
    fn load_config(canvas: &HtmlCanvasElement) -> GameConfig {
        let mut config = match canvas.get_attribute("data-config") {
            Some(json) => GameConfig::from_json(&json).unwrap_or_else(|e| {
                log::warn!("{} - using defaults", e);
                GameConfig::default()
            }),
            None => GameConfig::default(),
        };

        config.width = canvas.width() as f32;
        config.height = canvas.height() as f32;
        if let Err(e) = config.validate() {
            log::warn!("{} - using default arena", e);
            config = GameConfig::default();
            canvas.set_width(config.width as u32);
            canvas.set_height(config.height as u32);
        }
        config
    }

    /// Load the ball sprite; a failed load leaves an image that draws nothing
    async fn load_image(src: &str) -> Option<HtmlImageElement> {
        let image = HtmlImageElement::new().ok()?;
        image.set_src(src);
        if let Err(e) = JsFuture::from(image.decode()).await {
            log::warn!("Failed to load {}: {:?}", src, e);
        }
        Some(image)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Arc Ball starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let config = load_config(&canvas);
        log::info!("Arena {}x{}", config.width, config.height);

        let ball_image = load_image(BALL_IMAGE_SRC).await;

        let game = Rc::new(RefCell::new(Game {
            session: Session::new(config),
            frames: FrameScheduler::new(),
            ctx,
            ball_image,
            audio: AudioManager::new(),
        }));

        setup_input_handlers(&canvas, game.clone());
        setup_buttons(&document, game.clone());
        setup_auto_pause(&document, game.clone());

        // Start game loop
        request_frame(game);

        log::info!("Arc Ball running!");
    }

    /// Apply an action and re-arm the loop if it needs to run
    fn handle_action(game: &Rc<RefCell<Game>>, action: Action) {
        let control = {
            let mut g = game.borrow_mut();
            let seed = js_sys::Date::now() as u64;
            let control = g.session.handle(action, seed);
            if action == Action::Game(Command::Reset) {
                g.draw();
            }
            g.dispatch_events();
            control
        };

        if control == LoopControl::Continue {
            request_frame(game.clone());
        }
    }

    fn map_and_handle(game: &Rc<RefCell<Game>>, event: InputEvent) {
        let action = map_input(&game.borrow().session.state.config, &event);
        if let Some(action) = action {
            handle_action(game, action);
        }
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Keyboard
        {
            let game = game.clone();
            let Some(window) = web_sys::window() else { return };
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                map_and_handle(&game, InputEvent::KeyDown { key: &key });
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse click
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                map_and_handle(&game, InputEvent::Click { button: event.button() });
            });
            let _ = canvas
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default(); // No scroll/zoom on the play surface
                map_and_handle(&game, InputEvent::TouchStart);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        for (id, command) in [
            ("reset-button", Command::Reset),
            ("pause-button", Command::TogglePause),
        ] {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Missing #{} button", id);
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                handle_action(&game, Action::Game(command));
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_auto_pause(document: &Document, game: Rc<RefCell<Game>>) {
        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    handle_action(&game, Action::Game(Command::Pause));
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        if let Some(window) = web_sys::window() {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                handle_action(&game, Action::Game(Command::Pause));
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Request an animation frame unless one is already outstanding
    fn request_frame(game: Rc<RefCell<Game>>) {
        if !game.borrow_mut().frames.request() {
            return;
        }
        let Some(window) = web_sys::window() else {
            game.borrow_mut().frames.begin_frame();
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let control = {
            let mut g = game.borrow_mut();
            g.frames.begin_frame();
            let control = g.session.frame(time);
            g.draw();
            g.dispatch_events();
            control
        };

        if control == LoopControl::Continue {
            request_frame(game);
        }
    }

    fn set_display(document: &Document, id: &str, display: &str) {
        match document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            Some(el) => {
                let _ = el.style().set_property("display", display);
            }
            None => log::warn!("Missing #{} element", id),
        }
    }

    fn show_summary(score: u32) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        set_display(&document, "game-over", "block");
        if let Some(el) = document.get_element_by_id("player1-score") {
            el.set_text_content(Some(&score.to_string()));
        }
        // Single player; the second column always reads zero
        if let Some(el) = document.get_element_by_id("player2-score") {
            el.set_text_content(Some("0"));
        }
    }

    fn hide_summary() {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            set_display(&document, "game-over", "none");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use arc_ball::GameConfig;
    use arc_ball::platform::Session;
    use arc_ball::sim::{GameEvent, LoopControl};

    /// Give up on a demo that never finishes
    const MAX_TICKS: u64 = 2_000_000;

    env_logger::init();
    log::info!("Arc Ball (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(12345);

    let mut session = Session::new(GameConfig::default());
    session.set_demo(Some(seed));

    let mut shots = 0u32;
    while session.state.time_ticks < MAX_TICKS {
        let control = session.run_tick();
        for event in session.state.drain_events() {
            match event {
                GameEvent::Launched => shots += 1,
                GameEvent::Goal { score } => {
                    log::info!("Goal {} at tick {}", score, session.state.time_ticks)
                }
                GameEvent::Miss => log::debug!("Miss at tick {}", session.state.time_ticks),
                _ => {}
            }
        }
        if control == LoopControl::Stop {
            break;
        }
    }

    println!(
        "Demo finished: score {} from {} shots in {} ticks (seed {})",
        session.state.score, shots, session.state.time_ticks, seed
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

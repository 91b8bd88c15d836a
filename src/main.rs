//! Bullet Dodge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        Document, HtmlCanvasElement, HtmlElement, MouseEvent, TouchEvent, VisibilityState,
    };

    use bullet_dodge::GameError;
    use bullet_dodge::audio::AudioManager;
    use bullet_dodge::consts::*;
    use bullet_dodge::hud::{HudModel, HudText};
    use bullet_dodge::platform::FrameClock;
    use bullet_dodge::renderer::{RenderState, build_scene};
    use bullet_dodge::sim::{GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        clock: FrameClock,
        input: TickInput,
        audio: AudioManager,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                state: GameState::new(seed),
                render_state: None,
                clock: FrameClock::new(),
                input: TickInput::default(),
                audio: AudioManager::new(),
            }
        }

        /// Run simulation ticks
        fn update(&mut self, time: f64) {
            let substeps = self.clock.frame(time);
            for _ in 0..substeps {
                let input = self.input.clone();
                tick(&mut self.state, &input, SIM_DT);

                // Clear one-shot inputs after processing
                self.input.restart = false;
                self.input.bomb = false;
            }

            let events = self.state.drain_events();
            self.audio.play_events(&events);
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = build_scene(&self.state);
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let hud = HudModel::from_state(&self.state);

            place_text(&document, "hud-status", Some(&hud.status));
            place_text(&document, "hud-bomb", Some(&hud.bomb));
            place_text(&document, "hud-shield", hud.shield.as_ref());

            if let Some(el) = document.get_element_by_id("hud-fps") {
                el.set_text_content(Some(&format!("{} FPS", self.clock.fps())));
            }

            // Popups are rebuilt each frame; there are at most a handful
            if let Some(el) = document.get_element_by_id("hud-popups") {
                let html: String = hud
                    .popups
                    .iter()
                    .map(|p| {
                        format!(
                            "<div class=\"popup\" style=\"left:{:.0}px;top:{:.0}px;opacity:{:.2};transform:scale({:.2})\">{}</div>",
                            p.pos.x, p.pos.y, p.alpha, p.scale, p.text
                        )
                    })
                    .collect();
                el.set_inner_html(&html);
            }

            let Some(panel) = document.get_element_by_id("game-over") else {
                return;
            };
            match &hud.game_over {
                Some(over) => {
                    let _ = panel.set_attribute("class", "");
                    place_text(&document, "game-over-title", Some(&over.title));
                    place_text(&document, "game-over-prompt", Some(&over.prompt));
                    place_text(&document, "ranking-title", over.ranking_title.as_ref());
                    if let Some(list) = document.get_element_by_id("ranking") {
                        let html: String = over
                            .ranking
                            .iter()
                            .map(|row| {
                                format!(
                                    "<div class=\"rank\" style=\"left:{:.0}px;top:{:.0}px\">{}</div>",
                                    row.pos.x, row.pos.y, row.text
                                )
                            })
                            .collect();
                        list.set_inner_html(&html);
                    }
                }
                None => {
                    let _ = panel.set_attribute("class", "hidden");
                }
            }
        }

        /// Map a canvas-relative CSS position into screen space
        fn set_pointer(&mut self, canvas: &HtmlCanvasElement, x: f32, y: f32) {
            let w = canvas.client_width().max(1) as f32;
            let h = canvas.client_height().max(1) as f32;
            self.input.pointer = Some(glam::Vec2::new(
                x * SCREEN_WIDTH / w,
                y * SCREEN_HEIGHT / h,
            ));
        }
    }

    /// Write a HUD item into the element with `id`, hiding it when absent
    fn place_text(document: &Document, id: &str, item: Option<&HudText>) {
        let Some(el) = document
            .get_element_by_id(id)
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };

        let style = el.style();
        match item {
            Some(item) => {
                el.set_text_content(Some(&item.text));
                let _ = style.set_property("display", "block");
                let _ = style.set_property("left", &format!("{:.0}px", item.pos.x));
                let _ = style.set_property("top", &format!("{:.0}px", item.pos.y));
                let _ = style.set_property("opacity", &format!("{:.2}", item.alpha));
                let _ = style.set_property("transform", &format!("scale({:.2})", item.scale));
            }
            None => {
                let _ = style.set_property("display", "none");
            }
        }
    }

    pub async fn run() -> Result<(), GameError> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| GameError::Host(format!("failed to init logger: {e}")))?;

        log::info!("{} starting...", WINDOW_TITLE);

        let window = web_sys::window().ok_or_else(|| GameError::Host("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| GameError::Host("no document".into()))?;
        document.set_title(WINDOW_TITLE);

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| GameError::Host("no canvas".into()))?
            .dyn_into()
            .map_err(|_| GameError::Host("#canvas is not a canvas".into()))?;

        // Backing store at device resolution; game space stays 800x600
        let dpr = window.device_pixel_ratio();
        let width = (SCREEN_WIDTH as f64 * dpr) as u32;
        let height = (SCREEN_HEIGHT as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| GameError::Renderer(format!("failed to create surface: {e}")))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| GameError::Renderer(format!("failed to get adapter: {e}")))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await?;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone())?;

        if let Some(hud) = document.get_element_by_id("hud") {
            let _ = hud.set_attribute("class", "");
        }

        request_animation_frame(game);

        log::info!("{} running!", WINDOW_TITLE);
        Ok(())
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), GameError> {
        let window = web_sys::window().ok_or_else(|| GameError::Host("no window".into()))?;

        // Mouse move - player follows the pointer
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut().set_pointer(
                    &canvas_clone,
                    event.offset_x() as f32,
                    event.offset_y() as f32,
                );
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    let y = touch.client_y() as f32 - rect.top() as f32;
                    game.borrow_mut().set_pointer(&canvas_clone, x, y);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    " " => {
                        event.prevent_default();
                        g.input.restart = true;
                    }
                    "x" | "X" => g.input.bomb = true,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Hidden tab: rAF stops, so drop the backlog instead of replaying it
        if let Some(document) = window.document() {
            let game = game.clone();
            let doc = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let mut g = game.borrow_mut();
                let hidden = doc.visibility_state() == VisibilityState::Hidden;
                if hidden {
                    g.clock.reset();
                }
                g.audio.set_muted(hidden);
                log::debug!("visibility changed, hidden: {}", hidden);
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
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
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Failed to start: {e}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::time::{SystemTime, UNIX_EPOCH};

    use bullet_dodge::audio::AudioManager;
    use bullet_dodge::consts::*;
    use bullet_dodge::hud::HudModel;
    use bullet_dodge::platform::Autopilot;
    use bullet_dodge::sim::{GameEvent, GameState, tick};
    use bullet_dodge::{GameError, Tuning};

    /// Runs per process (the ledger carries across them)
    const RUNS: usize = 3;
    /// Give up on a run after two simulated minutes
    const MAX_TICKS_PER_RUN: u64 = 120 * 60;

    pub fn run() -> Result<(), GameError> {
        let tuning = Tuning::default();
        tuning.validate()?;
        log::debug!("Tuning: {}", tuning.to_json()?);

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| GameError::Host(format!("clock before epoch: {e}")))?
            .as_millis() as u64;
        log::info!("{} (headless) seed {}", WINDOW_TITLE, seed);

        let mut state = GameState::with_tuning(tuning, seed);
        let pilot = Autopilot::new(true);
        let mut audio = AudioManager::new();
        let mut finished = 0;

        while finished < RUNS {
            let input = pilot.input(&state);
            tick(&mut state, &input, SIM_DT);

            for event in state.drain_events() {
                audio.play_events(std::slice::from_ref(&event));
                if let GameEvent::GameOver { survival, rank } = event {
                    finished += 1;
                    log::info!(
                        "Run {} over after {:.2}s (rank {:?})",
                        finished,
                        survival,
                        rank
                    );
                }
            }

            if !state.is_game_over() && state.time_ticks >= MAX_TICKS_PER_RUN {
                finished += 1;
                log::info!(
                    "Run {} survived the limit: {}",
                    finished,
                    HudModel::from_state(&state).status.text
                );
                state.restart();
                state.drain_events();
            }
        }

        for (i, score) in state.ledger.entries().iter().enumerate() {
            log::info!("{}. {:.2} seconds", i + 1, score);
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = headless::run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

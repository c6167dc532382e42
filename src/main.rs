//! DVD Bounce entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use dvd_bounce::renderer::RenderState;
    use dvd_bounce::sim::{HueWheel, Scene};
    use dvd_bounce::{Config, Driver};

    /// Application instance holding all state
    struct App {
        scene: Scene,
        tints: HueWheel,
        driver: Driver,
        config: Config,
        render_state: Option<RenderState>,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl App {
        fn new(config: Config, seed: u64) -> Self {
            Self {
                scene: Scene::new(config.speed),
                tints: HueWheel::new(seed),
                driver: Driver::new(),
                config,
                render_state: None,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Run one frame: layout reports, tick, render
        fn update(&mut self, time: f64) {
            // Layout pass: every roster sprite reports the logo draw size.
            // The upsert keeps repeat reports harmless.
            if let Some(ref render_state) = self.render_state {
                let draw_size = render_state.sprite_draw_size(self.config.sprite_scale);
                for id in self.scene.roster.clone() {
                    self.scene.note_sprite_size(id, draw_size);
                }
            }

            self.driver.frame(&mut self.scene, &mut self.tints);
            self.render();
            self.track_fps(time);
        }

        /// Render the current frame
        fn render(&mut self) {
            let scale = self.config.sprite_scale;
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.scene, scale) {
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

        fn track_fps(&mut self, time: f64) {
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            if let Some(el) = document.query_selector("#hud-count .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.scene.roster.len().to_string()));
            }

            if self.config.show_fps {
                if let Some(el) = document.query_selector("#hud-fps .hud-value").ok().flatten() {
                    el.set_text_content(Some(&self.fps.to_string()));
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("DVD Bounce starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let config = Config::from_query(&window.location().search().unwrap_or_default());
        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App::new(config.clone(), seed)));

        // The surface size is captured once; the canvas is not re-measured
        // afterwards
        app.borrow_mut()
            .scene
            .note_surface_size(glam::Vec2::new(width as f32, height as f32));

        log::info!("Initialized {}x{} with seed {}", width, height, seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state =
            RenderState::new(surface, &adapter, width, height, config.background).await;
        app.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, app.clone());
        setup_visibility_handler(app.clone());

        // View is visible; start ticking
        app.borrow_mut().driver.start();
        request_animation_frame(app);

        log::info!("DVD Bounce running - tap to add a logo");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Click spawns a sprite; the location of the tap is not used
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let id = app.borrow_mut().scene.spawn_sprite();
                log::debug!("spawned sprite {}", id);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch spawns a sprite
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let id = app.borrow_mut().scene.spawn_sprite();
                log::debug!("spawned sprite {}", id);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_visibility_handler(app: Rc<RefCell<App>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut a = app.borrow_mut();
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                a.driver.stop();
                log::info!("Paused (tab hidden)");
            } else {
                a.driver.start();
                log::info!("Resumed (tab visible)");
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            a.update(time);
            a.update_hud();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use dvd_bounce::consts::DEFAULT_SPEED;
    use dvd_bounce::sim::{self, HueWheel, Scene};
    use glam::Vec2;

    env_logger::init();
    log::info!("DVD Bounce (native) starting...");
    log::info!("Native mode is a headless demo - run with `trunk serve` for the web version");

    let mut scene = Scene::new(DEFAULT_SPEED);
    scene.note_surface_size(Vec2::new(640.0, 360.0));
    let mut tints = HueWheel::new(0xD1D);

    for _ in 0..3 {
        let id = scene.spawn_sprite();
        scene.note_sprite_size(id, Vec2::new(88.0, 32.0));
    }

    for tick in 1..=600u32 {
        sim::step(&mut scene, &mut tints);
        if tick % 120 == 0 {
            for id in scene.sorted_ids() {
                let sprite = &scene.records[&id];
                log::info!(
                    "tick {}: sprite {} at ({:.0},{:.0}) vel ({:.0},{:.0})",
                    tick,
                    id,
                    sprite.pos.x,
                    sprite.pos.y,
                    sprite.vel.x,
                    sprite.vel.y
                );
            }
        }
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&scene).expect("scene serializes")
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

//! Bounce Pop entry point
//!
//! Wasm builds size the canvas to the viewport once at startup, wire keyboard
//! events to intent flags, and run one sim step per repaint callback. Native
//! builds have no window; they run a short headless demo instead.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use bounce_pop::renderer::RenderState;
    use bounce_pop::sim::{World, step};
    use bounce_pop::{Intent, Settings};

    /// App instance holding all state
    struct App {
        world: World,
        render_state: Option<RenderState>,
        intent: Intent,
        settings: Settings,
    }

    impl App {
        fn new(width: f32, height: f32, seed: u64) -> Self {
            Self {
                world: World::new(width, height, seed),
                render_state: None,
                intent: Intent::default(),
                settings: Settings::default(),
            }
        }

        /// One repaint callback: draw the current positions, then advance the
        /// sim one step for the next repaint
        fn frame(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.world, &self.settings) {
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

            let intent = self.intent;
            step(&mut self.world, &intent);
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Bounce Pop starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Size the drawing surface to the viewport once; later viewport
        // changes are ignored on purpose.
        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App::new(
            client_w as f32,
            client_h as f32,
            seed,
        )));
        log::info!(
            "World initialized: {}x{} px, seed {}, quality {}",
            client_w,
            client_h,
            seed,
            app.borrow().settings.quality.as_str()
        );

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

        let render_state = RenderState::new(
            surface,
            &adapter,
            width,
            height,
            client_w as f32,
            client_h as f32,
        )
        .await;
        app.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(app.clone());
        request_animation_frame(app);

        log::info!("Bounce Pop running!");
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        // Key down: set the intent flag
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if app.borrow_mut().intent.apply_key(&event.key(), true) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up: clear it
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if app.borrow_mut().intent.apply_key(&event.key(), false) {
                    event.prevent_default();
                }
            });
            let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            app.borrow_mut().frame();
            request_animation_frame(app.clone());
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bounce Pop (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the sim without a renderer: sweep the hunter across the viewport
/// and report how many balls it popped.
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use bounce_pop::Intent;
    use bounce_pop::sim::{World, step};
    use std::time::{SystemTime, UNIX_EPOCH};

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut world = World::new(1280.0, 720.0, seed);
    log::info!("Headless world: seed {}", seed);

    let mut intent = Intent {
        right: true,
        down: true,
        ..Intent::default()
    };
    for frame in 0..600 {
        if frame == 300 {
            // Let go of the stick and brake for the second half
            intent = Intent {
                decay: true,
                ..Intent::default()
            };
        }
        step(&mut world, &intent);
    }

    let total = world.balls.len();
    let live = world.live_count();
    log::info!(
        "Headless demo done: popped {} of {} balls in 600 frames",
        total - live,
        total
    );
    println!("{} of {} balls still bouncing", live, total);
}

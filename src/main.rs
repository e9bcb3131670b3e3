//! 2D Gravitational N-Body Sandbox
//!
//! Click to spawn bodies; they attract each other and merge on
//! contact. Space pauses, arrow up/down changes speed, R resets.

use std::sync::Arc;
use std::time::Instant;

use glam::Vec2;
use gravity_renderer::{project, CircleRenderer};
use gravity_simulation::{SimCommand, Simulation};
use rand::Rng;
use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, KeyEvent, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

/// Cap on the wall-clock delta fed into the clock, so a dragged window
/// or a breakpoint doesn't slingshot every body on the next frame.
const MAX_FRAME_DELTA: f32 = 0.1;

const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.01,
    g: 0.01,
    b: 0.02,
    a: 1.0,
};

/// Window-to-viewport transform: physical cursor pixels to the clip
/// space the simulation lives in ([-1, 1] on both axes, y up).
fn window_to_clip(cursor: PhysicalPosition<f64>, size: PhysicalSize<u32>) -> Vec2 {
    let w = size.width.max(1) as f64;
    let h = size.height.max(1) as f64;
    let x = cursor.x / w * 2.0 - 1.0;
    let y = 1.0 - cursor.y / h * 2.0;
    Vec2::new(x as f32, y as f32)
}

/// Random accent from the Catppuccin Mocha palette, normalized RGB.
fn random_accent_color() -> [f32; 3] {
    let accents: Vec<&catppuccin::Color> = catppuccin::PALETTE
        .mocha
        .colors
        .all_colors()
        .into_iter()
        .filter(|c| c.accent)
        .collect();
    let color = accents[rand::rng().random_range(0..accents.len())];
    [
        color.rgb.r as f32 / 255.0,
        color.rgb.g as f32 / 255.0,
        color.rgb.b as f32 / 255.0,
    ]
}

struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    renderer: CircleRenderer,
    simulation: Simulation,

    last_frame_time: Instant,
}

impl GpuState {
    async fn new(window: Arc<Window>) -> Self {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone()).unwrap();

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .unwrap();

        log::info!("✓ Using GPU: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::default(),
                experimental_features: wgpu::ExperimentalFeatures::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .unwrap();

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let renderer = CircleRenderer::new(&device, config.format);
        log::info!("✓ Renderer initialized");

        // The sandbox starts empty; every body comes from a click.
        let simulation = Simulation::new();
        log::info!("✓ Simulation initialized");

        Self {
            surface,
            device,
            queue,
            config,
            renderer,
            simulation,
            last_frame_time: Instant::now(),
        }
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// One frame: advance the simulation by the measured wall-clock
    /// delta, project instances, and draw them in a single pass.
    fn render(&mut self) -> Result<f32, wgpu::SurfaceError> {
        let now = Instant::now();
        let frame_delta = (now - self.last_frame_time)
            .as_secs_f32()
            .min(MAX_FRAME_DELTA);
        self.last_frame_time = now;

        self.simulation.advance(frame_delta);
        let instances = project(self.simulation.store());

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Circle Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.renderer
                .render(&self.device, &self.queue, &mut render_pass, &instances);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(frame_delta * 1000.0)
    }
}

struct App {
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    last_cursor_pos: Option<PhysicalPosition<f64>>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let window = Arc::new(
            event_loop
                .create_window(Window::default_attributes().with_title("Gravity Sandbox"))
                .unwrap(),
        );
        self.window = Some(window.clone());
        self.gpu_state = Some(pollster::block_on(GpuState::new(window)));
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),

            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.last_cursor_pos = Some(position);
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                let (Some(cursor), Some(window), Some(gpu_state)) =
                    (self.last_cursor_pos, &self.window, &mut self.gpu_state)
                else {
                    return;
                };
                let position = window_to_clip(cursor, window.inner_size());
                gpu_state.simulation.queue(SimCommand::Spawn {
                    position,
                    mass: None,
                    color: Some(random_accent_color()),
                });
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key_code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                let Some(gpu_state) = &mut self.gpu_state else {
                    return;
                };
                match key_code {
                    KeyCode::Space => gpu_state.simulation.queue(SimCommand::TogglePause),
                    KeyCode::ArrowUp => gpu_state.simulation.queue(SimCommand::SpeedDelta(1)),
                    KeyCode::ArrowDown => gpu_state.simulation.queue(SimCommand::SpeedDelta(-1)),
                    KeyCode::KeyR => gpu_state.simulation.queue(SimCommand::Reset),
                    _ => {}
                }
            }

            WindowEvent::RedrawRequested => {
                if let (Some(window), Some(gpu_state)) = (&self.window, &mut self.gpu_state) {
                    match gpu_state.render() {
                        Ok(frame_time) => {
                            let clock = gpu_state.simulation.clock();
                            let status = if clock.is_paused() {
                                " [paused]".to_string()
                            } else {
                                format!(" [{:.2}x]", clock.speed_multiplier())
                            };
                            window.set_title(&format!(
                                "Gravity Sandbox - {:.2}ms - {} bodies{}",
                                frame_time,
                                gpu_state.simulation.store().len(),
                                status
                            ));
                        }
                        Err(wgpu::SurfaceError::Lost) => gpu_state.resize(window.inner_size()),
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => eprintln!("Render error: {:?}", e),
                    }
                }
            }

            _ => {}
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting gravity sandbox...");

    let event_loop = EventLoop::new().unwrap();
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App {
        window: None,
        gpu_state: None,
        last_cursor_pos: None,
    };

    event_loop.run_app(&mut app).unwrap();
}

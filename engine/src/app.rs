use std::time::{Duration, Instant};

use log::{debug, error};
use pixels::{PixelsBuilder, SurfaceTexture};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use crate::error::EngineError;
use crate::graphics::Renderer2d;
use crate::pixels_renderer::PixelsRenderer2d;
use crate::surface::SurfaceSize;
use crate::view_tree::{ViewTree, draw_view};

pub struct AppConfig {
    pub title: String,
    /// Logical frame buffer size; the window opens at this physical size.
    pub size: SurfaceSize,
    pub resizable: bool,
    pub target_fps: u32,
    pub vsync: Option<bool>,
}

impl AppConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.target_fps.max(1)))
    }
}

pub struct AppContext {
    pub window: Window,
    pub renderer: PixelsRenderer2d,
    pub surface_size: SurfaceSize,
}

/// Discrete input delivered to the game, in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Any mouse button went down.
    MouseDown,
    /// Any key went down (including auto-repeat).
    KeyDown,
    CloseRequested,
}

/// Input accumulated since the previous frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputFrame {
    /// Cursor position in frame buffer coordinates; `None` while outside the window.
    pub mouse_pos: Option<(u32, u32)>,
    pub events: Vec<InputEvent>,
}

impl InputFrame {
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppControl {
    Continue,
    Exit,
}

pub trait GameApp {
    type State;

    fn init_state(&mut self, _ctx: &mut AppContext) -> Self::State;

    /// Advances the game by one frame. Window close arrives as `InputEvent::CloseRequested`;
    /// the loop only exits when this returns `AppControl::Exit`.
    fn update_state(
        &mut self,
        state: &mut Self::State,
        input: &InputFrame,
        dt: Duration,
        _ctx: &mut AppContext,
    ) -> AppControl;

    fn build_view(&self, state: &Self::State, _ctx: &AppContext) -> ViewTree;

    fn render(&mut self, view: &ViewTree, renderer: &mut dyn Renderer2d) {
        draw_view(view, renderer);
    }
}

fn build_context(
    config: &AppConfig,
    event_loop: &EventLoop<()>,
) -> Result<AppContext, EngineError> {
    let window = WindowBuilder::new()
        .with_title(config.title.clone())
        .with_inner_size(PhysicalSize::new(config.size.width, config.size.height))
        .with_resizable(config.resizable)
        .build(event_loop)?;

    let window_size = window.inner_size();
    let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
    let mut pixels_builder =
        PixelsBuilder::new(config.size.width, config.size.height, surface_texture);
    if let Some(vsync) = config.vsync {
        pixels_builder = pixels_builder.enable_vsync(vsync);
    }
    let pixels = pixels_builder.build()?;
    let renderer = PixelsRenderer2d::new(pixels, config.size)?;

    Ok(AppContext {
        window,
        renderer,
        surface_size: config.size,
    })
}

/// Opens the window and drives `game` at `config.target_fps` until it asks to exit.
///
/// Only returns on startup failure; once the event loop runs, exit ends the process.
pub fn run_game<G: GameApp + 'static>(
    config: AppConfig,
    mut game: G,
) -> Result<(), EngineError> {
    let event_loop = EventLoop::new();
    let mut ctx = build_context(&config, &event_loop)?;

    let frame_interval = config.frame_interval();
    let mut state = game.init_state(&mut ctx);
    let mut input = InputFrame::default();
    let mut last_frame = Instant::now();
    let mut next_frame = last_frame;
    let mut exiting = false;

    event_loop.run(move |event, _, control_flow| {
        if exiting {
            *control_flow = ControlFlow::Exit;
            return;
        }

        match &event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    input.push(InputEvent::CloseRequested);
                }
                WindowEvent::Resized(size) => {
                    if let Err(err) = ctx.renderer.resize_surface(size.width, size.height) {
                        error!("resize failed: {err}");
                    }
                }
                WindowEvent::CursorMoved { position, .. } => {
                    input.mouse_pos = ctx
                        .renderer
                        .window_to_pixel((position.x as f32, position.y as f32));
                }
                WindowEvent::CursorLeft { .. } => {
                    input.mouse_pos = None;
                }
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    ..
                } => {
                    input.push(InputEvent::MouseDown);
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            ..
                        },
                    ..
                } => {
                    input.push(InputEvent::KeyDown);
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let now = Instant::now();
                let dt = now.saturating_duration_since(last_frame);
                last_frame = now;

                let control = game.update_state(&mut state, &input, dt, &mut ctx);
                input.events.clear();

                let view = game.build_view(&state, &ctx);
                ctx.renderer.draw_frame(|gfx| game.render(&view, gfx));
                if let Err(err) = ctx.renderer.present() {
                    error!("present failed: {err}");
                }

                if control == AppControl::Exit {
                    debug!("exit requested, leaving event loop");
                    exiting = true;
                    *control_flow = ControlFlow::Exit;
                }
            }
            Event::MainEventsCleared => {
                let now = Instant::now();
                if now >= next_frame {
                    ctx.window.request_redraw();
                    next_frame = now + frame_interval;
                }
                *control_flow = ControlFlow::WaitUntil(next_frame);
            }
            _ => {}
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_interval_tracks_target_fps() {
        let config = AppConfig {
            title: String::new(),
            size: SurfaceSize::new(800, 600),
            resizable: false,
            target_fps: 60,
            vsync: None,
        };
        let interval = config.frame_interval();
        assert!(interval > Duration::from_micros(16_600));
        assert!(interval < Duration::from_micros(16_700));
    }

    #[test]
    fn zero_fps_is_treated_as_one() {
        let config = AppConfig {
            title: String::new(),
            size: SurfaceSize::new(1, 1),
            resizable: false,
            target_fps: 0,
            vsync: None,
        };
        assert_eq!(config.frame_interval(), Duration::from_secs(1));
    }
}

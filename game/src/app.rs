use std::time::Duration;

use engine::app::{AppConfig, AppContext, AppControl, GameApp, InputEvent, InputFrame};
use engine::surface::SurfaceSize;
use engine::view_tree::ViewTree;
use log::info;

use crate::hud;
use crate::session::{FrameInput, Session, SessionControl, SessionEvent};
use crate::settings::GameSettings;

pub fn app_config(settings: &GameSettings) -> AppConfig {
    AppConfig {
        title: settings.window.title.clone(),
        size: SurfaceSize::new(settings.window.width, settings.window.height),
        resizable: false,
        target_fps: settings.window.fps,
        vsync: Some(settings.window.vsync),
    }
}

/// Translates engine input into session events, keeping arrival order.
pub fn frame_input(input: &InputFrame, dt: Duration) -> FrameInput {
    let events = input
        .events
        .iter()
        .map(|event| match event {
            InputEvent::MouseDown => SessionEvent::MouseDown,
            InputEvent::KeyDown => SessionEvent::KeyDown,
            InputEvent::CloseRequested => SessionEvent::Quit,
        })
        .collect();
    FrameInput {
        dt,
        mouse_pos: input.mouse_pos.map(|(x, y)| (x as i32, y as i32)),
        events,
    }
}

pub struct AimTrainerApp {
    settings: GameSettings,
}

impl AimTrainerApp {
    pub fn new(settings: GameSettings) -> Self {
        Self { settings }
    }
}

impl GameApp for AimTrainerApp {
    type State = Session;

    fn init_state(&mut self, _ctx: &mut AppContext) -> Self::State {
        info!(
            "starting session: {} lives, new target every {} ms",
            self.settings.rules.lives, self.settings.targets.spawn_interval_ms
        );
        Session::new(self.settings.clone())
    }

    fn update_state(
        &mut self,
        state: &mut Self::State,
        input: &InputFrame,
        dt: Duration,
        _ctx: &mut AppContext,
    ) -> AppControl {
        match state.step(&frame_input(input, dt)) {
            SessionControl::Continue => AppControl::Continue,
            SessionControl::Exit => AppControl::Exit,
        }
    }

    fn build_view(&self, state: &Self::State, _ctx: &AppContext) -> ViewTree {
        hud::build_view(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_input_maps_events_in_order() {
        let input = InputFrame {
            mouse_pos: Some((12, 34)),
            events: vec![
                InputEvent::KeyDown,
                InputEvent::MouseDown,
                InputEvent::CloseRequested,
            ],
        };
        let frame = frame_input(&input, Duration::from_millis(16));
        assert_eq!(frame.dt, Duration::from_millis(16));
        assert_eq!(frame.mouse_pos, Some((12, 34)));
        assert_eq!(
            frame.events,
            vec![
                SessionEvent::KeyDown,
                SessionEvent::MouseDown,
                SessionEvent::Quit
            ]
        );
    }

    #[test]
    fn app_config_follows_window_settings() {
        let config = app_config(&GameSettings::default());
        assert_eq!(config.title, "Aim Trainer");
        assert_eq!(config.size, SurfaceSize::new(800, 600));
        assert_eq!(config.target_fps, 60);
        assert!(!config.resizable);
    }
}

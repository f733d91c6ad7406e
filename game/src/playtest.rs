use engine::GameLogic;

use crate::session::{FrameInput, Session};
use crate::settings::GameSettings;

/// Seeded, windowless session logic for `HeadlessRunner`.
#[derive(Debug, Clone)]
pub struct AimLogic {
    settings: GameSettings,
    seed: u64,
}

impl AimLogic {
    pub fn new(seed: u64) -> Self {
        Self::with_settings(GameSettings::default(), seed)
    }

    pub fn with_settings(settings: GameSettings, seed: u64) -> Self {
        Self { settings, seed }
    }
}

impl GameLogic for AimLogic {
    type State = Session;
    type Input = FrameInput;

    fn initial_state(&self) -> Self::State {
        Session::with_seed(self.settings.clone(), self.seed)
    }

    fn step(&self, state: &Self::State, input: Self::Input) -> Self::State {
        let mut next = state.clone();
        next.step(&input);
        next
    }
}

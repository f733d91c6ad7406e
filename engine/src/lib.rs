pub mod app;
pub mod error;
pub mod graphics;
pub mod pixels_renderer;
pub mod surface;
pub mod ui;
pub mod view_tree;

/// Pure per-frame game logic, steppable without a window.
pub trait GameLogic {
    type State;
    type Input;

    fn initial_state(&self) -> Self::State;
    fn step(&self, state: &Self::State, input: Self::Input) -> Self::State;
}

/// Drives a `GameLogic` headlessly and keeps every intermediate state.
///
/// Frame 0 is the initial state; each `step` appends one frame.
#[derive(Debug)]
pub struct HeadlessRunner<G: GameLogic> {
    game: G,
    history: Vec<G::State>,
}

impl<G: GameLogic> HeadlessRunner<G> {
    pub fn new(game: G) -> Self {
        let initial_state = game.initial_state();
        Self {
            game,
            history: vec![initial_state],
        }
    }

    pub fn frame(&self) -> usize {
        self.history.len() - 1
    }

    pub fn state(&self) -> &G::State {
        &self.history[self.frame()]
    }

    pub fn state_at(&self, frame: usize) -> Option<&G::State> {
        self.history.get(frame)
    }

    pub fn history(&self) -> &[G::State] {
        &self.history
    }

    pub fn step(&mut self, input: G::Input) -> usize {
        let next_state = self.game.step(self.state(), input);
        self.history.push(next_state);
        self.frame()
    }

    pub fn run<I>(&mut self, inputs: I) -> usize
    where
        I: IntoIterator<Item = G::Input>,
    {
        let mut last_frame = self.frame();
        for input in inputs {
            last_frame = self.step(input);
        }
        last_frame
    }

    /// Steps with `input()` until `done` holds for the current state or `max_frames`
    /// further frames have run. Returns whether `done` was reached.
    pub fn run_until<F, P>(&mut self, max_frames: usize, mut input: F, done: P) -> bool
    where
        F: FnMut(&G::State) -> G::Input,
        P: Fn(&G::State) -> bool,
    {
        for _ in 0..max_frames {
            if done(self.state()) {
                return true;
            }
            let next = input(self.state());
            self.step(next);
        }
        done(self.state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Additive;

    impl GameLogic for Additive {
        type State = i32;
        type Input = i32;

        fn initial_state(&self) -> Self::State {
            0
        }

        fn step(&self, state: &Self::State, input: Self::Input) -> Self::State {
            *state + input
        }
    }

    #[test]
    fn runner_steps_and_records_history() {
        let mut runner = HeadlessRunner::new(Additive);
        runner.run([1, 2, 3]);
        assert_eq!(runner.frame(), 3);
        assert_eq!(runner.state(), &6);
        assert_eq!(runner.history(), &[0, 1, 3, 6]);
        assert_eq!(runner.state_at(1), Some(&1));
        assert_eq!(runner.state_at(9), None);
    }

    #[test]
    fn run_until_stops_when_predicate_holds() {
        let mut runner = HeadlessRunner::new(Additive);
        let reached = runner.run_until(100, |_| 2, |s| *s >= 7);
        assert!(reached);
        assert_eq!(runner.state(), &8);
        assert_eq!(runner.frame(), 4);
    }

    #[test]
    fn run_until_gives_up_after_max_frames() {
        let mut runner = HeadlessRunner::new(Additive);
        let reached = runner.run_until(3, |_| 1, |s| *s >= 10);
        assert!(!reached);
        assert_eq!(runner.frame(), 3);
    }
}

use std::iter;
use std::time::Duration;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::settings::GameSettings;
use crate::spawn_timer::SpawnTimer;
use crate::stats;
use crate::target::Target;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Targets spawn, animate and can be clicked.
    Running,
    /// Out of lives. Stats are frozen until the player dismisses the end screen.
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Window close. Remaining events in the frame are dropped.
    Quit,
    /// Spawn one target at a random position. The spawn timer queues these ahead of
    /// the frame's input.
    Spawn,
    MouseDown,
    KeyDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionControl {
    Continue,
    Exit,
}

/// Everything that happened since the previous frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub dt: Duration,
    /// Current cursor position, used for every click in the frame.
    pub mouse_pos: Option<(i32, i32)>,
    pub events: Vec<SessionEvent>,
}

impl FrameInput {
    pub fn idle(dt: Duration) -> Self {
        Self {
            dt,
            ..Self::default()
        }
    }

    pub fn click_at(dt: Duration, x: i32, y: i32) -> Self {
        Self {
            dt,
            mouse_pos: Some((x, y)),
            events: vec![SessionEvent::MouseDown],
        }
    }

    pub fn with_event(mut self, event: SessionEvent) -> Self {
        self.events.push(event);
        self
    }
}

/// One play-through: live targets plus the hit/click/miss tallies.
#[derive(Debug, Clone)]
pub struct Session {
    settings: GameSettings,
    rng: StdRng,
    spawn_timer: SpawnTimer,
    targets: Vec<Target>,
    phase: SessionPhase,
    quit_requested: bool,
    elapsed: Duration,
    hits: u32,
    clicks: u32,
    misses: u32,
    spawned: u32,
}

impl Session {
    pub fn new(settings: GameSettings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    pub fn with_seed(settings: GameSettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: GameSettings, rng: StdRng) -> Self {
        let spawn_timer = SpawnTimer::new(settings.targets.spawn_interval());
        Self {
            settings,
            rng,
            spawn_timer,
            targets: Vec::new(),
            phase: SessionPhase::Running,
            quit_requested: false,
            elapsed: Duration::ZERO,
            hits: 0,
            clicks: 0,
            misses: 0,
            spawned: 0,
        }
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_ended(&self) -> bool {
        self.phase == SessionPhase::Ended
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    pub fn spawned(&self) -> u32 {
        self.spawned
    }

    pub fn lives_left(&self) -> u32 {
        self.settings.rules.lives.saturating_sub(self.misses)
    }

    pub fn speed(&self) -> f64 {
        stats::speed(self.hits, self.elapsed)
    }

    pub fn accuracy(&self) -> f64 {
        stats::accuracy(self.hits, self.clicks)
    }

    /// Adds a target at a random position inside the spawn bounds.
    pub fn spawn_target(&mut self) {
        let (xs, ys) = self.settings.spawn_bounds();
        let x = self.rng.gen_range(xs);
        let y = self.rng.gen_range(ys);
        self.spawn_target_at(x, y);
    }

    pub fn spawn_target_at(&mut self, x: i32, y: i32) {
        debug!("spawning target at ({x}, {y})");
        self.targets
            .push(Target::from_settings(x, y, &self.settings.targets));
        self.spawned += 1;
    }

    /// Runs one frame.
    ///
    /// While running: advance the clock, queue one spawn per timer firing ahead of the
    /// input events, apply events in order, then update every target and resolve
    /// misses and clicks. Once ended, only waits for a quit, click or key press.
    pub fn step(&mut self, input: &FrameInput) -> SessionControl {
        if self.quit_requested {
            return SessionControl::Exit;
        }

        if self.phase == SessionPhase::Ended {
            let dismissed = input.events.iter().any(|event| {
                matches!(
                    event,
                    SessionEvent::Quit | SessionEvent::MouseDown | SessionEvent::KeyDown
                )
            });
            if dismissed {
                self.quit_requested = true;
                return SessionControl::Exit;
            }
            return SessionControl::Continue;
        }

        self.elapsed = self.elapsed.saturating_add(input.dt);
        let timer_spawns = self.spawn_timer.tick(input.dt) as usize;
        let events = iter::repeat_n(SessionEvent::Spawn, timer_spawns)
            .chain(input.events.iter().copied());

        let mut click = false;
        for event in events {
            match event {
                SessionEvent::Quit => {
                    self.quit_requested = true;
                    break;
                }
                SessionEvent::Spawn => self.spawn_target(),
                SessionEvent::MouseDown => {
                    click = true;
                    self.clicks += 1;
                }
                SessionEvent::KeyDown => {}
            }
        }

        let click_at = if click { input.mouse_pos } else { None };
        self.advance_targets(click_at);

        if self.misses >= self.settings.rules.lives {
            self.end();
        }

        if self.quit_requested {
            SessionControl::Exit
        } else {
            SessionControl::Continue
        }
    }

    /// Updates every target in order, then drops the expired and the clicked ones.
    ///
    /// Removal happens after the pass so a removal never shifts the next target out
    /// of this frame's update.
    fn advance_targets(&mut self, click_at: Option<(i32, i32)>) {
        let mut removed = Vec::new();
        for (index, target) in self.targets.iter_mut().enumerate() {
            target.update();

            if target.is_expired() {
                removed.push(index);
                self.misses += 1;
                debug!("target at ({}, {}) expired", target.x, target.y);
            } else if let Some((mx, my)) = click_at {
                if target.collide(mx, my) {
                    removed.push(index);
                    self.hits += 1;
                    debug!("target at ({}, {}) hit", target.x, target.y);
                }
            }
        }

        for index in removed.into_iter().rev() {
            self.targets.remove(index);
        }
    }

    fn end(&mut self) {
        self.phase = SessionPhase::Ended;
        info!(
            "session over after {:.1}s: {} hits, {} clicks, {} misses, accuracy {:.1}%",
            self.elapsed.as_secs_f64(),
            self.hits,
            self.clicks,
            self.misses,
            self.accuracy()
        );
    }
}

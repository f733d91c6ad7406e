pub mod app;
pub mod hud;
pub mod playtest;
pub mod session;
pub mod settings;
pub mod spawn_timer;
pub mod stats;
pub mod target;
pub mod timefmt;

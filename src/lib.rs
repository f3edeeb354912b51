//! Snake with seeded bugs. Each stage ships one defect; the stage advances
//! when gameplay shows the defect has been fixed.

pub mod config;
pub mod defects;
pub mod food;
pub mod game;
pub mod input;
pub mod progress;
pub mod renderer;
pub mod snake;
pub mod stage;
pub mod terminal_runtime;
pub mod tracker;
pub mod ui;

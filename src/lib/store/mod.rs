pub mod config;
pub mod mood_store;

pub use config::{MoodConfig, Policy};
pub use mood_store::{MissingMood, MoodStore};

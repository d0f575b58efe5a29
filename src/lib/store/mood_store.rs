use dashmap::DashMap;
use log::{debug, info};

use crate::core::error::MoodNotSet;

use super::config::{MoodConfig, Policy};

/// What a lookup yields for a user with no recorded mood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingMood {
    /// Answer with this mood instead.
    Default(String),
    /// Fail with `MoodNotSet` carrying this message.
    Strict(String),
}

/// Process-wide table of user moods.
///
/// Reads and writes are atomic per user; there is no ordering across users.
#[derive(Debug)]
pub struct MoodStore {
    moods: DashMap<String, String>,
    missing: MissingMood,
}

impl MoodStore {
    pub fn new(missing: MissingMood) -> MoodStore {
        MoodStore {
            moods: DashMap::new(),
            missing,
        }
    }

    pub fn policy(&self) -> &MissingMood {
        &self.missing
    }

    pub fn get_mood(&self, user: &str) -> Result<String, MoodNotSet> {
        if let Some(mood) = self.moods.get(user) {
            debug!("Found mood {:?} for {}.", mood.value(), user);
            return Ok(mood.clone());
        }
        match &self.missing {
            MissingMood::Default(mood) => {
                debug!("No mood for {}, using default {:?}.", user, mood);
                Ok(mood.clone())
            }
            MissingMood::Strict(message) => {
                debug!("No mood for {}.", user);
                Err(MoodNotSet::new(user, message.as_str()))
            }
        }
    }

    /// Overwrites the user's mood, returning the one it replaced.
    pub fn set_mood(&self, user: impl Into<String>, mood: impl Into<String>) -> Option<String> {
        let (user, mood) = (user.into(), mood.into());
        info!("Setting mood of {} to {:?}", user, mood);
        self.moods.insert(user, mood)
    }
}

impl From<&MoodConfig> for MoodStore {
    fn from(config: &MoodConfig) -> MoodStore {
        let missing = match config.mood_policy {
            Policy::Default => MissingMood::Default(config.default_mood.clone()),
            Policy::Strict => MissingMood::Strict(config.mood_not_found_message.clone()),
        };
        MoodStore::new(missing)
    }
}

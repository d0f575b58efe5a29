use thiserror::Error;

/// Raised by a strict store when a user has never set a mood.
///
/// Displays as the configured message alone, which is what clients see.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct MoodNotSet {
    pub user: String,
    pub message: String,
}

impl MoodNotSet {
    pub fn new(user: impl Into<String>, message: impl Into<String>) -> MoodNotSet {
        MoodNotSet {
            user: user.into(),
            message: message.into(),
        }
    }
}

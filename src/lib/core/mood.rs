use std::fmt;

use rocket::serde::{Deserialize, Serialize};

/// A user's current mood, as returned by `GET /user/<name>/mood`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(crate = "rocket::serde")]
pub struct Mood {
    pub user: String,
    pub mood: String,
}

impl Mood {
    pub fn new(user: impl Into<String>, mood: impl Into<String>) -> Mood {
        Mood {
            user: user.into(),
            mood: mood.into(),
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mood {{ user: '{}', mood: '{}' }}", self.user, self.mood)
    }
}

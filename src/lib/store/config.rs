use anyhow::{anyhow, Result};
use rocket::{
    data::{ByteUnit, ToByteUnit},
    figment::Figment,
    serde::{Deserialize, Deserializer, Serialize},
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum Policy {
    #[default]
    Default,
    Strict,
}

/// Mood settings read from `Rocket.toml` or `ROCKET_*` variables.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(crate = "rocket::serde", default)]
pub struct MoodConfig {
    pub mood_policy: Policy,
    #[serde(deserialize_with = "scalar_string")]
    pub default_mood: String,
    #[serde(deserialize_with = "scalar_string")]
    pub mood_not_found_message: String,
    /// Largest PUT body accepted as a mood.
    pub mood_limit: ByteUnit,
}

impl Default for MoodConfig {
    fn default() -> MoodConfig {
        MoodConfig {
            mood_policy: Policy::Default,
            default_mood: "no mood".into(),
            mood_not_found_message: "mood not set for user".into(),
            mood_limit: 1.mebibytes(),
        }
    }
}

impl MoodConfig {
    pub fn from_figment(figment: &Figment) -> Result<MoodConfig> {
        figment
            .extract()
            .map_err(|e| anyhow!("Invalid mood configuration: {}", e))
    }
}

// Environment values such as `ROCKET_DEFAULT_MOOD=42` arrive as numbers.
fn scalar_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(crate = "rocket::serde", untagged)]
    enum Scalar {
        Text(String),
        Flag(bool),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(s) => s,
        Scalar::Flag(b) => b.to_string(),
        Scalar::Unsigned(n) => n.to_string(),
        Scalar::Signed(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
    })
}

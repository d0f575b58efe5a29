use log::{error, info, warn};
use rocket::{
    data::Data,
    fairing::AdHoc,
    figment::Figment,
    http::Status,
    response::status::NotFound,
    serde::json::Json,
    Build, Rocket, Route, State,
};

use crate::{
    core::mood::Mood,
    store::{MoodConfig, MoodStore},
};

#[get("/user/<name>/mood")]
fn get_mood(name: &str, store: &State<MoodStore>) -> Result<Json<Mood>, NotFound<String>> {
    store
        .get_mood(name)
        .map(|mood| Json(Mood::new(name, mood)))
        .map_err(|e| NotFound(e.to_string()))
}

#[put("/user/<name>/mood", data = "<mood>")]
async fn set_mood(
    name: &str,
    mood: Data<'_>,
    store: &State<MoodStore>,
    config: &State<MoodConfig>,
) -> Result<(), Status> {
    let mood = mood
        .open(config.mood_limit)
        .into_string()
        .await
        .map_err(|e| {
            warn!("Unreadable mood for {}: {}", name, e);
            Status::BadRequest
        })?;
    if !mood.is_complete() {
        warn!("Mood for {} is over {}.", name, config.mood_limit);
        return Err(Status::PayloadTooLarge);
    }
    store.set_mood(name, mood.into_inner());
    Ok(())
}

pub fn routes() -> Vec<Route> {
    routes![get_mood, set_mood]
}

/// Reads `MoodConfig` at ignition and manages it along with the store it describes.
pub fn stage() -> AdHoc {
    AdHoc::try_on_ignite("Mood Store", |rocket| async {
        match MoodConfig::from_figment(rocket.figment()) {
            Ok(config) => {
                let store = MoodStore::from(&config);
                info!("Mood store ready with policy {:?}.", store.policy());
                Ok(rocket.manage(store).manage(config))
            }
            Err(e) => {
                error!("{:#}", e);
                Err(rocket)
            }
        }
    })
}

pub fn build(figment: Figment) -> Rocket<Build> {
    rocket::custom(figment).attach(stage()).mount("/", routes())
}

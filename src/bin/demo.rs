use mood_service::{
    core::mood::Mood,
    store::{MissingMood, MoodStore},
};

fn main() {
    pretty_env_logger::init();

    let lenient = MoodStore::new(MissingMood::Default("no mood".into()));
    dbg!(lenient.get_mood("stehrn").map(|m| Mood::new("stehrn", m)));
    dbg!(lenient.set_mood("stehrn", "happy"));
    dbg!(lenient.set_mood("stehrn", "sleepy"));
    dbg!(lenient.get_mood("stehrn").map(|m| Mood::new("stehrn", m)));

    let strict = MoodStore::new(MissingMood::Strict("mood not set for user".into()));
    if let Err(e) = strict.get_mood("unknown") {
        println!("{}: {}", e.user, e);
    }
    strict.set_mood("unknown", "curious");
    if let Ok(mood) = strict.get_mood("unknown") {
        println!("{}", Mood::new("unknown", mood));
    }
}

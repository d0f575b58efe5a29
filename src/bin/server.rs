use mood_service::server::build;

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    pretty_env_logger::init();
    let _rocket = build(rocket::Config::figment()).launch().await?;
    Ok(())
}

use actix_web::{middleware, web, App, HttpServer};
use ace_run::api::{configure_routes, cors_policy, static_files, AppState};
use ace_run::{banner, config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    banner::print_banner();

    // A .env file is optional; every setting has a default.
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  No .env file loaded ({}), using environment and defaults", e);
    }

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let app_config = match config::AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("{}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    let inference = &app_config.inference;
    log::info!(
        "Inference backend: {} ({} {} {})",
        inference.backend,
        inference.command,
        inference.subcommand,
        inference.model
    );

    let host = app_config.host.clone();
    let port = app_config.port;
    let static_dir = app_config.static_dir.clone();
    if !static_dir.is_dir() {
        log::warn!("Static directory {} does not exist; the frontend will 404", static_dir.display());
    }

    let state = AppState::new(app_config);

    println!("🚀 Starting server...");
    println!("📊 Frontend available at http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors_policy())
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
            .service(static_files(&static_dir))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}

use std::process;

use actix_web::middleware::{Logger, NormalizePath, TrailingSlash};
use actix_web::{App, HttpServer, web};
use config::{Config, ConfigError, Environment, File};
use tera::Tera;

use video_collector::db::establish_connection_pool;
use video_collector::models::config::ServerConfig;
use video_collector::repository::DieselRepository;
use video_collector::routes;
use video_collector::services::categories::seed_categories;

fn load_config() -> Result<ServerConfig, ConfigError> {
    Config::builder()
        .set_default("address", "127.0.0.1")?
        .set_default("port", 8080)?
        .set_default("database_url", "app.db")?
        .set_default("templates_dir", "templates")?
        .add_source(File::with_name("config/default").required(false))
        .add_source(
            Environment::with_prefix("APP")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("categories"),
        )
        .build()?
        .try_deserialize()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let server_config = match load_config() {
        Ok(server_config) => server_config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    match seed_categories(&server_config.categories, &repo) {
        Ok(0) => {}
        Ok(created) => log::info!("Seeded {created} categories"),
        Err(e) => {
            log::error!("Failed to seed categories: {e}");
            process::exit(1);
        }
    }

    let tera = match Tera::new(&format!("{}/**/*", server_config.templates_dir)) {
        Ok(tera) => tera,
        Err(e) => {
            log::error!("Failed to parse templates: {e}");
            process::exit(1);
        }
    };

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Starting server on {}:{}",
        server_config.address,
        server_config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .wrap(Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(tera.clone()))
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}

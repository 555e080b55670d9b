use actix_web::{web, App, HttpServer, middleware::Logger};
use actix_cors::Cors;
use dotenv::dotenv;
use std::net::TcpListener;
use std::sync::Arc;

use prompt_enhancer_server::clients::{CompletionClient, OpenAIClient};
use prompt_enhancer_server::config::init_config;
use prompt_enhancer_server::routes::{configure_public_routes, configure_routes};
use prompt_enhancer_server::services::PromptEnhancerService;
use prompt_enhancer_server::views::init_templates;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Load application settings
    let app_settings = match init_config() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Failed to load application settings: {}", e);
            log::error!("Cannot start server without valid settings");
            std::process::exit(1);
        }
    };

    let completion_client: Arc<dyn CompletionClient> = match OpenAIClient::new(&app_settings) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            log::error!("Failed to initialize completion client: {}", e);
            std::process::exit(1);
        }
    };
    let enhancer_service = web::Data::new(PromptEnhancerService::new(
        completion_client,
        app_settings.completion.clone(),
    ));
    log::info!("Prompt enhancer service initialized with endpoint {}", app_settings.completion.base_url);

    let templates = match init_templates() {
        Ok(tera) => web::Data::new(tera),
        Err(e) => {
            log::error!("Failed to compile page templates: {}", e);
            std::process::exit(1);
        }
    };

    // Get server host and port from settings
    let host = &app_settings.server.host;
    let port = app_settings.server.port;

    log::info!("Starting {} at http://{}:{}", app_settings.app.name, host, port);

    let server_addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(server_addr)?;

    let settings_data = web::Data::new(app_settings);

    HttpServer::new(move || {
        // Configure CORS using actix-cors
        let mut cors = Cors::default();

        if settings_data.server.cors_origins.iter().any(|origin| origin == "*") {
            cors = cors.allow_any_origin();
        } else {
            for origin in &settings_data.server.cors_origins {
                cors = cors.allowed_origin(origin);
            }
        }

        cors = cors
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(settings_data.clone())
            .app_data(enhancer_service.clone())
            .app_data(templates.clone())
            .configure(configure_public_routes)
            .configure(configure_routes)
    })
    .listen(listener)?
    .run()
    .await
}

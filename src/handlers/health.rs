use actix_web::{web, HttpResponse, Responder};
use serde::{Serialize, Deserialize};

use crate::config::AppSettings;

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    status: String,
    name: String,
    environment: String,
    version: String,
}

pub async fn health_check(settings: web::Data<AppSettings>) -> impl Responder {
    let response = HealthResponse {
        status: "ok".to_string(),
        name: settings.app.name.clone(),
        environment: settings.app.environment.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    HttpResponse::Ok().json(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::{AppConfig, CompletionConfig, ServerConfig};
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_reports_app_identity() {
        let settings = AppSettings {
            app: AppConfig {
                name: "prompt-enhancer".to_string(),
                environment: "test".to_string(),
            },
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                cors_origins: vec!["*".to_string()],
            },
            completion: CompletionConfig::default(),
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(settings))
                .route("/health", web::get().to(health_check)),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["name"], "prompt-enhancer");
        assert_eq!(body["environment"], "test");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}

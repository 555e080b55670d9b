use actix_web::web;
use crate::handlers;

/// Configures the form page, its submit and download targets, and the JSON API.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(handlers::enhancer_handlers::index))
    );
    cfg.service(
        web::resource("/enhance")
            .route(web::post().to(handlers::enhancer_handlers::enhance_form))
    );
    cfg.service(
        web::resource("/download")
            .route(web::post().to(handlers::enhancer_handlers::download_prompt))
    );

    // JSON API (/api/*)
    cfg.service(
        web::scope("/api")
            .route("/enhance", web::post().to(handlers::enhancer_handlers::enhance_api))
    );
}

/// Configures routes that carry no application logic.
pub fn configure_public_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/health")
            .route(web::get().to(handlers::health::health_check))
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_unknown_route_is_not_found() {
        let app = test::init_service(
            App::new()
                .configure(configure_routes)
                .configure(configure_public_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/does-not-exist").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get().uri("/enhance").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}

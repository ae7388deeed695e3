pub mod application;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod store;

use actix_web::{middleware::Logger, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use store::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::dishes::create_dish,
        handlers::dishes::get_dish,
        handlers::dishes::update_dish,
        handlers::dishes::list_dishes,
        handlers::orders::create_order,
        handlers::orders::get_order,
        handlers::orders::update_order,
        handlers::orders::delete_order,
        handlers::orders::list_orders,
    ),
    tags(
        (name = "dishes", description = "Menu dishes"),
        (name = "orders", description = "Delivery orders")
    )
)]
pub struct ApiDoc;

/// Mount the resource pipelines on a service config. Shared by the real
/// server and the integration tests.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/dishes")
            .route("", web::get().to(handlers::dishes::list_dishes))
            .route("", web::post().to(handlers::dishes::create_dish))
            .route("/{dishId}", web::get().to(handlers::dishes::get_dish))
            .route("/{dishId}", web::put().to(handlers::dishes::update_dish)),
    )
    .service(
        web::scope("/orders")
            .route("", web::get().to(handlers::orders::list_orders))
            .route("", web::post().to(handlers::orders::create_order))
            .route("/{orderId}", web::get().to(handlers::orders::get_order))
            .route("/{orderId}", web::put().to(handlers::orders::update_order))
            .route("/{orderId}", web::delete().to(handlers::orders::delete_order)),
    );
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    state: AppState,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .configure(configure_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}

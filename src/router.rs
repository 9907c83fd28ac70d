use crate::handlers::{
    auth::{login, register},
    books::{create_book, delete_book, get_book, get_books, update_book},
    health::health_check,
    hotels::{create_hotel, delete_hotel, get_hotel, get_hotel_rooms, get_hotels, update_hotel},
    rooms::{add_room_to_hotel, delete_room, get_room, get_rooms, update_room},
    users::{add_role, delete_user, get_user, get_users, update_user},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        // Health check
        .route("/health", get(health_check))
        // Hotel routes
        .route("/api/v1/hotels", get(get_hotels).post(create_hotel))
        .route(
            "/api/v1/hotels/:hotel_id",
            get(get_hotel).put(update_hotel).delete(delete_hotel),
        )
        .route("/api/v1/hotels/:hotel_id/rooms", get(get_hotel_rooms))
        // Room routes
        .route("/api/v1/rooms", get(get_rooms))
        .route(
            "/api/v1/rooms/:room_id",
            get(get_room).put(update_room).delete(delete_room),
        )
        .route("/api/v1/rooms/hotel/:hotel_id", post(add_room_to_hotel))
        // Book routes
        .route("/api/v1/books", get(get_books).post(create_book))
        .route(
            "/api/v1/books/:book_id",
            get(get_book).put(update_book).delete(delete_book),
        )
        // Authentication routes
        .route("/api/v1/auth/register", post(register))
        .route("/api/v1/auth/login", post(login))
        // User routes
        .route("/api/v1/users", get(get_users))
        .route(
            "/api/v1/users/:username",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/api/v1/users/:username/roles", post(add_role))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // The Prometheus recorder is process-global, so tests run without it.
    #[cfg(not(test))]
    let router = {
        let (prometheus_layer, metric_handle) = axum_prometheus::PrometheusMetricLayer::pair();
        router
            .route("/metrics", get(move || async move { metric_handle.render() }))
            .layer(prometheus_layer)
    };

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

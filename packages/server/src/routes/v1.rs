use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .nest("/glazes", glaze_routes())
        .nest("/variants", variant_routes())
        .nest("/chart", chart_routes())
        .nest("/photos", photo_routes())
}

fn glaze_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::glaze::list_glazes,
            handlers::glaze::create_glaze
        ))
        .routes(routes!(
            handlers::glaze::get_glaze,
            handlers::glaze::update_glaze,
            handlers::glaze::delete_glaze
        ))
        .routes(routes!(handlers::variant::add_variant))
}

fn variant_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(
        handlers::variant::update_variant,
        handlers::variant::delete_variant
    ))
}

fn chart_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::chart::chart_data))
        .routes(routes!(handlers::chart::chart_axis))
}

fn photo_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::photo::get_photo,
            handlers::photo::upload_photo,
            handlers::photo::delete_photo
        ))
        .layer(handlers::photo::photo_upload_body_limit())
}

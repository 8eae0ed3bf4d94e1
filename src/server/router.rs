use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{blood_request, inventory, realtime},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bloodline",
        description = "Emergency blood request coordination between operators and donors"
    ),
    tags(
        (name = "request", description = "Emergency request lifecycle"),
        (name = "inventory", description = "Blood stock levels")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(blood_request::create_emergency_request))
        .routes(routes!(blood_request::get_request))
        .routes(routes!(blood_request::cancel_request))
        .routes(routes!(blood_request::respond_to_request))
        .routes(routes!(blood_request::verify_otp))
        .routes(routes!(inventory::get_inventory))
        .split_for_parts();

    router
        .route("/api/ws", get(realtime::connect))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

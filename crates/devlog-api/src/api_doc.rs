//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use devlog_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Devlog API",
        version = "0.1.0",
        description = "Read API for the studio site: published devlogs from the headless content store, with media CDN delivery URLs resolved server-side."
    ),
    paths(
        handlers::devlogs::list_devlogs,
        handlers::devlogs::get_devlog,
        handlers::health::health_check,
    ),
    components(schemas(
        handlers::devlogs::DevlogResponse,
        handlers::health::HealthResponse,
        error::ErrorResponse,
        models::Devlog,
        models::MediaReference,
        models::MediaKind,
    )),
    tags(
        (name = "devlogs", description = "Published devlog entries"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

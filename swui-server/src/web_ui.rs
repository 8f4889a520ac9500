//! Embedded web UI

use crate::assets::asset_router;
use axum::Router;
use bytes::Bytes;
use rust_embed::RustEmbed;
use std::sync::Arc;
use swui_core::{AssetBundle, SpecDocument};

#[derive(RustEmbed)]
#[folder = "assets/swagger-ui/"]
struct SwaggerUi;

/// The Swagger UI bundle compiled into the binary
pub fn bundle() -> AssetBundle {
    AssetBundle::from_embed::<SwaggerUi>()
}

/// Serve a single specification with the embedded UI at the root
pub fn handler(spec: impl Into<Bytes>) -> Router {
    asset_router(
        SpecDocument::new("swagger.json", spec),
        Arc::new(bundle()),
    )
}

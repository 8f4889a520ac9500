//! Asset Server: one specification document plus the shared UI bundle

use crate::file_server;
use axum::{
    extract::{OriginalUri, State},
    http::{header, HeaderMap, Method, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use swui_core::{AssetBundle, SpecDocument};

/// Path, relative to the mount, the UI fetches its document from
pub const SPEC_ROUTE: &str = "/swagger_spec";

/// Immutable per-mount state; cloning only bumps reference counts
#[derive(Clone)]
pub struct AssetState {
    document: SpecDocument,
    bundle: Arc<AssetBundle>,
}

/// Build an Asset Server for `document`
///
/// `GET /swagger_spec` returns the document bytes; every other path is
/// served from `bundle` with file server semantics.
pub fn asset_router(document: SpecDocument, bundle: Arc<AssetBundle>) -> Router {
    Router::new()
        .route(SPEC_ROUTE, get(serve_spec))
        .fallback(serve_asset)
        .with_state(AssetState { document, bundle })
}

async fn serve_spec(State(state): State<AssetState>) -> Response {
    let mime = mime_guess::from_path(state.document.path()).first_or_octet_stream();
    (
        [(header::CONTENT_TYPE, mime.as_ref())],
        state.document.content().clone(),
    )
        .into_response()
}

async fn serve_asset(
    State(state): State<AssetState>,
    method: Method,
    OriginalUri(original): OriginalUri,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    file_server::serve(&state.bundle, &method, &uri, &original, &headers)
}

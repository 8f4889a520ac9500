//! Multi-Spec Mounter
//!
//! Mounts one Asset Server per specification document under its derived URL
//! path and serves a generated index of all mounts at the root.

use crate::assets::asset_router;
use axum::{response::Html, routing::get, Router};
use std::sync::Arc;
use swui_core::{AssetBundle, IndexPage, MountError, MountRule, RouteTable, SpecSource, SpecTree};
use tracing::info;

/// Build the complete router for `tree`
///
/// Fails without building anything if a derived path is unusable or
/// collides with another.
pub fn mount_specs(
    tree: &SpecTree,
    rule: &MountRule,
    bundle: Arc<AssetBundle>,
) -> Result<Router, MountError> {
    let table = RouteTable::build(tree, rule)?;
    Ok(mount_routes(&table, bundle))
}

/// Load `source` and mount its documents; a failed load mounts nothing
pub fn mount_source(
    source: &dyn SpecSource,
    rule: &MountRule,
    bundle: Arc<AssetBundle>,
) -> Result<Router, MountError> {
    let tree = source
        .load()
        .map_err(|e| MountError::load_failed(source.name(), e))?;
    mount_specs(&tree, rule, bundle)
}

/// Router for an already validated route table
pub fn mount_routes(table: &RouteTable, bundle: Arc<AssetBundle>) -> Router {
    let mut router = Router::new();

    for mount in table {
        let prefix = mount.route_prefix();
        info!("Mounting {} at {}", mount.document().path(), prefix);
        router = router.nest_service(
            &prefix,
            asset_router(mount.document().clone(), bundle.clone()),
        );
    }

    let index = IndexPage::from_routes(table).into_bytes();
    let serve_index = move || {
        let html = index.clone();
        async move { Html(html) }
    };

    router
        .route("/", get(serve_index.clone()))
        .fallback(serve_index)
}

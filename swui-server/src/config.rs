//! Server configuration from command-line flags and environment variables

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use swui_core::mount::DEFAULT_SPEC_SUFFIX;
use swui_core::MountRule;

/// Self-hosted Swagger UI, one mount per specification document
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct ServerConfig {
    /// Listen address
    #[arg(long, env = "SWUI_ADDR", default_value = "0.0.0.0:9200")]
    pub addr: SocketAddr,

    /// Directory holding the specification documents
    #[arg(
        long,
        env = "SWUI_SPEC_DIR",
        default_value = "embed",
        value_hint = clap::ValueHint::DirPath
    )]
    pub spec_dir: PathBuf,

    /// Prefix stripped from storage paths (default: `<spec dir name>/`)
    #[arg(long, env = "SWUI_ROOT_PREFIX")]
    pub root_prefix: Option<String>,

    /// Suffix stripped from storage paths
    #[arg(long, env = "SWUI_SPEC_SUFFIX", default_value = DEFAULT_SPEC_SUFFIX)]
    pub spec_suffix: String,

    /// Serve the UI from this directory instead of the embedded bundle
    #[arg(long, env = "SWUI_ASSET_DIR", value_hint = clap::ValueHint::DirPath)]
    pub asset_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// How storage paths map to URL paths.
    ///
    /// Without an explicit prefix, storage paths start with the spec
    /// directory's own name.
    pub fn rule(&self) -> MountRule {
        let root_prefix = self.root_prefix.clone().unwrap_or_else(|| {
            self.spec_dir
                .file_name()
                .and_then(|n| n.to_str())
                .map(|n| format!("{n}/"))
                .unwrap_or_default()
        });
        MountRule::new(root_prefix, self.spec_suffix.clone())
    }
}

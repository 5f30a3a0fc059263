use anyhow::{Context, Result};
use clap::Args;
use recipe_router::{RouteTable, RouterConfig, TableVersion};
use std::path::PathBuf;
use tracing::info;

/// Where the route table comes from
#[derive(Args, Clone, Debug)]
pub struct TableSource {
    /// Built-in table version: initial, paginated or folders (default: folders)
    #[arg(short, long, conflicts_with = "config")]
    pub preset: Option<TableVersion>,

    /// Route table file (routes.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl TableSource {
    pub fn load(&self) -> Result<RouteTable> {
        match &self.config {
            Some(path) => {
                info!(path = %path.display(), "loading route table");
                let config = RouterConfig::load(path)?;
                config
                    .build_table()
                    .with_context(|| format!("Invalid route table in {:?}", path))
            }
            None => {
                let version = self.preset.unwrap_or_default();
                info!(%version, "using built-in route table");
                version
                    .table()
                    .with_context(|| format!("Built-in table `{}` is invalid", version))
            }
        }
    }

    pub fn describe(&self) -> String {
        match &self.config {
            Some(path) => path.display().to_string(),
            None => format!("preset {}", self.preset.unwrap_or_default()),
        }
    }
}

use anyhow::Result;
use recipe_router::{RouterConfig, TableVersion};

pub fn execute(preset: TableVersion) -> Result<()> {
    let config = RouterConfig::from_version(preset)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

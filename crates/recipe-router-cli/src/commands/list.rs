use anyhow::Result;
use colored::Colorize;
use recipe_router::{RouteEntry, RouteTarget};

use crate::source::TableSource;

pub fn execute(source: &TableSource) -> Result<()> {
    let table = source.load()?;

    println!(
        "{} ({} routes)",
        source.describe().green().bold(),
        table.len()
    );
    if let Some(base) = table.base_path() {
        println!("  base: {}", base.cyan());
    }
    println!();

    for (index, entry) in table.routes().iter().enumerate() {
        println!("  {:>2}. {}", index, describe_entry(entry));
    }

    Ok(())
}

fn describe_entry(entry: &RouteEntry) -> String {
    let target = match &entry.target {
        RouteTarget::View(view) => format!("-> {}", view.to_string().cyan()),
        RouteTarget::Redirect(to) => format!("=> {}", to.yellow()),
    };

    let mut flags = Vec::new();
    if entry.props {
        flags.push("props".to_string());
    }
    if let Some(key) = &entry.key {
        flags.push(match key.param_name() {
            Some(param) => format!("key:{}", param),
            None => "key:custom".to_string(),
        });
    }
    if let Some(name) = &entry.name {
        flags.push(format!("name:{}", name));
    }

    if flags.is_empty() {
        format!("{:<28} {}", entry.pattern, target)
    } else {
        format!(
            "{:<28} {} {}",
            entry.pattern,
            target,
            format!("[{}]", flags.join(", ")).dimmed()
        )
    }
}

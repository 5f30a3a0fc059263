use anyhow::{bail, Result};
use colored::Colorize;
use recipe_router::{Navigation, Navigator, RenderAction};

use super::format_params;
use crate::source::TableSource;

pub fn execute(source: &TableSource, paths: &[String], navigate: bool) -> Result<()> {
    let table = source.load()?;
    let mut navigator = Navigator::new(table);
    let mut failures = 0;

    for path in paths {
        let outcome = if navigate {
            navigator
                .navigate(path)
                .map(|transition| (transition.navigation, Some(transition.action)))
        } else {
            navigator.table().resolve(path).map(|nav| (nav, None))
        };

        match outcome {
            Ok((navigation, action)) => print_navigation(path, &navigation, action),
            Err(err) => {
                failures += 1;
                println!("{} {}", path.bold(), format!("✗ {}", err).red());
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} path(s) did not resolve", failures, paths.len());
    }

    Ok(())
}

fn print_navigation(requested: &str, navigation: &Navigation, action: Option<RenderAction>) {
    let mut line = format!("{} -> {}", requested.bold(), navigation.view.to_string().green());

    if navigation.was_redirected() {
        let mut chain = navigation.redirected_from.clone();
        chain.push(navigation.path.clone());
        line.push_str(&format!("  via {}", chain.join(" => ").yellow()));
    }

    line.push_str(&format!("  params {}", format_params(navigation.params())));

    if navigation.entry().props {
        line.push_str(&format!("  props {}", format_params(&navigation.props())));
    }

    if let Some(key) = navigation.render_key() {
        line.push_str(&format!("  key {:?}", key));
    }

    if let Some(action) = action {
        let label = match action {
            RenderAction::Mount => "mount".cyan(),
            RenderAction::Remount => "remount".magenta(),
            RenderAction::Reuse => "reuse".dimmed(),
        };
        line.push_str(&format!("  [{}]", label));
    }

    println!("{}", line);
}

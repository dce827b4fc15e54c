use std::borrow::Cow;
use std::path::Path;

use crate::prelude::{println, *};
use colored::Colorize;
use folio_core::taxonomy::Taxonomy;

#[derive(Debug, clap::Parser)]
#[command(name = "taxonomy")]
#[command(about = "Print the active service taxonomy")]
pub struct App {
    /// Print the taxonomy as TOML (usable as a --taxonomy file)
    #[arg(long)]
    pub toml: bool,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let taxonomy = load(global.taxonomy.as_deref())?;

    if app.toml {
        let text = taxonomy
            .to_toml_string()
            .map_err(|e| eyre!("Failed to serialize taxonomy: {}", e))?;
        println!("{}", text);
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(prettytable::row![
        "Category".bold().cyan(),
        "Offerings".bold().cyan()
    ]);
    for entry in taxonomy.categories() {
        table.add_row(prettytable::row![
            entry.name.bright_white(),
            entry.offerings.join(", ")
        ]);
    }
    table.printstd();

    println!();
    println!(
        "{} {}",
        "Tools:".green(),
        taxonomy.tools().len().to_string().bright_white()
    );

    Ok(())
}

/// The taxonomy selected by `--taxonomy`, or the built-in one.
pub fn load(path: Option<&Path>) -> Result<Cow<'static, Taxonomy>> {
    let Some(path) = path else {
        return Ok(Cow::Borrowed(Taxonomy::builtin()));
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read taxonomy file {}", path.display()))?;
    let taxonomy = Taxonomy::from_toml_str(&text)
        .map_err(|e| eyre!("{}: {}", path.display(), e))?;

    log::debug!(
        "Loaded taxonomy from {} ({} categories, {} tools)",
        path.display(),
        taxonomy.categories().len(),
        taxonomy.tools().len()
    );

    Ok(Cow::Owned(taxonomy))
}

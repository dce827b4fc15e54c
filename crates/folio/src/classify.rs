use crate::prelude::{println, *};
use colored::Colorize;
use folio_core::classify::{classify, ClassificationResult};

#[derive(Debug, clap::Parser)]
#[command(name = "classify")]
#[command(about = "Classify skills and tools against the service taxonomy")]
pub struct App {
    /// Declared skills and tools, matched exactly (case-sensitive)
    #[arg(required = true)]
    pub items: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let taxonomy = crate::taxonomy::load(global.taxonomy.as_deref())?;
    let result = classify(&taxonomy, &app.items);

    if app.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result, &app.items);
    }

    Ok(())
}

fn print_result(result: &ClassificationResult, items: &[String]) {
    if result.is_empty() {
        println!("{}", "No matches".yellow());
        return;
    }

    if !result.categories.is_empty() {
        let mut table = new_table();
        table.add_row(prettytable::row![
            "Category".bold().cyan(),
            "Services".bold().cyan()
        ]);
        for entry in &result.categories {
            table.add_row(prettytable::row![
                entry.category.bright_white(),
                entry.services.join(", ").green()
            ]);
        }
        table.printstd();
    }

    if !result.tools.is_empty() {
        println!();
        println!("{} {}", "Tools:".green(), result.tools.join(", "));
    }

    let unmatched: Vec<&str> = items
        .iter()
        .map(String::as_str)
        .filter(|item| {
            !result.tools.iter().any(|t| t == item)
                && !result
                    .categories
                    .iter()
                    .any(|c| c.services.iter().any(|s| s == item))
        })
        .collect();

    if !unmatched.is_empty() {
        println!("{} {}", "Unmatched:".bright_black(), unmatched.join(", "));
    }
}

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use super::DieArgs;

pub fn run(args: &DieArgs, json: bool) -> Result<(), String> {
    let die = super::build_die(args)?;
    let state = die.snapshot();

    if json {
        let out = serde_json::to_string_pretty(&state).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let probabilities = die.probabilities().ok();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Face", "Weight", "Probability"]);

    for (i, entry) in state.entries.iter().enumerate() {
        let prob = probabilities
            .as_ref()
            .map(|p| format!("{:.4}", p[i].1))
            .unwrap_or_else(|| "--".to_string());
        table.add_row(vec![
            entry.face.to_string(),
            format!("{}", entry.weight),
            prob,
        ]);
    }

    println!("  {}", "Die".bold().underline());
    println!();
    println!("{table}");
    println!();
    println!("  {} faces, total weight {}", die.len(), die.total_weight());
    if probabilities.is_none() {
        println!("  {}", "all weights are zero: this die cannot be rolled".yellow());
    }

    Ok(())
}

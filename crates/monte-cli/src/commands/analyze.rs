use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde_json::json;

use monte_core::{Analyzer, Face, OutcomeCounts};

use super::{GameArgs, Stat};

pub fn run(args: &GameArgs, stat: Stat, json: bool) -> Result<(), String> {
    let game = super::run_game(args)?;
    let analyzer = Analyzer::new(&game);
    let wants = |s: Stat| stat == Stat::All || stat == s;

    if json {
        let mut out = serde_json::Map::new();
        if wants(Stat::Jackpot) {
            out.insert(
                "jackpot".to_string(),
                json!(analyzer.jackpot_count().map_err(|e| e.to_string())?),
            );
        }
        if wants(Stat::Faces) {
            out.insert(
                "faces".to_string(),
                json!(analyzer.face_count().map_err(|e| e.to_string())?),
            );
        }
        if wants(Stat::Combos) {
            out.insert(
                "combos".to_string(),
                json!(analyzer.combo_count().map_err(|e| e.to_string())?),
            );
        }
        if wants(Stat::Perms) {
            out.insert(
                "perms".to_string(),
                json!(analyzer.perm_count().map_err(|e| e.to_string())?),
            );
        }
        let out = serde_json::to_string_pretty(&out).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!(
        "  {} {}",
        "Analysis".bold(),
        format!("({} rounds, {} dice)", args.rounds, game.len()).dimmed()
    );
    println!();

    if wants(Stat::Jackpot) {
        let rounds = analyzer.jackpot_rounds().map_err(|e| e.to_string())?;
        println!("  {} {}", "Jackpots:".bold(), rounds.len());
        if !rounds.is_empty() {
            let listed: Vec<String> = rounds.iter().map(ToString::to_string).collect();
            println!("  {}", format!("rounds {}", listed.join(", ")).dimmed());
        }
        println!();
    }

    if wants(Stat::Faces) {
        let counts = analyzer.face_count().map_err(|e| e.to_string())?;
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        let mut header = vec!["Round".to_string()];
        header.extend(counts.faces().iter().map(ToString::to_string));
        table.set_header(header);
        for (round, row) in counts.iter() {
            let mut cells = vec![round.to_string()];
            cells.extend(row.iter().map(ToString::to_string));
            table.add_row(cells);
        }
        let mut totals = vec!["Total".to_string()];
        totals.extend(counts.totals().iter().map(|(_, n)| n.to_string()));
        table.add_row(totals);

        println!("  {}", "Face Counts".bold().underline());
        println!();
        println!("{table}");
        println!();
    }

    if wants(Stat::Combos) {
        let combos = analyzer.combo_count().map_err(|e| e.to_string())?;
        print_outcomes("Combinations", &combos);
    }

    if wants(Stat::Perms) {
        let perms = analyzer.perm_count().map_err(|e| e.to_string())?;
        print_outcomes("Permutations", &perms);
    }

    Ok(())
}

fn print_outcomes(title: &str, counts: &OutcomeCounts) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Outcome", "Count"]);
    for entry in counts.iter() {
        table.add_row(vec![format_outcome(&entry.outcome), entry.count.to_string()]);
    }

    println!("  {}", title.bold().underline());
    println!();
    println!("{table}");
    println!();
    println!("  {} distinct, {} rounds", counts.len(), counts.total());
    if let Some(top) = counts.most_common() {
        println!(
            "  {} {} x{}",
            "Most common:".bold(),
            format_outcome(&top.outcome),
            top.count
        );
    }
    println!();
}

fn format_outcome(outcome: &[Face]) -> String {
    let labels: Vec<String> = outcome.iter().map(ToString::to_string).collect();
    format!("({})", labels.join(", "))
}

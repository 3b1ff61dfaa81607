use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use monte_core::{ResultForm, Results};

use super::GameArgs;

pub fn run(args: &GameArgs, form: &str, json: bool) -> Result<(), String> {
    let form = form.parse::<ResultForm>().map_err(|e| e.to_string())?;
    let game = super::run_game(args)?;
    let results = game.results(form).map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&results).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    match &results {
        Results::Wide(wide) => {
            let mut header = vec!["Round".to_string()];
            header.extend((0..wide.members()).map(|m| format!("Die {m}")));
            table.set_header(header);
            for (round, row) in wide.iter() {
                let mut cells = vec![round.to_string()];
                cells.extend(row.iter().map(ToString::to_string));
                table.add_row(cells);
            }
        }
        Results::Narrow(narrow) => {
            table.set_header(vec!["Round", "Die", "Outcome"]);
            for row in narrow.iter() {
                table.add_row(vec![
                    row.round.to_string(),
                    row.member.to_string(),
                    row.outcome.to_string(),
                ]);
            }
        }
    }

    let (rows, cols) = results.shape();
    println!(
        "  {} {}",
        "Results".bold(),
        format!("({form}, {rows} x {cols})").dimmed()
    );
    println!();
    println!("{table}");
    println!();
    println!("  {} rounds, {} dice", args.rounds, game.len());

    Ok(())
}

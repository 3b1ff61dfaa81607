//! End-to-end scenarios: build dice, run games, analyze the results.

use monte_core::{Analyzer, Die, Face, Game, GameConfig, MonteError, ResultForm};

fn seeded(seed: u64) -> GameConfig {
    GameConfig::default().with_seed(seed)
}

fn faces(labels: &[&str]) -> Vec<Face> {
    labels.iter().map(|&s| Face::from(s)).collect()
}

// ---------------------------------------------------------------------------
// dice
// ---------------------------------------------------------------------------

#[test]
fn six_sided_die_single_piece_game() {
    let die = Die::new([1, 2, 3, 4, 5, 6]).unwrap();
    let mut game = Game::with_config([die], seeded(1)).unwrap();
    game.run(5).unwrap();

    let table = game.wide().unwrap();
    assert_eq!(table.shape(), (5, 1));
    for (_, row) in table.iter() {
        let value = row[0].as_int().unwrap();
        assert!((1..=6).contains(&value));
    }
}

#[test]
fn reweight_is_visible_in_snapshot() {
    let mut die = Die::new(["A", "B", "C", "D"]).unwrap();
    die.reweight("B", 6).unwrap();
    let state = die.snapshot();
    assert_eq!(state.weights(), vec![1.0, 6.0, 1.0, 1.0]);
}

#[test]
fn duplicate_faces_fail_first() {
    assert_eq!(
        Die::new(["A", "A"]).unwrap_err(),
        MonteError::DuplicateFace(Face::from("A"))
    );
}

#[test]
fn unknown_face_message_names_face() {
    let mut die = Die::new(["A", "B", "C", "D"]).unwrap();
    let err = die.reweight("E", 10).unwrap_err();
    assert_eq!(err.to_string(), "'E' is not a face on this die");
}

// ---------------------------------------------------------------------------
// games
// ---------------------------------------------------------------------------

#[test]
fn coin_pair_jackpots() {
    let heads = || {
        let mut die = Die::new(["H", "T"]).unwrap();
        die.reweight("T", 0).unwrap();
        die
    };
    let mut game = Game::with_config([heads(), heads()], seeded(2)).unwrap();
    game.run(4).unwrap();
    assert_eq!(Analyzer::new(&game).jackpot_count(), Ok(4));
}

#[test]
fn three_faced_pair_shapes() {
    let dice = [
        Die::new(["A", "B", "C"]).unwrap(),
        Die::new(["A", "B", "C"]).unwrap(),
    ];
    let mut game = Game::with_config(dice, seeded(3)).unwrap();
    game.run(7).unwrap();

    let narrow = game.results("narrow".parse().unwrap()).unwrap();
    assert_eq!(narrow.shape(), (14, 1));

    let counts = game.analyzer().face_count().unwrap();
    assert_eq!(counts.shape(), (7, 3));
    assert!(counts.row_sums().iter().all(|&s| s == 2));
}

#[test]
fn bogus_form_is_rejected() {
    let err = "bogus".parse::<ResultForm>().unwrap_err();
    assert_eq!(err, MonteError::InvalidFormat("bogus".to_string()));
    assert_eq!(
        err.to_string(),
        "unknown result form 'bogus', expected 'wide' or 'narrow'"
    );
}

#[test]
fn incompatible_ensemble() {
    let dice = [
        Die::new(["A", "B", "C"]).unwrap(),
        Die::new([1, 2, 3]).unwrap(),
    ];
    assert!(matches!(
        Game::new(dice),
        Err(MonteError::IncompatibleEnsemble { position: 1 })
    ));
}

// ---------------------------------------------------------------------------
// shared dice and live analyzers
// ---------------------------------------------------------------------------

#[test]
fn shared_die_reweight_affects_next_run_of_every_game() {
    let die = Die::new(["H", "T"]).unwrap().into_shared();
    let mut first = Game::with_config([die.clone()], seeded(10)).unwrap();
    let mut second = Game::with_config([die.clone(), die.clone()], seeded(11)).unwrap();

    first.run(30).unwrap();
    let before = first.wide().unwrap();

    die.reweight("H", 0).unwrap();
    assert_eq!(first.wide().unwrap(), before);

    first.run(30).unwrap();
    second.run(30).unwrap();
    let tails = Face::from("T");
    for game in [&first, &second] {
        let table = game.wide().unwrap();
        assert!(table.iter().all(|(_, row)| row.iter().all(|f| f == &tails)));
    }
    assert_eq!(second.analyzer().jackpot_count(), Ok(30));
}

#[test]
fn analyzer_created_before_rerun_reports_new_table() {
    let dice = [
        Die::new(["A", "B", "C"]).unwrap(),
        Die::new(["A", "B", "C"]).unwrap(),
    ];
    let mut game = Game::with_config(dice, seeded(12)).unwrap();
    game.run(3).unwrap();
    let analyzer = Analyzer::new(&game);
    assert_eq!(analyzer.combo_count().unwrap().total(), 3);

    game.run(40).unwrap();
    assert_eq!(analyzer.combo_count().unwrap().total(), 40);
    assert_eq!(analyzer.face_count().unwrap().shape(), (40, 3));
}

#[test]
fn combination_keys_are_sorted_tuples() {
    let dice = [
        Die::new(["C", "A", "B"]).unwrap(),
        Die::new(["B", "C", "A"]).unwrap(),
        Die::new(["A", "B", "C"]).unwrap(),
    ];
    let mut game = Game::with_config(dice, seeded(13)).unwrap();
    game.run(60).unwrap();
    let combos = game.analyzer().combo_count().unwrap();
    for entry in combos.iter() {
        let mut sorted = entry.outcome.clone();
        sorted.sort();
        assert_eq!(entry.outcome, sorted);
        assert_eq!(entry.outcome.len(), 3);
    }
    assert!(combos.count(&faces(&["A", "B", "C"])) <= 60);
}

#[test]
fn results_serialize_to_json() {
    let die = Die::new([1, 2]).unwrap();
    let mut game = Game::with_config([die], seeded(14)).unwrap();
    game.run(2).unwrap();
    let json = serde_json::to_value(game.narrow().unwrap()).unwrap();
    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["round"], 1);
    assert_eq!(rows[1]["member"], 0);
    assert!(rows[0]["outcome"].is_i64());
}

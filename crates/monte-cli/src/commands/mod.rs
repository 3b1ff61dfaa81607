pub mod analyze;
pub mod die;
pub mod play;

use clap::{Args, ValueEnum};

use monte_core::{Die, Face, Game, GameConfig};

/// Options describing one die.
#[derive(Args, Debug, Clone)]
pub struct DieArgs {
    /// Comma-separated faces, e.g. "1,2,3,4,5,6" or "H,T"
    #[arg(short, long)]
    pub faces: String,

    /// Face weight as FACE=WEIGHT (repeatable)
    #[arg(short, long = "weight", value_name = "FACE=WEIGHT")]
    pub weights: Vec<String>,
}

/// Options describing a game: the die, how many copies, how many rounds.
#[derive(Args, Debug, Clone)]
pub struct GameArgs {
    #[command(flatten)]
    pub die: DieArgs,

    /// Number of identical dice rolled each round
    #[arg(short = 'n', long, default_value = "2")]
    pub dice: usize,

    /// Number of rounds
    #[arg(short, long, default_value = "10")]
    pub rounds: usize,

    /// RNG seed for reproducible runs
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Statistics the `analyze` command can print.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    /// Rounds where every die matched
    Jackpot,
    /// Per-round face counts
    Faces,
    /// Unordered outcome counts
    Combos,
    /// Ordered outcome counts
    Perms,
    /// Everything
    All,
}

/// Split a comma-separated face list. Integers become numeric faces.
pub fn parse_faces(list: &str) -> Vec<Face> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            let Ok(face) = s.parse::<Face>();
            face
        })
        .collect()
}

/// Split `FACE=WEIGHT`.
pub fn parse_weight(arg: &str) -> Result<(Face, &str), String> {
    let (face, weight) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected FACE=WEIGHT, got '{arg}'"))?;
    let Ok(face) = face.parse::<Face>();
    Ok((face, weight.trim()))
}

/// Build a die from its faces and apply every weight.
pub fn build_die(args: &DieArgs) -> Result<Die, String> {
    let mut die = Die::new(parse_faces(&args.faces)).map_err(|e| e.to_string())?;
    for arg in &args.weights {
        let (face, weight) = parse_weight(arg)?;
        die.reweight(face, weight).map_err(|e| e.to_string())?;
    }
    Ok(die)
}

/// Build the game and run it.
pub fn run_game(args: &GameArgs) -> Result<Game, String> {
    let die = build_die(&args.die)?;
    let pieces = vec![die; args.dice];

    let mut config = GameConfig::default();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut game = Game::with_config(pieces, config).map_err(|e| e.to_string())?;
    game.run(args.rounds).map_err(|e| e.to_string())?;
    log::info!("played {} rounds with {} dice", args.rounds, args.dice);
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faces_infer_types() {
        assert_eq!(
            parse_faces("1, 2,H,,3"),
            vec![Face::from(1), Face::from(2), Face::from("H"), Face::from(3)]
        );
    }

    #[test]
    fn weight_argument() {
        assert_eq!(parse_weight("B=6"), Ok((Face::from("B"), "6")));
        assert_eq!(parse_weight("3= 2.5"), Ok((Face::from(3), "2.5")));
        assert!(parse_weight("B6").is_err());
    }

    #[test]
    fn build_die_applies_weights() {
        let args = DieArgs {
            faces: "A,B,C".to_string(),
            weights: vec!["B=6".to_string()],
        };
        let die = build_die(&args).unwrap();
        assert_eq!(die.weight(&Face::from("B")), Some(6.0));
        assert_eq!(die.weight(&Face::from("A")), Some(1.0));
    }

    #[test]
    fn build_die_reports_errors() {
        let args = DieArgs {
            faces: "A,A".to_string(),
            weights: Vec::new(),
        };
        assert_eq!(build_die(&args).unwrap_err(), "duplicate face: A");
    }

    #[test]
    fn run_game_with_zero_dice_fails() {
        let args = GameArgs {
            die: DieArgs {
                faces: "H,T".to_string(),
                weights: Vec::new(),
            },
            dice: 0,
            rounds: 3,
            seed: Some(1),
        };
        assert_eq!(run_game(&args).unwrap_err(), "a game needs at least one die");
    }
}

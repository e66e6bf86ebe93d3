use clap::Parser;
use flotilla::{
    coord_label, fleet_board, init_logging, target_board, AutoPlayer, CliPlayer, Coord, Game,
    GameConfig, GameError, GameStatus, GuessResult, Player, DEFAULT_BOARD_SIZE,
    DEFAULT_MAX_SHIP_LENGTH,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Play against the automated opponent.
    Play {
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        board_size: i32,
        #[arg(long, default_value_t = DEFAULT_MAX_SHIP_LENGTH)]
        max_ship_length: usize,
        #[arg(long, help = "Print both boards after every exchange")]
        show_boards: bool,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch an automated player fight the automated opponent.
    Auto {
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        board_size: i32,
        #[arg(long, default_value_t = DEFAULT_MAX_SHIP_LENGTH)]
        max_ship_length: usize,
        #[arg(long, help = "Print both boards after every exchange")]
        show_boards: bool,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            board_size,
            max_ship_length,
            show_boards,
            seed,
        } => {
            let config = GameConfig::new(board_size, max_ship_length, show_boards)?;
            let mut rng = make_rng(seed);
            let mut game = Game::new(&mut rng, config)?;
            let mut player = CliPlayer::new(board_size);
            println!("Your fleet is deployed:");
            print!("{}", fleet_board(game.player_ocean(), game.foe_shots()));
            run_match(&mut game, &mut player, &mut rng)?;
        }
        Commands::Auto {
            board_size,
            max_ship_length,
            show_boards,
            seed,
        } => {
            let config = GameConfig::new(board_size, max_ship_length, show_boards)?;
            let mut rng = make_rng(seed);
            let mut game = Game::new(&mut rng, config)?;
            let mut player = AutoPlayer::new(board_size);
            run_match(&mut game, &mut player, &mut rng)?;
        }
    }
    Ok(())
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn announce(side: &str, coord: Coord, result: GuessResult) {
    match result {
        GuessResult::Miss => println!("{} fires at {}: miss.", side, coord_label(coord)),
        GuessResult::Hit => println!("{} fires at {}: hit!", side, coord_label(coord)),
        GuessResult::Sunk { length } => println!(
            "{} fires at {}: hit -- a length-{} ship goes down!",
            side,
            coord_label(coord),
            length
        ),
    }
}

fn run_match<P: Player>(game: &mut Game, player: &mut P, rng: &mut SmallRng) -> anyhow::Result<()> {
    loop {
        let (coord, result) = loop {
            let coord = player.select_target(rng)?;
            match game.player_guess(coord.row, coord.col) {
                Ok(result) => break (coord, result),
                Err(GameError::AlreadyGuessed { .. }) => {
                    println!("You already fired at {}.", coord_label(coord));
                }
                Err(err) => return Err(err.into()),
            }
        };
        announce("Player", coord, result);
        if game.status() != GameStatus::InProgress {
            break;
        }

        let (coord, result) = game.automated_turn(rng)?;
        announce("Opponent", coord, result);

        if game.config().show_boards() {
            println!("\nTarget board:");
            print!(
                "{}",
                target_board(game.config().board_size(), game.player_shots())
            );
            println!("\nYour fleet:");
            print!("{}", fleet_board(game.player_ocean(), game.foe_shots()));
        }
        if game.status() != GameStatus::InProgress {
            break;
        }
    }

    match game.status() {
        GameStatus::Won => println!("\nVictory! The enemy fleet has been destroyed."),
        GameStatus::Lost => println!("\nDefeat. Your fleet has been destroyed."),
        GameStatus::InProgress => {}
    }
    Ok(())
}

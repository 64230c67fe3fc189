//! Othello AI Engine CLI
//!
//! Plays one full game, engine against engine or engine (Black) against a
//! seeded random player (White), printing the board after every move.

use std::time::Duration;

use log::info;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use structopt::StructOpt;

use othello::config::DEFAULT_TT_SLOTS;
use othello::{
    legal_moves, AIEngine, DepthPolicy, EngineConfig, Game, GameError, Pos, Stone, Turn,
};

/// Othello engine self-play driver.
#[derive(StructOpt, Debug)]
#[structopt(name = "othello")]
struct Opt {
    /// White plays uniformly random legal moves instead of searching
    #[structopt(long)]
    white_random: bool,

    /// Seed for the random player
    #[structopt(long, default_value = "1")]
    seed: u64,

    /// Search depth while more than 13 cells are empty
    #[structopt(long, default_value = "4")]
    opening_depth: i8,

    /// Search depth with at most 13 empty cells
    #[structopt(long, default_value = "6")]
    midgame_depth: i8,

    /// Search depth with at most 10 empty cells
    #[structopt(long, default_value = "8")]
    endgame_depth: i8,

    /// Transposition table slots
    #[structopt(long, default_value = "262144")]
    tt_slots: usize,

    /// Soft time limit per move in milliseconds (checked between depths)
    #[structopt(long)]
    time_limit_ms: Option<u64>,

    /// Only print the final result
    #[structopt(short, long)]
    quiet: bool,
}

impl Opt {
    fn engine_config(&self) -> EngineConfig {
        let tiers = DepthPolicy::default();
        EngineConfig {
            tt_slots: if self.tt_slots == 0 { DEFAULT_TT_SLOTS } else { self.tt_slots },
            depth_policy: DepthPolicy {
                opening_depth: self.opening_depth,
                midgame_depth: self.midgame_depth,
                endgame_depth: self.endgame_depth,
                ..tiers
            },
            time_limit: self.time_limit_ms.map(Duration::from_millis),
        }
    }
}

fn main() -> Result<(), GameError> {
    env_logger::init();
    let opt = Opt::from_args();
    info!("{:?}", opt);

    let mut engine = AIEngine::with_config(opt.engine_config());
    let mut rng = SmallRng::seed_from_u64(opt.seed);
    let mut game = Game::new();

    if !opt.quiet {
        println!("{}", game.board());
    }

    while !game.is_over() {
        let color = game.side_to_move();
        let board = *game.board();

        let choice = if opt.white_random && color == Stone::White {
            legal_moves(&board, color).choose(&mut rng).copied()
        } else {
            engine.choose_move(&board, color)
        };

        let Some(pos) = choice else {
            if !opt.quiet {
                println!("{color:?} passes\n");
            }
            game.pass()?;
            continue;
        };

        let turn = game.play(pos)?;
        if !opt.quiet {
            print_move(color, pos, &game);
            if let Turn::Pass(passer) = turn {
                println!("{passer:?} has no move and passes\n");
            }
        }
    }

    let (black, white) = game.score();
    match game.outcome().and_then(|o| o.winner) {
        Some(winner) => println!("{winner:?} wins {black}-{white}"),
        None => println!("Draw {black}-{white}"),
    }
    println!("Moves played: {}", game.move_history().len());
    Ok(())
}

fn print_move(color: Stone, pos: Pos, game: &Game) {
    let (black, white) = game.score();
    println!("{color:?} plays {pos}  (X {black} - O {white})");
    println!("{}", game.board());
}

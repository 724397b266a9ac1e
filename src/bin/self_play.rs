//! Search-vs-random demo game.
//!
//! Usage:
//! `cargo run --release --bin self_play`
//! `RUST_LOG=debug cargo run --release --bin self_play -- --depth 3 --plies 120 --seed 7`

use bitchess::game::Game;
use bitchess::players::random_player::RandomPlayer;
use bitchess::players::search_player::SearchPlayer;
use bitchess::search::negamax::SearchConfig;
use bitchess::utils::render_game_state::render_game_state;

fn parse_arg<T: std::str::FromStr>(flag: &str, default: T) -> T {
    let args: Vec<String> = std::env::args().collect();
    args.windows(2)
        .find(|pair| pair[0] == flag)
        .and_then(|pair| pair[1].parse::<T>().ok())
        .unwrap_or(default)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let depth: u8 = parse_arg("--depth", 3u8).max(1);
    let plies: usize = parse_arg("--plies", 200usize);
    let seed: u64 = parse_arg("--seed", 1u64);

    let white = SearchPlayer::new(SearchConfig {
        max_depth: depth,
        ..SearchConfig::default()
    });
    let black = RandomPlayer::seeded(seed);
    let mut game = Game::new(Box::new(white), Box::new(black));

    match game.play(plies) {
        Ok(result) => {
            println!("{}", render_game_state(game.board().state()));
            println!("result: {result:?} after {} plies", game.history().len());
            println!("fen: {}", game.board().to_fen());
        }
        Err(err) => {
            eprintln!("game aborted: {err}");
            std::process::exit(1);
        }
    }
}

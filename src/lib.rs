//! Crate root module declarations for the bitchess rules and search engine.
//!
//! Exposes the bitboard game state, move generation, search, the player
//! abstraction and the game loop so binaries, benches and external
//! presentation layers can import stable module paths.

pub mod errors;
pub mod game;

pub mod game_state {
    pub mod bitboard;
    pub mod bitboard_state;
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod chess_move;
    pub mod geometry;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod move_ordering;
    pub mod negamax;
    pub mod transposition_table;
    pub mod zobrist;
}

pub mod players {
    pub mod human_player;
    pub mod player_trait;
    pub mod random_player;
    pub mod search_player;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
}

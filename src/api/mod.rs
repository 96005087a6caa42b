//! Public API for the rules engine.
//!
//! The presentation layer drives one [`Game`]: `legal_moves` for
//! highlighting, `make_move` with the two chosen squares, the state queries
//! for banners and check indicators, and `get`/`last_move` for rendering.
//!
//! ## Module Organization
//!
//! - `game` - lifecycle and read access
//! - `moves` - legal move computation and the move entry point
//! - `state` - check, checkmate, and stalemate queries

mod game;
mod moves;
mod state;

pub use game::Game;

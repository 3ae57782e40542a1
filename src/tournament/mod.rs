// src/tournament/mod.rs

pub mod runtime;

pub use runtime::{EliminationTournament, RoundResult, TournamentError, TournamentStatus};

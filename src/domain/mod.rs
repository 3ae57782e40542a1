//! Доменная модель: карты, колода, игроки, состояние партии, конфиг.

pub mod card;
pub mod config;
pub mod deck;
pub mod game;
pub mod player;

// Строковый id приходит снаружи (транспорт/авторизация), движок его не интерпретирует.
pub type PlayerId = String;
pub type GameId = u64;
pub type TournamentId = u64;
/// Индекс места в арене игроков партии.
pub type SeatIndex = usize;

pub use card::*;
pub use config::*;
pub use deck::*;
pub use game::*;
pub use player::*;

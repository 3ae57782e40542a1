use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::{GameId, TournamentId};

/// Простая генерация ID на основе монотонных счётчиков.
///
/// Id игроков приходят снаружи (транспорт/авторизация), здесь их нет.
#[derive(Debug)]
pub struct IdGenerator {
    game_counter: AtomicU64,
    tournament_counter: AtomicU64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    /// Создать генератор с начальным значением 1 для всех сущностей.
    pub fn new() -> Self {
        Self {
            game_counter: AtomicU64::new(1),
            tournament_counter: AtomicU64::new(1),
        }
    }

    #[inline]
    pub fn next_game_id(&self) -> GameId {
        self.game_counter.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn next_tournament_id(&self) -> TournamentId {
        self.tournament_counter.fetch_add(1, Ordering::Relaxed)
    }
}

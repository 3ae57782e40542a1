// src/engine/game_manager.rs

use std::collections::HashMap;

use thiserror::Error;

use crate::domain::card::{Card, Suit};
use crate::domain::{GameId, PlayerId};
use crate::engine::{EngineError, GameEngine, GameStatus, PlayOutcome, RandomSource};

/// Ошибки уровня менеджера партий (над движком одной партии).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ManagerError {
    /// Партия с таким ID не найдена.
    #[error("Партия {0} не найдена")]
    GameNotFound(GameId),

    /// Проброшенная ошибка из движка.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Менеджер партий:
/// - хранит несколько независимых партий по GameId;
/// - даёт play/draw/eliminate поверх `GameEngine` конкретной партии.
///
/// Синхронизации внутри нет: вызовы для одной партии сериализует владелец менеджера.
#[derive(Debug, Default)]
pub struct GameManager {
    games: HashMap<GameId, GameEngine>,
}

impl GameManager {
    /// Создать пустой менеджер.
    pub fn new() -> Self {
        Self {
            games: HashMap::new(),
        }
    }

    /// Добавить партию под её GameId. Партия с тем же id заменяется.
    pub fn add_game(&mut self, engine: GameEngine) {
        let id = engine.game.id;
        self.games.insert(id, engine);
    }

    pub fn game_ids(&self) -> Vec<GameId> {
        let mut ids: Vec<GameId> = self.games.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn engine(&self, game_id: GameId) -> Result<&GameEngine, ManagerError> {
        self.games
            .get(&game_id)
            .ok_or(ManagerError::GameNotFound(game_id))
    }

    pub fn engine_mut(&mut self, game_id: GameId) -> Result<&mut GameEngine, ManagerError> {
        self.games
            .get_mut(&game_id)
            .ok_or(ManagerError::GameNotFound(game_id))
    }

    pub fn play_cards(
        &mut self,
        game_id: GameId,
        player_id: &str,
        cards: &[Card],
        declared_suit: Option<Suit>,
    ) -> Result<PlayOutcome, ManagerError> {
        Ok(self
            .engine_mut(game_id)?
            .play_cards(player_id, cards, declared_suit)?)
    }

    pub fn draw_cards<R: RandomSource>(
        &mut self,
        game_id: GameId,
        rng: &mut R,
        player_id: &str,
        count: u32,
    ) -> Result<Vec<Card>, ManagerError> {
        Ok(self.engine_mut(game_id)?.draw_cards(rng, player_id, count)?)
    }

    pub fn eliminate_player(
        &mut self,
        game_id: GameId,
        player_id: &str,
    ) -> Result<GameStatus, ManagerError> {
        Ok(self.engine_mut(game_id)?.eliminate_player(player_id)?)
    }

    pub fn start_next_round<R: RandomSource>(
        &mut self,
        game_id: GameId,
        rng: &mut R,
        continuing: &[PlayerId],
    ) -> Result<(), ManagerError> {
        Ok(self
            .engine_mut(game_id)?
            .start_next_round(rng, continuing)?)
    }

    pub fn valid_cards(&self, game_id: GameId, player_id: &str) -> Result<Vec<Card>, ManagerError> {
        Ok(self.engine(game_id)?.valid_cards_for(player_id)?)
    }
}

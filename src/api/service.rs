use tracing::warn;

use crate::domain::card::{Card, Suit};
use crate::domain::config::GameConfig;
use crate::domain::{GameId, PlayerId};
use crate::engine::{GameEngine, GameManager, RandomSource};
use crate::infra::IdGenerator;

use super::commands::Command;
use super::dto::{map_play_outcome, CommandResponse, DrawResult, GameStateSnapshot, PlayResult};
use super::errors::ApiError;
use super::queries::{build_game_view, Query, QueryResponse};

/// Внутрипроцессный контракт движка для транспортного слоя.
///
/// Держит менеджер партий, генератор id и RNG. Каждая успешная мутация
/// возвращает свежий снимок - его транспорт и рассылает.
#[derive(Debug)]
pub struct EightsService<R: RandomSource> {
    manager: GameManager,
    ids: IdGenerator,
    rng: R,
    config: GameConfig,
}

impl<R: RandomSource> EightsService<R> {
    pub fn new(rng: R, config: GameConfig) -> Self {
        Self {
            manager: GameManager::new(),
            ids: IdGenerator::new(),
            rng,
            config,
        }
    }

    pub fn manager(&self) -> &GameManager {
        &self.manager
    }

    /// Создать партию и раздать карты.
    pub fn start_game(
        &mut self,
        player_ids: Vec<PlayerId>,
        player_names: Vec<String>,
    ) -> Result<GameStateSnapshot, ApiError> {
        let game_id = self.ids.next_game_id();
        let mut engine =
            GameEngine::from_lists(game_id, player_ids, player_names, self.config.clone())?;
        engine.start_game(&mut self.rng)?;

        let snapshot = build_game_view(&engine, None);
        self.manager.add_game(engine);
        Ok(snapshot)
    }

    pub fn play_cards(
        &mut self,
        game_id: GameId,
        player_id: &str,
        cards: &[Card],
        declared_suit: Option<Suit>,
    ) -> Result<PlayResult, ApiError> {
        let outcome = self
            .manager
            .play_cards(game_id, player_id, cards, declared_suit)
            .inspect_err(|e| warn!(game_id, player_id, error = %e, "play rejected"))?;
        let state = self.view(game_id, Some(player_id))?;
        Ok(map_play_outcome(outcome, state))
    }

    pub fn draw_cards(
        &mut self,
        game_id: GameId,
        player_id: &str,
        count: u32,
    ) -> Result<DrawResult, ApiError> {
        let drawn_cards = self
            .manager
            .draw_cards(game_id, &mut self.rng, player_id, count)
            .inspect_err(|e| warn!(game_id, player_id, error = %e, "draw rejected"))?;
        let state = self.view(game_id, Some(player_id))?;
        Ok(DrawResult { drawn_cards, state })
    }

    pub fn eliminate_player(
        &mut self,
        game_id: GameId,
        player_id: &str,
    ) -> Result<GameStateSnapshot, ApiError> {
        self.manager.eliminate_player(game_id, player_id)?;
        self.view(game_id, None)
    }

    pub fn start_next_round(
        &mut self,
        game_id: GameId,
        continuing: &[PlayerId],
    ) -> Result<GameStateSnapshot, ApiError> {
        self.manager
            .start_next_round(game_id, &mut self.rng, continuing)?;
        self.view(game_id, None)
    }

    /// Снимок партии глазами `viewer`.
    pub fn get_game_state(
        &self,
        game_id: GameId,
        viewer: Option<&str>,
    ) -> Result<GameStateSnapshot, ApiError> {
        self.view(game_id, viewer)
    }

    pub fn get_valid_cards_for_player(
        &self,
        game_id: GameId,
        player_id: &str,
    ) -> Result<Vec<Card>, ApiError> {
        Ok(self.manager.valid_cards(game_id, player_id)?)
    }

    /// Выполнить сериализуемую команду.
    pub fn execute(&mut self, command: Command) -> Result<CommandResponse, ApiError> {
        match command {
            Command::StartGame(cmd) => self
                .start_game(cmd.player_ids, cmd.player_names)
                .map(CommandResponse::GameStarted),
            Command::PlayCards(cmd) => self
                .play_cards(cmd.game_id, &cmd.player_id, &cmd.cards, cmd.declared_suit)
                .map(CommandResponse::Played),
            Command::DrawCards(cmd) => self
                .draw_cards(cmd.game_id, &cmd.player_id, cmd.count)
                .map(CommandResponse::Drew),
            Command::EliminatePlayer(cmd) => self
                .eliminate_player(cmd.game_id, &cmd.player_id)
                .map(CommandResponse::StateUpdated),
            Command::StartNextRound(cmd) => self
                .start_next_round(cmd.game_id, &cmd.continuing)
                .map(CommandResponse::StateUpdated),
        }
    }

    /// Выполнить запрос только на чтение.
    pub fn query(&self, query: Query) -> Result<QueryResponse, ApiError> {
        match query {
            Query::GetGameState { game_id, viewer } => self
                .get_game_state(game_id, viewer.as_deref())
                .map(QueryResponse::GameState),
            Query::GetValidCards { game_id, player_id } => self
                .get_valid_cards_for_player(game_id, &player_id)
                .map(QueryResponse::ValidCards),
            Query::ListGames => Ok(QueryResponse::Games(self.manager.game_ids())),
        }
    }

    fn view(&self, game_id: GameId, viewer: Option<&str>) -> Result<GameStateSnapshot, ApiError> {
        let engine = self.manager.engine(game_id)?;
        Ok(build_game_view(engine, viewer))
    }
}

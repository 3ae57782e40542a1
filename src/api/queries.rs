use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::game::GameState;
use crate::domain::{GameId, PlayerId};
use crate::engine::GameEngine;

use super::dto::{GameStateSnapshot, PlayerViewDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Снимок партии глазами `viewer` (None - наблюдатель, чужих карт не видно).
    GetGameState {
        game_id: GameId,
        viewer: Option<PlayerId>,
    },

    /// Карты, которые игрок может сыграть первой картой.
    GetValidCards { game_id: GameId, player_id: PlayerId },

    /// Список партий.
    ListGames,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    GameState(GameStateSnapshot),
    ValidCards(Vec<Card>),
    Games(Vec<GameId>),
}

/// Сформировать снимок партии. Полная рука - только у `viewer`,
/// у остальных - только размер.
pub fn build_game_view(engine: &GameEngine, viewer: Option<&str>) -> GameStateSnapshot {
    let game = &engine.game;

    let players = game
        .players
        .iter()
        .enumerate()
        .map(|(idx, p)| PlayerViewDto {
            player_id: p.id.clone(),
            name: p.name.clone(),
            seat_index: idx,
            hand_size: p.hand.len(),
            hand: if viewer == Some(p.id.as_str()) {
                Some(p.hand.clone())
            } else {
                None
            },
            is_safe: p.is_safe,
            is_eliminated: p.is_eliminated,
            is_current: game.current_seat == Some(idx),
        })
        .collect();

    let winner = if game.state == GameState::Finished {
        engine.winner().ok()
    } else {
        None
    };

    GameStateSnapshot {
        game_id: game.id,
        round_number: game.round_number,
        game_state: game.state,
        players,
        active_players: game.active_player_ids(),
        current_player: game.current_player().map(|p| p.id.clone()),
        current_player_index: game.current_player_index(),
        top_card: game.top_card().copied(),
        declared_suit: game.declared_suit,
        draw_stack: game.draw_stack,
        direction: game.direction,
        draw_pile_size: game.draw_pile.len(),
        discard_pile_size: game.discard_pile.len(),
        standings: engine.standings(),
        winner,
    }
}

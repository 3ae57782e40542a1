use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Suit};
use crate::domain::{GameId, PlayerId};

/// Команда верхнего уровня (всё, что меняет состояние).
///
/// Транспорт уже сопоставил сетевую личность с `player_id`
/// и сериализовал вызовы для одной партии.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Создать партию и сразу раздать карты.
    StartGame(StartGameCommand),

    /// Сыграть карту или стопку.
    PlayCards(PlayCardsCommand),

    /// Добрать карты (штраф или добровольно).
    DrawCards(DrawCardsCommand),

    /// Выбить игрока (например, по таймауту хода).
    EliminatePlayer(EliminatePlayerCommand),

    /// Начать следующий раунд после завершения партии.
    StartNextRound(StartNextRoundCommand),
}

/// Создание партии: два параллельных списка id и имён, в порядке мест.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StartGameCommand {
    pub player_ids: Vec<PlayerId>,
    pub player_names: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayCardsCommand {
    pub game_id: GameId,
    pub player_id: PlayerId,
    /// Порядок важен: последняя карта станет верхней в сбросе.
    pub cards: Vec<Card>,
    /// Обязательна, если среди карт есть восьмёрка.
    pub declared_suit: Option<Suit>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DrawCardsCommand {
    pub game_id: GameId,
    pub player_id: PlayerId,
    pub count: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EliminatePlayerCommand {
    pub game_id: GameId,
    pub player_id: PlayerId,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StartNextRoundCommand {
    pub game_id: GameId,
    /// Кто играет следующий раунд; остальные считаются выбитыми.
    pub continuing: Vec<PlayerId>,
}

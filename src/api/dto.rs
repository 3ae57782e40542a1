use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Suit};
use crate::domain::game::{Direction, GameState};
use crate::domain::{GameId, PlayerId};
use crate::engine::{GameStatus, PlayOutcome};

/// DTO игрока в снимке партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerViewDto {
    pub player_id: PlayerId,
    pub name: String,
    pub seat_index: usize,
    pub hand_size: usize,
    /// Карты - только для самого игрока, которому строится снимок.
    pub hand: Option<Vec<Card>>,
    pub is_safe: bool,
    pub is_eliminated: bool,
    pub is_current: bool,
}

/// Снимок партии только для чтения (для рендера / рассылки).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateSnapshot {
    pub game_id: GameId,
    pub round_number: u32,
    pub game_state: GameState,
    pub players: Vec<PlayerViewDto>,
    /// Игроки в ротации, в порядке мест.
    pub active_players: Vec<PlayerId>,
    pub current_player: Option<PlayerId>,
    /// Индекс текущего игрока внутри `active_players`.
    pub current_player_index: Option<usize>,
    pub top_card: Option<Card>,
    pub declared_suit: Option<Suit>,
    pub draw_stack: u32,
    pub direction: Direction,
    pub draw_pile_size: usize,
    pub discard_pile_size: usize,
    /// Текущий порядок мест (окончательный после Finished).
    pub standings: Vec<PlayerId>,
    pub winner: Option<PlayerId>,
}

/// Успешный ответ на `play_cards`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayResult {
    pub state: GameStateSnapshot,
    /// Игрок избавился от последней карты.
    pub player_safe: bool,
    /// Партия завершилась этим ходом.
    pub game_won: bool,
    pub winner: Option<PlayerId>,
}

/// Успешный ответ на `draw_cards`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrawResult {
    pub drawn_cards: Vec<Card>,
    pub state: GameStateSnapshot,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Создана и запущена новая партия.
    GameStarted(GameStateSnapshot),
    Played(PlayResult),
    Drew(DrawResult),
    /// Обновлённое состояние после выбывания / нового раунда.
    StateUpdated(GameStateSnapshot),
}

/// Помощник: преобразование результата хода движка в DTO.
pub fn map_play_outcome(outcome: PlayOutcome, state: GameStateSnapshot) -> PlayResult {
    let (game_won, winner) = match outcome.status {
        GameStatus::Ongoing => (false, None),
        GameStatus::Finished { winner } => (true, winner),
    };
    PlayResult {
        state,
        player_safe: outcome.player_safe,
        game_won,
        winner,
    }
}

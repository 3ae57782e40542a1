use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Suit};
use crate::domain::config::GameConfig;
use crate::domain::deck::Deck;
use crate::domain::player::Player;
use crate::domain::{GameId, PlayerId, SeatIndex};

/// Фаза партии.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameState {
    Setup,
    Playing,
    Finished,
}

/// Направление передачи хода по местам.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Direction {
    /// +1: по возрастанию индекса места.
    #[default]
    Clockwise,
    /// -1
    CounterClockwise,
}

impl Direction {
    pub fn sign(self) -> i64 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Полное состояние одной партии.
///
/// Игроки лежат в неизменной "арене": индекс в `players` = место (SeatIndex)
/// и не сдвигается при выбывании. Кто участвует в ротации - решает
/// `Player::is_active`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Game {
    pub id: GameId,
    pub config: GameConfig,
    pub players: Vec<Player>,
    /// Чей ход (место). None вне фазы Playing.
    pub current_seat: Option<SeatIndex>,
    pub direction: Direction,
    /// Верх сброса - последний элемент.
    pub discard_pile: Vec<Card>,
    pub draw_pile: Deck,
    /// Сколько карт должен добрать следующий игрок, если не перебьёт.
    pub draw_stack: u32,
    /// Масть, объявленная восьмёркой.
    pub declared_suit: Option<Suit>,
    pub state: GameState,
    pub round_number: u32,
    /// Игроки, избавившиеся от карт, в порядке выхода (первый - лучший).
    pub finish_order: Vec<PlayerId>,
    /// Выбитые игроки в порядке выбывания.
    pub elimination_order: Vec<PlayerId>,
}

impl Game {
    pub fn new(id: GameId, config: GameConfig, players: Vec<Player>) -> Self {
        Self {
            id,
            config,
            players,
            current_seat: None,
            direction: Direction::Clockwise,
            discard_pile: Vec::new(),
            draw_pile: Deck::default(),
            draw_stack: 0,
            declared_suit: None,
            state: GameState::Setup,
            round_number: 0,
            finish_order: Vec::new(),
            elimination_order: Vec::new(),
        }
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.discard_pile.last()
    }

    pub fn seat_of(&self, player_id: &str) -> Option<SeatIndex> {
        self.players.iter().position(|p| p.id == player_id)
    }

    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.current_seat.and_then(|s| self.players.get(s))
    }

    /// Сколько игроков ещё в ротации (не safe и не выбиты).
    pub fn active_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_active()).count()
    }

    /// Игроки в ротации, в порядке мест.
    pub fn active_player_ids(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|p| p.is_active())
            .map(|p| p.id.clone())
            .collect()
    }

    /// Индекс текущего игрока внутри списка активных.
    pub fn current_player_index(&self) -> Option<usize> {
        let seat = self.current_seat?;
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_active())
            .position(|(idx, _)| idx == seat)
    }

    /// Всего карт во всех зонах: добор + сброс + руки.
    pub fn total_cards(&self) -> usize {
        self.draw_pile.len()
            + self.discard_pile.len()
            + self.players.iter().map(|p| p.hand.len()).sum::<usize>()
    }
}

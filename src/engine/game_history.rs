use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Suit};
use crate::domain::game::Direction;
use crate::domain::{GameId, PlayerId};

/// Тип события в партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameEventKind {
    /// Карты розданы, открыта стартовая карта.
    GameStarted {
        game_id: GameId,
        round: u32,
        starter: Card,
    },

    /// Игрок сыграл стопку.
    CardsPlayed {
        player_id: PlayerId,
        cards: Vec<Card>,
        draw_stack_after: u32,
        direction_after: Direction,
    },

    /// Восьмёрка: объявлена масть.
    SuitDeclared {
        player_id: PlayerId,
        suit: Suit,
    },

    /// Игрок добрал карты (штраф или добровольно).
    CardsDrawn {
        player_id: PlayerId,
        requested: u32,
        drawn: u32,
        penalty: bool,
    },

    /// Сброс (кроме верхней карты) замешан в добор.
    DiscardReshuffled {
        cards: u32,
    },

    /// Игрок избавился от карт.
    PlayerSafe {
        player_id: PlayerId,
        place: u32,
    },

    PlayerEliminated {
        player_id: PlayerId,
    },

    GameFinished {
        winner: Option<PlayerId>,
        last_place: Option<PlayerId>,
    },
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameEvent {
    pub index: u32,
    pub kind: GameEventKind,
}

/// История партии (по всем раундам).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameHistory {
    pub events: Vec<GameEvent>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: GameEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(GameEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

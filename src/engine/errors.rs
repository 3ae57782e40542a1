use crate::domain::card::Card;
use crate::domain::config::ConfigError;
use crate::domain::game::GameState;
use crate::domain::PlayerId;
use crate::engine::stack_validator::{StackViolation, StackViolationReason};

use thiserror::Error;

/// Ошибки движка. Ни одна из них не меняет состояние партии.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Сейчас не ход игрока {0}")]
    NotYourTurn(PlayerId),

    #[error("Карты {0} нет в руке игрока")]
    CardNotInHand(Card),

    #[error("Карту {0} нельзя сыграть первой на текущий стол")]
    IllegalFirstCard(Card),

    #[error("Недопустимая стопка: {first} -> {second}: {reason}")]
    IllegalStack {
        first: Card,
        second: Card,
        reason: StackViolationReason,
    },

    #[error("Сыграна восьмёрка без объявления масти")]
    SuitDeclarationRequired,

    #[error("Операция недопустима в фазе {found:?} (нужна {expected:?})")]
    InvalidStateTransition { expected: GameState, found: GameState },

    #[error("Добор и сброс исчерпаны, брать нечего")]
    DeckExhausted,

    #[error("Не передано ни одной карты")]
    NoCardsPlayed,

    #[error("Количество карт для добора должно быть больше нуля")]
    InvalidDrawCount,

    #[error("Игрок {0} не найден в партии")]
    PlayerNotFound(PlayerId),

    #[error("Игрок {0} уже вне ротации")]
    PlayerNotActive(PlayerId),

    #[error("Недостаточно игроков: нужно минимум {min}, есть {got}")]
    NotEnoughPlayers { min: usize, got: usize },

    #[error("Некорректные игроки: {0}")]
    InvalidPlayers(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}

impl From<StackViolation> for EngineError {
    fn from(v: StackViolation) -> Self {
        EngineError::IllegalStack {
            first: v.first,
            second: v.second,
            reason: v.reason,
        }
    }
}

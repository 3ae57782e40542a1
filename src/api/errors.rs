use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::{EngineError, ManagerError};

/// Тип ошибки, который видит клиент.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ErrorKind {
    NotYourTurn,
    CardNotInHand,
    IllegalFirstCard,
    IllegalStack,
    SuitDeclarationRequired,
    InvalidStateTransition,
    DeckExhausted,
    NoCardsPlayed,
    InvalidDrawCount,
    PlayerNotFound,
    PlayerNotActive,
    NotEnoughPlayers,
    InvalidPlayers,
    InvalidConfig,
    GameNotFound,
    Internal,
}

impl From<&EngineError> for ErrorKind {
    fn from(err: &EngineError) -> Self {
        match err {
            EngineError::NotYourTurn(_) => ErrorKind::NotYourTurn,
            EngineError::CardNotInHand(_) => ErrorKind::CardNotInHand,
            EngineError::IllegalFirstCard(_) => ErrorKind::IllegalFirstCard,
            EngineError::IllegalStack { .. } => ErrorKind::IllegalStack,
            EngineError::SuitDeclarationRequired => ErrorKind::SuitDeclarationRequired,
            EngineError::InvalidStateTransition { .. } => ErrorKind::InvalidStateTransition,
            EngineError::DeckExhausted => ErrorKind::DeckExhausted,
            EngineError::NoCardsPlayed => ErrorKind::NoCardsPlayed,
            EngineError::InvalidDrawCount => ErrorKind::InvalidDrawCount,
            EngineError::PlayerNotFound(_) => ErrorKind::PlayerNotFound,
            EngineError::PlayerNotActive(_) => ErrorKind::PlayerNotActive,
            EngineError::NotEnoughPlayers { .. } => ErrorKind::NotEnoughPlayers,
            EngineError::InvalidPlayers(_) => ErrorKind::InvalidPlayers,
            EngineError::Config(_) => ErrorKind::InvalidConfig,
            EngineError::Internal(_) => ErrorKind::Internal,
        }
    }
}

/// Ошибка внешнего API: `{ success: false, error, message }`.
/// Состояние партии при этом не изменено, запрос можно повторить.
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
#[error("{kind:?}: {message}")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::new(ErrorKind::from(&err), err.to_string())
    }
}

impl From<ManagerError> for ApiError {
    fn from(err: ManagerError) -> Self {
        match err {
            ManagerError::GameNotFound(_) => ApiError::new(ErrorKind::GameNotFound, err.to_string()),
            ManagerError::Engine(e) => e.into(),
        }
    }
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Размер стандартной колоды.
pub const DECK_SIZE: usize = 52;

/// Какой набор правил использует партия.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum RuleSetKind {
    /// Несколько карт за ход - только одного ранга.
    Classic,
    /// Полная проверка стопки с симуляцией передачи хода.
    #[default]
    Stacking,
}

/// Конфиг партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    /// Сколько карт сдаётся каждому игроку.
    pub hand_size: u8,
    pub min_players: u8,
    pub max_players: u8,
    pub rules: RuleSetKind,
    /// Замешивать ли сброс (кроме верхней карты) обратно в добор,
    /// когда в доборе не хватает карт.
    pub reshuffle_discard: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: 7,
            min_players: 2,
            max_players: 7,
            rules: RuleSetKind::Stacking,
            reshuffle_discard: true,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hand_size == 0 || self.hand_size > 20 {
            return Err(ConfigError::InvalidHandSize(self.hand_size));
        }
        if self.min_players < 2 {
            return Err(ConfigError::TooFewSeats(self.min_players));
        }
        if self.min_players > self.max_players {
            return Err(ConfigError::SeatRange {
                min: self.min_players,
                max: self.max_players,
            });
        }
        // Всем раздать и ещё одну карту открыть в сброс.
        let needed = self.max_players as usize * self.hand_size as usize + 1;
        if needed > DECK_SIZE {
            return Err(ConfigError::DeckTooSmall { needed });
        }
        Ok(())
    }

    /// Загрузить конфиг из JSON; отсутствующие поля берутся из `Default`.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: GameConfig =
            serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Недопустимый размер руки: {0}")]
    InvalidHandSize(u8),

    #[error("Минимум игроков должен быть не меньше 2, получено {0}")]
    TooFewSeats(u8),

    #[error("Минимум игроков ({min}) больше максимума ({max})")]
    SeatRange { min: u8, max: u8 },

    #[error("Колоды не хватит: нужно {needed} карт")]
    DeckTooSmall { needed: usize },

    #[error("Не удалось разобрать конфиг: {0}")]
    Parse(String),
}

//! Движок Crazy Eights: очередь ходов, штрафной добор, стопки, выбывание.
//!
//! Высокоуровневый объект: `GameEngine`
//! Основные операции:
//!   - `start_game` – раздать карты и открыть стартовую
//!   - `play_cards` – сыграть карту или стопку
//!   - `draw_cards` – добрать (штраф или добровольно)
//!   - `eliminate_player` – выбить игрока по внешнему стимулу

pub mod errors;
pub mod game_history;
pub mod game_loop;
pub mod game_manager;
pub mod rotation;
pub mod rules;
pub mod stack_validator;
pub mod trace;
pub mod turn_control;
pub mod validation;

pub use errors::EngineError;
pub use game_history::{GameEvent, GameEventKind, GameHistory};
pub use game_loop::{GameEngine, GameStatus, PlayOutcome};
pub use game_manager::{GameManager, ManagerError};
pub use rules::{rules_for, ClassicRules, RuleSet, StackingRules};
pub use stack_validator::{
    compatibility, validate_stack, validate_stack_with, Compatibility, StackViolation,
    StackViolationReason,
};
pub use trace::{NoopSink, RecordingSink, StackTraceEvent, TraceSink, TracingSink};
pub use turn_control::{
    resolve_turn, resolve_turn_with, retains_turn_control, simulate_turn, simulate_turn_with,
    TurnOutcome,
};

/// RNG интерфейс для engine.
/// Реализации - в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}

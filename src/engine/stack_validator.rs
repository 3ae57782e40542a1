//! Проверка стопки из нескольких карт за один ход.
//!
//! Первая карта уже проверена против стола, здесь проверяются только
//! переходы между соседними картами.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::game::Direction;
use crate::engine::rules::RuleSet;
use crate::engine::trace::{StackTraceEvent, TraceSink};

/// Как две соседние карты стопки сочетаются между собой.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Compatibility {
    SameRank,
    /// Туз и двойка одной масти.
    ForceDrawCross,
    /// Совпадает только масть: нужен контроль хода.
    SameSuit,
    None,
}

pub fn compatibility(prev: &Card, next: &Card) -> Compatibility {
    if prev.rank == next.rank {
        Compatibility::SameRank
    } else if prev.is_force_draw_cross(next) {
        Compatibility::ForceDrawCross
    } else if prev.suit == next.suit {
        Compatibility::SameSuit
    } else {
        Compatibility::None
    }
}

/// Почему переход запрещён.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum StackViolationReason {
    /// Ни масть, ни ранг не совпадают.
    NoMatch,
    /// Совпадает только масть, а ход к игроку не возвращается.
    NoTurnControl,
    /// Классические правила: в стопке только один ранг.
    RankMismatch,
}

impl fmt::Display for StackViolationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StackViolationReason::NoMatch => "нет совпадения ни по масти, ни по рангу",
            StackViolationReason::NoTurnControl => "совпадает только масть, но ход уходит от игрока",
            StackViolationReason::RankMismatch => "в стопке допускаются только карты одного ранга",
        };
        f.write_str(text)
    }
}

/// Нарушение в стопке: пара `stack[index - 1] -> stack[index]`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StackViolation {
    pub index: usize,
    pub first: Card,
    pub second: Card,
    pub reason: StackViolationReason,
}

impl fmt::Display for StackViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: {}", self.first, self.second, self.reason)
    }
}

/// Проверка без диагностики, со стандартной симуляцией.
pub fn validate_stack(
    stack: &[Card],
    player_count: usize,
    direction: Direction,
) -> Result<(), StackViolation> {
    use crate::engine::rules::StackingRules;
    use crate::engine::trace::NoopSink;

    validate_stack_with(&StackingRules, stack, player_count, direction, &mut NoopSink)
}

/// Проверка стопки с симуляцией передачи хода из `rules`.
///
/// Для пары, совпадающей только по масти, симулируется префикс
/// `stack[..i]` (без второй карты пары): игрок должен сохранить ход.
pub fn validate_stack_with<R>(
    rules: &R,
    stack: &[Card],
    player_count: usize,
    direction: Direction,
    sink: &mut dyn TraceSink,
) -> Result<(), StackViolation>
where
    R: RuleSet + ?Sized,
{
    for i in 1..stack.len() {
        let (prev, next) = (stack[i - 1], stack[i]);
        let compat = compatibility(&prev, &next);

        sink.record(StackTraceEvent::TransitionChecked {
            index: i,
            from: prev,
            to: next,
            compatibility: compat,
        });

        let reason = match compat {
            Compatibility::SameRank | Compatibility::ForceDrawCross => None,
            Compatibility::None => Some(StackViolationReason::NoMatch),
            Compatibility::SameSuit => {
                let outcome = rules.simulate_turn(&stack[..i], player_count, direction);
                sink.record(StackTraceEvent::TurnControlSimulated {
                    prefix_len: i,
                    offset: outcome.offset,
                    retained: outcome.retains_control(),
                });
                if outcome.retains_control() {
                    None
                } else {
                    Some(StackViolationReason::NoTurnControl)
                }
            }
        };

        if let Some(reason) = reason {
            sink.record(StackTraceEvent::Rejected { index: i, reason });
            return Err(StackViolation {
                index: i,
                first: prev,
                second: next,
                reason,
            });
        }
    }

    sink.record(StackTraceEvent::Accepted { len: stack.len() });
    Ok(())
}

/// Классическая проверка: все карты одного ранга.
pub fn validate_same_rank(stack: &[Card], sink: &mut dyn TraceSink) -> Result<(), StackViolation> {
    for i in 1..stack.len() {
        let (prev, next) = (stack[i - 1], stack[i]);
        sink.record(StackTraceEvent::TransitionChecked {
            index: i,
            from: prev,
            to: next,
            compatibility: compatibility(&prev, &next),
        });
        if prev.rank != next.rank {
            let reason = StackViolationReason::RankMismatch;
            sink.record(StackTraceEvent::Rejected { index: i, reason });
            return Err(StackViolation {
                index: i,
                first: prev,
                second: next,
                reason,
            });
        }
    }
    sink.record(StackTraceEvent::Accepted { len: stack.len() });
    Ok(())
}

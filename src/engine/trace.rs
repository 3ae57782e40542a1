//! Диагностика проверки стопки.
//!
//! Валидатор сам ничего не пишет в лог: события уходят в `TraceSink`,
//! который выбирает вызывающий код. По умолчанию - `NoopSink`.

use crate::domain::card::Card;
use crate::engine::stack_validator::{Compatibility, StackViolationReason};

/// Событие проверки стопки.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StackTraceEvent {
    /// Проверена пара соседних карт `stack[index - 1] -> stack[index]`.
    TransitionChecked {
        index: usize,
        from: Card,
        to: Card,
        compatibility: Compatibility,
    },
    /// Прогнана симуляция ходов для префикса длины `prefix_len`.
    TurnControlSimulated {
        prefix_len: usize,
        offset: usize,
        retained: bool,
    },
    Rejected {
        index: usize,
        reason: StackViolationReason,
    },
    Accepted {
        len: usize,
    },
}

/// Приёмник диагностических событий.
pub trait TraceSink: Send {
    fn record(&mut self, event: StackTraceEvent);
}

/// Молчаливый приёмник.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {
    fn record(&mut self, _event: StackTraceEvent) {}
}

/// Пересылает события в `tracing` на уровне TRACE.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn record(&mut self, event: StackTraceEvent) {
        match event {
            StackTraceEvent::TransitionChecked {
                index,
                from,
                to,
                compatibility,
            } => {
                tracing::trace!(index, %from, %to, ?compatibility, "stack transition checked");
            }
            StackTraceEvent::TurnControlSimulated {
                prefix_len,
                offset,
                retained,
            } => {
                tracing::trace!(prefix_len, offset, retained, "turn control simulated");
            }
            StackTraceEvent::Rejected { index, reason } => {
                tracing::trace!(index, ?reason, "stack rejected");
            }
            StackTraceEvent::Accepted { len } => {
                tracing::trace!(len, "stack accepted");
            }
        }
    }
}

/// Копит события в памяти.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<StackTraceEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TraceSink for RecordingSink {
    fn record(&mut self, event: StackTraceEvent) {
        self.events.push(event);
    }
}

//! Наборы правил. Движок один, различия - в реализации `RuleSet`.

use crate::domain::card::{Card, CardEffect};
use crate::domain::config::RuleSetKind;
use crate::domain::game::Direction;
use crate::engine::stack_validator::{validate_same_rank, validate_stack_with, StackViolation};
use crate::engine::trace::TraceSink;
use crate::engine::turn_control::{resolve_turn_with, simulate_turn_with, TurnOutcome};

pub trait RuleSet: Send + Sync {
    fn name(&self) -> &'static str;

    fn classify_effect(&self, card: &Card) -> CardEffect {
        card.effect()
    }

    /// Позиция хода после стопки (для проверки контроля хода).
    fn simulate_turn(&self, stack: &[Card], player_count: usize, direction: Direction) -> TurnOutcome {
        simulate_turn_with(stack, player_count, direction, |c| self.classify_effect(c))
    }

    /// Куда уйдёт ход после сыгранной стопки. Движок применяет это к живой
    /// ротации с той же классификацией эффектов, что и проверка.
    fn resolve_turn(&self, stack: &[Card], player_count: usize, direction: Direction) -> TurnOutcome {
        resolve_turn_with(stack, player_count, direction, |c| self.classify_effect(c))
    }

    fn simulate_turn_control(&self, stack: &[Card], player_count: usize, direction: Direction) -> bool {
        self.simulate_turn(stack, player_count, direction).retains_control()
    }

    fn validate_stack(
        &self,
        stack: &[Card],
        player_count: usize,
        direction: Direction,
        sink: &mut dyn TraceSink,
    ) -> Result<(), StackViolation>;
}

/// Стопки по масти/рангу/туз-двойка с проверкой контроля хода.
#[derive(Clone, Copy, Debug, Default)]
pub struct StackingRules;

impl RuleSet for StackingRules {
    fn name(&self) -> &'static str {
        "stacking"
    }

    fn validate_stack(
        &self,
        stack: &[Card],
        player_count: usize,
        direction: Direction,
        sink: &mut dyn TraceSink,
    ) -> Result<(), StackViolation> {
        validate_stack_with(self, stack, player_count, direction, sink)
    }
}

/// Несколько карт за ход - только одного ранга.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClassicRules;

impl RuleSet for ClassicRules {
    fn name(&self) -> &'static str {
        "classic"
    }

    fn validate_stack(
        &self,
        stack: &[Card],
        _player_count: usize,
        _direction: Direction,
        sink: &mut dyn TraceSink,
    ) -> Result<(), StackViolation> {
        validate_same_rank(stack, sink)
    }
}

static STACKING: StackingRules = StackingRules;
static CLASSIC: ClassicRules = ClassicRules;

pub fn rules_for(kind: RuleSetKind) -> &'static dyn RuleSet {
    match kind {
        RuleSetKind::Stacking => &STACKING,
        RuleSetKind::Classic => &CLASSIC,
    }
}

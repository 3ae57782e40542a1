//! Симуляция передачи хода по стопке карт.
//!
//! Чистая функция от (карты, число игроков, направление): живое состояние партии
//! не читается и не меняется. Позиция считается относительно игрока, который
//! кладёт стопку (он в позиции 0), в кольце из активных игроков.

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, CardEffect};
use crate::domain::game::Direction;

/// Итог симуляции.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnOutcome {
    /// На сколько мест по часовой (по возрастанию индекса) ушёл ход, 0..player_count.
    pub offset: usize,
    /// Направление после стопки.
    pub direction: Direction,
}

impl TurnOutcome {
    /// Ход вернулся к тому, кто клал стопку.
    pub fn retains_control(&self) -> bool {
        self.offset == 0
    }

    /// Обычный шаг хода в текущем направлении.
    pub fn stepped(self, player_count: usize) -> TurnOutcome {
        if player_count <= 1 {
            return self;
        }
        let position = self.offset as i64 + self.direction.sign();
        TurnOutcome {
            offset: position.rem_euclid(player_count as i64) as usize,
            direction: self.direction,
        }
    }
}

/// Симуляция со стандартной таблицей эффектов (`Card::effect`).
pub fn simulate_turn(stack: &[Card], player_count: usize, direction: Direction) -> TurnOutcome {
    simulate_turn_with(stack, player_count, direction, |c| c.effect())
}

pub fn retains_turn_control(stack: &[Card], player_count: usize, direction: Direction) -> bool {
    simulate_turn(stack, player_count, direction).retains_control()
}

/// Симуляция с произвольной классификацией эффектов.
///
/// - Skip копит отложенный пропуск; он применяется как `+(skips + 1)`
///   на следующей карте не-Skip (до её собственного хода) или в конце стопки.
///   Вдвоём пропуск ничего не двигает: ход возвращается к сыгравшему.
/// - Reverse меняет направление и сдвигает на шаг в новом направлении.
/// - Wild сам по себе ход не двигает (но снимает отложенные пропуски).
/// - Остальные карты (включая ForceDraw) сдвигают на шаг.
/// - Стопка из одних валетов при двух игроках всегда оставляет ход.
///
/// Это позиция внутри стопки, по ней проверяется контроль хода. Куда ход
/// уходит после сыгранной стопки, считает `resolve_turn_with`.
pub fn simulate_turn_with<F>(
    stack: &[Card],
    player_count: usize,
    direction: Direction,
    classify: F,
) -> TurnOutcome
where
    F: Fn(&Card) -> CardEffect,
{
    if player_count <= 1 {
        return TurnOutcome { offset: 0, direction };
    }

    if player_count == 2
        && !stack.is_empty()
        && stack.iter().all(|c| classify(c) == CardEffect::Skip)
    {
        return TurnOutcome { offset: 0, direction };
    }

    let mut position: i64 = 0;
    let mut dir = direction;
    let mut pending_skips: i64 = 0;

    for card in stack {
        let effect = classify(card);

        if effect == CardEffect::Skip {
            if player_count > 2 {
                pending_skips += 1;
            }
            continue;
        }

        if pending_skips > 0 {
            position += (pending_skips + 1) * dir.sign();
            pending_skips = 0;
        }

        match effect {
            CardEffect::Wild => {}
            CardEffect::Reverse => {
                dir = dir.reversed();
                position += dir.sign();
            }
            _ => position += dir.sign(),
        }
    }

    if pending_skips > 0 {
        position += (pending_skips + 1) * dir.sign();
    }

    TurnOutcome {
        offset: position.rem_euclid(player_count as i64) as usize,
        direction: dir,
    }
}

/// Куда уходит ход после сыгранной стопки: симуляция плюс обычный шаг,
/// если стопка закончилась на Wild.
pub fn resolve_turn_with<F>(
    stack: &[Card],
    player_count: usize,
    direction: Direction,
    classify: F,
) -> TurnOutcome
where
    F: Fn(&Card) -> CardEffect,
{
    let ends_on_wild = stack
        .last()
        .is_some_and(|c| classify(c) == CardEffect::Wild);
    let outcome = simulate_turn_with(stack, player_count, direction, classify);
    if ends_on_wild {
        outcome.stepped(player_count)
    } else {
        outcome
    }
}

/// `resolve_turn_with` со стандартной таблицей эффектов.
pub fn resolve_turn(stack: &[Card], player_count: usize, direction: Direction) -> TurnOutcome {
    resolve_turn_with(stack, player_count, direction, |c| c.effect())
}

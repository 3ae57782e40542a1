//! Симуляция передачи хода по стопке (engine::turn_control).

mod common;

use common::cards;
use eights_engine::domain::{CardEffect, Direction};
use eights_engine::engine::{
    resolve_turn, retains_turn_control, simulate_turn, simulate_turn_with, TurnOutcome,
};

const CW: Direction = Direction::Clockwise;
const CCW: Direction = Direction::CounterClockwise;

fn outcome(offset: usize, direction: Direction) -> TurnOutcome {
    TurnOutcome { offset, direction }
}

#[test]
fn plain_card_passes_turn_one_step() {
    assert_eq!(simulate_turn(&cards("7h"), 3, CW), outcome(1, CW));
    assert_eq!(simulate_turn(&cards("7h"), 4, CCW), outcome(3, CCW));
    // Туз двигает так же, как обычная карта.
    assert_eq!(simulate_turn(&cards("Ah"), 2, CW), outcome(1, CW));
}

#[test]
fn eight_does_not_move_inside_stack() {
    assert_eq!(simulate_turn(&cards("8h"), 3, CW), outcome(0, CW));
    assert!(retains_turn_control(&cards("8h"), 3, CW));
    assert!(retains_turn_control(&cards("8h 8s"), 4, CCW));

    // После обычной карты восьмёрка ничего не добавляет.
    assert_eq!(simulate_turn(&cards("5h 8h"), 3, CW), outcome(1, CW));

    // Отложенные пропуски снимаются на восьмёрке: втроём J J 8 = полный круг.
    assert!(retains_turn_control(&cards("Jh Js 8s"), 3, CW));
    assert_eq!(simulate_turn(&cards("Jh 8h"), 4, CW), outcome(2, CW));
}

#[test]
fn stack_ending_on_eight_passes_turn_one_step() {
    assert_eq!(resolve_turn(&cards("8h"), 3, CW), outcome(1, CW));
    assert_eq!(resolve_turn(&cards("8h"), 3, CCW), outcome(2, CCW));
    assert_eq!(resolve_turn(&cards("8h 8s 8d"), 4, CW), outcome(1, CW));
    assert_eq!(resolve_turn(&cards("8h"), 2, CW), outcome(1, CW));
    // Дама разворачивает, шаг после восьмёрки идёт уже в новую сторону.
    assert_eq!(resolve_turn(&cards("Qh 8h"), 4, CW), outcome(2, CCW));

    // Стопка не на восьмёрке: итог совпадает с симуляцией.
    assert_eq!(resolve_turn(&cards("8h 5h"), 3, CW), outcome(1, CW));
    assert_eq!(resolve_turn(&cards("Jh"), 3, CW), simulate_turn(&cards("Jh"), 3, CW));

    assert_eq!(resolve_turn(&cards("8h"), 1, CW), outcome(0, CW));
    assert_eq!(resolve_turn(&[], 3, CW), outcome(0, CW));
}

#[test]
fn jack_skips_one_player() {
    // Трое: валет пропускает следующего, ход уходит через одного.
    assert_eq!(simulate_turn(&cards("Jh"), 3, CW), outcome(2, CW));
    assert!(!retains_turn_control(&cards("Jh"), 3, CW));

    // Два валета втроём: +3 = полный круг.
    assert!(retains_turn_control(&cards("Jh Js"), 3, CW));
    assert!(!retains_turn_control(&cards("Jh Js"), 4, CW));
}

#[test]
fn jacks_alone_keep_control_with_two_players() {
    assert!(retains_turn_control(&cards("Jh"), 2, CW));
    assert!(retains_turn_control(&cards("Jh Js"), 2, CW));
    assert!(retains_turn_control(&cards("Jh Js Jd"), 2, CCW));
}

#[test]
fn jack_is_noop_with_two_players() {
    // Вдвоём валет ничего не двигает, пятёрка отдаёт ход сопернику.
    assert_eq!(simulate_turn(&cards("Jh 5h"), 2, CW), outcome(1, CW));
}

#[test]
fn pending_skip_resolves_before_next_card() {
    // Трое: +2 за валета, потом +1 за семёрку = полный круг.
    assert!(retains_turn_control(&cards("Jh 7h"), 3, CW));
    // Четверо: то же даёт +3.
    assert_eq!(simulate_turn(&cards("Jh 7h"), 4, CW), outcome(3, CW));
}

#[test]
fn queen_reverses_and_steps() {
    assert_eq!(simulate_turn(&cards("Qh"), 4, CW), outcome(3, CCW));
    // Две дамы возвращают ход при любом числе игроков.
    assert_eq!(simulate_turn(&cards("Qh Qs"), 3, CW), outcome(0, CW));
    assert_eq!(simulate_turn(&cards("Qh Qs"), 5, CCW), outcome(0, CCW));
}

#[test]
fn skip_then_reverse_uses_old_direction_for_skip() {
    // Четверо: валет отложен, на даме сначала +2 по часовой,
    // затем разворот и шаг назад.
    assert_eq!(simulate_turn(&cards("Jh Qh"), 4, CW), outcome(1, CCW));
}

#[test]
fn force_draw_pair_passes_and_returns() {
    assert_eq!(simulate_turn(&cards("Ah"), 2, CW), outcome(1, CW));
    assert!(retains_turn_control(&cards("Ah 2h"), 2, CW));
}

#[test]
fn degenerate_inputs() {
    // Пустая стопка никуда не двигает.
    assert_eq!(simulate_turn(&[], 3, CW), outcome(0, CW));
    // Один игрок всегда сохраняет ход.
    assert!(retains_turn_control(&cards("7h"), 1, CW));
    assert!(retains_turn_control(&cards("Qh"), 0, CW));
}

#[test]
fn custom_classification_is_respected() {
    // Если валет считается обычной картой - обычный шаг.
    let plain = |_: &eights_engine::domain::Card| CardEffect::None;
    assert_eq!(simulate_turn_with(&cards("Jh"), 3, CW, plain), outcome(1, CW));
}

#[test]
fn simulation_is_pure_for_every_prefix() {
    let stack = cards("Jh Js 5s Qs Qd 8d");
    for len in 0..=stack.len() {
        for players in 1..=6 {
            let a = simulate_turn(&stack[..len], players, CW);
            let b = simulate_turn(&stack[..len], players, CW);
            assert_eq!(a, b);
            assert!(a.offset < players.max(1));
        }
    }
}

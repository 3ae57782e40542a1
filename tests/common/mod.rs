// tests/common/mod.rs
//
// Общие помощники для интеграционных тестов: карты из строк и ручная
// раскладка партии с сохранением всех 52 карт.

#![allow(dead_code)]

use eights_engine::domain::{Card, Deck, GameConfig, PlayerId};
use eights_engine::engine::GameEngine;

/// Карта из строки вида "Ah", "Td", "8c".
pub fn c(s: &str) -> Card {
    s.parse().expect("valid card literal")
}

/// Несколько карт через пробел: "7h 7c 7s".
pub fn cards(s: &str) -> Vec<Card> {
    s.split_whitespace().map(c).collect()
}

/// Игроки p0, p1, ... с именами P0, P1, ...
pub fn players(n: usize) -> Vec<(PlayerId, String)> {
    (0..n).map(|i| (format!("p{i}"), format!("P{i}"))).collect()
}

pub fn pid(i: usize) -> String {
    format!("p{i}")
}

/// Партия из n игроков, запущенная на неперемешанной колоде.
pub fn started_engine(n: usize) -> GameEngine {
    started_engine_with(n, GameConfig::default())
}

pub fn started_engine_with(n: usize, config: GameConfig) -> GameEngine {
    let mut engine = GameEngine::new(1, players(n), config).expect("valid players");
    engine
        .start_game_with_deck(Deck::standard_52())
        .expect("game starts");
    engine
}

/// Разложить карты вручную: руки игроков по порядку мест и верх сброса.
/// Всё остальное уходит в добор. Сумма карт остаётся 52.
pub fn rig(engine: &mut GameEngine, hands: &[&str], top: &str) {
    let game = &mut engine.game;
    assert_eq!(hands.len(), game.players.len(), "hand per player");

    let mut pool: Vec<Card> = Vec::new();
    pool.append(&mut game.draw_pile.cards);
    pool.append(&mut game.discard_pile);
    for p in game.players.iter_mut() {
        pool.append(&mut p.hand);
    }

    for (seat, hand) in hands.iter().enumerate() {
        for card in cards(hand) {
            let taken = take(&mut pool, card);
            game.players[seat].hand.push(taken);
        }
    }

    let top = take(&mut pool, c(top));
    game.discard_pile.push(top);
    game.draw_pile.cards = pool;

    assert_eq!(game.total_cards(), 52);
}

/// Оставить в доборе только `keep` карт, остальные отдать игроку `seat` в руку.
pub fn shrink_draw_pile(engine: &mut GameEngine, keep: usize, seat: usize) {
    let game = &mut engine.game;
    let extra = game.draw_pile.cards.len().saturating_sub(keep);
    let moved: Vec<Card> = game.draw_pile.cards.drain(..extra).collect();
    game.players[seat].hand.extend(moved);
}

fn take(pool: &mut Vec<Card>, card: Card) -> Card {
    let pos = pool
        .iter()
        .position(|x| *x == card)
        .unwrap_or_else(|| panic!("card {card} is not available"));
    pool.remove(pos)
}

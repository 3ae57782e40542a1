use crate::domain::card::{Card, Rank, Suit};
use crate::domain::game::Game;
use crate::domain::player::{card_is_playable, Player};
use crate::domain::SeatIndex;
use crate::engine::errors::EngineError;
use crate::engine::rules::RuleSet;
use crate::engine::trace::TraceSink;

/// Проверка хода целиком, до любой мутации.
///
/// Порядок проверок фиксирован: очередь, наличие карт в руке, первая карта,
/// стопка, объявление масти.
pub fn validate_play(
    game: &Game,
    seat: SeatIndex,
    cards: &[Card],
    declared_suit: Option<Suit>,
    rules: &dyn RuleSet,
    sink: &mut dyn TraceSink,
) -> Result<(), EngineError> {
    let player = game
        .players
        .get(seat)
        .ok_or(EngineError::Internal("место вне арены"))?;

    ensure_turn(game, seat, player)?;

    let first = cards.first().ok_or(EngineError::NoCardsPlayed)?;

    player.holds_all(cards).map_err(EngineError::CardNotInHand)?;

    let top = game
        .top_card()
        .ok_or(EngineError::Internal("пустой сброс во время партии"))?;

    if !card_is_playable(first, top, game.declared_suit, game.draw_stack) {
        return Err(EngineError::IllegalFirstCard(*first));
    }

    if cards.len() > 1 {
        rules.validate_stack(cards, game.active_count(), game.direction, sink)?;
    }

    if cards.iter().any(|c| c.rank == Rank::Eight) && declared_suit.is_none() {
        return Err(EngineError::SuitDeclarationRequired);
    }

    Ok(())
}

/// Ход именно этого игрока.
pub fn ensure_turn(game: &Game, seat: SeatIndex, player: &Player) -> Result<(), EngineError> {
    if game.current_seat != Some(seat) || !player.is_active() {
        return Err(EngineError::NotYourTurn(player.id.clone()));
    }
    Ok(())
}

/// Размер штрафа после стопки: копится, только если стопка закончилась тузом/двойкой.
pub fn draw_stack_after(previous: u32, cards: &[Card]) -> u32 {
    match cards.last() {
        Some(last) if last.is_force_draw() => {
            previous + cards.iter().map(|c| c.force_draw_amount()).sum::<u32>()
        }
        _ => 0,
    }
}

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::PlayerId;

/// Можно ли сыграть `card` первой картой хода при текущем состоянии стола.
///
/// Пока висит штрафной добор, годятся только карты-ответы (восьмёрки тоже нельзя).
/// Иначе: восьмёрка всегда, масть (объявленная или верхней карты), либо ранг.
pub fn card_is_playable(card: &Card, top: &Card, declared_suit: Option<Suit>, draw_stack: u32) -> bool {
    if draw_stack > 0 {
        return card.can_counter(top);
    }
    let suit_to_follow = declared_suit.unwrap_or(top.suit);
    card.rank == Rank::Eight || card.suit == suit_to_follow || card.rank == top.rank
}

/// Участник партии: рука и статус.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Порядок = порядок получения карт, на игру не влияет.
    pub hand: Vec<Card>,
    /// Игрок избавился от всех карт и вышел из ротации.
    pub is_safe: bool,
    /// Игрок выбит (таймаут, решение турнира).
    pub is_eliminated: bool,
}

impl Player {
    pub fn new(id: PlayerId, name: String) -> Self {
        Self {
            id,
            name,
            hand: Vec::new(),
            is_safe: false,
            is_eliminated: false,
        }
    }

    /// Участвует ли игрок в ротации ходов.
    pub fn is_active(&self) -> bool {
        !self.is_safe && !self.is_eliminated
    }

    pub fn has_won(&self) -> bool {
        self.hand.is_empty()
    }

    pub fn valid_cards(&self, top: &Card, declared_suit: Option<Suit>, draw_stack: u32) -> Vec<Card> {
        self.hand
            .iter()
            .copied()
            .filter(|c| card_is_playable(c, top, declared_suit, draw_stack))
            .collect()
    }

    /// Есть ли в руке все эти карты (с учётом кратности).
    pub fn holds_all(&self, cards: &[Card]) -> Result<(), Card> {
        let mut rest = self.hand.clone();
        for card in cards {
            match rest.iter().position(|c| c == card) {
                Some(pos) => {
                    rest.swap_remove(pos);
                }
                None => return Err(*card),
            }
        }
        Ok(())
    }

    pub fn add_cards(&mut self, cards: &[Card]) {
        self.hand.extend_from_slice(cards);
    }

    /// Убрать карты из руки. Отсутствующие карты игнорируются,
    /// наличие проверяет движок через `holds_all` до мутации.
    pub fn remove_cards(&mut self, cards: &[Card]) {
        for card in cards {
            if let Some(pos) = self.hand.iter().position(|c| c == card) {
                self.hand.remove(pos);
            }
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::RandomSource;

/// Колода (добор). Верх колоды - конец вектора.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Hearts 2..A, Diamonds 2..A, Clubs 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    /// Колода из заранее упорядоченных карт (последняя карта - верхняя).
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Равномерная перестановка (Fisher–Yates внутри `SliceRandom::shuffle`).
    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.cards);
    }

    /// Взять одну карту сверху колоды.
    pub fn deal_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Взять до n карт сверху. Если карт не хватает - вернёт сколько есть.
    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        let take = n.min(self.cards.len());
        let mut taken = self.cards.split_off(self.cards.len() - take);
        // split_off сохраняет порядок снизу вверх, а сдаём мы сверху.
        taken.reverse();
        taken
    }

    /// Подложить карты под низ колоды (они будут сданы последними).
    pub fn put_under(&mut self, cards: Vec<Card>) {
        let mut merged = cards;
        merged.append(&mut self.cards);
        self.cards = merged;
    }
}

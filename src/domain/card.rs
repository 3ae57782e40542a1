use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Масть карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,   // ♥
    Diamonds, // ♦
    Clubs,    // ♣
    Spades,   // ♠
}

impl Suit {
    /// Канонический порядок мастей в колоде.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];
}

/// Ранг карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];
}

/// Эффект карты при розыгрыше.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CardEffect {
    /// Восьмёрка: игрок объявляет масть.
    Wild,
    /// Валет: пропуск следующего игрока.
    Skip,
    /// Дама: смена направления.
    Reverse,
    /// Туз / двойка: следующий игрок добирает n карт, если не перебьёт.
    ForceDraw(u32),
    None,
}

/// Карта из стандартной 52-карточной колоды (без джокеров).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Совпадение по масти или по рангу. Симметрично.
    pub fn matches(&self, other: &Card) -> bool {
        self.suit == other.suit || self.rank == other.rank
    }

    /// Карты с особым эффектом: 8, J, Q, A, 2.
    pub fn is_special(&self) -> bool {
        !matches!(self.effect(), CardEffect::None)
    }

    pub fn effect(&self) -> CardEffect {
        match self.rank {
            Rank::Eight => CardEffect::Wild,
            Rank::Jack => CardEffect::Skip,
            Rank::Queen => CardEffect::Reverse,
            Rank::Ace => CardEffect::ForceDraw(4),
            Rank::Two => CardEffect::ForceDraw(2),
            _ => CardEffect::None,
        }
    }

    /// Сколько карт добавляет к штрафному добору (0 для обычных карт).
    pub fn force_draw_amount(&self) -> u32 {
        match self.effect() {
            CardEffect::ForceDraw(n) => n,
            _ => 0,
        }
    }

    pub fn is_force_draw(&self) -> bool {
        self.force_draw_amount() > 0
    }

    /// Можно ли перебить этой картой штрафную карту `top`.
    ///
    /// Туз перебивает туза и двойку любой масти.
    /// Двойка перебивает туза или двойку только своей масти.
    pub fn can_counter(&self, top: &Card) -> bool {
        if !top.is_force_draw() {
            return false;
        }
        match self.rank {
            Rank::Ace => true,
            Rank::Two => self.suit == top.suit,
            _ => false,
        }
    }

    /// Перекрёстная пара туз/двойка одной масти.
    pub fn is_force_draw_cross(&self, other: &Card) -> bool {
        self.suit == other.suit
            && matches!(
                (self.rank, other.rank),
                (Rank::Ace, Rank::Two) | (Rank::Two, Rank::Ace)
            )
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Spades => 's',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Card {
    /// Формат вида `Ah`, `Td`, `8c`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Suit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h" | "H" | "hearts" | "Hearts" => Ok(Suit::Hearts),
            "d" | "D" | "diamonds" | "Diamonds" => Ok(Suit::Diamonds),
            "c" | "C" | "clubs" | "Clubs" => Ok(Suit::Clubs),
            "s" | "S" | "spades" | "Spades" => Ok(Suit::Spades),
            _ => Err(format!("Invalid suit: {s}")),
        }
    }
}

/// Парсинг строки вида "Ah", "Td", "8c" (допускается и "10d").
impl FromStr for Card {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(split) = s.char_indices().last().map(|(i, _)| i) else {
            return Err("Card string is empty".into());
        };
        let (rank_part, suit_part) = s.split_at(split);

        let rank = match rank_part {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "t" | "10" => Rank::Ten,
            "J" | "j" => Rank::Jack,
            "Q" | "q" => Rank::Queen,
            "K" | "k" => Rank::King,
            "A" | "a" => Rank::Ace,
            _ => return Err(format!("Invalid rank: {rank_part}")),
        };

        let suit = suit_part.parse::<Suit>()?;

        Ok(Card { rank, suit })
    }
}

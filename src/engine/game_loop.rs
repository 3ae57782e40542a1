use core::fmt;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::config::GameConfig;
use crate::domain::deck::Deck;
use crate::domain::game::{Direction, Game, GameState};
use crate::domain::player::Player;
use crate::domain::{GameId, PlayerId, SeatIndex};
use crate::engine::errors::EngineError;
use crate::engine::game_history::{GameEventKind, GameHistory};
use crate::engine::rotation::{active_seats, advance_in_ring, first_active_seat, next_active_seat};
use crate::engine::rules::{rules_for, RuleSet};
use crate::engine::trace::{NoopSink, TraceSink};
use crate::engine::validation::{draw_stack_after, ensure_turn, validate_play};
use crate::engine::RandomSource;

/// Статус партии для внешнего кода.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Finished { winner: Option<PlayerId> },
}

/// Результат успешного хода.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayOutcome {
    /// Игрок избавился от последней карты этим ходом.
    pub player_safe: bool,
    pub status: GameStatus,
}

/// Движок одной партии: состояние + правила + история.
///
/// Все операции синхронные и атомарные: либо проходят целиком,
/// либо возвращают ошибку, не трогая состояние. Сериализацию вызовов
/// для одной партии обеспечивает вызывающая сторона.
pub struct GameEngine {
    pub game: Game,
    pub history: GameHistory,
    rules: &'static dyn RuleSet,
    trace: Box<dyn TraceSink>,
}

impl fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameEngine")
            .field("game", &self.game)
            .field("rules", &self.rules.name())
            .field("events", &self.history.len())
            .finish()
    }
}

impl GameEngine {
    /// Создать партию в фазе Setup. Игроки - пары (id, имя) в порядке мест.
    pub fn new(
        id: GameId,
        players: Vec<(PlayerId, String)>,
        config: GameConfig,
    ) -> Result<Self, EngineError> {
        config.validate()?;

        let min = config.min_players as usize;
        if players.len() < min {
            return Err(EngineError::NotEnoughPlayers {
                min,
                got: players.len(),
            });
        }
        if players.len() > config.max_players as usize {
            return Err(EngineError::InvalidPlayers(format!(
                "слишком много игроков: {} (максимум {})",
                players.len(),
                config.max_players
            )));
        }

        let mut seen = HashSet::new();
        for (pid, _) in &players {
            if pid.is_empty() {
                return Err(EngineError::InvalidPlayers("пустой id игрока".into()));
            }
            if !seen.insert(pid.as_str()) {
                return Err(EngineError::InvalidPlayers(format!("повторяющийся id {pid}")));
            }
        }

        let players = players
            .into_iter()
            .map(|(pid, name)| Player::new(pid, name))
            .collect();

        Ok(Self {
            game: Game::new(id, config.clone(), players),
            history: GameHistory::new(),
            rules: rules_for(config.rules),
            trace: Box::new(NoopSink),
        })
    }

    /// То же, но из двух параллельных списков (id и имена), как их отдаёт транспорт.
    pub fn from_lists(
        id: GameId,
        player_ids: Vec<PlayerId>,
        player_names: Vec<String>,
        config: GameConfig,
    ) -> Result<Self, EngineError> {
        if player_ids.len() != player_names.len() {
            return Err(EngineError::InvalidPlayers(format!(
                "{} id, но {} имён",
                player_ids.len(),
                player_names.len()
            )));
        }
        Self::new(id, player_ids.into_iter().zip(player_names).collect(), config)
    }

    pub fn rules(&self) -> &'static dyn RuleSet {
        self.rules
    }

    /// Подключить приёмник диагностики проверки стопок.
    pub fn set_trace_sink(&mut self, sink: Box<dyn TraceSink>) {
        self.trace = sink;
    }

    /// Старт: перемешать колоду, раздать, открыть карту.
    pub fn start_game<R: RandomSource>(&mut self, rng: &mut R) -> Result<(), EngineError> {
        self.ensure_state(GameState::Setup)?;
        let mut deck = Deck::standard_52();
        deck.shuffle(rng);
        self.deal_round(deck)
    }

    /// Старт с заранее подготовленной колодой (верх - последняя карта).
    pub fn start_game_with_deck(&mut self, deck: Deck) -> Result<(), EngineError> {
        self.ensure_state(GameState::Setup)?;
        self.deal_round(deck)
    }

    /// Следующий раунд после завершения: игроки из `continuing` получают новые
    /// руки, остальные помечаются выбитыми.
    pub fn start_next_round<R: RandomSource>(
        &mut self,
        rng: &mut R,
        continuing: &[PlayerId],
    ) -> Result<(), EngineError> {
        self.ensure_state(GameState::Finished)?;

        let mut keep = HashSet::new();
        for pid in continuing {
            self.seat_of(pid)?;
            keep.insert(pid.as_str());
        }
        if keep.len() < 2 {
            return Err(EngineError::NotEnoughPlayers {
                min: 2,
                got: keep.len(),
            });
        }

        let game = &mut self.game;
        game.finish_order.clear();
        game.elimination_order.clear();
        for p in game.players.iter_mut() {
            p.hand.clear();
            p.is_safe = false;
            p.is_eliminated = !keep.contains(p.id.as_str());
            if p.is_eliminated {
                game.elimination_order.push(p.id.clone());
            }
        }
        game.discard_pile.clear();
        game.draw_pile = Deck::default();

        let mut deck = Deck::standard_52();
        deck.shuffle(rng);
        self.deal_round(deck)
    }

    /// Раздача новой колоды активным игрокам по кругу, по одной карте.
    fn deal_round(&mut self, mut deck: Deck) -> Result<(), EngineError> {
        let seats = active_seats(&self.game.players);
        let hand_size = self.game.config.hand_size as usize;
        if deck.len() < seats.len() * hand_size + 1 {
            return Err(EngineError::DeckExhausted);
        }

        for _ in 0..hand_size {
            for &seat in &seats {
                if let Some(card) = deck.deal_one() {
                    self.game.players[seat].hand.push(card);
                }
            }
        }

        let starter = deck
            .deal_one()
            .ok_or(EngineError::Internal("нет стартовой карты"))?;

        let game = &mut self.game;
        game.discard_pile = vec![starter];
        game.draw_pile = deck;
        game.draw_stack = 0;
        game.declared_suit = None;
        game.direction = Direction::Clockwise;
        game.current_seat = first_active_seat(&game.players);
        game.state = GameState::Playing;
        game.round_number += 1;

        self.history.push(GameEventKind::GameStarted {
            game_id: game.id,
            round: game.round_number,
            starter,
        });
        info!(
            game_id = game.id,
            round = game.round_number,
            players = seats.len(),
            %starter,
            "round started"
        );

        Ok(())
    }

    /// Сыграть одну карту или стопку.
    pub fn play_cards(
        &mut self,
        player_id: &str,
        cards: &[Card],
        declared_suit: Option<Suit>,
    ) -> Result<PlayOutcome, EngineError> {
        self.ensure_state(GameState::Playing)?;
        let seat = self.seat_of(player_id)?;

        validate_play(
            &self.game,
            seat,
            cards,
            declared_suit,
            self.rules,
            self.trace.as_mut(),
        )?;

        // Всё, что может упасть, считаем до мутации.
        let ring = active_seats(&self.game.players);
        let outcome = self
            .rules
            .resolve_turn(cards, ring.len(), self.game.direction);
        let landing = advance_in_ring(&ring, seat, outcome.offset)
            .ok_or(EngineError::Internal("игрок вне кольца ротации"))?;
        let has_eight = cards.iter().any(|c| c.rank == Rank::Eight);

        let game = &mut self.game;
        let player = &mut game.players[seat];
        player.remove_cards(cards);
        let player_safe = player.hand.is_empty();

        game.discard_pile.extend_from_slice(cards);
        game.draw_stack = draw_stack_after(game.draw_stack, cards);
        game.declared_suit = if has_eight { declared_suit } else { None };
        game.direction = outcome.direction;

        self.history.push(GameEventKind::CardsPlayed {
            player_id: player_id.to_string(),
            cards: cards.to_vec(),
            draw_stack_after: game.draw_stack,
            direction_after: game.direction,
        });
        if let Some(suit) = game.declared_suit {
            self.history.push(GameEventKind::SuitDeclared {
                player_id: player_id.to_string(),
                suit,
            });
        }

        if player_safe {
            game.players[seat].is_safe = true;
            game.finish_order.push(player_id.to_string());
            let place = game.finish_order.len() as u32;
            self.history.push(GameEventKind::PlayerSafe {
                player_id: player_id.to_string(),
                place,
            });
            debug!(game_id = game.id, player_id, place, "player is safe");
        }

        // Если ход "вернулся" к игроку, который только что вышел, - дальше по кругу.
        game.current_seat = if game.players[landing].is_active() {
            Some(landing)
        } else {
            next_active_seat(&game.players, landing, game.direction)
        };

        debug!(
            game_id = game.id,
            player_id,
            cards = cards.len(),
            offset = outcome.offset,
            draw_stack = game.draw_stack,
            "cards played"
        );

        let status = self.finish_if_needed();
        Ok(PlayOutcome {
            player_safe,
            status,
        })
    }

    /// Добор. При висящем штрафе берётся ровно `draw_stack` карт (`count` игнорируется).
    /// Добор всегда завершает ход.
    pub fn draw_cards<R: RandomSource>(
        &mut self,
        rng: &mut R,
        player_id: &str,
        count: u32,
    ) -> Result<Vec<Card>, EngineError> {
        self.ensure_state(GameState::Playing)?;
        let seat = self.seat_of(player_id)?;
        ensure_turn(&self.game, seat, &self.game.players[seat])?;

        let penalty = self.game.draw_stack > 0;
        let wanted = if penalty {
            self.game.draw_stack
        } else if count == 0 {
            return Err(EngineError::InvalidDrawCount);
        } else {
            count
        };

        let recyclable = if self.game.config.reshuffle_discard {
            self.game.discard_pile.len().saturating_sub(1)
        } else {
            0
        };
        if self.game.draw_pile.len() + recyclable == 0 {
            return Err(EngineError::DeckExhausted);
        }

        if self.game.draw_pile.len() < wanted as usize && recyclable > 0 {
            self.reshuffle_discard(rng);
        }

        let game = &mut self.game;
        let drawn = game.draw_pile.deal(wanted as usize);
        game.players[seat].add_cards(&drawn);
        game.draw_stack = 0;
        game.current_seat = next_active_seat(&game.players, seat, game.direction);

        self.history.push(GameEventKind::CardsDrawn {
            player_id: player_id.to_string(),
            requested: wanted,
            drawn: drawn.len() as u32,
            penalty,
        });
        debug!(
            game_id = game.id,
            player_id,
            requested = wanted,
            drawn = drawn.len(),
            penalty,
            "cards drawn"
        );

        Ok(drawn)
    }

    /// Сброс без верхней карты перемешивается и подкладывается под добор.
    fn reshuffle_discard<R: RandomSource>(&mut self, rng: &mut R) {
        let game = &mut self.game;
        let Some(top) = game.discard_pile.pop() else {
            return;
        };
        let mut recycled = Deck::from_cards(std::mem::take(&mut game.discard_pile));
        game.discard_pile.push(top);
        recycled.shuffle(rng);

        let moved = recycled.len() as u32;
        game.draw_pile.put_under(recycled.cards);

        self.history.push(GameEventKind::DiscardReshuffled { cards: moved });
        debug!(game_id = game.id, cards = moved, "discard reshuffled into draw pile");
    }

    /// Выбить игрока (внешний стимул: таймаут, решение турнира).
    /// Карты остаются у него в руке.
    pub fn eliminate_player(&mut self, player_id: &str) -> Result<GameStatus, EngineError> {
        self.ensure_state(GameState::Playing)?;
        let seat = self.seat_of(player_id)?;

        let game = &mut self.game;
        if !game.players[seat].is_active() {
            return Err(EngineError::PlayerNotActive(player_id.to_string()));
        }

        game.players[seat].is_eliminated = true;
        game.elimination_order.push(player_id.to_string());

        if game.current_seat == Some(seat) {
            // Штраф был адресован выбитому игроку.
            game.draw_stack = 0;
            game.current_seat = next_active_seat(&game.players, seat, game.direction);
        }

        self.history.push(GameEventKind::PlayerEliminated {
            player_id: player_id.to_string(),
        });
        debug!(game_id = game.id, player_id, "player eliminated");

        Ok(self.finish_if_needed())
    }

    /// Завершить партию, если в ротации остался один (или ни одного) игрок.
    fn finish_if_needed(&mut self) -> GameStatus {
        if self.game.state == GameState::Finished {
            return GameStatus::Finished {
                winner: self.winner_id(),
            };
        }
        if self.game.active_count() > 1 {
            return GameStatus::Ongoing;
        }

        let last_place = self
            .game
            .players
            .iter()
            .find(|p| p.is_active())
            .map(|p| p.id.clone());

        self.game.state = GameState::Finished;
        self.game.current_seat = None;

        let winner = self.winner_id();
        self.history.push(GameEventKind::GameFinished {
            winner: winner.clone(),
            last_place: last_place.clone(),
        });
        info!(
            game_id = self.game.id,
            round = self.game.round_number,
            winner = winner.as_deref().unwrap_or("-"),
            last_place = last_place.as_deref().unwrap_or("-"),
            "game finished"
        );

        GameStatus::Finished { winner }
    }

    fn winner_id(&self) -> Option<PlayerId> {
        self.game.finish_order.first().cloned().or_else(|| {
            self.game
                .players
                .iter()
                .find(|p| p.is_active())
                .map(|p| p.id.clone())
        })
    }

    /// Победитель: первый избавившийся от карт (или единственный оставшийся,
    /// если все остальные выбиты). Только в фазе Finished.
    pub fn winner(&self) -> Result<PlayerId, EngineError> {
        self.ensure_state(GameState::Finished)?;
        self.winner_id()
            .ok_or(EngineError::Internal("партия завершена без игроков"))
    }

    /// Итоговый порядок мест: вышедшие по очереди, затем оставшиеся,
    /// затем выбитые (выбитый позже - выше).
    pub fn standings(&self) -> Vec<PlayerId> {
        let game = &self.game;
        let mut order = game.finish_order.clone();
        order.extend(
            game.players
                .iter()
                .filter(|p| p.is_active())
                .map(|p| p.id.clone()),
        );
        order.extend(game.elimination_order.iter().rev().cloned());
        order
    }

    /// Карты, которые игрок может сыграть первой картой сейчас.
    pub fn valid_cards_for(&self, player_id: &str) -> Result<Vec<Card>, EngineError> {
        self.ensure_state(GameState::Playing)?;
        let seat = self.seat_of(player_id)?;
        let top = self
            .game
            .top_card()
            .ok_or(EngineError::Internal("пустой сброс во время партии"))?;
        Ok(self.game.players[seat].valid_cards(top, self.game.declared_suit, self.game.draw_stack))
    }

    pub fn seat_of(&self, player_id: &str) -> Result<SeatIndex, EngineError> {
        self.game
            .seat_of(player_id)
            .ok_or_else(|| EngineError::PlayerNotFound(player_id.to_string()))
    }

    fn ensure_state(&self, expected: GameState) -> Result<(), EngineError> {
        if self.game.state != expected {
            return Err(EngineError::InvalidStateTransition {
                expected,
                found: self.game.state,
            });
        }
        Ok(())
    }
}

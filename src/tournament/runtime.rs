// src/tournament/runtime.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::domain::game::GameState;
use crate::domain::{GameId, PlayerId, TournamentId};
use crate::engine::{EngineError, GameEngine, RandomSource};

/// Статус турнира.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TournamentStatus {
    Running,
    Finished,
}

/// Итог одного раунда с точки зрения турнира.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundResult {
    pub round: u32,
    /// Места внутри раунда (только участники этого раунда).
    pub standings: Vec<PlayerId>,
    /// Кто выбыл по итогам раунда и какое место получил в турнире.
    pub knocked_out: Vec<(PlayerId, u32)>,
}

/// Турнир на выбывание поверх одной партии.
///
/// Политика вызывающей стороны, а не движка: после каждого завершённого раунда
/// выбывает последний (и все, кого выбили по ходу раунда), остальные играют
/// следующий раунд. Последний оставшийся - чемпион, место 1.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EliminationTournament {
    pub id: TournamentId,
    pub game_id: GameId,
    pub status: TournamentStatus,
    /// Кто ещё в турнире, в порядке мест за столом.
    pub remaining: Vec<PlayerId>,
    /// Итоговые места (1 - чемпион).
    pub finishing_places: HashMap<PlayerId, u32>,
    pub rounds: Vec<RoundResult>,
}

impl EliminationTournament {
    /// Турнир над уже созданной партией; участники - все её не выбитые игроки.
    pub fn new(id: TournamentId, engine: &GameEngine) -> Self {
        let remaining = engine
            .game
            .players
            .iter()
            .filter(|p| !p.is_eliminated)
            .map(|p| p.id.clone())
            .collect();

        Self {
            id,
            game_id: engine.game.id,
            status: TournamentStatus::Running,
            remaining,
            finishing_places: HashMap::new(),
            rounds: Vec::new(),
        }
    }

    pub fn champion(&self) -> Option<&PlayerId> {
        self.finishing_places
            .iter()
            .find(|(_, place)| **place == 1)
            .map(|(id, _)| id)
    }

    pub fn place_of(&self, player_id: &str) -> Option<u32> {
        self.finishing_places.get(player_id).copied()
    }

    /// Зафиксировать итоги завершённого раунда.
    pub fn complete_round(&mut self, engine: &GameEngine) -> Result<RoundResult, TournamentError> {
        if self.status != TournamentStatus::Running {
            return Err(TournamentError::AlreadyFinished);
        }
        if engine.game.id != self.game_id {
            return Err(TournamentError::ForeignGame(engine.game.id));
        }
        if engine.game.state != GameState::Finished {
            return Err(TournamentError::RoundNotFinished {
                game_id: engine.game.id,
            });
        }

        let standings: Vec<PlayerId> = engine
            .standings()
            .into_iter()
            .filter(|id| self.remaining.contains(id))
            .collect();

        // Выбитые по ходу раунда вылетают все; иначе - только последний.
        let mut out: Vec<PlayerId> = standings
            .iter()
            .rev()
            .filter(|id| engine.game.player(id).is_some_and(|p| p.is_eliminated))
            .cloned()
            .collect();
        if out.is_empty() {
            out.extend(standings.last().cloned());
        }
        // Хотя бы один игрок должен остаться.
        out.truncate(self.remaining.len().saturating_sub(1));

        let mut knocked_out = Vec::with_capacity(out.len());
        for pid in out {
            let place = self.remaining.len() as u32;
            self.remaining.retain(|id| *id != pid);
            self.finishing_places.insert(pid.clone(), place);
            knocked_out.push((pid, place));
        }

        if self.remaining.len() <= 1 {
            if let Some(champion) = self.remaining.first() {
                self.finishing_places.insert(champion.clone(), 1);
            }
            self.status = TournamentStatus::Finished;
        }

        let result = RoundResult {
            round: engine.game.round_number,
            standings,
            knocked_out,
        };
        info!(
            tournament_id = self.id,
            round = result.round,
            knocked_out = result.knocked_out.len(),
            remaining = self.remaining.len(),
            "tournament round completed"
        );
        self.rounds.push(result.clone());

        Ok(result)
    }

    /// Закрыть раунд и, если турнир не закончен, начать следующий.
    pub fn advance<R: RandomSource>(
        &mut self,
        engine: &mut GameEngine,
        rng: &mut R,
    ) -> Result<TournamentStatus, TournamentError> {
        self.complete_round(engine)?;
        if self.status == TournamentStatus::Running {
            engine.start_next_round(rng, &self.remaining)?;
        }
        Ok(self.status)
    }
}

/// Ошибки, которые могут возникать при работе с турниром.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TournamentError {
    #[error("Турнир уже завершён")]
    AlreadyFinished,

    #[error("Раунд партии {game_id} ещё не завершён")]
    RoundNotFinished { game_id: GameId },

    #[error("Партия {0} не относится к этому турниру")]
    ForeignGame(GameId),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

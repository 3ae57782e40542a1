//! Турнир на выбывание поверх партии (tournament::runtime).

mod common;

use common::{cards, pid, players, rig, started_engine};
use eights_engine::domain::{Deck, GameConfig, GameState};
use eights_engine::engine::GameEngine;
use eights_engine::infra::DeterministicRng;
use eights_engine::tournament::{EliminationTournament, TournamentError, TournamentStatus};

#[test]
fn last_place_is_knocked_out_each_round() {
    let mut engine = started_engine(3);
    rig(&mut engine, &["5h", "5d", "9c Kc"], "5c");
    let mut rng = DeterministicRng::from_seed(5);
    let mut tournament = EliminationTournament::new(1, &engine);
    assert_eq!(tournament.remaining, vec![pid(0), pid(1), pid(2)]);

    assert_eq!(
        tournament.complete_round(&engine).unwrap_err(),
        TournamentError::RoundNotFinished { game_id: 1 }
    );

    engine.play_cards("p0", &cards("5h"), None).unwrap();
    engine.play_cards("p1", &cards("5d"), None).unwrap();

    let status = tournament.advance(&mut engine, &mut rng).unwrap();
    assert_eq!(status, TournamentStatus::Running);
    assert_eq!(tournament.place_of("p2"), Some(3));
    assert_eq!(tournament.remaining, vec![pid(0), pid(1)]);
    assert_eq!(tournament.rounds[0].knocked_out, vec![(pid(2), 3)]);
    assert_eq!(tournament.rounds[0].standings, vec![pid(0), pid(1), pid(2)]);

    // Второй раунд уже идёт, без p2.
    assert_eq!(engine.game.state, GameState::Playing);
    assert_eq!(engine.game.round_number, 2);
    assert!(engine.game.players[2].is_eliminated);

    engine.eliminate_player("p1").unwrap();
    let status = tournament.advance(&mut engine, &mut rng).unwrap();
    assert_eq!(status, TournamentStatus::Finished);
    assert_eq!(tournament.place_of("p1"), Some(2));
    assert_eq!(tournament.champion(), Some(&pid(0)));
    assert_eq!(tournament.place_of("p0"), Some(1));

    // Новый раунд не начинается, повторное закрытие запрещено.
    assert_eq!(engine.game.state, GameState::Finished);
    assert_eq!(
        tournament.complete_round(&engine).unwrap_err(),
        TournamentError::AlreadyFinished
    );
}

#[test]
fn players_eliminated_mid_round_all_go_out() {
    let mut engine = started_engine(4);
    let mut tournament = EliminationTournament::new(1, &engine);

    engine.eliminate_player("p3").unwrap();
    engine.eliminate_player("p2").unwrap();
    engine.eliminate_player("p1").unwrap();
    assert_eq!(engine.game.state, GameState::Finished);

    let result = tournament.complete_round(&engine).unwrap();
    assert_eq!(
        result.knocked_out,
        vec![(pid(3), 4), (pid(2), 3), (pid(1), 2)]
    );
    assert_eq!(tournament.status, TournamentStatus::Finished);
    assert_eq!(tournament.champion(), Some(&pid(0)));
}

#[test]
fn foreign_game_is_rejected() {
    let engine = started_engine(3);
    let mut tournament = EliminationTournament::new(1, &engine);

    let mut other = GameEngine::new(2, players(3), GameConfig::default()).unwrap();
    other.start_game_with_deck(Deck::standard_52()).unwrap();

    assert_eq!(
        tournament.complete_round(&other).unwrap_err(),
        TournamentError::ForeignGame(2)
    );
}

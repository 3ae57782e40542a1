//! Внешний API: EightsService, команды, запросы, сериализация снимков.

use eights_engine::api::*;
use eights_engine::domain::{GameConfig, GameState, Rank, Suit};
use eights_engine::infra::DeterministicRng;

fn service() -> EightsService<DeterministicRng> {
    EightsService::new(DeterministicRng::from_seed(2024), GameConfig::default())
}

fn ids(names: &[&str]) -> (Vec<String>, Vec<String>) {
    let ids = names.iter().map(|n| n.to_string()).collect();
    let display = names.iter().map(|n| n.to_uppercase()).collect();
    (ids, display)
}

fn start(svc: &mut EightsService<DeterministicRng>, names: &[&str]) -> GameStateSnapshot {
    let (ids, display) = ids(names);
    svc.start_game(ids, display).expect("game starts")
}

#[test]
fn start_game_returns_public_snapshot() {
    let mut svc = service();
    let snap = start(&mut svc, &["a", "b", "c", "d"]);

    assert_eq!(snap.game_state, GameState::Playing);
    assert_eq!(snap.round_number, 1);
    assert_eq!(snap.players.len(), 4);
    assert!(snap.players.iter().all(|p| p.hand.is_none() && p.hand_size == 7));
    assert_eq!(snap.current_player.as_deref(), Some("a"));
    assert_eq!(snap.current_player_index, Some(0));
    assert!(snap.players[0].is_current);
    assert!(snap.top_card.is_some());
    assert_eq!(snap.draw_stack, 0);
    assert_eq!(snap.draw_pile_size, 52 - 28 - 1);
    assert_eq!(snap.discard_pile_size, 1);
    assert_eq!(snap.winner, None);
}

#[test]
fn start_game_rejects_bad_players() {
    let mut svc = service();

    let (ids, names) = ids(&["solo"]);
    let err = svc.start_game(ids, names).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotEnoughPlayers);

    let err = svc
        .start_game(vec!["a".into(), "b".into()], vec!["A".into()])
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidPlayers);

    assert!(svc.manager().game_ids().is_empty());
}

#[test]
fn viewer_sees_only_own_hand() {
    let mut svc = service();
    let snap = start(&mut svc, &["a", "b", "c"]);

    let view = svc.get_game_state(snap.game_id, Some("b")).unwrap();
    for p in &view.players {
        if p.player_id == "b" {
            assert_eq!(p.hand.as_ref().map(Vec::len), Some(7));
        } else {
            assert!(p.hand.is_none());
        }
    }
}

#[test]
fn get_game_state_is_idempotent() {
    let mut svc = service();
    let snap = start(&mut svc, &["a", "b"]);

    let first = svc.get_game_state(snap.game_id, Some("a")).unwrap();
    let second = svc.get_game_state(snap.game_id, Some("a")).unwrap();
    assert_eq!(first, second);
    assert_eq!(svc.get_game_state(snap.game_id, None).unwrap(), snap);
}

#[test]
fn rejected_play_maps_error_and_keeps_state() {
    let mut svc = service();
    let snap = start(&mut svc, &["a", "b", "c"]);
    let game_id = snap.game_id;

    let b_hand = svc
        .get_game_state(game_id, Some("b"))
        .unwrap()
        .players[1]
        .hand
        .clone()
        .unwrap();

    let err = svc.play_cards(game_id, "b", &b_hand[..1], None).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotYourTurn);
    assert!(!err.message.is_empty());
    assert_eq!(svc.get_game_state(game_id, None).unwrap(), snap);

    let err = svc.play_cards(game_id, "a", &[], None).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NoCardsPlayed);

    let err = svc.play_cards(999, "a", &b_hand[..1], None).unwrap_err();
    assert_eq!(err.kind, ErrorKind::GameNotFound);

    let err = svc.draw_cards(game_id, "a", 0).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidDrawCount);
    assert_eq!(svc.get_game_state(game_id, None).unwrap(), snap);
}

#[test]
fn current_player_can_play_or_draw() {
    let mut svc = service();
    let snap = start(&mut svc, &["a", "b", "c"]);
    let game_id = snap.game_id;

    let valid = svc.get_valid_cards_for_player(game_id, "a").unwrap();
    match valid.first() {
        Some(&card) => {
            let suit = (card.rank == Rank::Eight).then_some(Suit::Clubs);
            let res = svc.play_cards(game_id, "a", &[card], suit).unwrap();
            assert!(!res.player_safe);
            assert!(!res.game_won);
            assert_eq!(res.state.top_card, Some(card));
            let a = &res.state.players[0];
            assert_eq!(a.hand_size, 6);
            assert_eq!(a.hand.as_ref().map(Vec::len), Some(6));
        }
        None => {
            let res = svc.draw_cards(game_id, "a", 1).unwrap();
            assert_eq!(res.drawn_cards.len(), 1);
            assert_eq!(res.state.players[0].hand_size, 8);
            assert_eq!(res.state.current_player.as_deref(), Some("b"));
        }
    }
}

#[test]
fn draw_returns_cards_and_passes_turn() {
    let mut svc = service();
    let snap = start(&mut svc, &["a", "b"]);

    let res = svc.draw_cards(snap.game_id, "a", 2).unwrap();
    assert_eq!(res.drawn_cards.len(), 2);
    assert_eq!(res.state.current_player.as_deref(), Some("b"));
    assert_eq!(res.state.draw_pile_size, snap.draw_pile_size - 2);

    let hand = res.state.players[0].hand.clone().unwrap();
    assert!(res.drawn_cards.iter().all(|c| hand.contains(c)));
}

#[test]
fn commands_and_queries_dispatch() {
    let mut svc = service();

    let resp = svc
        .execute(Command::StartGame(StartGameCommand {
            player_ids: vec!["a".into(), "b".into(), "c".into()],
            player_names: vec!["A".into(), "B".into(), "C".into()],
        }))
        .unwrap();
    let CommandResponse::GameStarted(snap) = resp else {
        panic!("expected GameStarted");
    };

    let resp = svc
        .execute(Command::DrawCards(DrawCardsCommand {
            game_id: snap.game_id,
            player_id: "a".into(),
            count: 1,
        }))
        .unwrap();
    assert!(matches!(resp, CommandResponse::Drew(ref r) if r.drawn_cards.len() == 1));

    let resp = svc
        .execute(Command::EliminatePlayer(EliminatePlayerCommand {
            game_id: snap.game_id,
            player_id: "c".into(),
        }))
        .unwrap();
    let CommandResponse::StateUpdated(state) = resp else {
        panic!("expected StateUpdated");
    };
    assert_eq!(state.active_players, vec!["a".to_string(), "b".to_string()]);

    assert_eq!(
        svc.query(Query::ListGames).unwrap(),
        QueryResponse::Games(vec![snap.game_id])
    );

    let resp = svc
        .query(Query::GetValidCards {
            game_id: snap.game_id,
            player_id: "b".into(),
        })
        .unwrap();
    assert_eq!(
        resp,
        QueryResponse::ValidCards(svc.get_valid_cards_for_player(snap.game_id, "b").unwrap())
    );

    let err = svc
        .execute(Command::StartNextRound(StartNextRoundCommand {
            game_id: snap.game_id,
            continuing: vec!["a".into(), "b".into()],
        }))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidStateTransition);
}

#[test]
fn eliminations_finish_game_and_allow_next_round() {
    let mut svc = service();
    let snap = start(&mut svc, &["a", "b", "c"]);
    let game_id = snap.game_id;

    svc.eliminate_player(game_id, "c").unwrap();
    let done = svc.eliminate_player(game_id, "b").unwrap();
    assert_eq!(done.game_state, GameState::Finished);
    assert_eq!(done.winner.as_deref(), Some("a"));
    assert_eq!(done.standings, vec!["a".to_string(), "b".into(), "c".into()]);
    assert_eq!(done.current_player, None);

    let next = svc
        .start_next_round(game_id, &["a".to_string(), "b".to_string()])
        .unwrap();
    assert_eq!(next.round_number, 2);
    assert_eq!(next.active_players, vec!["a".to_string(), "b".to_string()]);
    assert!(next.players[2].is_eliminated);
}

#[test]
fn snapshot_and_errors_serialize_to_json() {
    let mut svc = service();
    let snap = start(&mut svc, &["a", "b"]);

    let json = serde_json::to_string(&snap).unwrap();
    let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snap);

    let value = serde_json::to_value(&snap).unwrap();
    assert_eq!(value["game_state"], "Playing");
    assert_eq!(value["players"][0]["player_id"], "a");
    assert!(value["players"][0]["hand"].is_null());

    let err = svc.draw_cards(snap.game_id, "b", 1).unwrap_err();
    let value = serde_json::to_value(&err).unwrap();
    assert_eq!(value["kind"], "NotYourTurn");
}

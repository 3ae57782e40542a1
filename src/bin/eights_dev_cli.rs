// src/bin/eights_dev_cli.rs

use std::env;

use eights_engine::api::build_game_view;
use eights_engine::domain::{Card, GameConfig, PlayerId, Rank, Suit};
use eights_engine::engine::{EngineError, GameEngine, GameStatus};
use eights_engine::infra::{DeterministicRng, IdGenerator};
use eights_engine::tournament::{EliminationTournament, TournamentStatus};
use tracing_subscriber::EnvFilter;

/// Страховка от бесконечного раунда (боты могут долго ходить по кругу).
const MAX_TURNS_PER_ROUND: usize = 2_000;

fn main() {
    // Логи молчат, пока не задан RUST_LOG.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let seed: u64 = env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    println!("eights_dev_cli: турнир на выбывание, seed={seed}");

    let ids = IdGenerator::new();
    let mut rng = DeterministicRng::from_seed(seed);

    let players: Vec<(PlayerId, String)> = ["alice", "bob", "carol", "dave"]
        .iter()
        .map(|n| (n.to_string(), n.to_uppercase()))
        .collect();

    let mut engine = match GameEngine::new(ids.next_game_id(), players, GameConfig::default()) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("[CLI] не удалось создать партию: {e}");
            return;
        }
    };
    if let Err(e) = engine.start_game(&mut rng) {
        eprintln!("[CLI] не удалось начать партию: {e}");
        return;
    }

    let mut tournament = EliminationTournament::new(ids.next_tournament_id(), &engine);

    loop {
        println!();
        println!("================ ROUND {} =================", engine.game.round_number);
        play_round(&mut engine, &mut rng);
        println!("[CLI] Места в раунде: {:?}", engine.standings());

        match tournament.advance(&mut engine, &mut rng) {
            Ok(TournamentStatus::Finished) => break,
            Ok(TournamentStatus::Running) => {}
            Err(e) => {
                eprintln!("[CLI] ошибка турнира: {e}");
                return;
            }
        }
    }

    println!();
    println!("[CLI] Чемпион: {:?}", tournament.champion());
    let mut places: Vec<_> = tournament.finishing_places.iter().collect();
    places.sort_by_key(|(_, place)| **place);
    for (pid, place) in places {
        println!("  {place}. {pid}");
    }

    match serde_json::to_string_pretty(&build_game_view(&engine, None)) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("[CLI] не удалось сериализовать снимок: {e}"),
    }
}

/// Один раунд: боты ходят, пока партия не завершится.
fn play_round(engine: &mut GameEngine, rng: &mut DeterministicRng) {
    for _ in 0..MAX_TURNS_PER_ROUND {
        let Some(current) = engine.game.current_player().map(|p| p.id.clone()) else {
            return;
        };

        match take_turn(engine, rng, &current) {
            Ok(GameStatus::Finished { .. }) => return,
            Ok(GameStatus::Ongoing) => {}
            Err(EngineError::DeckExhausted) => {
                // Ни сыграть, ни добрать - игрок выбывает.
                println!("  {current} застрял без карт для добора и выбывает");
                if let Err(e) = engine.eliminate_player(&current) {
                    eprintln!("[CLI] eliminate_player: {e}");
                    return;
                }
            }
            Err(e) => {
                eprintln!("[CLI] неожиданная ошибка: {e}");
                return;
            }
        }
    }

    println!("[CLI] Лимит ходов, выбиваем оставшихся по очереди");
    while let Some(current) = engine.game.current_player().map(|p| p.id.clone()) {
        if engine.eliminate_player(&current).is_err() {
            break;
        }
    }
}

/// Простой бот: первая подходящая карта плюс все карты того же ранга.
fn take_turn(
    engine: &mut GameEngine,
    rng: &mut DeterministicRng,
    player_id: &str,
) -> Result<GameStatus, EngineError> {
    let valid = engine.valid_cards_for(player_id)?;

    let Some(&first) = valid.first() else {
        let drawn = engine.draw_cards(rng, player_id, 1)?;
        println!("  {player_id} добирает {} карт(ы)", drawn.len());
        return Ok(GameStatus::Ongoing);
    };

    let hand = engine
        .game
        .player(player_id)
        .map(|p| p.hand.clone())
        .unwrap_or_default();

    let mut stack = vec![first];
    stack.extend(
        hand.iter()
            .filter(|c| **c != first && c.rank == first.rank)
            .copied(),
    );

    let declared = stack
        .iter()
        .any(|c| c.rank == Rank::Eight)
        .then(|| favourite_suit(&hand, &stack));

    let outcome = engine.play_cards(player_id, &stack, declared)?;
    println!(
        "  {player_id} играет {}{}",
        format_cards(&stack),
        declared.map(|s| format!(" (масть {s:?})")).unwrap_or_default()
    );
    if outcome.player_safe {
        println!("  {player_id} избавился от всех карт!");
    }

    Ok(outcome.status)
}

/// Самая частая масть среди карт, которые останутся в руке.
fn favourite_suit(hand: &[Card], played: &[Card]) -> Suit {
    Suit::ALL
        .into_iter()
        .max_by_key(|suit| {
            hand.iter()
                .filter(|c| c.suit == *suit && !played.contains(c))
                .count()
        })
        .unwrap_or(Suit::Hearts)
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

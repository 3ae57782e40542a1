use crate::domain::game::Direction;
use crate::domain::player::Player;
use crate::domain::SeatIndex;

/// Места игроков, которые сейчас в ротации (по возрастанию).
pub fn active_seats(players: &[Player]) -> Vec<SeatIndex> {
    players
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_active())
        .map(|(idx, _)| idx)
        .collect()
}

/// Следующее активное место по кругу в направлении `direction`, не считая `from`.
///
/// `from` может быть уже неактивным (игрок только что вышел) - сканирование
/// идёт по арене, поэтому индексы не "съезжают".
pub fn next_active_seat(players: &[Player], from: SeatIndex, direction: Direction) -> Option<SeatIndex> {
    let len = players.len();
    if len == 0 {
        return None;
    }

    let mut idx = from % len;
    for _ in 0..len {
        idx = step(idx, len, direction);
        if players[idx].is_active() {
            return Some(idx);
        }
    }

    None
}

/// Первое активное место начиная с 0.
pub fn first_active_seat(players: &[Player]) -> Option<SeatIndex> {
    players.iter().position(|p| p.is_active())
}

/// Сдвиг на `offset` позиций по часовой внутри кольца `ring` от места `from`.
/// `ring` должен содержать `from`.
pub fn advance_in_ring(ring: &[SeatIndex], from: SeatIndex, offset: usize) -> Option<SeatIndex> {
    let pos = ring.iter().position(|&s| s == from)?;
    ring.get((pos + offset) % ring.len()).copied()
}

fn step(idx: SeatIndex, len: usize, direction: Direction) -> SeatIndex {
    match direction {
        Direction::Clockwise => (idx + 1) % len,
        Direction::CounterClockwise => (idx + len - 1) % len,
    }
}

//! Движок карточной игры Crazy Eights (вариант со стопками и штрафным добором).
//!
//! Только правила и состояние: транспорт, авторизация, хранение и UI - снаружи.
//! Внешний код вызывает операции движка (`api::EightsService` или напрямую
//! `engine::GameEngine`) и читает снимки состояния.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod tournament;

//! Внешний API движка.
//!
//! Здесь описываются:
//! - команды (commands.rs) - всё, что меняет состояние;
//! - запросы (queries.rs) - только чтение, сборка снимка партии;
//! - DTO (dto.rs) - то, что уходит транспорту;
//! - ошибки (errors.rs) - то, что видит клиент;
//! - сервис (service.rs) - точка входа для транспортного слоя.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;
pub mod service;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
pub use service::EightsService;

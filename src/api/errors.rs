use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::TournamentId;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
///
/// Переход состояния ошибок не возвращает; всё, что здесь, относится
/// к границе: разбор входа и доступность рантайма.
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (битый JSON, не те поля).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Тег действия вне закрытого набора.
    #[error("unknown action type: {0}")]
    UnknownAction(String),

    /// Запрос к несуществующему турниру (только для запросов чтения).
    #[error("tournament not found: {0}")]
    TournamentNotFound(TournamentId),

    /// Рантайм остановлен, канал закрыт.
    #[error("floor runtime unavailable: {0}")]
    Unavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

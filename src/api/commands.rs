use serde_json::Value;

use crate::engine::actions::Action;

use super::errors::ApiError;

/// Разобрать действие из JSON.
///
/// Формат: объект с тегом `type` и полями в camelCase, например
/// `{"type":"BUST_PLAYER","tournamentId":"plo","playerId":"player-12"}`.
/// Тег вне закрытого набора – `ApiError::UnknownAction`, а не no-op.
pub fn parse_action(bytes: &[u8]) -> Result<Action, ApiError> {
    let value: Value = serde_json::from_slice(bytes)?;

    let tag = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::BadRequest("missing action type".into()))?;

    if !Action::KINDS.contains(&tag) {
        return Err(ApiError::UnknownAction(tag.to_string()));
    }

    Ok(serde_json::from_value(value)?)
}

/// Обратное преобразование (для логов / реплея).
pub fn encode_action(action: &Action) -> Result<Vec<u8>, ApiError> {
    serde_json::to_vec(action).map_err(|e| ApiError::Internal(e.to_string()))
}

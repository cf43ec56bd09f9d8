//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Database Error".to_string(),
                        message: "An error occurred while accessing the database".to_string(),
                        details: Some(json!({ "sql_error": e.to_string() })),
                        code: Some("DB_ERROR".to_string()),
                    },
                )
            }

            AppError::Validation(e) => {
                tracing::warn!("Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Validation Error".to_string(),
                        message: "The provided data is invalid".to_string(),
                        details: Some(json!(e)),
                        code: Some("VALIDATION_ERROR".to_string()),
                    },
                )
            }

            AppError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Bad Request".to_string(),
                        message: msg,
                        details: None,
                        code: Some("BAD_REQUEST".to_string()),
                    },
                )
            }

            AppError::NotFound(msg) => {
                tracing::warn!("Resource not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: "Not Found".to_string(),
                        message: msg,
                        details: None,
                        code: Some("NOT_FOUND".to_string()),
                    },
                )
            }

            AppError::Conflict(msg) => {
                tracing::warn!("Conflict: {}", msg);
                (
                    StatusCode::CONFLICT,
                    ErrorResponse {
                        error: "Conflict".to_string(),
                        message: msg,
                        details: None,
                        code: Some("CONFLICT".to_string()),
                    },
                )
            }

            AppError::ServiceUnavailable(msg) => {
                tracing::error!("Service unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorResponse {
                        error: "Service Unavailable".to_string(),
                        message: msg,
                        details: None,
                        code: Some("SERVICE_UNAVAILABLE".to_string()),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Clasificar un fallo de sqlx: los fallos de conexión/pool se reportan
/// como servicio no disponible, sin reintentos; el resto como error de
/// base de datos.
pub fn store_error(e: sqlx::Error) -> AppError {
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            AppError::ServiceUnavailable("Database connection could not be acquired".to_string())
        }
        sqlx::Error::Io(e) => {
            AppError::ServiceUnavailable(format!("Database connection failed: {}", e))
        }
        other => AppError::Database(other),
    }
}

/// Mensaje único para "fila ausente" y "fila bloqueada por una referencia":
/// el llamador no puede distinguir ambos casos.
pub fn not_found_or_in_use(entity: &str, id: i64) -> AppError {
    AppError::NotFound(format!("{} {} not found or in use", entity, id))
}

/// Mapear el fallo de un DELETE: una violación de clave foránea (23503)
/// produce la misma respuesta que una fila inexistente.
pub fn delete_blocked(e: sqlx::Error, entity: &str, id: i64) -> AppError {
    if is_foreign_key_violation(&e) {
        return not_found_or_in_use(entity, id);
    }
    store_error(e)
}

pub fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    matches!(
        e.as_database_error().and_then(|db| db.code()).as_deref(),
        Some("23503")
    )
}

pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(
        e.as_database_error().and_then(|db| db.code()).as_deref(),
        Some("23505")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_pool_exhaustion_is_unavailable() {
        let err = store_error(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, AppError::ServiceUnavailable(_)));

        let err = store_error(sqlx::Error::PoolClosed);
        assert!(matches!(err, AppError::ServiceUnavailable(_)));
    }

    #[test]
    fn test_store_error_io_is_unavailable() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = store_error(sqlx::Error::Io(io));
        assert!(matches!(err, AppError::ServiceUnavailable(_)));
    }

    #[test]
    fn test_store_error_other_is_database() {
        let err = store_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::Database(_)));
    }

    #[test]
    fn test_not_found_or_in_use_message_is_ambiguous() {
        let err = not_found_or_in_use("Depot", 3);
        match err {
            AppError::NotFound(msg) => assert_eq!(msg, "Depot 3 not found or in use"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_delete_blocked_falls_back_to_store_error() {
        let err = delete_blocked(sqlx::Error::PoolTimedOut, "Depot", 1);
        assert!(matches!(err, AppError::ServiceUnavailable(_)));
    }
}

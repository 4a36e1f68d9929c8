//! # Errores de la aplicación
//!
//! Un único tipo [`AppError`] cubre los fallos de enrutado (404/405) y los
//! errores que devuelven los controladores. Cada variante sabe qué código
//! HTTP le corresponde y cómo registrarse en los logs.

use actix_web::http::{header, Method, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use std::error::Error;
use thiserror::Error;

/// Tipos de error de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    /// Ninguna ruta declarada coincide con el path
    #[error("Ruta no encontrada: {method} {path}")]
    RouteNotFound { method: Method, path: String },

    /// El path existe pero no admite el método de la petición
    #[error("Método {method} no permitido en '{path}'")]
    MethodNotAllowed {
        method: Method,
        path: String,
        allowed: Vec<Method>,
    },

    /// Error de validación con campo específico
    #[error("Error de validación en campo '{field}': {message}")]
    ValidationWithField { field: String, message: String },

    /// Error de validación general
    #[error("Error de validación: {0}")]
    Validation(String),

    #[error("No autorizado: {0}")]
    Unauthorized(String),

    #[error("No encontrado: {resource_type} con ID '{id}'")]
    NotFoundWithId { resource_type: String, id: String },

    #[error("No encontrado: {0}")]
    NotFound(String),

    #[error("Conflicto: {0}")]
    Conflict(String),

    /// La operación del controlador no está conectada en este proceso
    #[error("Operación no implementada: {operation}")]
    NotImplemented { operation: String },

    /// Error interno con código de rastreo
    #[error("Error interno (trace: {trace_id}): {message}")]
    InternalWithTrace { trace_id: String, message: String },

    #[error("Error interno: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation_field(field: &str, message: &str) -> Self {
        Self::ValidationWithField {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    pub fn not_found_id(resource_type: &str, id: &str) -> Self {
        Self::NotFoundWithId {
            resource_type: resource_type.to_string(),
            id: id.to_string(),
        }
    }

    pub fn not_implemented(operation: &str) -> Self {
        Self::NotImplemented {
            operation: operation.to_string(),
        }
    }

    /// Crea un error interno con trace ID (se genera uno nuevo si no se indica)
    pub fn internal_trace(message: &str, trace_id: Option<String>) -> Self {
        Self::InternalWithTrace {
            trace_id: trace_id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            message: message.to_string(),
        }
    }

    /// Etiqueta corta que viaja en el campo `error` de la respuesta
    fn label(&self) -> &'static str {
        match self {
            Self::RouteNotFound { .. } => "Ruta no encontrada",
            Self::MethodNotAllowed { .. } => "Método no permitido",
            Self::ValidationWithField { .. } | Self::Validation(_) => "Error de validación",
            Self::Unauthorized(_) => "No autorizado",
            Self::NotFoundWithId { .. } | Self::NotFound(_) => "No encontrado",
            Self::Conflict(_) => "Conflicto",
            Self::NotImplemented { .. } => "No implementado",
            Self::InternalWithTrace { .. } | Self::Internal(_) => "Error interno",
        }
    }

    /// Mensaje público; los errores internos no exponen su detalle
    fn public_message(&self) -> String {
        match self {
            Self::RouteNotFound { method, path } => {
                format!("No existe la ruta {} {}", method, path)
            }
            Self::MethodNotAllowed { method, path, .. } => {
                format!("El método {} no está permitido en {}", method, path)
            }
            Self::ValidationWithField { field, message } => {
                format!("Campo '{}': {}", field, message)
            }
            Self::NotFoundWithId { resource_type, id } => {
                format!("{} con ID '{}' no encontrado", resource_type, id)
            }
            Self::InternalWithTrace { trace_id, .. } => {
                format!("Error interno (trace: {})", trace_id)
            }
            Self::Internal(_) => "Error interno del servidor".to_string(),
            Self::Validation(message)
            | Self::Unauthorized(message)
            | Self::NotFound(message)
            | Self::Conflict(message) => message.clone(),
            Self::NotImplemented { operation } => {
                format!("La operación '{}' no está disponible", operation)
            }
        }
    }

    fn log(&self) {
        match self {
            Self::RouteNotFound { method, path } => {
                tracing::info!(method = %method, path = %path, "No route matched");
            }
            Self::MethodNotAllowed { method, path, allowed } => {
                tracing::info!(
                    method = %method,
                    path = %path,
                    allowed = ?allowed,
                    "Method not allowed"
                );
            }
            Self::InternalWithTrace { trace_id, message } => {
                tracing::error!(
                    trace_id = %trace_id,
                    message = %message,
                    "Internal error with trace"
                );
            }
            error if self.status_code().is_server_error() => {
                tracing::error!(
                    error = %error,
                    error_chain = ?error.source(),
                    "Server error"
                );
            }
            error => {
                tracing::warn!(error = %error, "Client error");
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::RouteNotFound { .. } | Self::NotFoundWithId { .. } | Self::NotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::ValidationWithField { .. } | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotImplemented { .. } => StatusCode::NOT_IMPLEMENTED,
            Self::InternalWithTrace { .. } | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        self.log();

        let mut builder = HttpResponse::build(self.status_code());
        if let Self::MethodNotAllowed { allowed, .. } = self {
            builder.insert_header((header::ALLOW, allow_header(allowed)));
        }

        builder.json(ErrorResponse {
            error: self.label().to_string(),
            message: self.public_message(),
        })
    }
}

/// Valor de la cabecera `Allow`, p.ej. `GET, HEAD, POST`
fn allow_header(allowed: &[Method]) -> String {
    allowed
        .iter()
        .map(Method::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

pub type AppResult<T> = Result<T, AppError>;

pub trait ResultExt<T> {
    fn map_err_validation(self, message: &str) -> AppResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: std::error::Error + Send + 'static,
{
    fn map_err_validation(self, message: &str) -> AppResult<T> {
        self.map_err(|e| AppError::Validation(format!("{}: {}", message, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn routing_errors_map_to_404_and_405() {
        let not_found = AppError::RouteNotFound {
            method: Method::GET,
            path: "/mesas".to_string(),
        };
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let not_allowed = AppError::MethodNotAllowed {
            method: Method::PATCH,
            path: "/cardapio".to_string(),
            allowed: vec![Method::GET, Method::POST],
        };
        assert_eq!(not_allowed.status_code(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn method_not_allowed_sets_allow_header() {
        let error = AppError::MethodNotAllowed {
            method: Method::DELETE,
            path: "/comandas".to_string(),
            allowed: vec![Method::GET, Method::HEAD, Method::POST],
        };
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            response.headers().get(header::ALLOW).unwrap(),
            "GET, HEAD, POST"
        );
    }

    #[test]
    fn controller_errors_keep_their_status() {
        assert_eq!(
            AppError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Unauthorized("x".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::not_found_id("Comanda", "5").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Conflict("x".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::not_implemented("ComandaController::show").status_code(),
            StatusCode::NOT_IMPLEMENTED
        );
    }

    #[test]
    fn internal_errors_hide_details() {
        let response = AppError::Internal("conexión rechazada".into()).error_response();
        let body = tokio_test::block_on(to_bytes(response.into_body())).unwrap();
        let parsed: ErrorResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(parsed.error, "Error interno");
        assert!(!parsed.message.contains("conexión rechazada"));
    }

    #[test]
    fn internal_trace_generates_id_when_missing() {
        match AppError::internal_trace("fallo", None) {
            AppError::InternalWithTrace { trace_id, .. } => {
                assert!(uuid::Uuid::parse_str(&trace_id).is_ok());
            }
            other => panic!("variante inesperada: {:?}", other),
        }
    }

    #[test]
    fn map_err_validation_prefixes_message() {
        let result: Result<u32, _> = "abc".parse::<u32>();
        match result.map_err_validation("WORKERS inválido") {
            Err(AppError::Validation(message)) => {
                assert!(message.starts_with("WORKERS inválido: "));
            }
            other => panic!("resultado inesperado: {:?}", other),
        }
    }
}

//! # Utilidades de logging para errores
//!
//! Registro de la cadena completa de `source()` de los errores que
//! devuelven los controladores.

use std::error::Error as StdError;

/// Recorre la cadena de errores y la devuelve como textos, del más externo
/// al más interno
pub fn error_chain(error: &(dyn StdError + 'static)) -> Vec<String> {
    let mut chain = Vec::new();
    let mut current_error: Option<&(dyn StdError + 'static)> = Some(error);

    while let Some(err) = current_error {
        chain.push(err.to_string());
        current_error = err.source();
    }

    chain
}

/// Registra la cadena completa de errores
///
/// # Parámetros
/// - `error`: Error a analizar y registrar
/// - `context`: Contexto opcional, normalmente la operación del controlador
pub fn log_error_chain<E>(error: &E, context: Option<&str>)
where
    E: StdError + 'static,
{
    let chain = error_chain(error);

    if let Some(ctx) = context {
        tracing::debug!(
            context = %ctx,
            error_chain = ?chain,
            "Error with full chain (with context)"
        );
    } else {
        tracing::debug!(error_chain = ?chain, "Error with full chain");
    }
}

/// Extension trait para Results que añade logging de la cadena de errores
///
/// ```ignore
/// controllers
///     .call(request)
///     .await
///     .log_error_context("ComandaController::show")?;
/// ```
pub trait ErrorLogExt<T, E> {
    fn log_error_context(self, context: &str) -> Result<T, E>;
}

impl<T, E> ErrorLogExt<T, E> for Result<T, E>
where
    E: StdError + 'static,
{
    fn log_error_context(self, context: &str) -> Result<T, E> {
        if let Err(ref error) = self {
            log_error_chain(error, Some(context));
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thiserror::Error;

    #[derive(Error, Debug)]
    #[error("fallo al cerrar comanda")]
    struct Outer {
        #[source]
        source: Inner,
    }

    #[derive(Error, Debug)]
    #[error("comanda ya cerrada")]
    struct Inner;

    #[test]
    fn chain_walks_every_source() {
        let error = Outer { source: Inner };
        assert_eq!(
            error_chain(&error),
            vec!["fallo al cerrar comanda", "comanda ya cerrada"]
        );
    }

    #[test]
    fn log_error_context_passes_result_through() {
        let ok: Result<u8, Inner> = Ok(3);
        assert_eq!(ok.log_error_context("prueba").unwrap(), 3);

        let err: Result<u8, Inner> = Err(Inner);
        assert!(err.log_error_context("prueba").is_err());
    }
}

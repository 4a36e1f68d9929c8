//! Configuración del servidor a partir de variables de entorno.
//!
//! ```env
//! BIND_ADDRESS=0.0.0.0:8080
//! WORKERS=4
//! RUST_LOG=comanda_router=debug,actix_web=info
//! ```

use std::env;

use crate::api::{AppError, AppResult, ResultExt};

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_LOG_FILTER: &str = "comanda_router=debug,actix_web=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_address: String,
    /// `None` deja el número de workers por defecto de Actix
    pub workers: Option<usize>,
}

impl ServerConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construye la configuración a partir de una función de consulta
    /// (en producción, `std::env::var`)
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_address = lookup("BIND_ADDRESS")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let workers = match lookup("WORKERS") {
            Some(raw) => {
                let workers = raw.trim().parse::<usize>().map_err_validation("WORKERS inválido")?;
                if workers == 0 {
                    return Err(AppError::validation_field("WORKERS", "debe ser mayor que 0"));
                }
                Some(workers)
            }
            None => None,
        };

        Ok(Self {
            bind_address,
            workers,
        })
    }
}

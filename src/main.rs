//! # Comanda Router Server
//!
//! Servidor web que expone la tabla de rutas del sistema de comandas de
//! restaurante, construido con Rust y Actix Web.
//!
//! ## Configuración
//!
//! El servidor se configura mediante variables de entorno (archivo `.env`):
//!
//! ```env
//! # Servidor
//! BIND_ADDRESS=0.0.0.0:8080
//! WORKERS=4
//!
//! # Logging
//! RUST_LOG=comanda_router=debug,actix_web=info
//! ```
//!
//! ## Arquitectura
//!
//! ```text
//! Cliente (HTTP/JSON)
//!     ↓
//! Actix Web (Logger)
//!     ↓ dispatch
//! RouteTable ──→ Controllers (auth, cardápio, comandas, pedidos, KDS)
//! ```

use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing_subscriber::EnvFilter;

use comanda_router::api;
use comanda_router::config::{ServerConfig, DEFAULT_LOG_FILTER};
use comanda_router::controllers::Controllers;
use comanda_router::routing::RouteTable;

/// Función principal que inicia el servidor web
///
/// 1. Carga variables de entorno desde `.env`
/// 2. Configura el sistema de logging con tracing
/// 3. Construye la tabla de rutas y los controladores, una sola vez
/// 4. Arranca el servidor HTTP con el dispatcher como servicio por defecto
///
/// # Errores
///
/// Retorna `std::io::Error` si la configuración o la tabla de rutas no son
/// válidas, o si no se puede bindear la dirección indicada.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env().map_err(|e| {
        tracing::error!("Configuración inválida: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let table = RouteTable::new().map_err(|e| {
        tracing::error!("Tabla de rutas inválida: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
    })?;

    for route in table.routes() {
        tracing::debug!(
            method = %route.method,
            pattern = %route.pattern,
            operation = %route.endpoint.qualified_name(),
            "Route registered"
        );
    }

    let table = web::Data::new(table);
    let controllers = web::Data::new(Controllers::unwired());

    tracing::info!("Servidor iniciando en {}", config.bind_address);

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(table.clone())
            .app_data(controllers.clone())
            .wrap(Logger::default())
            .configure(api::init_routes)
    });

    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    server.bind(&config.bind_address)?.run().await
}

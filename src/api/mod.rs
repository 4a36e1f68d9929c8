//! # Módulo API
//!
//! Monta el router de comandas sobre Actix Web.
//!
//! ## Módulos principales
//!
//! - [`dispatch`] - Servicio que resuelve rutas y llama a los controladores
//! - [`errors`] - Manejo de errores de la aplicación
//! - [`middleware`] - Logging de cadenas de errores

pub mod dispatch;
pub mod errors;
pub mod middleware;

// Re-exportar tipos comunes para facilitar su uso
pub use errors::{AppError, AppResult, ErrorResponse, ResultExt};

use actix_web::web;

/// Registra el dispatcher como servicio por defecto
///
/// Todas las rutas se resuelven contra la [`RouteTable`](crate::routing::RouteTable)
/// registrada como `app_data`, que debe acompañarse de los
/// [`Controllers`](crate::controllers::Controllers):
///
/// - `POST /login`, `POST /register`
/// - `POST|GET /cardapio`, `DELETE /cardapio/:id`
/// - `POST /comandas`, `GET /comandas/abertas`, `GET /comandas/:id`
/// - `PUT /comandas/:id/fechar`, `POST /comandas/:id/adicionar`
/// - `GET /kds/cozinha`, `GET /kds/copa`
/// - `PUT /pedidos/:itemId/status`
///
/// # Ejemplo
///
/// ```no_run
/// use actix_web::{web, App};
/// use comanda_router::{api, controllers::Controllers, routing::RouteTable};
///
/// let table = web::Data::new(RouteTable::new().unwrap());
/// let controllers = web::Data::new(Controllers::unwired());
///
/// let app = App::new()
///     .app_data(table)
///     .app_data(controllers)
///     .configure(api::init_routes);
/// ```
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.default_service(web::to(dispatch::dispatch));
}

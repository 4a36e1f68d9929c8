//! Dispatcher HTTP: resuelve la petición contra la [`RouteTable`] y delega
//! en el controlador correspondiente.

use actix_web::{web, HttpRequest, HttpResponse};

use super::middleware::ErrorLogExt;
use super::AppResult;
use crate::controllers::{Controllers, HandlerRequest};
use crate::routing::{RouteMatch, RouteTable};

/// Servicio por defecto de la aplicación
///
/// Si la ruta no existe (`404`) o el método no está permitido (`405`) se
/// responde sin invocar ningún controlador. En otro caso se invoca una sola
/// vez la operación del endpoint resuelto.
pub async fn dispatch(
    req: HttpRequest,
    body: web::Bytes,
    table: web::Data<RouteTable>,
    controllers: web::Data<Controllers>,
) -> AppResult<HttpResponse> {
    let RouteMatch { endpoint, params } = table.resolve(req.method(), req.path())?;
    let operation = endpoint.qualified_name();

    tracing::debug!(
        method = %req.method(),
        path = %req.path(),
        operation = %operation,
        params = ?params,
        "Route resolved"
    );

    let request = HandlerRequest {
        endpoint,
        params,
        query: req.query_string().to_string(),
        headers: req.headers().clone(),
        body,
    };

    controllers
        .call(request)
        .await
        .log_error_context(&operation)
}

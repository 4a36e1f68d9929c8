//! Entrada que recibe cada operación de controlador.

use actix_web::http::header::{self, HeaderMap};
use actix_web::web;
use serde::de::DeserializeOwned;

use crate::api::{AppError, AppResult, ResultExt};
use crate::routing::{Endpoint, PathParams};

/// Petición ya enrutada: endpoint resuelto, parámetros de path tipados y el
/// resto de la petición HTTP sin interpretar
#[derive(Debug, Clone)]
pub struct HandlerRequest {
    pub endpoint: Endpoint,
    pub params: PathParams,
    /// Query string sin el `?`
    pub query: String,
    pub headers: HeaderMap,
    pub body: web::Bytes,
}

impl HandlerRequest {
    pub fn new(endpoint: Endpoint, params: PathParams) -> Self {
        Self {
            endpoint,
            params,
            query: String::new(),
            headers: HeaderMap::new(),
            body: web::Bytes::new(),
        }
    }

    /// Token Bearer del header Authorization, si lo hay y es legible
    pub fn bearer_token(&self) -> Option<&str> {
        self.headers
            .get(header::AUTHORIZATION)?
            .to_str()
            .ok()?
            .strip_prefix("Bearer ")
    }

    /// Extrae el token Bearer del header Authorization
    ///
    /// # Errores
    /// - `Unauthorized`: Si falta el header, es inválido o no tiene el formato correcto
    pub fn require_bearer_token(&self) -> AppResult<&str> {
        let auth_header = self
            .headers
            .get(header::AUTHORIZATION)
            .ok_or_else(|| AppError::Unauthorized("Falta header Authorization".to_string()))?;

        let auth_str = auth_header
            .to_str()
            .map_err(|_| AppError::Unauthorized("Header Authorization inválido".to_string()))?;

        auth_str
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Unauthorized("Formato de token inválido".to_string()))
    }

    /// Deserializa el cuerpo como JSON
    pub fn json<T: DeserializeOwned>(&self) -> AppResult<T> {
        serde_json::from_slice(&self.body).map_err_validation("Cuerpo JSON inválido")
    }

    /// Deserializa la query string (`?estacao=cozinha&limit=10`)
    pub fn query<T: DeserializeOwned>(&self) -> AppResult<T> {
        web::Query::<T>::from_query(&self.query)
            .map(web::Query::into_inner)
            .map_err(|e| AppError::Validation(format!("Query string inválida: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::HeaderValue;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct NovoItem {
        nome: String,
        quantidade: u32,
    }

    fn request() -> HandlerRequest {
        HandlerRequest::new(Endpoint::PedidoAdicionarItem, PathParams::new())
    }

    #[test]
    fn json_body_is_deserialized() {
        let mut req = request();
        req.body = web::Bytes::from_static(br#"{"nome":"Caipirinha","quantidade":2}"#);

        let item: NovoItem = req.json().unwrap();
        assert_eq!(
            item,
            NovoItem {
                nome: "Caipirinha".into(),
                quantidade: 2
            }
        );
    }

    #[test]
    fn malformed_json_is_a_validation_error() {
        let mut req = request();
        req.body = web::Bytes::from_static(b"{nome:");

        assert!(matches!(
            req.json::<NovoItem>(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn query_string_is_deserialized() {
        #[derive(Deserialize)]
        struct Filtro {
            limit: usize,
        }

        let mut req = request();
        req.query = "limit=10".to_string();
        assert_eq!(req.query::<Filtro>().unwrap().limit, 10);

        req.query = "limit=muitos".to_string();
        assert!(req.query::<Filtro>().is_err());
    }

    #[test]
    fn bearer_token_is_extracted() {
        let mut req = request();
        assert!(req.bearer_token().is_none());
        assert!(matches!(
            req.require_bearer_token(),
            Err(AppError::Unauthorized(_))
        ));

        req.headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXN1YXJpbw=="),
        );
        assert!(req.bearer_token().is_none());
        assert!(req.require_bearer_token().is_err());

        req.headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc-123"),
        );
        assert_eq!(req.bearer_token(), Some("abc-123"));
        assert_eq!(req.require_bearer_token().unwrap(), "abc-123");
    }
}

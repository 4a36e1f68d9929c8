//! # Tabla de rutas
//!
//! Tabla inmutable de tuplas (método, patrón, endpoint) construida una sola
//! vez al arrancar. [`RouteTable::resolve`] es una búsqueda pura: no tiene
//! estado ni efectos, así que se comparte entre workers sin bloqueos.
//!
//! Al construirse, la tabla ordena las rutas por especificidad (literal antes
//! que parámetro en cada posición). Así `/comandas/abertas` nunca queda
//! tapada por `/comandas/:id`, se declaren en el orden que se declaren. Entre
//! rutas igual de específicas gana la primera registrada.

pub mod params;
pub mod pattern;

pub use params::PathParams;
pub use pattern::{PathPattern, Segment};

use actix_web::http::Method;

use crate::api::{AppError, AppResult};
use pattern::split_path;

/// Capacidades que expone el servicio, una por operación de controlador
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Login,
    Register,
    CardapioStore,
    CardapioIndex,
    CardapioDelete,
    ComandaAbrir,
    ComandaFechar,
    ComandaIndexAbertas,
    ComandaShow,
    PedidoAdicionarItem,
    PedidoAtualizarStatus,
    KdsCozinha,
    KdsCopa,
}

impl Endpoint {
    pub const ALL: [Endpoint; 13] = [
        Endpoint::Login,
        Endpoint::Register,
        Endpoint::CardapioStore,
        Endpoint::CardapioIndex,
        Endpoint::CardapioDelete,
        Endpoint::ComandaAbrir,
        Endpoint::ComandaFechar,
        Endpoint::ComandaIndexAbertas,
        Endpoint::ComandaShow,
        Endpoint::PedidoAdicionarItem,
        Endpoint::PedidoAtualizarStatus,
        Endpoint::KdsCozinha,
        Endpoint::KdsCopa,
    ];

    pub fn controller(self) -> &'static str {
        match self {
            Endpoint::Login | Endpoint::Register => "AuthController",
            Endpoint::CardapioStore | Endpoint::CardapioIndex | Endpoint::CardapioDelete => {
                "ItemCardapioController"
            }
            Endpoint::ComandaAbrir
            | Endpoint::ComandaFechar
            | Endpoint::ComandaIndexAbertas
            | Endpoint::ComandaShow => "ComandaController",
            Endpoint::PedidoAdicionarItem | Endpoint::PedidoAtualizarStatus => "PedidoController",
            Endpoint::KdsCozinha | Endpoint::KdsCopa => "ViewKdsController",
        }
    }

    pub fn operation(self) -> &'static str {
        match self {
            Endpoint::Login => "login",
            Endpoint::Register => "register",
            Endpoint::CardapioStore => "store",
            Endpoint::CardapioIndex => "index",
            Endpoint::CardapioDelete => "delete",
            Endpoint::ComandaAbrir => "abrir",
            Endpoint::ComandaFechar => "fechar",
            Endpoint::ComandaIndexAbertas => "index_abertas",
            Endpoint::ComandaShow => "show",
            Endpoint::PedidoAdicionarItem => "adicionar_item",
            Endpoint::PedidoAtualizarStatus => "atualizar_status",
            Endpoint::KdsCozinha => "get_cozinha",
            Endpoint::KdsCopa => "get_copa",
        }
    }

    /// Nombre calificado, p.ej. `ComandaController::show`
    pub fn qualified_name(self) -> String {
        format!("{}::{}", self.controller(), self.operation())
    }
}

#[derive(Debug, Clone)]
pub struct Route {
    pub method: Method,
    pub pattern: PathPattern,
    pub endpoint: Endpoint,
}

impl Route {
    pub fn new(method: Method, pattern: &str, endpoint: Endpoint) -> AppResult<Self> {
        Ok(Self {
            method,
            pattern: PathPattern::parse(pattern)?,
            endpoint,
        })
    }

    /// `HEAD` se atiende con las rutas `GET`
    fn accepts(&self, method: &Method) -> bool {
        self.method == *method || (*method == Method::HEAD && self.method == Method::GET)
    }
}

/// Resultado de resolver una petición
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub endpoint: Endpoint,
    pub params: PathParams,
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Tabla de endpoints del servicio de comandas
    pub fn new() -> AppResult<Self> {
        let routes = vec![
            Route::new(Method::POST, "/login", Endpoint::Login)?,
            Route::new(Method::POST, "/register", Endpoint::Register)?,
            Route::new(Method::POST, "/cardapio", Endpoint::CardapioStore)?,
            Route::new(Method::GET, "/cardapio", Endpoint::CardapioIndex)?,
            Route::new(Method::DELETE, "/cardapio/:id", Endpoint::CardapioDelete)?,
            Route::new(Method::POST, "/comandas", Endpoint::ComandaAbrir)?,
            Route::new(Method::PUT, "/comandas/:id/fechar", Endpoint::ComandaFechar)?,
            Route::new(Method::GET, "/comandas/abertas", Endpoint::ComandaIndexAbertas)?,
            Route::new(Method::GET, "/comandas/:id", Endpoint::ComandaShow)?,
            Route::new(Method::POST, "/comandas/:id/adicionar", Endpoint::PedidoAdicionarItem)?,
            Route::new(Method::GET, "/kds/cozinha", Endpoint::KdsCozinha)?,
            Route::new(Method::GET, "/kds/copa", Endpoint::KdsCopa)?,
            Route::new(Method::PUT, "/pedidos/:itemId/status", Endpoint::PedidoAtualizarStatus)?,
        ];

        Ok(Self::from_routes(routes))
    }

    pub fn from_routes(mut routes: Vec<Route>) -> Self {
        // sort_by es estable: a igual especificidad se respeta la declaración
        routes.sort_by(|a, b| a.pattern.specificity_cmp(&b.pattern));
        Self { routes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resuelve (método, path) a un endpoint con sus parámetros decodificados
    ///
    /// # Errores
    /// - `RouteNotFound`: ningún patrón encaja con el path
    /// - `MethodNotAllowed`: el path existe pero no con este método
    /// - `ValidationWithField`: un parámetro no es UTF-8 válido tras decodificar
    pub fn resolve(&self, method: &Method, path: &str) -> AppResult<RouteMatch> {
        let segments = split_path(path);
        let mut allowed: Vec<Method> = Vec::new();

        for route in &self.routes {
            let Some(captures) = route.pattern.capture(&segments) else {
                continue;
            };

            if route.accepts(method) {
                let mut params = PathParams::new();
                for (name, raw) in captures {
                    let decoded = urlencoding::decode(raw).map_err(|_| {
                        AppError::validation_field(name, "codificación de URL inválida")
                    })?;
                    params.push(name, decoded.into_owned());
                }

                return Ok(RouteMatch {
                    endpoint: route.endpoint,
                    params,
                });
            }

            if !allowed.contains(&route.method) {
                allowed.push(route.method.clone());
            }
        }

        if allowed.is_empty() {
            return Err(AppError::RouteNotFound {
                method: method.clone(),
                path: path.to_string(),
            });
        }

        if allowed.contains(&Method::GET) && !allowed.contains(&Method::HEAD) {
            allowed.push(Method::HEAD);
        }

        Err(AppError::MethodNotAllowed {
            method: method.clone(),
            path: path.to_string(),
            allowed,
        })
    }
}

//! # Controladores
//!
//! Los cinco colaboradores a los que el router delega: autenticación, ítems
//! del cardápio, comandas, pedidos y vistas KDS. El router solo conoce estos
//! traits; la lógica de negocio vive en sus implementaciones.

mod request;
mod unwired;

pub use request::HandlerRequest;
pub use unwired::Unwired;

use actix_web::HttpResponse;
use async_trait::async_trait;
use std::sync::Arc;

use crate::api::AppResult;
use crate::routing::Endpoint;

/// Login y registro de cuentas
#[async_trait(?Send)]
pub trait AuthController: Send + Sync {
    async fn login(&self, req: HandlerRequest) -> AppResult<HttpResponse>;
    async fn register(&self, req: HandlerRequest) -> AppResult<HttpResponse>;
}

/// Ítems del cardápio (menú)
#[async_trait(?Send)]
pub trait ItemCardapioController: Send + Sync {
    async fn store(&self, req: HandlerRequest) -> AppResult<HttpResponse>;
    async fn index(&self, req: HandlerRequest) -> AppResult<HttpResponse>;
    /// Recibe el parámetro `id`
    async fn delete(&self, req: HandlerRequest) -> AppResult<HttpResponse>;
}

/// Comandas (cuentas abiertas por mesa)
#[async_trait(?Send)]
pub trait ComandaController: Send + Sync {
    async fn abrir(&self, req: HandlerRequest) -> AppResult<HttpResponse>;
    /// Recibe el parámetro `id`
    async fn fechar(&self, req: HandlerRequest) -> AppResult<HttpResponse>;
    async fn index_abertas(&self, req: HandlerRequest) -> AppResult<HttpResponse>;
    /// Recibe el parámetro `id`
    async fn show(&self, req: HandlerRequest) -> AppResult<HttpResponse>;
}

/// Ítems de pedido dentro de una comanda
#[async_trait(?Send)]
pub trait PedidoController: Send + Sync {
    /// Recibe el parámetro `id` de la comanda
    async fn adicionar_item(&self, req: HandlerRequest) -> AppResult<HttpResponse>;
    /// Recibe el parámetro `itemId`
    async fn atualizar_status(&self, req: HandlerRequest) -> AppResult<HttpResponse>;
}

/// Vistas del Kitchen Display System por estación
#[async_trait(?Send)]
pub trait ViewKdsController: Send + Sync {
    async fn get_cozinha(&self, req: HandlerRequest) -> AppResult<HttpResponse>;
    async fn get_copa(&self, req: HandlerRequest) -> AppResult<HttpResponse>;
}

/// Conjunto de controladores que usa el dispatcher. Se construye una vez al
/// arrancar y se comparte entre workers vía `web::Data`.
#[derive(Clone)]
pub struct Controllers {
    pub auth: Arc<dyn AuthController>,
    pub cardapio: Arc<dyn ItemCardapioController>,
    pub comandas: Arc<dyn ComandaController>,
    pub pedidos: Arc<dyn PedidoController>,
    pub kds: Arc<dyn ViewKdsController>,
}

impl Controllers {
    pub fn new(
        auth: Arc<dyn AuthController>,
        cardapio: Arc<dyn ItemCardapioController>,
        comandas: Arc<dyn ComandaController>,
        pedidos: Arc<dyn PedidoController>,
        kds: Arc<dyn ViewKdsController>,
    ) -> Self {
        Self {
            auth,
            cardapio,
            comandas,
            pedidos,
            kds,
        }
    }

    /// Usa una misma instancia para los cinco colaboradores
    pub fn from_single<C>(controller: Arc<C>) -> Self
    where
        C: AuthController
            + ItemCardapioController
            + ComandaController
            + PedidoController
            + ViewKdsController
            + 'static,
    {
        Self {
            auth: controller.clone(),
            cardapio: controller.clone(),
            comandas: controller.clone(),
            pedidos: controller.clone(),
            kds: controller,
        }
    }

    /// Controladores que responden `501` en todas las operaciones
    pub fn unwired() -> Self {
        Self::from_single(Arc::new(Unwired))
    }

    /// Invoca la operación que corresponde al endpoint de la petición
    pub async fn call(&self, req: HandlerRequest) -> AppResult<HttpResponse> {
        match req.endpoint {
            Endpoint::Login => self.auth.login(req).await,
            Endpoint::Register => self.auth.register(req).await,
            Endpoint::CardapioStore => self.cardapio.store(req).await,
            Endpoint::CardapioIndex => self.cardapio.index(req).await,
            Endpoint::CardapioDelete => self.cardapio.delete(req).await,
            Endpoint::ComandaAbrir => self.comandas.abrir(req).await,
            Endpoint::ComandaFechar => self.comandas.fechar(req).await,
            Endpoint::ComandaIndexAbertas => self.comandas.index_abertas(req).await,
            Endpoint::ComandaShow => self.comandas.show(req).await,
            Endpoint::PedidoAdicionarItem => self.pedidos.adicionar_item(req).await,
            Endpoint::PedidoAtualizarStatus => self.pedidos.atualizar_status(req).await,
            Endpoint::KdsCozinha => self.kds.get_cozinha(req).await,
            Endpoint::KdsCopa => self.kds.get_copa(req).await,
        }
    }
}

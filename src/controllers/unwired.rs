use actix_web::HttpResponse;
use async_trait::async_trait;

use super::{
    AuthController, ComandaController, HandlerRequest, ItemCardapioController, PedidoController,
    ViewKdsController,
};
use crate::api::{AppError, AppResult};

/// Implementación por defecto del binario: todas las operaciones responden
/// `501 Not Implemented` con el nombre de la operación
#[derive(Debug, Clone, Copy, Default)]
pub struct Unwired;

fn unavailable(req: &HandlerRequest) -> AppResult<HttpResponse> {
    Err(AppError::not_implemented(&req.endpoint.qualified_name()))
}

#[async_trait(?Send)]
impl AuthController for Unwired {
    async fn login(&self, req: HandlerRequest) -> AppResult<HttpResponse> {
        unavailable(&req)
    }

    async fn register(&self, req: HandlerRequest) -> AppResult<HttpResponse> {
        unavailable(&req)
    }
}

#[async_trait(?Send)]
impl ItemCardapioController for Unwired {
    async fn store(&self, req: HandlerRequest) -> AppResult<HttpResponse> {
        unavailable(&req)
    }

    async fn index(&self, req: HandlerRequest) -> AppResult<HttpResponse> {
        unavailable(&req)
    }

    async fn delete(&self, req: HandlerRequest) -> AppResult<HttpResponse> {
        unavailable(&req)
    }
}

#[async_trait(?Send)]
impl ComandaController for Unwired {
    async fn abrir(&self, req: HandlerRequest) -> AppResult<HttpResponse> {
        unavailable(&req)
    }

    async fn fechar(&self, req: HandlerRequest) -> AppResult<HttpResponse> {
        unavailable(&req)
    }

    async fn index_abertas(&self, req: HandlerRequest) -> AppResult<HttpResponse> {
        unavailable(&req)
    }

    async fn show(&self, req: HandlerRequest) -> AppResult<HttpResponse> {
        unavailable(&req)
    }
}

#[async_trait(?Send)]
impl PedidoController for Unwired {
    async fn adicionar_item(&self, req: HandlerRequest) -> AppResult<HttpResponse> {
        unavailable(&req)
    }

    async fn atualizar_status(&self, req: HandlerRequest) -> AppResult<HttpResponse> {
        unavailable(&req)
    }
}

#[async_trait(?Send)]
impl ViewKdsController for Unwired {
    async fn get_cozinha(&self, req: HandlerRequest) -> AppResult<HttpResponse> {
        unavailable(&req)
    }

    async fn get_copa(&self, req: HandlerRequest) -> AppResult<HttpResponse> {
        unavailable(&req)
    }
}

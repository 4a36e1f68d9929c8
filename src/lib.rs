//! # Comanda Router
//!
//! Tabla de rutas del servicio de gestión de pedidos de restaurante:
//! cardápio, comandas, pedidos, vistas KDS y login/registro.
//!
//! - [`routing`] - Tabla inmutable (método, patrón, endpoint) y su matcher
//! - [`controllers`] - Traits de los cinco controladores y su entrada tipada
//! - [`api`] - Dispatcher de Actix Web y errores HTTP
//! - [`config`] - Configuración por variables de entorno

pub mod api;
pub mod config;
pub mod controllers;
pub mod routing;

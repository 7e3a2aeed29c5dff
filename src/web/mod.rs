//! Server-rendered web interface: pages, forms, and their JSON endpoints.

pub mod cookies;
pub mod dto;
pub mod flash;
pub mod handlers;
pub mod menu;
pub mod middleware;
pub mod routes;

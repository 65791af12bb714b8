//! Presentation layer - HTTP handlers, DTOs, router, auth gate

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

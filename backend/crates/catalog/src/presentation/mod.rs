//! Presentation Layer

pub mod dto;
pub mod handlers;
pub mod links;
pub mod router;

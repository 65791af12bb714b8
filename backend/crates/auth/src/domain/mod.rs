//! Domain layer - Account entity, value objects, repository trait

pub mod account;
pub mod email;
pub mod repository;

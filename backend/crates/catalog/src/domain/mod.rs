//! Domain layer - Product/Order entities and repository traits

pub mod order;
pub mod product;
pub mod repository;

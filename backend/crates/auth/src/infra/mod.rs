//! Infrastructure layer - Database implementations

pub mod postgres;

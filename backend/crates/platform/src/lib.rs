//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (bcrypt, salted, constant-time verification)
//! - Signed session tokens (HMAC-SHA256, self-contained, time-limited)

pub mod password;
pub mod token;

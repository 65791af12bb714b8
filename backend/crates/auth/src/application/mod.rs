//! Application layer - Use cases

pub mod config;
pub mod delete_account;
pub mod log_in;
pub mod sign_up;

pub use config::AuthConfig;
pub use delete_account::DeleteAccountUseCase;
pub use log_in::{LogInInput, LogInOutput, LogInUseCase};
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};

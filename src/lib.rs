pub mod core;
pub mod models;
pub mod stores;
pub mod utils;

pub use crate::core::config::Config;
pub use crate::core::error::DirectoryError;
pub use crate::models::outcome::{AddOutcome, AddStatus, AuthOutcome, AuthStatus, RemoveOutcome};
pub use crate::models::user::{CandidateRecord, UserRecord};
pub use crate::stores::directory::UserDirectory;

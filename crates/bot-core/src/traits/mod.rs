//! Ports - what the dialog engine needs from infrastructure

mod messenger;
mod repositories;

pub use messenger::Messenger;
pub use repositories::{RecordRepository, RepoResult, StateStore, UserRepository};

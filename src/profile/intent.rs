use crate::models::{Album, User};
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ProfileIntent {
    FetchStarted,
    /// Users and the selected user's albums both arrived.
    Loaded { user: User, albums: Vec<Album> },
    /// The user list came back but nobody was selected (empty list).
    NoUserSelected,
    Failed { message: String },
}

impl Intent for ProfileIntent {}

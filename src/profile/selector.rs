//! Strategies for choosing which user the profile screen shows.

use std::sync::Arc;

use rand::seq::SliceRandom;

use crate::config::{ProfileConfig, UserSelection};
use crate::models::User;

/// Picks one user out of the fetched list.
///
/// Returning `None` means "nobody to show" and makes the fetch a silent no-op.
pub trait UserSelector: Send + Sync {
    fn select<'a>(&self, users: &'a [User]) -> Option<&'a User>;
}

/// Uniformly random choice.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomUser;

impl UserSelector for RandomUser {
    fn select<'a>(&self, users: &'a [User]) -> Option<&'a User> {
        users.choose(&mut rand::thread_rng())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FirstUser;

impl UserSelector for FirstUser {
    fn select<'a>(&self, users: &'a [User]) -> Option<&'a User> {
        users.first()
    }
}

/// Choose the user with a fixed id, if the backend returned it.
#[derive(Debug, Clone, Copy)]
pub struct UserById(pub i64);

impl UserSelector for UserById {
    fn select<'a>(&self, users: &'a [User]) -> Option<&'a User> {
        users.iter().find(|u| u.id == self.0)
    }
}

/// Build the selector named by configuration.
///
/// `by_id` without a `user_id` is rejected by config validation; if it still
/// gets here it falls back to random.
pub fn selector_for(config: &ProfileConfig) -> Arc<dyn UserSelector> {
    match (config.selection, config.user_id) {
        (UserSelection::First, _) => Arc::new(FirstUser),
        (UserSelection::ById, Some(id)) => Arc::new(UserById(id)),
        (UserSelection::ById, None) | (UserSelection::Random, _) => Arc::new(RandomUser),
    }
}

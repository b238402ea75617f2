use crate::models::{Album, User};
use crate::mvi::ViewState;

/// Everything the profile screen renders.
///
/// `user` and `albums` always belong together: they are only ever replaced in
/// the same transition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileState {
    pub user: Option<User>,
    pub albums: Vec<Album>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl ViewState for ProfileState {}

impl ProfileState {
    pub fn has_error(&self) -> bool {
        self.error_message.is_some()
    }
}

use crate::mvi::Reducer;
use crate::profile::intent::ProfileIntent;
use crate::profile::state::ProfileState;

pub struct ProfileReducer;

impl Reducer for ProfileReducer {
    type State = ProfileState;
    type Intent = ProfileIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProfileIntent::FetchStarted => ProfileState {
                is_loading: true,
                ..state
            },
            ProfileIntent::Loaded { user, albums } => ProfileState {
                user: Some(user),
                albums,
                is_loading: false,
                error_message: None,
            },
            ProfileIntent::NoUserSelected => ProfileState {
                is_loading: false,
                error_message: None,
                ..state
            },
            // Last good user/albums stay visible behind the error.
            ProfileIntent::Failed { message } => ProfileState {
                is_loading: false,
                error_message: Some(message),
                ..state
            },
        }
    }
}

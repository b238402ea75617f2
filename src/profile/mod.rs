//! Profile screen: pick a user, then load that user's albums.

mod controller;
mod intent;
mod reducer;
mod selector;
mod state;

pub use controller::ProfileController;
pub use intent::ProfileIntent;
pub use reducer::ProfileReducer;
pub use selector::{selector_for, FirstUser, RandomUser, UserById, UserSelector};
pub use state::ProfileState;

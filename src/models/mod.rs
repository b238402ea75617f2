//! Entity records decoded from the backend.
//!
//! All records are plain immutable values. Wire names are camelCase and
//! unknown fields are ignored, so the backend can grow without breaking us.

mod album;
mod photo;
mod user;

pub use album::Album;
pub use photo::Photo;
pub use user::{Address, User};

//! Model-View-Intent primitives shared by both data controllers.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Observers
//!    ↑                                │
//!    └────────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of one screen's data
//! - **Intent**: fetch lifecycle events and user input
//! - **Reducer**: pure function that produces the next state
//! - **Store**: owns the current state and publishes every transition

mod intent;
mod reducer;
mod state;
mod store;
mod subscription;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::ViewState;
pub use store::Store;
pub use subscription::Subscription;

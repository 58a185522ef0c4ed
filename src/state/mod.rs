// ============================================================================
// STATE MODULE - Slices, reducers y selectores
// ============================================================================

pub mod reactivity;
pub mod resource;
pub mod auth_state;
pub mod app_state;
pub mod selectors;

pub use reactivity::{Subscribers, Subscription};
pub use resource::{ResourceAction, ResourceState, Status};
pub use auth_state::{AuthAction, AuthState};
pub use app_state::{Action, AppState};

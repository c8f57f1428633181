//! Stable facade for the pagination session core used by command handlers.

/// Default timeout for button-based pagination sessions.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

mod controller;
pub mod interaction;
mod render;
pub mod respond;
mod session;
mod state;
pub mod token;
mod view;
mod window;

pub use controller::{ControllerOutput, Direction, NavigableAction, NavigationController};
pub use interaction::{NavInteractionValidation, validate_navigation_interaction};
pub use render::{DisplayPayload, DisplayRenderer, PayloadEntry};
pub use respond::{
    respond_ephemeral_message, respond_session_expired, send_navigable_message,
    update_navigable_interaction_message,
};
pub use session::{SessionError, SessionRegistry};
pub use state::PaginationState;
pub use view::{build_nav_components, build_navigable_view};
pub use window::{ListWindow, compute_window, max_page_index, page_count};

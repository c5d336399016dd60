//! Application state module
//!
//! The newsletter form, its validation and the scroll action are plain state
//! with no terminal coupling; `ui` renders them and `app` feeds them events.

mod app_state;
mod scroll;
mod subscription;
mod validation;
mod view_model;
mod viewport;

pub use app_state::*;
pub use scroll::*;
pub use subscription::*;
pub use validation::*;
pub use view_model::*;
pub use viewport::*;

//! Reusable UI components

mod button;
mod field;

pub use button::{render_button, BUTTON_HEIGHT};
pub use field::{render_text_field, TextField, FIELD_HEIGHT};

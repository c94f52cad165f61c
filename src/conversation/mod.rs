//! Chat conversation logic.
//!
//! - `controller` - state machine driven by decoded chat events
//! - `forms` - comma-separated submissions and their parsers
//! - `mode` - per-chat expected input
//! - `validation` - field-level validation with user-facing messages

pub mod controller;
pub mod forms;
pub mod mode;
pub mod validation;


pub use controller::{ConversationController, ConversationError};
pub use forms::{
    parse_apostille, parse_nosud, validate_apostille, validate_nosud, ApostilleInput, NosudInput,
};
pub use mode::ConversationMode;
pub use validation::{ValidationError, ValidationErrors};

//! Reusable widgets for the TUI
//!
//! Presentation only: each widget renders the data it is given and holds no
//! state of its own beyond what the caller passes in.

pub mod account_card;
pub mod account_table;
pub mod alert;
pub mod input;
pub mod select;
pub mod spinner;

// Re-export commonly used widgets
pub use account_card::AccountCard;
pub use account_table::AccountTable;
pub use alert::{AlertKind, AlertMessage};
pub use input::TextInput;
pub use select::{option_label, SelectField};
pub use spinner::LoadingSpinner;

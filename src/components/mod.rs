//! UI Components
//!
//! Leptos components for the todo widget.

mod clear_all_button;
mod todo_group;
mod todo_input;
mod todo_row;

pub use clear_all_button::ClearAllButton;
pub use todo_group::TodoGroup;
pub use todo_input::TodoInput;
pub use todo_row::TodoRow;

// Data Models
pub mod file_entry;
pub mod panel_state;
pub mod transfer;

pub use file_entry::{FileEntry, FileType};
pub use panel_state::PanelState;

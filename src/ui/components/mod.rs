// UI Components
pub mod dialog;
pub mod overflow_menu;
pub mod panel;
pub mod status_bar;
pub mod toolbar;

// Re-export components for convenience
pub use dialog::{Dialog, DialogKind};
pub use overflow_menu::OverflowMenu;
pub use panel::{Panel, PanelStatus};
pub use status_bar::StatusBar;
pub use toolbar::{create_default_toolbar, OverflowState, Toolbar, ToolbarItem};

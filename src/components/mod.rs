mod navbar;
mod popup;
mod spinner;
mod stats;
mod week_table;

pub use navbar::Navbar;
pub use popup::{PopupEditor, PopupState};
pub use spinner::Spinner;
pub use stats::StatsModal;
pub use week_table::WeekTable;

//! DOM-free planner state: the week window, the cell cache and the edit
//! commands the views dispatch. Everything here is testable on the host.

pub mod cells;
pub mod commands;
pub mod week;

pub use cells::{has_content, textarea_rows, CellStore, DayRecord, Field, LocationCode};
pub use commands::{Placement, SaveEntry};
pub use week::{
    is_mobile, monday_of, today, EdgeHits, LoadedWeek, ScrollMetrics, WeekWindow,
    EDGE_THRESHOLD_PX, MOBILE_BREAKPOINT_PX,
};

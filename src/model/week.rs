use chrono::{Datelike, Duration, NaiveDate};

use super::cells::DayRecord;

/// Distance from either edge of the scroll area that triggers loading
/// another week.
pub const EDGE_THRESHOLD_PX: f64 = 200.0;

/// Viewports at most this wide get the icon/popup rendering for the
/// free-text fields.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

const INITIAL_WEEKS_BEFORE: i64 = 2;
const INITIAL_WEEKS_AFTER: i64 = 2;

/// Monday of the week containing `date`.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

pub fn is_mobile(viewport_width: f64) -> bool {
    viewport_width <= MOBILE_BREAKPOINT_PX
}

#[cfg(target_arch = "wasm32")]
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() as u32 + 1,
        now.get_date() as u32,
    )
    .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// The contiguous range of weeks currently materialized in the view.
///
/// Both bounds are Monday-aligned week starts. The window only ever grows,
/// one whole week at a time; it is reset only when the view is rebuilt
/// wholesale (breakpoint crossing, family-member change).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    earliest: NaiveDate,
    latest: NaiveDate,
}

impl WeekWindow {
    /// A one-week window on the week containing `today`.
    pub fn centered(today: NaiveDate) -> Self {
        let monday = monday_of(today);
        Self { earliest: monday, latest: monday }
    }

    /// Week starts the initial load fetches, oldest first.
    pub fn initial_weeks(today: NaiveDate) -> Vec<NaiveDate> {
        let monday = monday_of(today);
        (-INITIAL_WEEKS_BEFORE..=INITIAL_WEEKS_AFTER)
            .map(|offset| monday + Duration::weeks(offset))
            .collect()
    }

    pub fn earliest(&self) -> NaiveDate {
        self.earliest
    }

    pub fn latest(&self) -> NaiveDate {
        self.latest
    }

    /// Widen the window to cover a week the initial load just fetched.
    pub fn mark_loaded(&mut self, week_start: NaiveDate) {
        if week_start < self.earliest {
            self.earliest = week_start;
        }
        if week_start > self.latest {
            self.latest = week_start;
        }
    }

    /// Grow one week into the past and return the new earliest week start.
    pub fn extend_back(&mut self) -> NaiveDate {
        self.earliest = self.earliest - Duration::weeks(1);
        self.earliest
    }

    /// Grow one week into the future and return the new latest week start.
    pub fn extend_forward(&mut self) -> NaiveDate {
        self.latest = self.latest + Duration::weeks(1);
        self.latest
    }
}

/// One fetched week, in render order.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedWeek {
    pub start: NaiveDate,
    pub days: Vec<DayRecord>,
}

/// Scroll position of the planner content area, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// Offset of the visible area from the top of the content.
    pub offset: f64,
    /// Height of the visible area.
    pub viewport: f64,
    /// Total scrollable height.
    pub content: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeHits {
    pub backward: bool,
    pub forward: bool,
}

impl ScrollMetrics {
    /// Which window extensions this scroll position asks for. Both edges can
    /// fire on the same event when the content is short enough.
    pub fn edges(&self) -> EdgeHits {
        EdgeHits {
            backward: self.offset < EDGE_THRESHOLD_PX,
            forward: self.content - (self.offset + self.viewport) < EDGE_THRESHOLD_PX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn monday_of_aligns_every_weekday() {
        let monday = date(2024, 6, 3);
        for offset in 0..7 {
            let day = monday + Duration::days(offset);
            assert_eq!(monday_of(day), monday, "offset {offset}");
        }
        // Sunday belongs to the week that started the previous Monday.
        assert_eq!(monday_of(date(2024, 6, 9)), monday);
        assert_eq!(monday_of(date(2024, 6, 10)), date(2024, 6, 10));
    }

    #[test]
    fn initial_load_covers_five_weeks_in_order() {
        let weeks = WeekWindow::initial_weeks(date(2024, 6, 5));
        assert_eq!(
            weeks,
            vec![
                date(2024, 5, 20),
                date(2024, 5, 27),
                date(2024, 6, 3),
                date(2024, 6, 10),
                date(2024, 6, 17),
            ]
        );
    }

    #[test]
    fn window_grows_and_never_shrinks() {
        let mut window = WeekWindow::centered(date(2024, 6, 5));
        assert_eq!(window.earliest(), date(2024, 6, 3));
        assert_eq!(window.latest(), date(2024, 6, 3));

        for start in WeekWindow::initial_weeks(date(2024, 6, 5)) {
            window.mark_loaded(start);
        }
        assert_eq!(window.earliest(), date(2024, 5, 20));
        assert_eq!(window.latest(), date(2024, 6, 17));

        assert_eq!(window.extend_back(), date(2024, 5, 13));
        assert_eq!(window.extend_forward(), date(2024, 6, 24));

        // Re-marking an interior week changes nothing.
        window.mark_loaded(date(2024, 6, 3));
        assert_eq!(window.earliest(), date(2024, 5, 13));
        assert_eq!(window.latest(), date(2024, 6, 24));
    }

    #[test]
    fn window_bounds_stay_monday_aligned() {
        let mut window = WeekWindow::centered(date(2024, 6, 8));
        for _ in 0..10 {
            window.extend_back();
            window.extend_forward();
        }
        assert_eq!(monday_of(window.earliest()), window.earliest());
        assert_eq!(monday_of(window.latest()), window.latest());
    }

    #[test]
    fn top_edge_triggers_backward_extension() {
        let near = ScrollMetrics { offset: 199.0, viewport: 600.0, content: 5000.0 };
        assert!(near.edges().backward);
        assert!(!near.edges().forward);

        let at = ScrollMetrics { offset: 200.0, viewport: 600.0, content: 5000.0 };
        assert!(!at.edges().backward);
    }

    #[test]
    fn bottom_edge_triggers_forward_extension() {
        let near = ScrollMetrics { offset: 4201.0, viewport: 600.0, content: 5000.0 };
        assert!(near.edges().forward);
        assert!(!near.edges().backward);

        let at = ScrollMetrics { offset: 4200.0, viewport: 600.0, content: 5000.0 };
        assert!(!at.edges().forward);
    }

    #[test]
    fn both_edges_fire_on_short_content() {
        let metrics = ScrollMetrics { offset: 0.0, viewport: 600.0, content: 700.0 };
        let hits = metrics.edges();
        assert!(hits.backward);
        assert!(hits.forward);
    }

    #[test]
    fn mobile_breakpoint_is_inclusive() {
        assert!(is_mobile(320.0));
        assert!(is_mobile(768.0));
        assert!(!is_mobile(769.0));
    }
}

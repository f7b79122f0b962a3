//! Page-window planning.
//!
//! Given the current page, the page count and a cap on visible page links,
//! the planner decides which page links to show and where the gaps go:
//!
//! 1. With no cap (`max_visible == 0`) or when every page fits, all pages
//!    are listed and nothing is elided.
//! 2. Otherwise a window of exactly `max_visible` pages is placed around the
//!    current page. The leading side gets `(max_visible - 1) / 2` pages and
//!    the trailing side `max_visible / 2`, so an even cap gives its extra
//!    page to the trailing side.
//! 3. A window that runs past either end is shifted back inside; the
//!    clamped side's shortfall is added to the opposite side.
//! 4. The first and last pages are always reachable. A gap of two or more
//!    hidden pages becomes a single [`WindowEntry::Ellipsis`]; a gap of
//!    exactly one page shows that page instead.

use std::ops::{Range, RangeInclusive};

use pagewin_core::{PagerError, Result, WindowEntry};
use tracing::{trace, warn};

/// Plans page-link layouts for a fixed visible-page cap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowPlanner {
    max_visible: usize,
}

impl WindowPlanner {
    /// Create a planner showing at most `max_visible` window pages (0 = unbounded).
    pub const fn new(max_visible: usize) -> Self {
        Self { max_visible }
    }

    /// Create a planner that never elides pages.
    pub const fn unbounded() -> Self {
        Self { max_visible: 0 }
    }

    /// Get the visible-page cap.
    pub const fn max_visible(&self) -> usize {
        self.max_visible
    }

    /// Plan the layout for `current` out of `page_count` pages.
    ///
    /// Returns an empty plan when there are no pages. Fails with
    /// [`PagerError::PreconditionViolated`] when `current` is not a valid
    /// page index.
    pub fn plan(&self, current: usize, page_count: usize) -> Result<Vec<WindowEntry>> {
        if page_count > 0 && current >= page_count {
            warn!(current, page_count, "window requested for out-of-range page");
            return Err(PagerError::PreconditionViolated {
                current,
                page_count,
            });
        }
        Ok(self.layout(current, page_count))
    }

    /// Build the plan; `current` must already be in range.
    pub(crate) fn layout(&self, current: usize, page_count: usize) -> Vec<WindowEntry> {
        if page_count == 0 {
            return Vec::new();
        }

        if !self.elides(page_count) {
            return (0..page_count).map(WindowEntry::page_at).collect();
        }

        let window = self.window(current, page_count);
        let (start, end) = (*window.start(), *window.end());
        let last = page_count - 1;

        // Window plus first/last page and at most two gap slots.
        let mut entries = Vec::with_capacity(self.max_visible + 4);

        if start > 0 {
            entries.push(WindowEntry::page_at(0));
            push_gap(&mut entries, 1..start);
        }

        entries.extend(window.map(WindowEntry::page_at));

        if end < last {
            push_gap(&mut entries, end + 1..last);
            entries.push(WindowEntry::page_at(last));
        }

        trace!(
            current,
            page_count,
            max_visible = self.max_visible,
            start,
            end,
            entries = entries.len(),
            "planned page window"
        );

        entries
    }

    /// Whether `page_count` pages need windowing under this cap.
    pub const fn elides(&self, page_count: usize) -> bool {
        self.max_visible > 0 && page_count > self.max_visible
    }

    /// Contiguous run of pages shown around `current`.
    ///
    /// Only meaningful when [`elides`](Self::elides) holds, so that
    /// `page_count > max_visible > 0`.
    fn window(&self, current: usize, page_count: usize) -> RangeInclusive<usize> {
        let leading = (self.max_visible - 1) / 2;
        let last = page_count - 1;

        let mut start = current.saturating_sub(leading);
        let mut end = start + self.max_visible - 1;
        if end > last {
            end = last;
            start = last + 1 - self.max_visible;
        }

        start..=end
    }
}

/// Record the hidden pages in `hidden`: nothing, the lone page, or an ellipsis.
fn push_gap(entries: &mut Vec<WindowEntry>, hidden: Range<usize>) {
    match hidden.len() {
        0 => {}
        1 => entries.push(WindowEntry::page_at(hidden.start)),
        _ => entries.push(WindowEntry::Ellipsis),
    }
}

/// Plan the layout for `current` out of `page_count` pages with the given cap.
pub fn plan(current: usize, page_count: usize, max_visible: usize) -> Result<Vec<WindowEntry>> {
    WindowPlanner::new(max_visible).plan(current, page_count)
}

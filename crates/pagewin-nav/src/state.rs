//! Page state and navigation.
//!
//! [`PageState`] owns the pager's configuration and current page. Every
//! navigation operation clamps its target into range, so any integer is a
//! valid argument. [`PageNavigator`] provides prev/next/first/last on top of
//! the two primitive mutators.

use std::ops::Range;

use pagewin_core::{DEFAULT_PAGE_SIZE, PagerConfig, PagerError, Result, WindowEntry};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::event::{EventEmitter, EventKind, ListenerId, PagerEvent};
use crate::planner::WindowPlanner;

/// Trait for types that support page navigation.
pub trait PageNavigator {
    /// Get the current page index.
    fn current_page(&self) -> usize;

    /// Get the number of pages.
    fn page_count(&self) -> usize;

    /// Clamp `page` into range, commit it and notify listeners.
    fn show(&mut self, page: i64) -> usize;

    /// Show the page before the current one.
    fn prev(&mut self) -> usize {
        let target = as_signed(self.current_page()).saturating_sub(1);
        self.show(target)
    }

    /// Show the page after the current one.
    fn next(&mut self) -> usize {
        let target = as_signed(self.current_page()).saturating_add(1);
        self.show(target)
    }

    /// Show the first page.
    fn first(&mut self) -> usize {
        self.show(0)
    }

    /// Show the last page.
    fn last(&mut self) -> usize {
        let target = as_signed(self.page_count()).saturating_sub(1);
        self.show(target)
    }
}

fn as_signed(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Point-in-time view of a pager, for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub current_page: usize,
    pub page_count: usize,
    pub total_items: usize,
    pub page_size: usize,
    pub max_visible: usize,
    /// Whether a "previous" affordance should be shown.
    pub has_prev: bool,
    /// Whether a "next" affordance should be shown.
    pub has_next: bool,
}

/// Configuration and current page of a pagination control.
///
/// Invariant: `current_page < page_count()` whenever there is at least one
/// page, and `current_page == 0` otherwise.
#[derive(Debug)]
pub struct PageState {
    total_items: usize,
    page_size: usize,
    max_visible: usize,
    current: usize,
    events: EventEmitter,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

impl PageState {
    /// Create an empty pager with the default page size and no visible cap.
    pub fn new() -> Self {
        Self {
            total_items: 0,
            page_size: DEFAULT_PAGE_SIZE,
            max_visible: 0,
            current: 0,
            events: EventEmitter::new(),
        }
    }

    /// Create a pager from a validated configuration.
    ///
    /// The initial page is selected silently.
    pub fn from_config(config: &PagerConfig) -> Result<Self> {
        config.validate()?;
        let mut state = Self {
            total_items: config.total_items,
            page_size: config.page_size,
            max_visible: config.max_visible,
            current: 0,
            events: EventEmitter::new(),
        };
        state.select(as_signed(config.initial_page));
        Ok(state)
    }

    /// Get the number of items per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Get the total number of items.
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Get the visible-page cap (0 = unbounded).
    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    /// Set the number of items per page.
    ///
    /// A zero page size is rejected and the previous value kept.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<usize> {
        if page_size == 0 {
            return Err(PagerError::invalid(
                "page_size",
                "page size must be greater than zero",
            ));
        }
        self.page_size = page_size;
        Ok(self.reclamp())
    }

    /// Set the total number of items.
    pub fn set_total_items(&mut self, total_items: usize) -> usize {
        self.total_items = total_items;
        self.reclamp()
    }

    /// Set the visible-page cap (0 = unbounded).
    pub fn set_max_visible(&mut self, max_visible: usize) -> usize {
        self.max_visible = max_visible;
        self.reclamp()
    }

    fn reclamp(&mut self) -> usize {
        let clamped = self.current.min(self.last_index());
        if clamped != self.current {
            debug!(
                from = self.current,
                to = clamped,
                page_count = self.page_count(),
                "current page clamped after reconfiguration"
            );
            self.current = clamped;
        }
        self.current
    }

    fn last_index(&self) -> usize {
        self.page_count().saturating_sub(1)
    }

    fn clamp(&self, page: i64) -> usize {
        usize::try_from(page).map_or(0, |page| page.min(self.last_index()))
    }

    /// Clamp `page` into range and commit it without notifying listeners.
    pub fn select(&mut self, page: i64) -> usize {
        self.current = self.clamp(page);
        debug!(
            requested = page,
            page = self.current,
            page_count = self.page_count(),
            "page selected"
        );
        self.current
    }

    /// Alias of [`PageNavigator::show`].
    pub fn goto(&mut self, page: i64) -> usize {
        self.show(page)
    }

    /// Check if there is a page before the current one.
    pub fn has_prev(&self) -> bool {
        self.current > 0
    }

    /// Check if there is a page after the current one.
    pub fn has_next(&self) -> bool {
        self.current + 1 < self.page_count()
    }

    /// Item offsets covered by the current page.
    pub fn item_range(&self) -> Range<usize> {
        let start = self.current.saturating_mul(self.page_size).min(self.total_items);
        let end = start.saturating_add(self.page_size).min(self.total_items);
        start..end
    }

    /// Get a planner for the configured visible-page cap.
    pub fn planner(&self) -> WindowPlanner {
        WindowPlanner::new(self.max_visible)
    }

    /// Plan the page links for the current state.
    pub fn window(&self) -> Vec<WindowEntry> {
        self.planner().layout(self.current, self.page_count())
    }

    /// Take a snapshot for rendering.
    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            current_page: self.current,
            page_count: self.page_count(),
            total_items: self.total_items,
            page_size: self.page_size,
            max_visible: self.max_visible,
            has_prev: self.has_prev(),
            has_next: self.has_next(),
        }
    }

    /// Register a listener for every event of `kind`.
    ///
    /// Listeners run synchronously after the new page is committed. They
    /// cannot borrow this `PageState`, so navigating from inside a listener
    /// does not compile; push the request to a queue the host drains after
    /// `show`/`goto` returns.
    pub fn on(
        &mut self,
        kind: EventKind,
        callback: impl FnMut(&PagerEvent) + 'static,
    ) -> ListenerId {
        self.events.on(kind, callback)
    }

    /// Register a listener for the next event of `kind` only.
    pub fn once(
        &mut self,
        kind: EventKind,
        callback: impl FnMut(&PagerEvent) + 'static,
    ) -> ListenerId {
        self.events.once(kind, callback)
    }

    /// Remove a listener.
    pub fn off(&mut self, id: ListenerId) -> bool {
        self.events.off(id)
    }

    /// Check if any listener is registered for `kind`.
    pub fn has_listeners(&self, kind: EventKind) -> bool {
        self.events.has_listeners(kind)
    }
}

impl PageNavigator for PageState {
    fn current_page(&self) -> usize {
        self.current
    }

    fn page_count(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    fn show(&mut self, page: i64) -> usize {
        let current = self.select(page);
        self.events.emit(&PagerEvent::Show { page: current });
        current
    }
}

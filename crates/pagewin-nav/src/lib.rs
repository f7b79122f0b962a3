//! Page state, navigation and window planning for pagewin.
//!
//! - **[`WindowPlanner`]** - pure layout planning: which page links to show
//!   and where ellipses go, for any (current page, page count, cap) triple
//! - **[`PageState`]** - page-count arithmetic, clamped navigation and
//!   "show" notifications to registered listeners
//!
//! Neither holds a reference to any visual element. A host renders the plan
//! from [`PageState::window`] and [`PageState::snapshot`] after every change.
//!
//! ```rust,ignore
//! use pagewin_nav::{EventKind, PageNavigator, PageState, PagerConfig};
//!
//! let config = PagerConfig::new(200, 10).with_max_visible(5);
//! let mut pager = PageState::from_config(&config)?;
//! pager.on(EventKind::Show, |event| println!("fetch page {}", event.page()));
//!
//! pager.goto(10);
//! let labels: Vec<String> = pager.window().iter().map(|e| e.label()).collect();
//! assert_eq!(labels, ["1", "…", "9", "10", "11", "12", "13", "…", "20"]);
//! ```

mod event;
mod planner;
mod state;

pub use event::{EventEmitter, EventKind, ListenerId, PagerEvent};
pub use planner::{WindowPlanner, plan};
pub use state::{PageNavigator, PageSnapshot, PageState};

// Re-export core types
pub use pagewin_core::{PagerConfig, PagerError, WindowEntry};

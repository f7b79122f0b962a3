use pagewin_nav::{
    EventKind, PageNavigator, PageState, PagerConfig, PagerError, WindowEntry, WindowPlanner, plan,
};
use std::cell::RefCell;
use std::rc::Rc;

const E: WindowEntry = WindowEntry::Ellipsis;

fn p(index: usize) -> WindowEntry {
    WindowEntry::page_at(index)
}

fn labels(entries: &[WindowEntry]) -> String {
    entries
        .iter()
        .map(WindowEntry::label)
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn test_no_items_means_no_pages() {
    let pager = PageState::from_config(&PagerConfig::new(0, 5)).unwrap();
    assert_eq!(pager.page_count(), 0);
    assert!(pager.window().is_empty());
    assert!(plan(0, 0, 5).unwrap().is_empty());
}

#[test]
fn test_unbounded_pager_lists_all_pages() {
    let mut pager = PageState::from_config(&PagerConfig::new(23, 5)).unwrap();
    pager.goto(2);

    assert_eq!(pager.page_count(), 5);
    assert_eq!(pager.window(), (0..5).map(p).collect::<Vec<_>>());
}

#[test]
fn test_windowed_scenarios() {
    let planner = WindowPlanner::new(5);

    assert_eq!(
        planner.plan(0, 20).unwrap(),
        vec![p(0), p(1), p(2), p(3), p(4), E, p(19)]
    );
    assert_eq!(
        planner.plan(10, 20).unwrap(),
        vec![p(0), E, p(8), p(9), p(10), p(11), p(12), E, p(19)]
    );
    assert_eq!(
        planner.plan(19, 20).unwrap(),
        vec![p(0), E, p(15), p(16), p(17), p(18), p(19)]
    );
}

#[test]
fn test_window_walk_through_all_pages() {
    let config = PagerConfig::new(100, 10).with_max_visible(3);
    let mut pager = PageState::from_config(&config).unwrap();

    let mut rendered = vec![labels(&pager.window())];
    while pager.has_next() {
        pager.next();
        rendered.push(labels(&pager.window()));
    }

    assert_eq!(
        rendered,
        vec![
            "1 2 3 … 10",
            "1 2 3 … 10",
            "1 2 3 4 … 10",
            "1 2 3 4 5 … 10",
            "1 … 4 5 6 … 10",
            "1 … 5 6 7 … 10",
            "1 … 6 7 8 9 10",
            "1 … 7 8 9 10",
            "1 … 8 9 10",
            "1 … 8 9 10",
        ]
    );
}

#[test]
fn test_goto_clamps() {
    let mut pager = PageState::from_config(&PagerConfig::new(100, 10)).unwrap();
    assert_eq!(pager.goto(-5), 0);
    assert_eq!(pager.current_page(), 0);
    assert_eq!(pager.goto(999), 9);
    assert_eq!(pager.current_page(), 9);
}

#[test]
fn test_goto_always_lands_in_range() {
    for total in [0usize, 1, 4, 5, 6, 49, 50, 51] {
        let mut pager = PageState::from_config(&PagerConfig::new(total, 5)).unwrap();
        let max_index = pager.page_count().saturating_sub(1);
        for target in -7i64..20 {
            let page = pager.goto(target);
            assert!(page <= max_index, "total={total} target={target}");
            assert_eq!(page, pager.current_page());
        }
    }
}

#[test]
fn test_planner_rejects_inconsistent_input() {
    let err = plan(5, 3, 2).unwrap_err();
    assert!(matches!(
        err,
        PagerError::PreconditionViolated {
            current: 5,
            page_count: 3
        }
    ));
}

#[test]
fn test_event_sink_sees_navigation() {
    let config = PagerConfig::new(50, 10);
    let mut pager = PageState::from_config(&config).unwrap();
    let fetched = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&fetched);
    let id = pager.on(EventKind::Show, move |event| {
        sink.borrow_mut().push(event.page());
    });

    pager.next();
    pager.last();
    pager.next();
    pager.select(1);
    pager.prev();
    pager.first();

    assert_eq!(*fetched.borrow(), vec![1, 4, 4, 0, 0]);

    assert!(pager.off(id));
    pager.next();
    assert_eq!(fetched.borrow().len(), 5);
}

#[test]
fn test_reconfiguration_keeps_window_consistent() {
    let config = PagerConfig::new(200, 10).with_max_visible(5);
    let mut pager = PageState::from_config(&config).unwrap();
    pager.last();
    assert_eq!(labels(&pager.window()), "1 … 16 17 18 19 20");

    pager.set_total_items(42);
    assert_eq!(pager.current_page(), 4);
    assert_eq!(labels(&pager.window()), "1 2 3 4 5");

    pager.set_page_size(3).unwrap();
    assert_eq!(pager.page_count(), 14);
    assert_eq!(labels(&pager.window()), "1 2 3 4 5 6 7 … 14");
}

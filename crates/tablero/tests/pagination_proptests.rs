//! Property-based tests for the paginator and page-list windowing.

use proptest::prelude::*;
use tablero::pagination::{build_page_list, PageAction, PageEntry, Paginator, DEFAULT_PAGE_SIZE};

// ===== Strategy definitions =====

/// Item counts from empty to a few hundred
fn total_strategy() -> impl Strategy<Value = usize> {
    0usize..=500
}

/// Page sizes including the degenerate zero
fn page_size_strategy() -> impl Strategy<Value = usize> {
    0usize..=50
}

/// Any single paging action
fn action_strategy() -> impl Strategy<Value = PageAction> {
    prop_oneof![
        Just(PageAction::Next),
        Just(PageAction::Prev),
        (0usize..600).prop_map(PageAction::GoTo),
        (0usize..50).prop_map(PageAction::SetPageSize),
    ]
}

/// A paginator in an arbitrary starting state
fn paginator_strategy() -> impl Strategy<Value = Paginator> {
    (total_strategy(), page_size_strategy())
        .prop_map(|(total, size)| Paginator::with_page_size(total, size))
}

fn page_numbers(entries: &[PageEntry]) -> Vec<usize> {
    entries.iter().filter_map(PageEntry::page).collect()
}

// ===== Core invariant =====

proptest! {
    /// The current page stays in 1..=max(total_pages, 1) no matter what
    /// actions are applied.
    #[test]
    fn prop_current_page_always_in_range(
        mut pager in paginator_strategy(),
        actions in proptest::collection::vec(action_strategy(), 0..40),
    ) {
        for action in actions {
            pager.apply(action);
            let upper = pager.total_pages().max(1);
            prop_assert!(pager.current_page() >= 1);
            prop_assert!(pager.current_page() <= upper);
        }
    }

    /// Total pages is the ceiling of items over the effective page size,
    /// with size zero coerced to the default.
    #[test]
    fn prop_total_pages_is_ceiling(total in total_strategy(), size in page_size_strategy()) {
        let pager = Paginator::with_page_size(total, size);
        let effective = if size == 0 { DEFAULT_PAGE_SIZE } else { size };
        prop_assert_eq!(pager.page_size(), effective);
        prop_assert_eq!(pager.total_pages(), total.div_ceil(effective));
    }

    /// Changing the item count keeps the current page valid.
    #[test]
    fn prop_set_total_items_reclamps(
        mut pager in paginator_strategy(),
        new_total in total_strategy(),
    ) {
        pager.apply(PageAction::GoTo(pager.total_pages()));
        pager.set_total_items(new_total);
        prop_assert!(pager.current_page() <= pager.total_pages().max(1));
    }
}

// ===== Navigation =====

proptest! {
    /// Prev is enabled exactly off the first page, next exactly off the last.
    #[test]
    fn prop_nav_flags_match_position(mut pager in paginator_strategy(), page in 0usize..600) {
        pager.apply(PageAction::GoTo(page));
        prop_assert_eq!(pager.prev_enabled(), pager.current_page() != 1);
        prop_assert_eq!(pager.next_enabled(), pager.current_page() != pager.total_pages());
    }

    /// Stepping forward then back lands on the starting page.
    #[test]
    fn prop_next_then_prev_roundtrips(mut pager in paginator_strategy(), page in 0usize..600) {
        pager.apply(PageAction::GoTo(page));
        let start = pager.current_page();
        if pager.next_enabled() {
            pager.apply(PageAction::Next);
            pager.apply(PageAction::Prev);
            prop_assert_eq!(pager.current_page(), start);
        }
    }

    /// At the edges, next and prev are no-ops.
    #[test]
    fn prop_edges_are_clamped(mut pager in paginator_strategy()) {
        pager.apply(PageAction::GoTo(1));
        pager.apply(PageAction::Prev);
        prop_assert_eq!(pager.current_page(), 1);

        pager.apply(PageAction::GoTo(pager.total_pages()));
        let last = pager.current_page();
        pager.apply(PageAction::Next);
        prop_assert_eq!(pager.current_page(), last);
    }
}

// ===== Page list windowing =====

proptest! {
    /// The page list never exceeds seven entries.
    #[test]
    fn prop_page_list_at_most_seven(current in 1usize..=200, total in 1usize..=200) {
        let current = current.min(total);
        prop_assert!(build_page_list(current, total).len() <= 7);
    }

    /// First and last pages are always listed.
    #[test]
    fn prop_page_list_keeps_first_and_last(current in 1usize..=200, total in 1usize..=200) {
        let current = current.min(total);
        let pages = page_numbers(&build_page_list(current, total));
        prop_assert_eq!(pages.first().copied(), Some(1));
        prop_assert_eq!(pages.last().copied(), Some(total));
    }

    /// The current page is always listed.
    #[test]
    fn prop_page_list_contains_current(current in 1usize..=200, total in 1usize..=200) {
        let current = current.min(total);
        let pages = page_numbers(&build_page_list(current, total));
        prop_assert!(pages.contains(&current));
    }

    /// Page numbers appear in strictly ascending order.
    #[test]
    fn prop_page_list_ascending(current in 1usize..=200, total in 1usize..=200) {
        let current = current.min(total);
        let pages = page_numbers(&build_page_list(current, total));
        prop_assert!(pages.windows(2).all(|w| w[0] < w[1]));
    }

    /// Seven or fewer pages are listed in full with no ellipsis.
    #[test]
    fn prop_small_page_counts_unelided(current in 1usize..=7, total in 1usize..=7) {
        let current = current.min(total);
        let entries = build_page_list(current, total);
        prop_assert!(!entries.iter().any(PageEntry::is_ellipsis));
        prop_assert_eq!(page_numbers(&entries), (1..=total).collect::<Vec<_>>());
    }
}

// ===== Footer and slicing =====

proptest! {
    /// The footer always describes the slice the paginator would return.
    #[test]
    fn prop_footer_matches_slice(
        mut pager in paginator_strategy(),
        page in 0usize..600,
    ) {
        pager.apply(PageAction::GoTo(page));
        let rows: Vec<usize> = (0..pager.total_items()).collect();
        let slice = pager.page_slice(&rows);
        let footer = pager.footer_summary();

        prop_assert_eq!(footer.total, pager.total_items());
        if pager.total_items() == 0 {
            prop_assert_eq!((footer.start, footer.end), (0, 0));
            prop_assert!(slice.is_empty());
        } else {
            prop_assert_eq!(slice.len(), footer.end - footer.start + 1);
            prop_assert_eq!(slice.first().copied(), Some(footer.start - 1));
            prop_assert_eq!(slice.last().copied(), Some(footer.end - 1));
        }
    }

    /// A page slice never exceeds the page size, and only the last page may
    /// be short.
    #[test]
    fn prop_slice_sized_by_page(mut pager in paginator_strategy(), page in 0usize..600) {
        pager.apply(PageAction::GoTo(page));
        let rows: Vec<usize> = (0..pager.total_items()).collect();
        let slice = pager.page_slice(&rows);

        prop_assert!(slice.len() <= pager.page_size());
        if pager.total_pages() > 0 && pager.next_enabled() {
            prop_assert_eq!(slice.len(), pager.page_size());
        }
    }
}

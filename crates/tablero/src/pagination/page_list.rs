//! The compact page-button list: first, last, a window around the current
//! page, and ellipses for the gaps.

/// One entry in the page-button strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    /// A numbered page button
    Page(usize),
    /// A gap marker between non-adjacent page buttons
    Ellipsis,
}

impl PageEntry {
    /// Returns the page number, if this entry is one
    #[must_use]
    pub const fn page(&self) -> Option<usize> {
        match self {
            Self::Page(n) => Some(*n),
            Self::Ellipsis => None,
        }
    }

    /// Returns true for the gap marker
    #[must_use]
    pub const fn is_ellipsis(&self) -> bool {
        matches!(self, Self::Ellipsis)
    }
}

impl std::fmt::Display for PageEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Page(n) => write!(f, "{}", n),
            Self::Ellipsis => f.write_str("..."),
        }
    }
}

/// Builds the page-button list for a pager positioned on `current_page`.
///
/// With seven or fewer pages every page is listed. Beyond that the list is
/// always `first [...] window [...] last` where the window spans the current
/// page and its immediate neighbors, clamped inside `(1, total_pages)`; the
/// result never exceeds seven entries. `current_page` is expected to satisfy
/// the pager invariant `1 <= current_page <= max(total_pages, 1)`.
#[must_use]
pub fn build_page_list(current_page: usize, total_pages: usize) -> Vec<PageEntry> {
    if total_pages <= 7 {
        return (1..=total_pages).map(PageEntry::Page).collect();
    }

    let mut entries = vec![PageEntry::Page(1)];
    let left = current_page.saturating_sub(1).max(2);
    let right = (current_page + 1).min(total_pages - 1);

    if left > 2 {
        entries.push(PageEntry::Ellipsis);
    }
    for page in left..=right {
        entries.push(PageEntry::Page(page));
    }
    if right < total_pages - 1 {
        entries.push(PageEntry::Ellipsis);
    }
    entries.push(PageEntry::Page(total_pages));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: PageEntry = PageEntry::Ellipsis;

    fn p(n: usize) -> PageEntry {
        PageEntry::Page(n)
    }

    // ===== Small page counts: everything listed =====

    #[test]
    fn test_no_pages_gives_empty_list() {
        assert!(build_page_list(1, 0).is_empty());
    }

    #[test]
    fn test_single_page() {
        assert_eq!(build_page_list(1, 1), vec![p(1)]);
    }

    #[test]
    fn test_seven_pages_all_listed() {
        let list = build_page_list(4, 7);
        assert_eq!(list, (1..=7).map(p).collect::<Vec<_>>());
        assert!(list.iter().all(|e| !e.is_ellipsis()));
    }

    // ===== Large page counts: windowed =====

    #[test]
    fn test_middle_of_ten_pages() {
        assert_eq!(
            build_page_list(5, 10),
            vec![p(1), E, p(4), p(5), p(6), E, p(10)]
        );
    }

    #[test]
    fn test_first_of_ten_pages() {
        assert_eq!(build_page_list(1, 10), vec![p(1), p(2), E, p(10)]);
    }

    #[test]
    fn test_second_of_ten_pages_has_no_leading_gap() {
        assert_eq!(build_page_list(2, 10), vec![p(1), p(2), p(3), E, p(10)]);
    }

    #[test]
    fn test_third_of_ten_pages_windows_without_leading_gap() {
        assert_eq!(
            build_page_list(3, 10),
            vec![p(1), p(2), p(3), p(4), E, p(10)]
        );
    }

    #[test]
    fn test_ninth_of_ten_pages_has_no_trailing_gap() {
        assert_eq!(
            build_page_list(9, 10),
            vec![p(1), E, p(8), p(9), p(10)]
        );
    }

    #[test]
    fn test_last_of_ten_pages() {
        assert_eq!(build_page_list(10, 10), vec![p(1), E, p(9), p(10)]);
    }

    #[test]
    fn test_eight_pages_centered() {
        assert_eq!(
            build_page_list(4, 8),
            vec![p(1), E, p(3), p(4), p(5), E, p(8)]
        );
    }

    #[test]
    fn test_never_more_than_seven_entries() {
        for total in [8usize, 9, 20, 100, 1000] {
            for current in [1, 2, total / 2, total - 1, total] {
                assert!(build_page_list(current, total).len() <= 7);
            }
        }
    }

    #[test]
    fn test_first_and_last_always_present() {
        for total in 1..=30 {
            for current in 1..=total {
                let list = build_page_list(current, total);
                assert_eq!(list.first(), Some(&p(1)));
                assert_eq!(list.last(), Some(&p(total)));
            }
        }
    }

    #[test]
    fn test_current_page_always_present() {
        for total in 1..=30 {
            for current in 1..=total {
                assert!(
                    build_page_list(current, total).contains(&p(current)),
                    "page {} missing from list for {} pages",
                    current,
                    total
                );
            }
        }
    }

    // ===== Entry helpers =====

    #[test]
    fn test_entry_page_accessor() {
        assert_eq!(p(3).page(), Some(3));
        assert_eq!(E.page(), None);
    }

    #[test]
    fn test_entry_display() {
        assert_eq!(p(12).to_string(), "12");
        assert_eq!(E.to_string(), "...");
    }
}

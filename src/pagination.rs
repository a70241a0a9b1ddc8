use std::fmt;

/// Most numbered pages shown when the current page sits at either edge.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// A single entry in a page control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageToken::Page(n) => write!(f, "{}", n),
            PageToken::Ellipsis => write!(f, "..."),
        }
    }
}

/// Computes the page markers to display for `current_page` of `total_pages`.
///
/// Nothing is shown for a single page. Otherwise the current page and its
/// neighbours are listed, widened to five pages near either end, with the
/// first and last page always reachable and gaps marked by an ellipsis.
/// A page number never repeats back to back. `current_page` is clamped to
/// `1..=total_pages`.
pub fn window(current_page: usize, total_pages: usize) -> Vec<PageToken> {
    let mut tokens = Vec::new();
    if total_pages <= 1 {
        return tokens;
    }

    let current = current_page.clamp(1, total_pages);

    if current > 2 {
        push_page(&mut tokens, 1);
    }

    let mut start = current.saturating_sub(1).max(1);
    let mut end = current.saturating_add(1).min(total_pages);

    if current <= 2 {
        end = total_pages.min(MAX_VISIBLE_PAGES);
    } else if current >= total_pages - 1 {
        start = (total_pages + 1).saturating_sub(MAX_VISIBLE_PAGES).max(1);
    }

    if start > 2 {
        tokens.push(PageToken::Ellipsis);
    }

    for page in start..=end {
        push_page(&mut tokens, page);
    }

    if end < total_pages - 1 {
        tokens.push(PageToken::Ellipsis);
    }

    if current < total_pages - 1 && total_pages > 2 {
        push_page(&mut tokens, total_pages);
    }

    tokens
}

// The edge pages can coincide with the ends of the numbered range.
fn push_page(tokens: &mut Vec<PageToken>, page: usize) {
    if tokens.last() != Some(&PageToken::Page(page)) {
        tokens.push(PageToken::Page(page));
    }
}

/// Page-control state for a result listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub current: usize,
    pub total_pages: usize,
}

impl Pager {
    pub fn new(current: usize, total_pages: usize) -> Self {
        Pager {
            current: current.max(1),
            total_pages,
        }
    }

    /// Builds a pager from a result count and the page size used to fetch it.
    pub fn from_results(current: usize, total_results: usize, page_size: usize) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total_results.div_ceil(page_size)
        };
        Pager::new(current, total_pages)
    }

    /// Whether a page control should be shown at all.
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }

    pub fn previous(&self) -> Option<usize> {
        (self.current > 1).then(|| self.current - 1)
    }

    pub fn next(&self) -> Option<usize> {
        (self.current < self.total_pages).then(|| self.current + 1)
    }

    pub fn tokens(&self) -> Vec<PageToken> {
        window(self.current, self.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::PageToken::{Ellipsis, Page};

    #[test]
    fn test_single_page_is_empty() {
        assert!(window(1, 0).is_empty());
        assert!(window(1, 1).is_empty());
        assert!(window(3, 1).is_empty());
    }

    #[test]
    fn test_two_pages() {
        assert_eq!(window(1, 2), vec![Page(1), Page(2)]);
        assert_eq!(window(2, 2), vec![Page(1), Page(2)]);
    }

    #[test]
    fn test_start_of_long_range() {
        assert_eq!(
            window(1, 20),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(20)]
        );
        assert_eq!(
            window(2, 20),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn test_middle_of_long_range() {
        assert_eq!(
            window(10, 20),
            vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn test_just_past_start() {
        // start = 2, so no ellipsis between the leading page and the range
        assert_eq!(
            window(3, 20),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn test_end_of_long_range() {
        assert_eq!(
            window(20, 20),
            vec![Page(1), Ellipsis, Page(16), Page(17), Page(18), Page(19), Page(20)]
        );
        assert_eq!(
            window(19, 20),
            vec![Page(1), Ellipsis, Page(16), Page(17), Page(18), Page(19), Page(20)]
        );
    }

    #[test]
    fn test_edge_pages_not_repeated() {
        assert_eq!(window(1, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(window(2, 4), vec![Page(1), Page(2), Page(3), Page(4)]);
        assert_eq!(window(3, 4), vec![Page(1), Page(2), Page(3), Page(4)]);
        assert_eq!(window(3, 3), vec![Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn test_numbers_ascending_and_edges_reachable() {
        for total in 2..=30 {
            for current in 1..=total {
                let pages: Vec<usize> = window(current, total)
                    .into_iter()
                    .filter_map(|t| match t {
                        Page(n) => Some(n),
                        Ellipsis => None,
                    })
                    .collect();
                assert!(
                    pages.windows(2).all(|w| w[0] < w[1]),
                    "not ascending for {}/{}: {:?}",
                    current,
                    total,
                    pages
                );
                assert!(pages.contains(&current), "{}/{}", current, total);
                if total > 2 {
                    assert_eq!(pages.first(), Some(&1), "{}/{}", current, total);
                    assert_eq!(pages.last(), Some(&total), "{}/{}", current, total);
                }
            }
        }
    }

    #[test]
    fn test_zero_current_page_treated_as_first() {
        assert_eq!(window(0, 3), window(1, 3));
    }

    #[test]
    fn test_current_page_past_the_end() {
        assert_eq!(window(usize::MAX, 5), window(5, 5));
        assert_eq!(
            window(usize::MAX, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
        assert_eq!(window(9, 3), vec![Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn test_pager_at_max_page() {
        let pager = Pager::new(usize::MAX, 5);
        assert_eq!(pager.next(), None);
        assert_eq!(pager.previous(), Some(usize::MAX - 1));
        assert_eq!(pager.tokens().last(), Some(&Page(5)));
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Page(7).to_string(), "7");
        assert_eq!(Ellipsis.to_string(), "...");
    }

    #[test]
    fn test_pager_navigation() {
        let pager = Pager::from_results(1, 17, 8);
        assert_eq!(pager.total_pages, 3);
        assert!(pager.is_visible());
        assert_eq!(pager.previous(), None);
        assert_eq!(pager.next(), Some(2));

        let last = Pager::new(3, 3);
        assert_eq!(last.previous(), Some(2));
        assert_eq!(last.next(), None);

        let single = Pager::from_results(1, 8, 8);
        assert!(!single.is_visible());
        assert!(single.tokens().is_empty());
    }
}

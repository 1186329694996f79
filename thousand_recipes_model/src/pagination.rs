use std::fmt;
use std::ops::RangeInclusive;

pub const DEFAULT_PAGE_SIZE: u32 = 12;
pub const DEFAULT_PAGER_WINDOW: u32 = 10;

/// 1-based index of a list page. Only built through `new`, so it is never 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageNumber(u32);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(1);

    pub fn new(page: u32) -> Self {
        PageNumber(page.max(1))
    }

    /// Missing, non-numeric and non-positive values all land on the first page.
    pub fn from_query(value: Option<&str>) -> Self {
        value
            .and_then(|value| value.trim().parse::<u32>().ok())
            .map(PageNumber::new)
            .unwrap_or(PageNumber::FIRST)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        PageNumber::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `limit`/`skip` pair sent to the listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u32,
    pub skip: u32,
}

impl PageRequest {
    pub fn for_page(page: PageNumber, page_size: u32) -> Self {
        PageRequest {
            limit: page_size,
            skip: page.get().saturating_sub(1).saturating_mul(page_size),
        }
    }
}

/// Pager state derived from the current page and the last known total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: PageNumber,
    page_size: u32,
    total: u32,
    window: u32,
}

impl Pagination {
    pub fn new(page: PageNumber, page_size: u32, total: u32) -> Self {
        Pagination {
            page,
            page_size: page_size.max(1),
            total,
            window: DEFAULT_PAGER_WINDOW,
        }
    }

    pub fn with_window(self, window: u32) -> Self {
        Pagination {
            window: window.max(1),
            ..self
        }
    }

    pub fn page(&self) -> PageNumber {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn window(&self) -> u32 {
        self.window
    }

    pub fn request(&self) -> PageRequest {
        PageRequest::for_page(self.page, self.page_size)
    }

    pub fn total_pages(&self) -> u32 {
        self.total.div_ceil(self.page_size).max(1)
    }

    pub fn has_previous(&self) -> bool {
        self.page.get() > 1
    }

    pub fn has_next(&self) -> bool {
        self.page.get() < self.total_pages()
    }

    /// Pages past the end step back onto the last real page.
    pub fn previous(&self) -> PageNumber {
        let previous = self.page.get().saturating_sub(1).min(self.total_pages());
        PageNumber::new(previous)
    }

    pub fn next(&self) -> PageNumber {
        PageNumber::new(self.page.get().saturating_add(1).min(self.total_pages()))
    }

    pub fn is_current(&self, page: u32) -> bool {
        self.page.get() == page
    }

    /// Numbered pager buttons: the block of `window` pages holding the current page.
    pub fn visible_pages(&self) -> RangeInclusive<u32> {
        let total_pages = self.total_pages();
        let anchor = self.page.get().min(total_pages);
        let start = (anchor - 1) / self.window * self.window + 1;
        let end = start.saturating_add(self.window - 1).min(total_pages);
        start..=end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn pagination(page: u32, total: u32) -> Pagination {
        Pagination::new(PageNumber::new(page), DEFAULT_PAGE_SIZE, total)
    }

    #[rstest]
    #[case(None, 1)]
    #[case(Some("3"), 3)]
    #[case(Some(" 4 "), 4)]
    #[case(Some("0"), 1)]
    #[case(Some("-2"), 1)]
    #[case(Some("two"), 1)]
    #[case(Some(""), 1)]
    fn page_number_from_query(#[case] raw: Option<&str>, #[case] expected: u32) {
        assert_eq!(PageNumber::from_query(raw).get(), expected);
    }

    #[rstest]
    #[case(1, 0)]
    #[case(2, 12)]
    #[case(5, 48)]
    fn skip_follows_page(#[case] page: u32, #[case] skip: u32) {
        let request = PageRequest::for_page(PageNumber::new(page), 12);
        assert_eq!(request, PageRequest { limit: 12, skip });
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(12, 1)]
    #[case(13, 2)]
    #[case(50, 5)]
    #[case(240, 20)]
    fn total_pages_rounds_up(#[case] total: u32, #[case] expected: u32) {
        assert_eq!(pagination(1, total).total_pages(), expected);
    }

    #[test]
    fn first_page_has_no_previous() {
        let pager = pagination(1, 50);
        assert!(!pager.has_previous());
        assert!(pager.has_next());
        assert_eq!(pager.previous().get(), 1);
        assert_eq!(pager.next().get(), 2);
    }

    #[test]
    fn last_page_has_no_next() {
        let pager = pagination(5, 50);
        assert!(pager.has_previous());
        assert!(!pager.has_next());
        assert_eq!(pager.next().get(), 5);
        assert_eq!(pager.previous().get(), 4);
    }

    #[test]
    fn empty_listing_is_a_single_page() {
        let pager = pagination(1, 0);
        assert!(!pager.has_previous());
        assert!(!pager.has_next());
        assert_eq!(pager.visible_pages(), 1..=1);
    }

    #[test]
    fn page_past_the_end_steps_back_to_last_page() {
        let pager = pagination(9, 50);
        assert!(!pager.has_next());
        assert_eq!(pager.previous().get(), 5);
        assert_eq!(pager.visible_pages(), 1..=5);
    }

    #[rstest]
    #[case(1, 50, 1..=5)]
    #[case(3, 240, 1..=10)]
    #[case(10, 240, 1..=10)]
    #[case(11, 240, 11..=20)]
    #[case(21, 250, 21..=21)]
    fn visible_pages_window(
        #[case] page: u32,
        #[case] total: u32,
        #[case] expected: RangeInclusive<u32>,
    ) {
        assert_eq!(pagination(page, total).visible_pages(), expected);
    }

    #[test]
    fn zero_sizes_are_clamped() {
        let pager = Pagination::new(PageNumber::new(3), 0, 50).with_window(0);
        assert_eq!(pager.page_size(), 1);
        assert_eq!(pager.window(), 1);
        assert_eq!(pager.total(), 50);
        assert_eq!(pager.total_pages(), 50);
        assert_eq!(pager.visible_pages(), 3..=3);
        assert_eq!(pager.request(), PageRequest { limit: 1, skip: 2 });
    }

    #[test]
    fn page_zero_is_the_first_page() {
        let page = PageNumber::new(0);
        assert_eq!(page, PageNumber::FIRST);
        assert_eq!(PageRequest::for_page(page, 12), PageRequest { limit: 12, skip: 0 });
    }

    #[test]
    fn custom_window() {
        let pager = pagination(4, 120).with_window(3);
        assert_eq!(pager.visible_pages(), 4..=6);
        assert_eq!(pager.page(), PageNumber::new(4));
        assert!(pager.is_current(4));
        assert!(!pager.is_current(5));
    }
}

//! Page arithmetic over a filtered view
//!
//! Pages are 1-based, matching the page buttons the UI renders. An empty
//! collection still has one page, and slicing past the end yields an empty
//! window rather than an error.

/// Current page plus the page size fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    page_size: usize,
}

impl PageState {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Jump to a page. No bounds validation: callers only render page buttons
    /// that exist, so an out-of-range target can only come from a shrinking
    /// collection and is handled by [`PageState::clamp_to`].
    pub fn go_to(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Clamp the current page after the underlying view shrank (delete,
    /// refetch, or a narrower filter).
    pub fn clamp_to(&mut self, total_items: usize) {
        let last = page_count(total_items, self.page_size);
        if self.current_page > last {
            self.current_page = last;
        }
    }
}

/// `ceil(total_items / page_size)`, never less than 1: an empty collection
/// still renders page button "1".
pub fn page_count(total_items: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    total_items.div_ceil(page_size).max(1)
}

/// The slice of `view` shown for the current page:
/// `[(page-1)*size, page*size)`, shortened or empty at the tail.
pub fn page_window<T: Clone>(view: &[T], state: PageState) -> Vec<T> {
    let start = (state.current_page() - 1).saturating_mul(state.page_size());
    if start >= view.len() {
        return Vec::new();
    }
    let end = (start + state.page_size()).min(view.len());
    view[start..end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_is_ceiling_division() {
        assert_eq!(page_count(7, 3), 3);
        assert_eq!(page_count(6, 3), 2);
        assert_eq!(page_count(1, 5), 1);
        assert_eq!(page_count(15, 5), 3);
    }

    #[test]
    fn empty_collection_still_has_one_page() {
        assert_eq!(page_count(0, 5), 1);
    }

    #[test]
    fn seven_records_page_size_three() {
        // A0..A6 with page size 3: three pages, page 2 holds A3..A5.
        let view: Vec<String> = (0..7).map(|i| format!("A{i}")).collect();
        let mut state = PageState::new(3);
        assert_eq!(page_count(view.len(), state.page_size()), 3);

        state.go_to(2);
        assert_eq!(page_window(&view, state), vec!["A3", "A4", "A5"]);

        state.go_to(3);
        assert_eq!(page_window(&view, state), vec!["A6"]);
    }

    #[test]
    fn window_never_exceeds_page_size() {
        let view: Vec<u32> = (0..10).collect();
        for page in 1..=5 {
            let mut state = PageState::new(4);
            state.go_to(page);
            assert!(page_window(&view, state).len() <= 4);
        }
    }

    #[test]
    fn out_of_range_page_yields_empty_window() {
        let view: Vec<u32> = (0..4).collect();
        let mut state = PageState::new(4);
        state.go_to(9);
        assert!(page_window(&view, state).is_empty());
    }

    #[test]
    fn clamp_pulls_page_back_after_shrink() {
        let mut state = PageState::new(3);
        state.go_to(3);
        state.clamp_to(4); // now only 2 pages
        assert_eq!(state.current_page(), 2);

        state.clamp_to(0); // empty view clamps to page 1
        assert_eq!(state.current_page(), 1);

        state.clamp_to(100); // growing never moves the page
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn go_to_floors_at_page_one() {
        let mut state = PageState::new(5);
        state.go_to(0);
        assert_eq!(state.current_page(), 1);
    }
}

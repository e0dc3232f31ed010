/// Page cursor over a document whose length is reported asynchronously by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    num_pages: Option<u32>,
    page_number: u32,
    page_width: u32,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new()
    }
}

impl Paginator {
    pub fn new() -> Self {
        Self {
            num_pages: None,
            page_number: 1,
            page_width: 0,
        }
    }

    pub fn num_pages(&self) -> Option<u32> {
        self.num_pages
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn page_width(&self) -> u32 {
        self.page_width
    }

    /// Records the page count. A loaded document has at least one page, so a zero
    /// count is stored as one.
    pub fn on_document_load_success(&mut self, num_pages: u32) {
        let num_pages = num_pages.max(1);
        self.num_pages = Some(num_pages);
        // a reload may report a shorter document
        self.page_number = self.page_number.min(num_pages);
    }

    /// No-op on the last page, or while the page count is still unknown.
    pub fn go_to_next_page(&mut self) {
        if self.has_next_page() {
            self.page_number += 1;
        }
    }

    pub fn go_to_previous_page(&mut self) {
        if self.has_previous_page() {
            self.page_number -= 1;
        }
    }

    pub fn has_next_page(&self) -> bool {
        self.num_pages.is_some_and(|n| self.page_number < n)
    }

    pub fn has_previous_page(&self) -> bool {
        self.page_number > 1
    }

    pub fn update_page_width(&mut self, width: u32) {
        self.page_width = width;
    }

    /// "Page 2 of 3", or "Page 1 of " before the document has loaded.
    pub fn label(&self) -> String {
        match self.num_pages {
            Some(n) => format!("Page {} of {}", self.page_number, n),
            None => format!("Page {} of ", self.page_number),
        }
    }
}

/// Result of asking the renderer to draw a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Drawn,
    /// A newer request for the same canvas cancelled this one. Not a failure.
    Superseded,
}

impl RenderOutcome {
    pub fn from_drawn(drawn: bool) -> Self {
        if drawn {
            Self::Drawn
        } else {
            Self::Superseded
        }
    }
}

/// Resume dialog visibility plus the pager it wraps. The pager outlives close/reopen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResumeState {
    is_open: bool,
    pub paginator: Paginator,
}

impl ResumeState {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(n: u32) -> Paginator {
        let mut p = Paginator::new();
        p.on_document_load_success(n);
        p
    }

    #[test]
    fn test_initial_state() {
        let p = Paginator::new();
        assert_eq!(p.num_pages(), None);
        assert_eq!(p.page_number(), 1);
        assert_eq!(p.page_width(), 0);
        assert!(!p.has_next_page());
        assert!(!p.has_previous_page());
    }

    #[test]
    fn test_next_reaches_last_page_then_stops() {
        for n in 1..=12 {
            let mut p = loaded(n);
            for _ in 0..n - 1 {
                p.go_to_next_page();
            }
            assert_eq!(p.page_number(), n);
            assert!(!p.has_next_page());
            p.go_to_next_page();
            p.go_to_next_page();
            assert_eq!(p.page_number(), n);
        }
    }

    #[test]
    fn test_previous_never_below_one() {
        let mut p = loaded(5);
        p.go_to_previous_page();
        assert_eq!(p.page_number(), 1);
        p.go_to_next_page();
        p.go_to_previous_page();
        p.go_to_previous_page();
        assert_eq!(p.page_number(), 1);
    }

    #[test]
    fn test_next_before_load_is_noop() {
        let mut p = Paginator::new();
        p.go_to_next_page();
        assert_eq!(p.page_number(), 1);
        assert_eq!(p.label(), "Page 1 of ");
    }

    #[test]
    fn test_three_page_walkthrough() {
        let mut p = loaded(3);
        assert_eq!(p.num_pages(), Some(3));
        assert_eq!(p.page_number(), 1);

        p.go_to_next_page();
        assert_eq!(p.page_number(), 2);
        p.go_to_next_page();
        assert_eq!(p.page_number(), 3);
        p.go_to_next_page();
        assert_eq!(p.page_number(), 3);
        assert_eq!(p.label(), "Page 3 of 3");

        p.go_to_previous_page();
        assert_eq!(p.page_number(), 2);
        p.go_to_previous_page();
        assert_eq!(p.page_number(), 1);
        p.go_to_previous_page();
        assert_eq!(p.page_number(), 1);
    }

    #[test]
    fn test_reload_with_fewer_pages_clamps() {
        let mut p = loaded(4);
        p.go_to_next_page();
        p.go_to_next_page();
        p.go_to_next_page();
        assert_eq!(p.page_number(), 4);
        p.on_document_load_success(2);
        assert_eq!(p.page_number(), 2);
        p.on_document_load_success(0);
        assert_eq!(p.page_number(), 1);
        assert_eq!(p.num_pages(), Some(1));
        assert!(!p.has_next_page());
    }

    #[test]
    fn test_page_number_within_page_count() {
        for n in 0..=4 {
            let mut p = Paginator::new();
            p.on_document_load_success(n);
            let count = p.num_pages().expect("count should be known after load");
            assert!(count >= 1);
            assert!((1..=count).contains(&p.page_number()));
            for _ in 0..6 {
                p.go_to_next_page();
                assert!((1..=count).contains(&p.page_number()));
            }
        }
    }

    #[test]
    fn test_render_outcome_from_bridge_flag() {
        assert_eq!(RenderOutcome::from_drawn(true), RenderOutcome::Drawn);
        assert_eq!(RenderOutcome::from_drawn(false), RenderOutcome::Superseded);
    }

    #[test]
    fn test_update_page_width_per_resize() {
        let mut p = loaded(2);
        for width in [1024, 596, 0, 1920] {
            p.update_page_width(width);
            assert_eq!(p.page_width(), width);
        }
        assert_eq!(p.page_number(), 1);
    }

    #[test]
    fn test_resume_state_persists_across_reopen() {
        let mut state = ResumeState::default();
        assert!(!state.is_open());

        state.open();
        assert!(state.is_open());
        state.paginator.on_document_load_success(3);
        state.paginator.go_to_next_page();
        state.paginator.update_page_width(640);

        state.close();
        assert!(!state.is_open());

        state.open();
        assert!(state.is_open());
        assert_eq!(state.paginator.page_number(), 2);
        assert_eq!(state.paginator.num_pages(), Some(3));
        assert_eq!(state.paginator.page_width(), 640);
    }
}

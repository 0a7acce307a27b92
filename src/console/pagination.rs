// Page cursor over an in-memory list.
//
// The list itself is never touched; the pager only tracks which slice is on
// screen and which moves are legal from there.

use std::ops::{ControlFlow, Range};

use thiserror::Error;

pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Previous,
    Exit,
    Next,
}

impl Navigation {
    pub fn label(self) -> &'static str {
        match self {
            Navigation::Previous => "Previous",
            Navigation::Exit => "Exit",
            Navigation::Next => "Next",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{} is not available on page {page} of {page_count}", .navigation.label())]
pub struct RejectedNavigation {
    pub navigation: Navigation,
    pub page: usize,
    pub page_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    total: usize,
    page_size: usize,
    index: usize,
}

impl Pager {
    pub fn new(total: usize, page_size: usize) -> Self {
        Self {
            total,
            page_size: page_size.max(1),
            index: 0,
        }
    }

    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size).max(1)
    }

    /// 1-based number of the page on screen.
    pub fn page_number(&self) -> usize {
        self.index + 1
    }

    pub fn bounds(&self) -> Range<usize> {
        let start = (self.index * self.page_size).min(self.total);
        let end = (start + self.page_size).min(self.total);
        start..end
    }

    pub fn page<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let Range { start, end } = self.bounds();
        &items[start.min(items.len())..end.min(items.len())]
    }

    pub fn header(&self) -> String {
        format!(
            "Page {} of {} (showing {} of {})",
            self.page_number(),
            self.page_count(),
            self.bounds().len(),
            self.total
        )
    }

    fn has_previous(&self) -> bool {
        self.index > 0
    }

    fn has_next(&self) -> bool {
        self.index + 1 < self.page_count()
    }

    /// Moves offered on the current page, in display order.
    pub fn choices(&self) -> Vec<Navigation> {
        let mut choices = Vec::with_capacity(3);
        if self.has_previous() {
            choices.push(Navigation::Previous);
        }
        choices.push(Navigation::Exit);
        if self.has_next() {
            choices.push(Navigation::Next);
        }
        choices
    }

    /// Applies a move. `Break` means the caller should leave the pager.
    pub fn navigate(
        &mut self,
        navigation: Navigation,
    ) -> Result<ControlFlow<()>, RejectedNavigation> {
        match navigation {
            Navigation::Exit => Ok(ControlFlow::Break(())),
            Navigation::Previous if self.has_previous() => {
                self.index -= 1;
                Ok(ControlFlow::Continue(()))
            }
            Navigation::Next if self.has_next() => {
                self.index += 1;
                Ok(ControlFlow::Continue(()))
            }
            _ => Err(RejectedNavigation {
                navigation,
                page: self.page_number(),
                page_count: self.page_count(),
            }),
        }
    }
}

#[cfg(test)]
mod pager_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_walk_25_items_in_pages_of_10() {
        let items: Vec<u32> = (1..=25).collect();
        let mut pager = Pager::new(items.len(), PAGE_SIZE);
        assert_eq!(pager.page_count(), 3);

        assert_eq!(pager.page(&items), &items[0..10]);
        assert_eq!(pager.header(), "Page 1 of 3 (showing 10 of 25)");
        assert_eq!(pager.choices(), vec![Navigation::Exit, Navigation::Next]);

        assert_eq!(
            pager.navigate(Navigation::Next),
            Ok(ControlFlow::Continue(()))
        );
        assert_eq!(pager.page(&items), &items[10..20]);
        assert_eq!(
            pager.choices(),
            vec![Navigation::Previous, Navigation::Exit, Navigation::Next]
        );

        assert_eq!(
            pager.navigate(Navigation::Next),
            Ok(ControlFlow::Continue(()))
        );
        assert_eq!(pager.page(&items), &items[20..25]);
        assert_eq!(pager.header(), "Page 3 of 3 (showing 5 of 25)");
        assert_eq!(
            pager.choices(),
            vec![Navigation::Previous, Navigation::Exit]
        );
    }

    #[rstest]
    fn it_should_reject_moves_past_either_end() {
        let mut pager = Pager::new(25, PAGE_SIZE);
        assert_eq!(
            pager.navigate(Navigation::Previous),
            Err(RejectedNavigation {
                navigation: Navigation::Previous,
                page: 1,
                page_count: 3,
            })
        );

        assert_eq!(
            pager.navigate(Navigation::Next),
            Ok(ControlFlow::Continue(()))
        );
        assert_eq!(
            pager.navigate(Navigation::Next),
            Ok(ControlFlow::Continue(()))
        );
        let rejected = pager.navigate(Navigation::Next).unwrap_err();
        assert_eq!(rejected.to_string(), "Next is not available on page 3 of 3");
        assert_eq!(pager.page_number(), 3);
    }

    #[rstest]
    fn it_should_leave_on_exit_without_moving() {
        let mut pager = Pager::new(25, PAGE_SIZE);
        assert_eq!(
            pager.navigate(Navigation::Next),
            Ok(ControlFlow::Continue(()))
        );
        assert_eq!(pager.navigate(Navigation::Exit), Ok(ControlFlow::Break(())));
        assert_eq!(pager.page_number(), 2);
    }

    #[rstest]
    #[case(1, 1)]
    #[case(10, 1)]
    #[case(11, 2)]
    #[case(0, 1)]
    fn it_should_count_pages(#[case] total: usize, #[case] pages: usize) {
        assert_eq!(Pager::new(total, PAGE_SIZE).page_count(), pages);
    }

    #[rstest]
    fn it_should_offer_only_exit_on_a_single_page() {
        assert_eq!(Pager::new(4, PAGE_SIZE).choices(), vec![Navigation::Exit]);
    }
}

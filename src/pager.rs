//! Page-index state for the book. Out-of-range requests are defined as
//! no-ops, so every action is total.

use std::rc::Rc;

use yew::Reducible;

#[derive(Clone, PartialEq)]
pub struct Pager {
    current: usize,
    total: usize,
}

pub enum PagerAction {
    Next,
    Previous,
    GoTo(usize),
}

impl Pager {
    pub fn new(total: usize) -> Self {
        Self { current: 0, total }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    fn apply(&self, action: &PagerAction) -> Self {
        let mut next = self.clone();
        match *action {
            PagerAction::Next => {
                if next.current + 1 < next.total {
                    next.current += 1;
                }
            }
            PagerAction::Previous => {
                if next.current > 0 {
                    next.current -= 1;
                }
            }
            PagerAction::GoTo(page) => {
                if page < next.total {
                    next.current = page;
                }
            }
        }
        next
    }
}

// Reduced rather than held in `use_state` so the window keydown
// listener can dispatch against current state through a stable handle.
impl Reducible for Pager {
    type Action = PagerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(&action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn after(pager: Pager, actions: &[PagerAction]) -> Pager {
        actions.iter().fold(pager, |p, a| p.apply(a))
    }

    #[test]
    fn go_to_reaches_every_valid_page() {
        let pager = Pager::new(30);
        for i in 0..30 {
            assert_eq!(after(pager.clone(), &[PagerAction::GoTo(i)]).current(), i);
        }
    }

    #[test]
    fn go_to_out_of_range_is_ignored() {
        let pager = after(Pager::new(30), &[PagerAction::GoTo(7)]);
        assert_eq!(after(pager.clone(), &[PagerAction::GoTo(30)]).current(), 7);
        assert_eq!(after(pager, &[PagerAction::GoTo(usize::MAX)]).current(), 7);
    }

    #[test]
    fn next_stops_at_last_page() {
        let pager = after(Pager::new(3), &[PagerAction::GoTo(2)]);
        assert_eq!(after(pager, &[PagerAction::Next]).current(), 2);
    }

    #[test]
    fn previous_stops_at_first_page() {
        let pager = Pager::new(3);
        assert_eq!(after(pager, &[PagerAction::Previous]).current(), 0);
    }

    #[test]
    fn next_and_previous_step_by_one() {
        let pager = Pager::new(5);
        let pager = after(pager, &[PagerAction::Next, PagerAction::Next]);
        assert_eq!(pager.current(), 2);
        let pager = after(pager, &[PagerAction::Previous]);
        assert_eq!(pager.current(), 1);
    }
}

use std::rc::Rc;
use yew::prelude::*;

/// Number of completed celebrations. Only used to key the overlay so it
/// remounts after each one.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub struct ConfettiKey(pub u32);

pub enum ConfettiAction {
    Bump,
}

impl ConfettiKey {
    pub fn overlay_visible(&self) -> bool {
        self.0 > 0
    }
}

impl Reducible for ConfettiKey {
    type Action = ConfettiAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ConfettiAction::Bump => Rc::new(ConfettiKey(self.0.wrapping_add(1))),
        }
    }
}

use crate::visibility::Visibility;

/// Open/closed state of the sliding cost estimator. Only user actions move it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanelController {
    visibility: Visibility,
}

impl PanelController {
    pub fn is_open(&self) -> bool {
        self.visibility.is_open()
    }

    pub fn open(&mut self) -> bool {
        self.visibility.transition(Visibility::Open)
    }

    pub fn close(&mut self) -> bool {
        self.visibility.transition(Visibility::Closed)
    }
}

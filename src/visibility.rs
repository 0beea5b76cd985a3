#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

impl Visibility {
    pub fn is_open(self) -> bool {
        self == Visibility::Open
    }

    /// Moves to `next`, reporting whether anything changed.
    pub fn transition(&mut self, next: Visibility) -> bool {
        if *self == next {
            return false;
        }
        *self = next;
        true
    }
}

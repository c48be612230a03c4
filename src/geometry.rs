/// Integer size measured in terminal character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub const fn zero() -> Self {
        Self::new(0, 0)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 && self.height == 0
    }
}

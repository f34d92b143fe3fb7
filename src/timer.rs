// Redraw throttling. The window caps the loop at the target fps; every loop
// iteration is one timer tick, and a tick only repaints when something
// asked for it.

#[derive(Debug, Default)]
pub struct Invalidation {
    needed: bool,
}

impl Invalidation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self) {
        self.needed = true;
    }

    pub fn is_requested(&self) -> bool {
        self.needed
    }

    /// Consume the flag; true means "redraw now".
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.needed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_clears_the_flag() {
        let mut inv = Invalidation::new();
        assert!(!inv.take());
        inv.request();
        inv.request();
        assert!(inv.is_requested());
        assert!(inv.take());
        assert!(!inv.take());
    }
}

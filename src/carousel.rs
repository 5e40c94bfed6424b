//! Rotation state for the lineup carousel.

/// Index into a fixed-length slide deck with wraparound on both ends.
#[derive(Debug, Clone, Copy, Default)]
pub struct Carousel {
    current: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advance one slide, wrapping from the last back to the first.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }

    /// Step back one slide, wrapping from the first to the last.
    pub fn prev(&mut self) {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
    }

    /// Jump straight to a slide (dot navigation). Out-of-range is ignored.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_to_front() {
        let mut carousel = Carousel::new(3);
        carousel.next();
        carousel.next();
        assert_eq!(carousel.current(), 2);
        carousel.next();
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_prev_wraps_to_back() {
        let mut carousel = Carousel::new(3);
        carousel.prev();
        assert_eq!(carousel.current(), 2);
        carousel.prev();
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn test_empty_deck_stays_put() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.current(), 0);
        assert!(carousel.is_empty());
    }

    #[test]
    fn test_jump_ignores_out_of_range() {
        let mut carousel = Carousel::new(4);
        carousel.jump_to(2);
        assert_eq!(carousel.current(), 2);
        carousel.jump_to(9);
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn test_single_slide_cycles_on_itself() {
        let mut carousel = Carousel::new(1);
        carousel.next();
        assert_eq!(carousel.current(), 0);
        carousel.prev();
        assert_eq!(carousel.current(), 0);
    }
}

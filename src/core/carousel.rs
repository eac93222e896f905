//! Wrap-around index for rotating content such as testimonials

/// Position within a fixed number of slides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    /// A carousel over `len` slides, starting at the first. `len` of zero is
    /// treated as a single slide.
    pub fn new(len: usize) -> Self {
        Self {
            len: len.max(1),
            index: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Jump to `index`; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps() {
        let mut c = Carousel::new(3);
        c.next();
        c.next();
        assert_eq!(c.index(), 2);
        c.next();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_prev_wraps() {
        let mut c = Carousel::new(3);
        c.prev();
        assert_eq!(c.index(), 2);
        c.prev();
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_select() {
        let mut c = Carousel::new(3);
        c.select(2);
        assert_eq!(c.index(), 2);
        c.select(7);
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_empty_carousel_is_single_slide() {
        let mut c = Carousel::new(0);
        assert_eq!(c.len(), 1);
        c.next();
        c.prev();
        assert_eq!(c.index(), 0);
    }
}

use super::{Point, Rect};

/// An `Expanse` is a rectangle that has a width and height but no
/// location. This is useful when we want to deal with `Rect`s
/// abstractly, or when only the dimensions of a region matter.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Expanse {
    pub w: f32,
    pub h: f32,
}

impl Expanse {
    pub fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }

    /// The area of this expanse.
    pub fn area(&self) -> f32 {
        self.w * self.h
    }

    /// True if either dimension is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    /// Return a `Rect` with the same dimensions as the `Expanse`, but a
    /// location at (0, 0).
    pub fn rect(&self) -> Rect {
        Rect {
            tl: Point::default(),
            w: self.w,
            h: self.h,
        }
    }

    /// The same expanse oriented so that `w <= h`. Display sizes arrive
    /// in whatever the current rotation is; aspect-ratio math wants a
    /// canonical orientation.
    pub fn portrait(&self) -> Self {
        if self.w <= self.h {
            *self
        } else {
            Self {
                w: self.h,
                h: self.w,
            }
        }
    }

    /// True if this size can completely enclose the target size in both
    /// dimensions.
    pub fn contains(&self, other: &Self) -> bool {
        self.w >= other.w && self.h >= other.h
    }
}

impl From<Rect> for Expanse {
    fn from(r: Rect) -> Self {
        Self { w: r.w, h: r.h }
    }
}

impl From<(f32, f32)> for Expanse {
    fn from(v: (f32, f32)) -> Self {
        Self { w: v.0, h: v.1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portrait() {
        assert_eq!(Expanse::new(2340.0, 1080.0).portrait(), Expanse::new(1080.0, 2340.0));
        assert_eq!(Expanse::new(1080.0, 2340.0).portrait(), Expanse::new(1080.0, 2340.0));
    }

    #[test]
    fn contains() {
        assert!(Expanse::new(10.0, 10.0).contains(&Expanse::new(10.0, 5.0)));
        assert!(!Expanse::new(10.0, 10.0).contains(&Expanse::new(11.0, 5.0)));
    }
}

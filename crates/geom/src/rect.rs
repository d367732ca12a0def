use super::{Error, Expanse, Point, Result};

/// A rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Top-left corner
    pub tl: Point,
    /// Width
    pub w: f32,
    /// Height
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect {
            tl: Point { x, y },
            w,
            h,
        }
    }

    pub fn zero() -> Self {
        Rect::new(0.0, 0.0, 0.0, 0.0)
    }

    /// The x co-ordinate of the right edge.
    pub fn right(&self) -> f32 {
        self.tl.x + self.w
    }

    /// The y co-ordinate of the bottom edge.
    pub fn bottom(&self) -> f32 {
        self.tl.y + self.h
    }

    /// The dimensions of this rectangle.
    pub fn expanse(&self) -> Expanse {
        Expanse {
            w: self.w,
            h: self.h,
        }
    }

    /// Return the same rectangle positioned at `tl`.
    pub fn at(&self, tl: impl Into<Point>) -> Self {
        Rect {
            tl: tl.into(),
            w: self.w,
            h: self.h,
        }
    }

    /// Shift the rectangle by an offset.
    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Rect {
            tl: self.tl.translate(dx, dy),
            w: self.w,
            h: self.h,
        }
    }

    /// Does this rectangle contain the point?
    pub fn contains_point(&self, p: Point) -> bool {
        if p.x < self.tl.x || p.x >= self.right() {
            false
        } else {
            !(p.y < self.tl.y || p.y >= self.bottom())
        }
    }

    /// Does this rectangle completely enclose the other?
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.tl.x <= other.tl.x
            && self.tl.y <= other.tl.y
            && self.right() >= other.right()
            && self.bottom() >= other.bottom()
    }

    /// The intersection of this rectangle with another, or `None` if
    /// they do not overlap.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x = self.tl.x.max(other.tl.x);
        let y = self.tl.y.max(other.tl.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= x || bottom <= y {
            None
        } else {
            Some(Rect::new(x, y, right - x, bottom - y))
        }
    }

    /// Given a point that falls within this rectangle, rebase the point
    /// to be relative to our origin. If the point falls outside the
    /// rect, an error is returned.
    pub fn rebase(&self, pt: Point) -> Result<Point> {
        if !self.contains_point(pt) {
            return Err(Error::Geometry("co-ords outside rectangle".into()));
        }
        Ok(Point {
            x: pt.x - self.tl.x,
            y: pt.y - self.tl.y,
        })
    }
}

impl From<(Point, Expanse)> for Rect {
    fn from(v: (Point, Expanse)) -> Self {
        Rect {
            tl: v.0,
            w: v.1.w,
            h: v.1.h,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains() {
        let r = Rect::new(10.0, 10.0, 10.0, 10.0);
        assert!(r.contains_point(Point::new(10.0, 10.0)));
        assert!(!r.contains_point(Point::new(20.0, 20.0)));
        assert!(r.contains_rect(&Rect::new(12.0, 12.0, 5.0, 5.0)));
        assert!(!r.contains_rect(&Rect::new(12.0, 12.0, 10.0, 5.0)));
        assert!(r.contains_rect(&r));
    }

    #[test]
    fn intersect() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(
            r.intersect(&Rect::new(5.0, 5.0, 10.0, 10.0)),
            Some(Rect::new(5.0, 5.0, 5.0, 5.0))
        );
        assert_eq!(r.intersect(&Rect::new(10.0, 10.0, 5.0, 5.0)), None);
    }

    #[test]
    fn rebase() {
        let r = Rect::new(10.0, 10.0, 10.0, 10.0);
        assert_eq!(r.rebase(Point::new(15.0, 12.0)).unwrap(), Point::new(5.0, 2.0));
        assert!(r.rebase(Point::new(25.0, 12.0)).is_err());
    }
}

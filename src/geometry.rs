//! Logical canvas geometry.
//!
//! Everything the screens lay out lives on a fixed logical canvas
//! (1000×800 by default). The terminal surface maps these coordinates onto
//! character cells at draw time, so layout code never sees the terminal size.

/// A point on the logical canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// A position no control can contain. Used before the first pointer event.
    pub const fn offscreen() -> Self {
        Self {
            x: i32::MIN,
            y: i32::MIN,
        }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// An axis-aligned rectangle on the logical canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A `width`×`height` rectangle horizontally centered on a canvas of
    /// `canvas_width`, with its top edge at `y`.
    pub const fn centered_x(canvas_width: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(canvas_width / 2 - width / 2, y, width, height)
    }

    /// A `width`×`height` rectangle centered on a `canvas_width`×`canvas_height` canvas.
    pub const fn centered(canvas_width: i32, canvas_height: i32, width: i32, height: i32) -> Self {
        Self::new(
            canvas_width / 2 - width / 2,
            canvas_height / 2 - height / 2,
            width,
            height,
        )
    }

    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub const fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Edge-inclusive containment: points on any of the four edges are inside.
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_edge_inclusive() {
        let b = Bounds::new(350, 350, 300, 50);
        assert!(b.contains(Point::new(350, 350)));
        assert!(b.contains(Point::new(650, 400)));
        assert!(b.contains(Point::new(650, 350)));
        assert!(b.contains(Point::new(350, 400)));
        assert!(b.contains(b.center()));
    }

    #[test]
    fn test_contains_rejects_outside() {
        let b = Bounds::new(350, 350, 300, 50);
        assert!(!b.contains(Point::new(349, 375)));
        assert!(!b.contains(Point::new(651, 375)));
        assert!(!b.contains(Point::new(500, 349)));
        assert!(!b.contains(Point::new(500, 401)));
        assert!(!b.contains(Point::offscreen()));
    }

    #[test]
    fn test_centered_x() {
        let b = Bounds::centered_x(1000, 350, 300, 50);
        assert_eq!(b, Bounds::new(350, 350, 300, 50));
        assert_eq!(b.center(), Point::new(500, 375));
    }

    #[test]
    fn test_centered_container() {
        let b = Bounds::centered(1000, 800, 800, 500);
        assert_eq!(b, Bounds::new(100, 150, 800, 500));
        assert_eq!(b.bottom(), 650);
    }
}

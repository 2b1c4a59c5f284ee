use sdl2_sys as sys;
use sys::{Point, Rect};

use crate::{opt_ptr, Result, Sdl};

/// True when `rect` has no area.
pub fn rect_empty(rect: &Rect) -> bool {
    rect.w <= 0 || rect.h <= 0
}

pub fn point_in_rect(point: &Point, rect: &Rect) -> bool {
    point.x >= rect.x && point.x < rect.x + rect.w && point.y >= rect.y && point.y < rect.y + rect.h
}

impl Sdl {
    pub fn has_intersection(&self, a: &Rect, b: &Rect) -> bool {
        unsafe { (self.fns.SDL_HasIntersection)(a, b) }.into()
    }

    /// `None` when the rectangles do not overlap.
    pub fn intersect_rect(&self, a: &Rect, b: &Rect) -> Option<Rect> {
        let mut result = Rect::default();
        bool::from(unsafe { (self.fns.SDL_IntersectRect)(a, b, &mut result) }).then_some(result)
    }

    pub fn union_rect(&self, a: &Rect, b: &Rect) -> Rect {
        let mut result = Rect::default();
        unsafe { (self.fns.SDL_UnionRect)(a, b, &mut result) };
        result
    }

    /// The smallest rectangle holding every point inside `clip`, or `None`
    /// when no point falls inside it.
    pub fn enclose_points(&self, points: &[Point], clip: Option<&Rect>) -> Result<Option<Rect>> {
        let count = crate::non_empty_count(points.len())?;
        let mut result = Rect::default();
        let enclosed = unsafe {
            (self.fns.SDL_EnclosePoints)(points.as_ptr(), count, opt_ptr(clip), &mut result)
        };
        Ok(bool::from(enclosed).then_some(result))
    }

    /// Clip the segment `a`..`b` to `rect`. `None` when it misses entirely.
    pub fn intersect_rect_and_line(&self, rect: &Rect, a: Point, b: Point) -> Option<(Point, Point)> {
        let (mut x1, mut y1, mut x2, mut y2) = (a.x, a.y, b.x, b.y);
        let hit = unsafe {
            (self.fns.SDL_IntersectRectAndLine)(rect, &mut x1, &mut y1, &mut x2, &mut y2)
        };
        bool::from(hit).then_some((Point { x: x1, y: y1 }, Point { x: x2, y: y2 }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containment() {
        let rect = Rect {
            x: 10,
            y: 10,
            w: 5,
            h: 5,
        };
        assert!(point_in_rect(&Point { x: 10, y: 14 }, &rect));
        assert!(!point_in_rect(&Point { x: 15, y: 10 }, &rect));
        assert!(!rect_empty(&rect));
        assert!(rect_empty(&Rect { w: 0, ..rect }));
        assert!(rect_empty(&Rect { h: -1, ..rect }));
    }
}

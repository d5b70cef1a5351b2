//! Points, edges and convex polygons

use crate::Shape;

/// Location in image space, with sub-pixel precision
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl From<(f64,f64)> for Point {
    fn from(p: (f64,f64)) -> Point {
        Point::new(p.0, p.1)
    }
}

/// Signed area of the triangle (`p`, `a`, `b`)
///
/// The sign reports which side of the directed line `a` to `b` the
///   point `p` falls on; zero when `p` is on the line
///
///     use rhomb::{sign, Point};
///
///     let a = Point::new(0.0, 0.0);
///     let b = Point::new(1.0, 0.0);
///     assert!(sign(Point::new(0.5,  1.0), a, b) > 0.0);
///     assert!(sign(Point::new(0.5, -1.0), a, b) < 0.0);
///     assert_eq!(sign(Point::new(3.0, 0.0), a, b), 0.0);
///
pub fn sign(p: Point, a: Point, b: Point) -> f64 {
    (p.x - b.x) * (a.y - b.y) - (a.x - b.x) * (p.y - b.y)
}

/// Closed convex polygon
///
/// Edges run `v[0] -> v[1] -> ... -> v[n-1] -> v[0]`
#[derive(Debug,Clone,PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Create a polygon from a list of vertices
    ///
    /// Vertices must describe a convex region, in either winding order
    pub fn new(vertices: Vec<Point>) -> Self {
        debug_assert!(vertices.len() >= 3, "polygon needs at least 3 vertices");
        Polygon { vertices }
    }
    /// Diamond inscribed in a `width` x `height` rectangle
    ///
    /// Vertices sit on the middle of the top, right, bottom and left sides,
    ///   in that order.  Midpoints use integer division and the far sides
    ///   are at `width-1` and `height-1`
    ///
    ///     use rhomb::{Polygon, Point};
    ///
    ///     let d = Polygon::diamond(4, 4);
    ///     assert_eq!(d.vertices(), &[Point::new(2.0, 0.0),
    ///                                Point::new(3.0, 2.0),
    ///                                Point::new(2.0, 3.0),
    ///                                Point::new(0.0, 2.0)]);
    ///
    pub fn diamond(width: usize, height: usize) -> Self {
        let (mid_x, mid_y) = ((width / 2) as f64, (height / 2) as f64);
        let right  = width.saturating_sub(1) as f64;
        let bottom = height.saturating_sub(1) as f64;
        Polygon::new(vec![
            Point::new(mid_x, 0.0),
            Point::new(right, mid_y),
            Point::new(mid_x, bottom),
            Point::new(0.0,   mid_y),
        ])
    }
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
    /// Edges as (start, end) pairs, closing back to the first vertex
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0 .. n).map(move |i| (self.vertices[i], self.vertices[(i+1) % n]))
    }
}

impl Shape for Polygon {
    /// Half-plane test against every edge
    ///
    /// Each edge sign is classified as negative or not; the point is inside
    ///   when every edge gives the same answer.  Points on an edge have a
    ///   zero sign and count as non-negative.
    ///
    ///     use rhomb::{Polygon, Shape};
    ///
    ///     let d = Polygon::diamond(100, 100);
    ///     assert!(d.contains(50.0, 50.0));
    ///     assert!(! d.contains(-10.0, -10.0));
    ///     assert!(! d.contains(0.2, 0.2));
    ///
    fn contains(&self, x: f64, y: f64) -> bool {
        let p = Point::new(x, y);
        let mut edges = self.edges().map(|(a,b)| sign(p, a, b) < 0.0);
        match edges.next() {
            None        => false,
            Some(first) => edges.all(|side| side == first),
        }
    }
}

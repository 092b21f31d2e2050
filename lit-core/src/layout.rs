//! Seat layout engine.
//!
//! Opponent seats are placed along a Bézier curve traced over the open side
//! of the play surface, evaluated at evenly spaced parameters so seats never
//! collide as the opponent count varies. Everything here is a pure function
//! of the viewport and count: same input, bit-identical output.

/// Margin between the boundary curve and the surface edge.
const MARGIN: f64 = 40.0;
/// Margin on compact (mobile-width) viewports.
const COMPACT_MARGIN: f64 = 30.0;
/// Viewport width below which the compact margin applies.
const COMPACT_WIDTH: f64 = 768.0;
/// Height of the card artwork, used for the local hand anchor.
const CARD_IMAGE_HEIGHT: f64 = 249.0;
/// Fraction shaved off the curve height in portrait orientation.
const PORTRAIT_SHRINK: f64 = 0.05;

/// A 2D anchor point in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Viewport orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Wider than tall; 7 boundary control points.
    Landscape,
    /// Taller than wide; 17 boundary control points.
    Portrait,
}

/// The play surface the layout is computed for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Surface width in layout units.
    pub width: f64,
    /// Surface height in layout units.
    pub height: f64,
    /// Orientation of the surface.
    pub orientation: Orientation,
}

impl Viewport {
    /// Create a viewport.
    pub fn new(width: f64, height: f64, orientation: Orientation) -> Self {
        Self {
            width,
            height,
            orientation,
        }
    }

    /// Whether the compact (mobile) margin applies.
    pub fn is_compact(&self) -> bool {
        self.width < COMPACT_WIDTH
    }

    fn horizontal_margin(&self) -> f64 {
        if self.is_compact() {
            COMPACT_MARGIN
        } else {
            MARGIN
        }
    }
}

fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let mut coeff = 1.0;
    for i in 0..k {
        coeff = coeff * (n - i) as f64 / (i + 1) as f64;
    }
    coeff
}

/// Evaluate the generalized Bézier curve of the control points at `t`.
pub fn bezier_point(points: &[Point], t: f64) -> Point {
    let n = points.len() - 1;
    let mut result = Point::default();
    for (i, point) in points.iter().enumerate() {
        let basis = binomial(n, i) * t.powi(i as i32) * (1.0 - t).powi((n - i) as i32);
        result.x += basis * point.x;
        result.y += basis * point.y;
    }
    result
}

/// The boundary control points, traced corner to corner over the open side
/// of the margin-inset surface. Returns the points and the inset height the
/// curve lives in (needed to mirror into screen space).
fn control_points(viewport: &Viewport) -> (Vec<Point>, f64) {
    let px = viewport.horizontal_margin();
    let py = MARGIN;
    let w = viewport.width - 2.0 * px;
    let mut h = viewport.height - 2.0 * py;

    let points = match viewport.orientation {
        Orientation::Portrait => {
            h -= h * PORTRAIT_SHRINK;
            vec![
                Point::new(0.0, 0.0),
                Point::new(0.0, h / 6.0),
                Point::new(0.0, h / 3.0),
                Point::new(0.0, h / 2.0),
                Point::new(0.0, 2.0 * h / 3.0),
                Point::new(0.0, 5.0 * h / 6.0),
                Point::new(w / 6.0, h),
                Point::new(w / 3.0, h),
                Point::new(w / 2.0, h),
                Point::new(2.0 * w / 3.0, h),
                Point::new(5.0 * w / 6.0, h),
                Point::new(w, 5.0 * h / 6.0),
                Point::new(w, 2.0 * h / 3.0),
                Point::new(w, h / 2.0),
                Point::new(w, h / 3.0),
                Point::new(w, h / 6.0),
                Point::new(w, 0.0),
            ]
        }
        Orientation::Landscape => vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 2.0 * h / 3.0),
            Point::new(w / 3.0, h),
            Point::new(w / 2.0, h),
            Point::new(2.0 * w / 3.0, h),
            Point::new(w, 2.0 * h / 3.0),
            Point::new(w, 0.0),
        ],
    };
    (points, h)
}

/// Seat anchors for `count` opponents, evenly spaced along the boundary.
///
/// Seats sit at parameters `k / (count + 1)` for `k = 1..=count`, with the
/// vertical coordinate mirrored into screen space. Zero opponents yields an
/// empty layout.
pub fn opponent_seats(viewport: &Viewport, count: usize) -> Vec<Point> {
    let (points, h) = control_points(viewport);
    let step = 1.0 / (count as f64 + 1.0);

    (1..=count)
        .map(|k| {
            let mut seat = bezier_point(&points, k as f64 * step);
            seat.y = h - seat.y;
            seat
        })
        .collect()
}

/// The local player's hand anchor: bottom-center, offset by the scaled
/// card artwork height and the horizontal margin.
pub fn player_hand_anchor(viewport: &Viewport, card_scale: f64) -> Point {
    let px = viewport.horizontal_margin();
    Point::new(
        viewport.width / 2.0 - px,
        viewport.height - CARD_IMAGE_HEIGHT * card_scale,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn landscape() -> Viewport {
        Viewport::new(1280.0, 720.0, Orientation::Landscape)
    }

    fn portrait() -> Viewport {
        Viewport::new(400.0, 800.0, Orientation::Portrait)
    }

    #[test]
    fn zero_opponents_is_empty() {
        assert!(opponent_seats(&landscape(), 0).is_empty());
        assert!(opponent_seats(&portrait(), 0).is_empty());
    }

    #[test]
    fn single_opponent_sits_at_curve_midpoint() {
        let vp = landscape();
        let seats = opponent_seats(&vp, 1);
        assert_eq!(seats.len(), 1);

        let (points, h) = control_points(&vp);
        let mut expected = bezier_point(&points, 0.5);
        expected.y = h - expected.y;
        assert_eq!(seats[0], expected);
    }

    #[test]
    fn control_point_counts_per_orientation() {
        assert_eq!(control_points(&landscape()).0.len(), 7);
        assert_eq!(control_points(&portrait()).0.len(), 17);
    }

    #[test]
    fn output_is_deterministic() {
        for count in 1..=7 {
            let first = opponent_seats(&landscape(), count);
            let second = opponent_seats(&landscape(), count);
            assert_eq!(first, second, "count {count} must be reproducible");
        }
    }

    #[test]
    fn counts_are_independent() {
        // Computing a different count must not disturb an earlier result:
        // verified by equality, not by incremental-update checks.
        let vp = landscape();
        let before = opponent_seats(&vp, 3);
        let _ = opponent_seats(&vp, 4);
        let after = opponent_seats(&vp, 3);
        assert_eq!(before, after);
    }

    #[test]
    fn requested_count_is_returned() {
        for count in 0..=7 {
            assert_eq!(opponent_seats(&landscape(), count).len(), count);
            assert_eq!(opponent_seats(&portrait(), count).len(), count);
        }
    }

    #[test]
    fn seats_are_distinct() {
        // Evenly spaced parameters keep opponents from colliding.
        for count in 2..=7 {
            let seats = opponent_seats(&landscape(), count);
            for i in 0..seats.len() {
                for j in (i + 1)..seats.len() {
                    let dx = seats[i].x - seats[j].x;
                    let dy = seats[i].y - seats[j].y;
                    assert!(
                        dx.hypot(dy) > 1.0,
                        "seats {i} and {j} collide at count {count}"
                    );
                }
            }
        }
    }

    #[test]
    fn binomial_matches_pascal() {
        assert_eq!(binomial(6, 0), 1.0);
        assert_eq!(binomial(6, 3), 20.0);
        assert_eq!(binomial(6, 6), 1.0);
        assert_eq!(binomial(3, 5), 0.0);
    }

    #[test]
    fn bezier_endpoints_hit_control_points() {
        let (points, _) = control_points(&landscape());
        let start = bezier_point(&points, 0.0);
        let end = bezier_point(&points, 1.0);
        assert!((start.x - points[0].x).abs() < 1e-9);
        assert!((start.y - points[0].y).abs() < 1e-9);
        assert!((end.x - points[points.len() - 1].x).abs() < 1e-9);
        assert!((end.y - points[points.len() - 1].y).abs() < 1e-9);
    }

    #[test]
    fn player_anchor_uses_margin_and_card_height() {
        let anchor = player_hand_anchor(&landscape(), 0.5);
        assert_eq!(anchor, Point::new(1280.0 / 2.0 - 40.0, 720.0 - 249.0 * 0.5));

        // Compact viewports use the smaller margin.
        let compact = Viewport::new(600.0, 900.0, Orientation::Portrait);
        let anchor = player_hand_anchor(&compact, 1.0);
        assert_eq!(anchor, Point::new(600.0 / 2.0 - 30.0, 900.0 - 249.0));
    }

    #[test]
    fn compact_threshold() {
        assert!(Viewport::new(767.9, 600.0, Orientation::Portrait).is_compact());
        assert!(!Viewport::new(768.0, 600.0, Orientation::Landscape).is_compact());
    }
}

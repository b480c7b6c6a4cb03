//! Integration tests for the geometry contract.
//!
//! These tests exercise the public API the way the document engine's callers
//! do: composing matrices, mapping rects and quads through them, and relying
//! on the documented edge-case behavior of empty and degenerate shapes.

use rsmupdf::{IRect, Matrix, Point, Rect};

const TOLERANCE: f64 = 1e-10;

fn assert_point_approx(actual: Point, expected: Point, msg: &str) {
    assert!(
        (actual.x - expected.x).abs() < TOLERANCE && (actual.y - expected.y).abs() < TOLERANCE,
        "{msg}: expected {expected}, got {actual}"
    );
}

/// A spread of invertible matrices: pure, composed, and arbitrary.
fn invertible_matrices() -> Vec<Matrix> {
    vec![
        Matrix::IDENTITY,
        Matrix::scale(2.0, 0.5),
        Matrix::scale(-1.0, 1.0),
        Matrix::translate(100.0, -50.0),
        Matrix::rotate(37.0),
        Matrix::rotate(-90.0),
        Matrix::shear(0.3, -0.2),
        Matrix::scale(3.0, 3.0)
            .concat(&Matrix::rotate(15.0))
            .concat(&Matrix::translate(7.0, 9.0)),
        Matrix::new(2.0, 1.0, 1.0, 3.0, 5.0, 7.0),
        Matrix::new(0.0, 1.0, -1.0, 0.0, 792.0, 0.0),
    ]
}

fn sample_points() -> Vec<Point> {
    vec![
        Point::ORIGIN,
        Point::new(1.0, 0.0),
        Point::new(-3.5, 12.25),
        Point::new(612.0, 792.0),
    ]
}

fn sample_rects() -> Vec<Rect> {
    vec![
        Rect::new(0.0, 0.0, 100.0, 100.0),
        Rect::new(10.0, 20.0, 100.0, 80.0),
        Rect::new(100.0, 80.0, 10.0, 20.0),
        Rect::new(-5.0, 40.0, 5.0, -40.0),
        Rect::new(0.5, 0.25, 595.0, 842.0),
    ]
}

// --- Matrix ---

#[test]
fn inverse_round_trips_points() {
    for m in invertible_matrices() {
        let (inv, ok) = m.invert();
        assert!(ok, "{m} should be invertible");
        for p in sample_points() {
            assert_point_approx(p.transform(&m).transform(&inv), p, &format!("{m} on {p}"));
        }
    }
}

#[test]
fn singular_matrix_inverts_to_identity() {
    assert_eq!(
        Matrix::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0).invert(),
        (Matrix::IDENTITY, false)
    );
}

#[test]
fn rotate_90_maps_x_axis_to_y_axis() {
    assert_point_approx(
        Point::new(1.0, 0.0).transform(&Matrix::rotate(90.0)),
        Point::new(0.0, 1.0),
        "rotate 90",
    );
}

#[test]
fn concat_applies_left_operand_first() {
    let m = Matrix::scale(2.0, 2.0).concat(&Matrix::translate(10.0, 20.0));
    assert_eq!(Point::ORIGIN.transform(&m), Point::new(10.0, 20.0));
}

#[test]
fn pre_operations_apply_before_receiver() {
    let base = Matrix::rotate(25.0).concat(&Matrix::translate(3.0, 4.0));
    let p = Point::new(6.0, -2.0);

    let scaled = Point::new(p.x * 2.0, p.y * 3.0);
    assert_point_approx(
        p.transform(&base.pre_scale(2.0, 3.0)),
        scaled.transform(&base),
        "pre_scale",
    );
    assert_point_approx(
        p.transform(&base.pre_translate(1.0, 1.0)),
        (p + Point::new(1.0, 1.0)).transform(&base),
        "pre_translate",
    );
    assert_point_approx(
        p.transform(&base.pre_rotate(40.0)),
        p.transform(&Matrix::rotate(40.0)).transform(&base),
        "pre_rotate",
    );
}

// --- Rect ---

#[test]
fn normalize_makes_non_degenerate_rects_non_empty() {
    for r in sample_rects() {
        assert!(!r.normalize().is_empty(), "{r}");
    }
}

#[test]
fn quad_round_trips_to_same_rect() {
    for r in sample_rects() {
        assert_eq!(r.quad().rect(), r.normalize(), "{r}");
    }
    let r = Rect::new(10.0, 20.0, 100.0, 80.0);
    assert_eq!(r.quad().rect(), r);
}

#[test]
fn intersect_and_union_of_overlapping_squares() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let b = Rect::new(50.0, 50.0, 150.0, 150.0);
    assert_eq!(a.intersect(&b), Rect::new(50.0, 50.0, 100.0, 100.0));
    assert_eq!(a.union(&b), Rect::new(0.0, 0.0, 150.0, 150.0));
}

#[test]
fn union_with_empty_rect_returns_other_operand() {
    let r = Rect::new(10.0, 10.0, 50.0, 50.0);
    assert_eq!(r.union(&Rect::new(0.0, 0.0, 0.0, 0.0)), r);
}

#[test]
fn transformed_rect_contains_transformed_corners() {
    for m in invertible_matrices() {
        let r = Rect::new(10.0, 20.0, 100.0, 80.0);
        let bounds = r.transform(&m);
        for corner in [r.top_left(), r.top_right(), r.bottom_left(), r.bottom_right()] {
            assert!(bounds.contains(corner.transform(&m)), "{m}: {bounds}");
        }
    }
}

#[test]
fn rect_transform_agrees_with_quad_transform() {
    for m in invertible_matrices() {
        let r = Rect::new(10.0, 20.0, 100.0, 80.0);
        assert_eq!(r.transform(&m), r.quad().transform(&m).rect(), "{m}");
    }
}

#[test]
fn irect_contains_source_rect() {
    for r in sample_rects() {
        let r = r.normalize();
        assert!(r.irect().rect().contains_rect(&r), "{r}");
    }
    assert_eq!(Rect::new(0.5, 0.25, 595.0, 842.0).irect(), IRect::new(0, 0, 595, 842));
}

// --- Quad ---

#[test]
fn quad_from_rect_is_rectangular_and_convex() {
    let q = Rect::new(10.0, 20.0, 100.0, 80.0).quad();
    assert!(q.is_rectangular());
    assert!(q.is_convex());
}

#[test]
fn rectilinear_matrix_keeps_quads_rectangular() {
    let r = Rect::new(10.0, 20.0, 100.0, 80.0);
    for m in [
        Matrix::scale(2.0, 3.0),
        Matrix::translate(-10.0, 5.0),
        Matrix::scale(2.0, 2.0).concat(&Matrix::translate(1.0, 1.0)),
    ] {
        assert!(m.is_rectilinear());
        assert!(r.quad().transform(&m).is_rectangular(), "{m}");
    }
}

#[test]
fn tilted_search_hit_normalizes_to_bounding_rect() {
    // A text run rotated 30 degrees, as the engine reports it.
    let run = Rect::new(0.0, 0.0, 40.0, 10.0)
        .quad()
        .transform(&Matrix::rotate(30.0).concat(&Matrix::translate(100.0, 200.0)));
    assert!(!run.is_rectangular());
    assert!(run.is_convex());

    let bbox = run.rect();
    let xs = [run.ul.x, run.ur.x, run.ll.x, run.lr.x];
    let ys = [run.ul.y, run.ur.y, run.ll.y, run.lr.y];
    assert_eq!(bbox.x0, xs.iter().copied().fold(f64::INFINITY, f64::min));
    assert_eq!(bbox.y0, ys.iter().copied().fold(f64::INFINITY, f64::min));
    assert_eq!(bbox.x1, xs.iter().copied().fold(f64::NEG_INFINITY, f64::max));
    assert_eq!(bbox.y1, ys.iter().copied().fold(f64::NEG_INFINITY, f64::max));
    for corner in [run.ul, run.ur, run.ll, run.lr] {
        assert!(bbox.contains(corner));
    }
}

//! Placement laws checked over a grid of containers, images and configurations.
//!
//! The grid deliberately includes degenerate geometry: zero and negative
//! container extents (padding larger than the view) and zero image extents.

use anchorfit::*;
use pretty_assertions::assert_eq;

const EXTENTS: &[f32] = &[-40.0, -1.0, 0.0, 1.0, 33.0, 100.0, 250.0, 1920.0];
const IMAGE_EXTENTS: &[f32] = &[0.0, 1.0, 50.0, 100.0, 333.0, 4000.0];
const WEIGHTS: &[f32] = &[0.0, 0.25, 0.5, 1.0];
const PERMISSIONS: [ScalePermissions; 4] = [
    ScalePermissions::NONE,
    ScalePermissions::DOWNSCALE,
    ScalePermissions::UPSCALE,
    ScalePermissions::BOTH,
];

/// Every (container, image) pair in the grid.
fn geometries() -> impl Iterator<Item = (Size<f32>, Size<f32>)> {
    EXTENTS.iter().flat_map(|&w| {
        EXTENTS.iter().flat_map(move |&h| {
            IMAGE_EXTENTS.iter().flat_map(move |&iw| {
                IMAGE_EXTENTS
                    .iter()
                    .map(move |&ih| (Size::new(w, h), Size::new(iw, ih)))
            })
        })
    })
}

fn configurations() -> impl Iterator<Item = (Fit, ScalePermissions)> {
    Fit::ALL
        .into_iter()
        .flat_map(|fit| PERMISSIONS.into_iter().map(move |p| (fit, p)))
}

#[test]
fn scale_is_never_negative_and_always_finite() {
    for (container, image) in geometries() {
        for (fit, perms) in configurations() {
            let t = compute_transform(container, image, 0.5, 0.5, fit, perms);
            assert!(
                t.scale >= 0.0 && t.scale.is_finite(),
                "scale {} for {container:?} {image:?} {fit:?} {perms:?}",
                t.scale
            );
            assert!(t.tx.is_finite() && t.ty.is_finite(), "{t:?}");
        }
    }
}

#[test]
fn no_permissions_locks_scale_at_one() {
    for (container, image) in geometries() {
        for fit in Fit::ALL {
            let t = compute_transform(container, image, 0.3, 0.7, fit, ScalePermissions::NONE);
            assert_eq!(t.scale, 1.0);
        }
    }
}

#[test]
fn horizontal_matches_width_ratio_when_permitted() {
    for (container, image) in geometries() {
        if image.width == 0.0 {
            continue;
        }
        for perms in PERMISSIONS {
            let t = compute_transform(container, image, 0.5, 0.5, Fit::Horizontal, perms);
            let ratio = container.width / image.width;
            let permitted = ratio >= 0.0
                && !perms.is_empty()
                && (ratio <= 1.0 || perms.allows_upscale())
                && (ratio >= 1.0 || perms.allows_downscale());
            let expected = if permitted {
                ratio
            } else if ratio < 0.0 && perms.allows_downscale() {
                0.0
            } else {
                1.0
            };
            assert_eq!(t.scale, expected, "{container:?} {image:?} {perms:?}");
        }
    }
}

#[test]
fn vertical_matches_height_ratio_with_both_permissions() {
    for (container, image) in geometries() {
        if image.height == 0.0 || container.height < 0.0 {
            continue;
        }
        let t = compute_transform(
            container,
            image,
            0.5,
            0.5,
            Fit::Vertical,
            ScalePermissions::BOTH,
        );
        assert_eq!(t.scale, container.height / image.height);
    }
}

#[test]
fn identical_inputs_give_identical_outputs() {
    for (container, image) in geometries().step_by(7) {
        for (fit, perms) in configurations() {
            let a = compute_transform(container, image, 0.25, 1.0, fit, perms);
            let b = compute_transform(container, image, 0.25, 1.0, fit, perms);
            assert_eq!(a, b);
        }
    }
}

#[test]
fn weight_bounds_pin_edges() {
    for (container, image) in geometries() {
        for (fit, perms) in configurations() {
            let start = compute_transform(container, image, 0.0, 0.0, fit, perms);
            let end = compute_transform(container, image, 1.0, 1.0, fit, perms);
            assert_eq!(start.scale, end.scale);
            assert_eq!((start.tx, start.ty), (0.0, 0.0));
            assert_eq!(end.tx, container.width - image.width * end.scale);
            assert_eq!(end.ty, container.height - image.height * end.scale);
        }
    }
}

#[test]
fn translation_is_monotonic_in_weight() {
    for (container, image) in geometries() {
        for (fit, perms) in configurations() {
            let mut previous: Option<Transform<f32>> = None;
            for &w in WEIGHTS {
                let t = compute_transform(container, image, w, w, fit, perms);
                if let Some(p) = previous {
                    let gap_x = container.width - image.width * t.scale;
                    let gap_y = container.height - image.height * t.scale;
                    // Direction follows the sign of the gap: margins push right,
                    // crops pull left.
                    assert!(gap_x < 0.0 || t.tx >= p.tx, "{t:?} after {p:?}");
                    assert!(gap_x > 0.0 || t.tx <= p.tx, "{t:?} after {p:?}");
                    assert!(gap_y < 0.0 || t.ty >= p.ty, "{t:?} after {p:?}");
                    assert!(gap_y > 0.0 || t.ty <= p.ty, "{t:?} after {p:?}");
                }
                previous = Some(t);
            }
        }
    }
}

#[test]
fn inside_never_crops_outside_never_leaves_margins() {
    for &(w, h) in &[(200.0_f32, 100.0), (100.0, 200.0), (300.0, 300.0)] {
        for &(iw, ih) in &[(50.0_f32, 80.0), (640.0, 480.0), (1000.0, 10.0)] {
            let container = Size::new(w, h);
            let image = Size::new(iw, ih);

            let both = ScalePermissions::BOTH;

            let inside = compute_transform(container, image, 0.0, 0.0, Fit::Inside, both);
            let inside = inside.map_size(image);
            assert!(inside.width <= w * 1.0001 && inside.height <= h * 1.0001);
            let fills_width = (inside.width - w).abs() < 1e-3;
            let fills_height = (inside.height - h).abs() < 1e-3;
            assert!(fills_width || fills_height);

            let outside = compute_transform(container, image, 0.0, 0.0, Fit::Outside, both);
            let outside = outside.map_size(image);
            assert!(outside.width >= w * 0.9999 && outside.height >= h * 0.9999);
        }
    }
}

#[test]
fn value_types_are_send_sync_copy() {
    fn assert_send_sync<T: Send + Sync + Copy>() {}
    assert_send_sync::<Transform<f32>>();
    assert_send_sync::<Transform<f64>>();
    assert_send_sync::<Placement<f32>>();
    assert_send_sync::<Placement<f64>>();
    assert_send_sync::<Fit>();
    assert_send_sync::<ScalePermissions>();
    assert_send_sync::<Size<f32>>();
    assert_send_sync::<Weight<f32>>();
    assert_send_sync::<Frame>();
    assert_send_sync::<ConfigError>();
}

// ── Reference scenarios ─────────────────────────────────────────────────

#[test]
fn scenario_small_square_upscaled_to_fill() {
    let t = compute_transform(
        Size::new(100.0_f32, 100.0),
        Size::new(50.0, 50.0),
        0.5,
        0.5,
        Fit::Inside,
        ScalePermissions::BOTH,
    );
    assert_eq!(t, Transform::new(2.0, 0.0, 0.0));
}

#[test]
fn scenario_scaling_disabled_centers() {
    let t = compute_transform(
        Size::new(100.0_f32, 100.0),
        Size::new(50.0, 50.0),
        0.5,
        0.5,
        Fit::Inside,
        ScalePermissions::NONE,
    );
    assert_eq!(t, Transform::new(1.0, 25.0, 25.0));
}

#[test]
fn scenario_outside_wide_container() {
    let t = compute_transform(
        Size::new(200.0_f32, 100.0),
        Size::new(100.0, 100.0),
        0.0,
        0.0,
        Fit::Outside,
        ScalePermissions::BOTH,
    );
    assert_eq!(t, Transform::new(2.0, 0.0, 0.0));
}

#[test]
fn scenario_negative_container_width() {
    for &(xw, yw) in &[(0.0_f32, 0.0), (0.5, 0.5), (1.0, 0.25)] {
        let t = compute_transform(
            Size::new(-10.0_f32, 50.0),
            Size::new(100.0, 100.0),
            xw,
            yw,
            Fit::Inside,
            ScalePermissions::BOTH,
        );
        assert_eq!(t.scale, 0.0);
        assert_eq!(t.tx, xw * -10.0);
        assert_eq!(t.ty, yw * 50.0);
    }
}

#[test]
fn scenario_zero_width_image() {
    let t = compute_transform(
        Size::new(100.0_f64, 100.0),
        Size::new(0.0, 100.0),
        0.5,
        0.5,
        Fit::Horizontal,
        ScalePermissions::BOTH,
    );
    assert_eq!(t, Transform::new(0.0, 50.0, 50.0));
}

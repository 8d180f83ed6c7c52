//! View bounds and padding: the container an image is placed into.
//!
//! The container is the content box of a view, i.e. its bounds minus padding.
//! Padding larger than the bounds yields a negative content extent, which
//! [`compute_transform`](crate::compute_transform) absorbs by clamping the
//! scale to zero.

use core::fmt::Debug;

use num_traits::Float;

use crate::config::Placement;
use crate::placement::Size;
use crate::transform::Transform;

/// Edges of a view in its parent's coordinates, in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Bounds of a `width`×`height` view at the origin.
    pub const fn sized(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }
}

/// Padding around the content box, in pixels (CSS order).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Padding {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Padding {
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same padding on every edge.
    pub const fn uniform(all: i32) -> Self {
        Self::new(all, all, all, all)
    }
}

/// A view's bounds plus its padding.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Frame {
    pub bounds: Bounds,
    pub padding: Padding,
}

impl Frame {
    pub const fn new(bounds: Bounds, padding: Padding) -> Self {
        Self { bounds, padding }
    }

    /// Content box extent. Negative when padding exceeds the bounds.
    pub fn content_size<F: Float>(&self) -> Size<F> {
        let b = &self.bounds;
        let p = &self.padding;
        // i64 so that extreme bounds and padding cannot overflow.
        let w = widen(b.right) - widen(b.left) - widen(p.left) - widen(p.right);
        let h = widen(b.bottom) - widen(b.top) - widen(p.top) - widen(p.bottom);
        Size::new(to_float(w), to_float(h))
    }

    /// Transform of `image` in content-box coordinates.
    pub fn place<F: Float + Debug>(
        &self,
        placement: &Placement<F>,
        image: Size<F>,
    ) -> Transform<F> {
        placement.transform(self.content_size(), image)
    }

    /// Transform of `image` in view coordinates (offset by the left/top padding).
    pub fn place_in_view<F: Float + Debug>(
        &self,
        placement: &Placement<F>,
        image: Size<F>,
    ) -> Transform<F> {
        let dx = to_float(widen(self.padding.left));
        let dy = to_float(widen(self.padding.top));
        self.place(placement, image).then_translate(dx, dy)
    }
}

fn widen(v: i32) -> i64 {
    v.into()
}

fn to_float<F: Float>(v: i64) -> F {
    <F as num_traits::NumCast>::from(v).unwrap_or_else(F::nan)
}

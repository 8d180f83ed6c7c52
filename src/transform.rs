//! Uniform-scale affine transform produced by the placement computation.

use num_traits::Float;

use crate::placement::Size;

/// Axis-aligned rectangle in container coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect<F> {
    pub x: F,
    pub y: F,
    pub width: F,
    pub height: F,
}

impl<F: Float> Rect<F> {
    /// Create a new rect.
    pub fn new(x: F, y: F, width: F, height: F) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (`x + width`).
    pub fn right(&self) -> F {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    pub fn bottom(&self) -> F {
        self.y + self.height
    }
}

/// Scale both axes by `scale`, then translate by `(tx, ty)`.
///
/// Applied to an image whose top-left corner sits at the origin, this maps
/// image coordinates into container coordinates:
///
/// ```text
///     X = x * scale + tx
///     Y = y * scale + ty
/// ```
///
/// Freshly computed by every call to
/// [`compute_transform`](crate::compute_transform); there is no way to mutate
/// one in place.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform<F> {
    /// Uniform scale factor (`scaleX == scaleY`). Never negative when produced
    /// by the placement computation.
    pub scale: F,
    /// Horizontal translation applied after scaling.
    pub tx: F,
    /// Vertical translation applied after scaling.
    pub ty: F,
}

impl<F: Float> Transform<F> {
    /// Create a transform from its parts.
    pub fn new(scale: F, tx: F, ty: F) -> Self {
        Self { scale, tx, ty }
    }

    /// Scale 1, no translation.
    pub fn identity() -> Self {
        Self::new(F::one(), F::zero(), F::zero())
    }

    /// Whether this is exactly the identity.
    pub fn is_identity(&self) -> bool {
        self.scale == F::one() && self.tx == F::zero() && self.ty == F::zero()
    }

    /// Map a point from image space into container space.
    pub fn map_point(&self, x: F, y: F) -> (F, F) {
        (x * self.scale + self.tx, y * self.scale + self.ty)
    }

    /// Scale a size (translation does not apply to extents).
    pub fn map_size(&self, size: Size<F>) -> Size<F> {
        Size::new(size.width * self.scale, size.height * self.scale)
    }

    /// Destination rectangle of an image of the given size.
    ///
    /// Parts of the rect may lie outside the container: negative origin or
    /// overflowing extent means the image is cropped on that side.
    pub fn image_rect(&self, image: Size<F>) -> Rect<F> {
        let scaled = self.map_size(image);
        Rect::new(self.tx, self.ty, scaled.width, scaled.height)
    }

    /// Append a translation after this transform.
    pub fn then_translate(self, dx: F, dy: F) -> Self {
        Self::new(self.scale, self.tx + dx, self.ty + dy)
    }

    /// Inverse mapping (container space back to image space).
    ///
    /// `None` when the scale is zero or not finite, since the image then
    /// collapses to a point (or was never measurable) and has no inverse.
    pub fn inverse(&self) -> Option<Self> {
        if self.scale == F::zero() || !self.scale.is_finite() {
            return None;
        }
        let inv = self.scale.recip();
        Some(Self::new(inv, -self.tx * inv, -self.ty * inv))
    }

    /// Coefficients `[a, b, c, d, e, f]` of the affine matrix
    ///
    /// ```text
    ///     | a c e |
    ///     | b d f |
    ///     | 0 0 1 |
    /// ```
    pub fn to_affine(&self) -> [F; 6] {
        let zero = F::zero();
        [self.scale, zero, zero, self.scale, self.tx, self.ty]
    }

    /// Full 3x3 matrix in row-major order.
    pub fn to_matrix(&self) -> [F; 9] {
        let [a, b, c, d, e, f] = self.to_affine();
        [a, c, e, b, d, f, F::zero(), F::zero(), F::one()]
    }
}

impl<F: Float> Default for Transform<F> {
    fn default() -> Self {
        Self::identity()
    }
}

//! Weighted fit computation: where and how large to draw an image inside a
//! container.
//!
//! Generalizes the usual fit/fill scale types with four independent knobs:
//! an anchor weight per axis, a [`Fit`] policy, and [`ScalePermissions`]
//! restricting which directions the image may be scaled in. Pure geometry,
//! no allocations, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use anchorfit::{Fit, ScalePermissions, Size, compute_transform};
//!
//! // 400×200 image into a 200×200 container, cropped to fill, anchored left.
//! let t = compute_transform(
//!     Size::new(200.0_f32, 200.0),
//!     Size::new(400.0, 200.0),
//!     0.0,
//!     0.5,
//!     Fit::Outside,
//!     ScalePermissions::BOTH,
//! );
//! assert_eq!(t.scale, 1.0);
//! assert_eq!((t.tx, t.ty), (0.0, 0.0));
//! ```

use core::fmt::Debug;

use num_traits::Float;

use crate::config::ConfigError;
use crate::transform::Transform;

/// Width × height in pixel-like units.
///
/// Not required to be positive: a container measured as view bounds minus
/// padding goes negative when the padding exceeds the bounds.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size<F> {
    pub width: F,
    pub height: F,
}

impl<F> Size<F> {
    /// Create a new size.
    pub const fn new(width: F, height: F) -> Self {
        Self { width, height }
    }
}

impl<F> From<(F, F)> for Size<F> {
    fn from((width, height): (F, F)) -> Self {
        Self::new(width, height)
    }
}

/// Which container dimension the image scale is derived from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Fit {
    /// Show the whole image, adding margins on one axis.
    #[default]
    Inside,
    /// Fill the whole container, cropping the image on one axis.
    Outside,
    /// Always match the container width.
    Horizontal,
    /// Always match the container height.
    Vertical,
}

impl Fit {
    /// All policies, in attribute-value order.
    pub const ALL: [Fit; 4] = [Fit::Inside, Fit::Outside, Fit::Horizontal, Fit::Vertical];

    /// Decode the host's integer encoding (`0..=3`, in [`ALL`](Self::ALL) order).
    pub fn from_attr_value(value: i32) -> Result<Self, ConfigError> {
        match value {
            0 => Ok(Fit::Inside),
            1 => Ok(Fit::Outside),
            2 => Ok(Fit::Horizontal),
            3 => Ok(Fit::Vertical),
            _ => Err(ConfigError::InvalidFitPolicy { value }),
        }
    }

    /// Integer encoding understood by [`from_attr_value`](Self::from_attr_value).
    pub const fn attr_value(self) -> i32 {
        match self {
            Fit::Inside => 0,
            Fit::Outside => 1,
            Fit::Horizontal => 2,
            Fit::Vertical => 3,
        }
    }
}

/// Directions in which the image may be scaled.
///
/// The empty set locks the scale at 1 regardless of [`Fit`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScalePermissions {
    downscale: bool,
    upscale: bool,
}

impl ScalePermissions {
    /// Never scale.
    pub const NONE: Self = Self {
        downscale: false,
        upscale: false,
    };
    /// Only shrink images larger than the fitted size.
    pub const DOWNSCALE: Self = Self {
        downscale: true,
        upscale: false,
    };
    /// Only enlarge images smaller than the fitted size.
    pub const UPSCALE: Self = Self {
        downscale: false,
        upscale: true,
    };
    /// Scale in both directions.
    pub const BOTH: Self = Self {
        downscale: true,
        upscale: true,
    };

    /// Attribute bit for [`DOWNSCALE`](Self::DOWNSCALE).
    pub const DOWNSCALE_BIT: u32 = 1 << 0;
    /// Attribute bit for [`UPSCALE`](Self::UPSCALE).
    pub const UPSCALE_BIT: u32 = 1 << 1;

    /// Build from explicit flags.
    pub const fn new(downscale: bool, upscale: bool) -> Self {
        Self { downscale, upscale }
    }

    /// Decode the host's bit encoding. Any bit other than
    /// [`DOWNSCALE_BIT`](Self::DOWNSCALE_BIT) and
    /// [`UPSCALE_BIT`](Self::UPSCALE_BIT) is rejected.
    pub fn from_bits(bits: u32) -> Result<Self, ConfigError> {
        if bits & !(Self::DOWNSCALE_BIT | Self::UPSCALE_BIT) != 0 {
            let bits = bits.into();
            return Err(ConfigError::InvalidScalePermissions { bits });
        }
        Ok(Self {
            downscale: bits & Self::DOWNSCALE_BIT != 0,
            upscale: bits & Self::UPSCALE_BIT != 0,
        })
    }

    /// Bit encoding understood by [`from_bits`](Self::from_bits).
    pub const fn bits(self) -> u32 {
        let mut bits = 0;
        if self.downscale {
            bits |= Self::DOWNSCALE_BIT;
        }
        if self.upscale {
            bits |= Self::UPSCALE_BIT;
        }
        bits
    }

    pub const fn allows_downscale(self) -> bool {
        self.downscale
    }

    pub const fn allows_upscale(self) -> bool {
        self.upscale
    }

    /// True when scaling is disabled entirely.
    pub const fn is_empty(self) -> bool {
        !self.downscale && !self.upscale
    }

    /// Copy with the downscale flag set or cleared.
    pub const fn with_downscale(self, downscale: bool) -> Self {
        Self { downscale, ..self }
    }

    /// Copy with the upscale flag set or cleared.
    pub const fn with_upscale(self, upscale: bool) -> Self {
        Self { upscale, ..self }
    }
}

impl Default for ScalePermissions {
    fn default() -> Self {
        Self::BOTH
    }
}

/// Compute the transform placing `image` inside `container`.
///
/// The scale is uniform and chosen by `fit`, then restricted by `scale`
/// permissions. Any leftover space (or overflow, when cropping) is split
/// along each axis according to the weights: `0` pins the image to the
/// left/top edge, `1` to the right/bottom edge.
///
/// Weights are expected in `[0, 1]`; use [`Weight`](crate::Weight) or
/// [`Placement`](crate::Placement) to validate them at the boundary. This
/// function itself never fails:
///
/// - a negative container extent would produce a negative scale (mirroring
///   the image), so the scale is clamped to `0` instead;
/// - a zero image extent on the fitted axis yields a scale of `0` rather than
///   an infinite or NaN ratio.
///
/// The translation always reflects the final scale, including when the
/// permissions forced it back to 1.
pub fn compute_transform<F: Float + Debug>(
    container: Size<F>,
    image: Size<F>,
    x_weight: F,
    y_weight: F,
    fit: Fit,
    scale: ScalePermissions,
) -> Transform<F> {
    let Size {
        width: w,
        height: h,
    } = container;
    let Size {
        width: iw,
        height: ih,
    } = image;

    let s = if scale.is_empty() {
        F::one()
    } else {
        // Cross-multiply rather than compare ratios, so zero extents never divide.
        let image_is_wider = iw * h > ih * w;
        let fit_width = match fit {
            Fit::Horizontal => true,
            Fit::Vertical => false,
            Fit::Inside => image_is_wider,
            Fit::Outside => !image_is_wider,
        };
        let raw = if fit_width {
            axis_ratio(w, iw)
        } else {
            axis_ratio(h, ih)
        };
        constrain_scale(raw, scale, container)
    };

    Transform::new(s, x_weight * (w - iw * s), y_weight * (h - ih * s))
}

/// `extent / image_extent`, with a zero image extent mapping to 0.
fn axis_ratio<F: Float + Debug>(extent: F, image_extent: F) -> F {
    if image_extent == F::zero() {
        log::debug!("zero image extent on fitted axis (container extent {extent:?}); scale is 0");
        return F::zero();
    }
    extent / image_extent
}

/// Apply scale permissions, then the negative-scale guard.
fn constrain_scale<F: Float + Debug>(
    scale: F,
    permissions: ScalePermissions,
    container: Size<F>,
) -> F {
    let one = F::one();
    if (scale > one && !permissions.allows_upscale())
        || (scale < one && !permissions.allows_downscale())
    {
        one
    } else if scale < F::zero() {
        log::debug!(
            "negative scale {scale:?} for container {:?}x{:?}; clamped to 0",
            container.width,
            container.height
        );
        F::zero()
    } else {
        scale
    }
}

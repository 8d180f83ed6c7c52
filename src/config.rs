//! Validated placement configuration.
//!
//! [`Placement`] bundles the four knobs of [`compute_transform`] behind
//! validating constructors. Values are immutable: every update returns a new
//! placement wrapped in [`Updated`], which tells the host whether the change
//! requires a new layout pass. Rejected updates leave the caller holding the
//! previous value.
//!
//! # Example
//!
//! ```
//! use anchorfit::{Fit, Placement, Size};
//!
//! let placement = Placement::<f32>::builder()
//!     .weights(0.0, 1.0)
//!     .fit(Fit::Outside)
//!     .build()
//!     .unwrap();
//!
//! let update = placement.with_x_weight(0.0).unwrap();
//! assert!(!update.relayout);
//!
//! assert!(placement.with_y_weight(1.5).is_err());
//!
//! let t = placement.transform(Size::new(100.0, 100.0), Size::new(50.0, 25.0));
//! assert_eq!((t.scale, t.tx, t.ty), (4.0, 0.0, 0.0));
//! ```

use core::fmt::{self, Debug};

use num_traits::Float;

use crate::placement::{Fit, ScalePermissions, Size, compute_transform};
use crate::transform::Transform;

/// Axis a weight applies to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left (0) to right (1).
    Horizontal,
    /// Top (0) to bottom (1).
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::Horizontal => "x",
            Axis::Vertical => "y",
        })
    }
}

/// Rejected configuration value.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Weight outside `[0, 1]`, or NaN.
    #[error("{axis} weight must be in [0, 1]: {value}")]
    InvalidWeight { axis: Axis, value: f64 },
    /// Fit attribute value outside `0..=3`.
    #[error("unknown fit value {value}, expected 0..=3")]
    InvalidFitPolicy { value: i32 },
    /// Scale flags that are negative or carry bits other than downscale (1)
    /// and upscale (2).
    #[error("invalid scale permission bits {bits}, expected 0..=3")]
    InvalidScalePermissions { bits: i64 },
}

/// Anchor weight in `[0, 1]`.
///
/// `0` binds the image to the start edge (left/top), `1` to the end edge
/// (right/bottom). Intermediate values interpolate linearly; `0.5` centers the
/// margins or the crop.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Weight<F>(F);

impl<F: Float> Weight<F> {
    /// Validate `value` for `axis`.
    pub fn new(axis: Axis, value: F) -> Result<Self, ConfigError> {
        if value >= F::zero() && value <= F::one() {
            Ok(Self(value))
        } else {
            Err(ConfigError::InvalidWeight {
                axis,
                value: value.to_f64().unwrap_or(f64::NAN),
            })
        }
    }

    pub fn start() -> Self {
        Self(F::zero())
    }

    pub fn center() -> Self {
        Self(F::one() / (F::one() + F::one()))
    }

    pub fn end() -> Self {
        Self(F::one())
    }

    pub fn get(self) -> F {
        self.0
    }
}

/// Result of updating an immutable configuration value.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Updated<T> {
    /// The new value (equal to the old one when `relayout` is false).
    pub value: T,
    /// Whether the value changed, i.e. the host should recompute the layout.
    pub relayout: bool,
}

impl<T: PartialEq> Updated<T> {
    fn between(old: &T, value: T) -> Self {
        let relayout = *old != value;
        Self { value, relayout }
    }
}

impl<T> Updated<T> {
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Complete, validated placement configuration.
///
/// Defaults: centered on both axes, [`Fit::Inside`],
/// [`ScalePermissions::BOTH`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement<F = f32> {
    x_weight: Weight<F>,
    y_weight: Weight<F>,
    fit: Fit,
    scale: ScalePermissions,
}

impl<F: Float + Debug> Placement<F> {
    /// Default placement.
    pub fn new() -> Self {
        Self {
            x_weight: Weight::center(),
            y_weight: Weight::center(),
            fit: Fit::Inside,
            scale: ScalePermissions::BOTH,
        }
    }

    /// Start a validating builder from the defaults.
    pub fn builder() -> PlacementBuilder<F> {
        PlacementBuilder::new()
    }

    /// Decode the host's attribute encoding: raw weights, fit as `0..=3`,
    /// scale as a bit set of [`ScalePermissions::DOWNSCALE_BIT`] and
    /// [`ScalePermissions::UPSCALE_BIT`].
    pub fn from_attrs(
        x_weight: F,
        y_weight: F,
        fit: i32,
        scale_bits: u32,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            x_weight: Weight::new(Axis::Horizontal, x_weight)?,
            y_weight: Weight::new(Axis::Vertical, y_weight)?,
            fit: Fit::from_attr_value(fit)?,
            scale: ScalePermissions::from_bits(scale_bits)?,
        })
    }

    pub fn x_weight(&self) -> F {
        self.x_weight.get()
    }

    pub fn y_weight(&self) -> F {
        self.y_weight.get()
    }

    pub fn fit(&self) -> Fit {
        self.fit
    }

    pub fn scale(&self) -> ScalePermissions {
        self.scale
    }

    pub fn with_x_weight(&self, value: F) -> Result<Updated<Self>, ConfigError> {
        let x_weight = Weight::new(Axis::Horizontal, value)?;
        Ok(Updated::between(self, Self { x_weight, ..*self }))
    }

    pub fn with_y_weight(&self, value: F) -> Result<Updated<Self>, ConfigError> {
        let y_weight = Weight::new(Axis::Vertical, value)?;
        Ok(Updated::between(self, Self { y_weight, ..*self }))
    }

    /// Fit policy. Has no effect on the result while scaling is disabled.
    pub fn with_fit(&self, fit: Fit) -> Updated<Self> {
        Updated::between(self, Self { fit, ..*self })
    }

    pub fn with_scale(&self, scale: ScalePermissions) -> Updated<Self> {
        Updated::between(self, Self { scale, ..*self })
    }

    /// The image may shrink if and only if `downscale` is set.
    pub fn with_downscale(&self, downscale: bool) -> Updated<Self> {
        self.with_scale(self.scale.with_downscale(downscale))
    }

    /// The image may grow if and only if `upscale` is set.
    pub fn with_upscale(&self, upscale: bool) -> Updated<Self> {
        self.with_scale(self.scale.with_upscale(upscale))
    }

    /// Place `image` inside `container` with this configuration.
    pub fn transform(&self, container: Size<F>, image: Size<F>) -> Transform<F> {
        compute_transform(
            container,
            image,
            self.x_weight.get(),
            self.y_weight.get(),
            self.fit,
            self.scale,
        )
    }
}

impl<F: Float + Debug> Default for Placement<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`Placement`]. Weights are validated in [`build`](Self::build).
#[derive(Copy, Clone, Debug)]
pub struct PlacementBuilder<F> {
    x_weight: F,
    y_weight: F,
    fit: Fit,
    scale: ScalePermissions,
}

impl<F: Float + Debug> PlacementBuilder<F> {
    fn new() -> Self {
        let center = Weight::<F>::center().get();
        Self {
            x_weight: center,
            y_weight: center,
            fit: Fit::Inside,
            scale: ScalePermissions::BOTH,
        }
    }

    pub fn x_weight(mut self, value: F) -> Self {
        self.x_weight = value;
        self
    }

    pub fn y_weight(mut self, value: F) -> Self {
        self.y_weight = value;
        self
    }

    /// Set both weights at once.
    pub fn weights(self, x: F, y: F) -> Self {
        self.x_weight(x).y_weight(y)
    }

    pub fn fit(mut self, fit: Fit) -> Self {
        self.fit = fit;
        self
    }

    pub fn scale(mut self, scale: ScalePermissions) -> Self {
        self.scale = scale;
        self
    }

    /// Validate and build. Reports the x weight first when both are invalid.
    pub fn build(self) -> Result<Placement<F>, ConfigError> {
        Ok(Placement {
            x_weight: Weight::new(Axis::Horizontal, self.x_weight)?,
            y_weight: Weight::new(Axis::Vertical, self.y_weight)?,
            fit: self.fit,
            scale: self.scale,
        })
    }
}

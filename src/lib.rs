//! Weighted fit placement: scale and position an image inside a container.
//!
//! Generalizes fit/fill image scaling with four independent knobs: an anchor
//! weight per axis, a fit policy, and which scaling directions are allowed.
//! Pure geometry, no pixel operations, `no_std` compatible.
//!
//! # Modules
//!
//! - [`placement`] — Fit policy, scale permissions, and the transform computation
//! - [`transform`] — The resulting uniform-scale affine transform
//! - [`config`] — Validated, immutable placement configuration
//! - [`frame`] — Container size from view bounds and padding
//! - `attrs` — Attribute string parsing (feature `attrs`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod config;
pub mod frame;
pub mod placement;
pub mod transform;

#[cfg(feature = "attrs")]
pub mod attrs;

pub use config::{Axis, ConfigError, Placement, PlacementBuilder, Updated, Weight};
pub use frame::{Bounds, Frame, Padding};
pub use placement::{Fit, ScalePermissions, Size, compute_transform};
pub use transform::{Rect, Transform};

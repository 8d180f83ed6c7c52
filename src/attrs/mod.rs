//! Attribute string parsing.
//!
//! Parses textual configuration like `xweight=0&fit=outside&scale=down` into a
//! validated [`Placement`]. Every key is validated on its own: an invalid value
//! produces a [`ParseWarning`] and leaves the previous value in place, so a
//! single bad attribute never silently clamps or resets the rest.
//!
//! # Example
//!
//! ```
//! use anchorfit::attrs;
//! use anchorfit::{Fit, ScalePermissions};
//!
//! let result = attrs::parse("xweight=0&yweight=1&fit=outside&scale=down");
//! assert!(result.warnings.is_empty());
//! assert_eq!(result.placement.fit(), Fit::Outside);
//! assert_eq!(result.placement.scale(), ScalePermissions::DOWNSCALE);
//!
//! // Out-of-range weight is rejected, the default (0.5) is kept.
//! let result = attrs::parse("xweight=1.5");
//! assert_eq!(result.warnings.len(), 1);
//! assert_eq!(result.placement.x_weight(), 0.5);
//! ```
//!
//! # Keys
//!
//! | key | values |
//! |-----|--------|
//! | `xweight`, `x_weight` | `0`..`1` |
//! | `yweight`, `y_weight` | `0`..`1` |
//! | `weight` | `x,y` |
//! | `fit` | `inside`, `outside`, `horizontal`, `vertical`, or `0`..`3` |
//! | `scale` | `none`, `down`, `up`, `both`, or bit set `0`..`3` |
//! | `downscale`, `upscale` | `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off` |

mod parse;

use alloc::string::String;
use alloc::vec::Vec;

use crate::config::{ConfigError, Placement};

/// Result of parsing an attribute string.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Placement with every accepted attribute applied.
    pub placement: Placement<f32>,
    /// Non-fatal problems; each one left the affected value unchanged.
    pub warnings: Vec<ParseWarning>,
    /// Whether `placement` differs from the starting placement.
    pub relayout: bool,
}

/// Non-fatal warning from attribute parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseWarning {
    /// A key appeared more than once (last valid value wins).
    DuplicateKey { key: String, value: String },
    /// A key was not recognized.
    KeyNotRecognized { key: String, value: String },
    /// A value could not be parsed at all.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
    /// A value parsed but failed validation.
    Rejected {
        key: &'static str,
        value: String,
        error: ConfigError,
    },
}

/// Parse an attribute string (with or without leading `?`) on top of the
/// default placement.
pub fn parse(attrs: &str) -> ParseResult {
    apply(Placement::new(), attrs)
}

/// Parse an attribute string on top of an existing placement.
///
/// `relayout` in the result reports whether anything actually changed.
pub fn apply(base: Placement<f32>, attrs: &str) -> ParseResult {
    let (placement, warnings) = parse::parse_attrs(base, attrs);
    ParseResult {
        placement,
        warnings,
        relayout: placement != base,
    }
}

//! Attribute tokenizer and value parsers.
//!
//! Minimal percent-decoding and key-value extraction without external dependencies.
//! Decoded bytes that are not valid UTF-8 become U+FFFD.

use alloc::string::String;
use alloc::vec::Vec;

use super::ParseWarning;
use crate::config::{Axis, ConfigError, Placement, Updated};
use crate::placement::{Fit, ScalePermissions};

/// Parse an attribute string on top of `base`.
pub(crate) fn parse_attrs(
    base: Placement<f32>,
    attrs: &str,
) -> (Placement<f32>, Vec<ParseWarning>) {
    let mut state = State {
        placement: base,
        seen: Vec::new(),
        warnings: Vec::new(),
    };

    for pair in split_attrs(attrs) {
        let (raw_key, raw_value) = split_pair(pair);
        let key = percent_decode(raw_key).to_ascii_lowercase();
        let value = percent_decode(raw_value);
        state.dispatch(&key, &value);
    }

    (state.placement, state.warnings)
}

struct State {
    placement: Placement<f32>,
    /// Canonical keys already encountered, for duplicate warnings.
    seen: Vec<&'static str>,
    warnings: Vec<ParseWarning>,
}

impl State {
    fn dispatch(&mut self, key: &str, value: &str) {
        match key {
            "xweight" | "x_weight" => self.weight(Axis::Horizontal, "xweight", value),
            "yweight" | "y_weight" => self.weight(Axis::Vertical, "yweight", value),
            "weight" => self.weights(value),
            "fit" => self.fit(value),
            "scale" => self.scale(value),
            "downscale" => self.scale_flag("downscale", value, ScalePermissions::with_downscale),
            "upscale" => self.scale_flag("upscale", value, ScalePermissions::with_upscale),
            _ => self.warnings.push(ParseWarning::KeyNotRecognized {
                key: String::from(key),
                value: String::from(value),
            }),
        }
    }

    fn weight(&mut self, axis: Axis, key: &'static str, value: &str) {
        self.note_key(key, value);
        let Some(v) = parse_f32(value) else {
            return self.invalid(key, value, "expected a number in [0, 1]");
        };
        let updated = match axis {
            Axis::Horizontal => self.placement.with_x_weight(v),
            Axis::Vertical => self.placement.with_y_weight(v),
        };
        self.accept(key, value, updated);
    }

    /// `x,y`: both weights are applied, or neither.
    fn weights(&mut self, value: &str) {
        self.note_key("weight", value);
        let Some((x, y)) = parse_pair(value) else {
            return self.invalid("weight", value, "expected x,y numbers in [0, 1]");
        };
        let updated = self
            .placement
            .with_x_weight(x)
            .and_then(|u| u.value.with_y_weight(y));
        self.accept("weight", value, updated);
    }

    fn fit(&mut self, value: &str) {
        self.note_key("fit", value);
        let fit = match parse_fit_name(value) {
            Some(fit) => Ok(fit),
            None => match value.trim().parse::<i32>() {
                Ok(n) => Fit::from_attr_value(n),
                Err(_) => {
                    return self.invalid(
                        "fit",
                        value,
                        "expected inside|outside|horizontal|vertical or 0-3",
                    );
                }
            },
        };
        let updated = fit.map(|fit| self.placement.with_fit(fit));
        self.accept("fit", value, updated);
    }

    fn scale(&mut self, value: &str) {
        self.note_key("scale", value);
        let scale = match parse_scale_name(value) {
            Some(scale) => Ok(scale),
            None => match value.trim().parse::<i64>() {
                Ok(bits) => scale_from_bits(bits),
                Err(_) => {
                    return self.invalid("scale", value, "expected none|down|up|both or 0-3");
                }
            },
        };
        let updated = scale.map(|scale| self.placement.with_scale(scale));
        self.accept("scale", value, updated);
    }

    fn scale_flag(
        &mut self,
        key: &'static str,
        value: &str,
        set: fn(ScalePermissions, bool) -> ScalePermissions,
    ) {
        self.note_key(key, value);
        match parse_bool(value) {
            Some(flag) => {
                let scale = set(self.placement.scale(), flag);
                self.placement = self.placement.with_scale(scale).value;
            }
            None => self.invalid(key, value, "expected true|false|1|0|yes|no|on|off"),
        }
    }

    fn accept(
        &mut self,
        key: &'static str,
        value: &str,
        updated: Result<Updated<Placement<f32>>, ConfigError>,
    ) {
        match updated {
            Ok(updated) => self.placement = updated.value,
            Err(error) => {
                log::debug!("rejected attribute {key}={value}: {error}");
                self.warnings.push(ParseWarning::Rejected {
                    key,
                    value: String::from(value),
                    error,
                });
            }
        }
    }

    fn invalid(&mut self, key: &'static str, value: &str, reason: &'static str) {
        self.warnings.push(ParseWarning::ValueInvalid {
            key,
            value: String::from(value),
            reason,
        });
    }

    /// Warn when a key repeats, or sets a weight an earlier key already set
    /// (last valid value wins).
    fn note_key(&mut self, key: &'static str, value: &str) {
        if self.seen.iter().any(|&seen| overlaps(seen, key)) {
            self.warnings.push(ParseWarning::DuplicateKey {
                key: String::from(key),
                value: String::from(value),
            });
        }
        if !self.seen.contains(&key) {
            self.seen.push(key);
        }
    }
}

/// Whether two canonical keys set any of the same values.
fn overlaps(a: &str, b: &str) -> bool {
    a == b
        || matches!(
            (a, b),
            ("weight", "xweight" | "yweight") | ("xweight" | "yweight", "weight")
        )
}

// ---- Value parsers ----

fn parse_f32(s: &str) -> Option<f32> {
    s.trim().parse::<f32>().ok()
}

fn parse_pair(s: &str) -> Option<(f32, f32)> {
    let (x, y) = s.split_once(',')?;
    Some((parse_f32(x)?, parse_f32(y)?))
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_fit_name(s: &str) -> Option<Fit> {
    match s.trim().to_ascii_lowercase().as_str() {
        "inside" => Some(Fit::Inside),
        "outside" => Some(Fit::Outside),
        "horizontal" => Some(Fit::Horizontal),
        "vertical" => Some(Fit::Vertical),
        _ => None,
    }
}

/// Numeric `scale`: negative or out-of-range values are rejected, not wrapped.
fn scale_from_bits(bits: i64) -> Result<ScalePermissions, ConfigError> {
    match u32::try_from(bits) {
        Ok(bits) => ScalePermissions::from_bits(bits),
        Err(_) => Err(ConfigError::InvalidScalePermissions { bits }),
    }
}

fn parse_scale_name(s: &str) -> Option<ScalePermissions> {
    match s.trim().to_ascii_lowercase().as_str() {
        "none" | "disabled" => Some(ScalePermissions::NONE),
        "down" | "downscale" => Some(ScalePermissions::DOWNSCALE),
        "up" | "upscale" => Some(ScalePermissions::UPSCALE),
        "both" => Some(ScalePermissions::BOTH),
        _ => None,
    }
}

// ---- Tokenizer ----

/// Split on '&', dropping a leading '?' and empty pairs.
fn split_attrs(attrs: &str) -> impl Iterator<Item = &str> {
    let attrs = attrs.strip_prefix('?').unwrap_or(attrs);
    attrs.split('&').filter(|s| !s.is_empty())
}

/// Split a single "key=value" pair on the first '='.
fn split_pair(pair: &str) -> (&str, &str) {
    pair.split_once('=').unwrap_or((pair, ""))
}

/// Percent-decode a component. Also handles '+' as space.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                decoded.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                let hi = hex_digit(bytes[i + 1]);
                let lo = hex_digit(bytes[i + 2]);
                if let (Some(hi), Some(lo)) = (hi, lo) {
                    decoded.push(hi << 4 | lo);
                    i += 3;
                } else {
                    decoded.push(b'%');
                    i += 1;
                }
            }
            b => {
                decoded.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&decoded).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

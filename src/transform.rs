// Copyright 2018 The GeoRust Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::json::JsonValue;

/// The 'transform' member of a Topology, as found in the document.
///
/// Components are kept as raw JSON values because topologies in the wild
/// carry them both as numbers and as numeric strings. [`normalize`] coerces
/// them; nothing here validates them.
///
/// [`normalize`]: TransformParams::normalize
///
/// [TopoJSON Format Specification § 2.1.2](https://github.com/topojson/topojson-specification#212-transforms)
#[derive(Clone, Debug, PartialEq)]
pub struct TransformParams {
    pub scale: [JsonValue; 2],
    pub translate: [JsonValue; 2],
}

/// A quantization transform with every component coerced to `f64`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub scale: [f64; 2],
    pub translate: [f64; 2],
}

impl TransformParams {
    /// Coerce each scale and translate component to a float.
    ///
    /// A component that is neither a number nor a parseable numeric string
    /// becomes NaN. No error is raised: the NaN flows through every
    /// coordinate computed with it, so a bad transform yields a degenerate
    /// result instead of a failure. The original parameters are left
    /// untouched; sharing a topology between calls stays safe.
    pub fn normalize(&self) -> Transform {
        Transform {
            scale: [coerce(&self.scale[0]), coerce(&self.scale[1])],
            translate: [coerce(&self.translate[0]), coerce(&self.translate[1])],
        }
    }
}

impl Transform {
    /// False when any component failed numeric coercion or overflowed.
    pub fn is_finite(&self) -> bool {
        self.scale.iter().all(|s| s.is_finite()) && self.translate.iter().all(|t| t.is_finite())
    }
}

fn coerce(value: &JsonValue) -> f64 {
    match value {
        JsonValue::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        JsonValue::String(s) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::TransformParams;
    use serde_json::json;

    fn params(scale: [serde_json::Value; 2], translate: [serde_json::Value; 2]) -> TransformParams {
        TransformParams { scale, translate }
    }

    #[test]
    fn normalize_numbers() {
        let tr = params([json!(0.5), json!(2)], [json!(-100), json!(0.25)]).normalize();
        assert_eq!(tr.scale, [0.5, 2.0]);
        assert_eq!(tr.translate, [-100.0, 0.25]);
        assert!(tr.is_finite());
    }

    #[test]
    fn normalize_numeric_strings() {
        let tr = params([json!("0.5"), json!(" 2 ")], [json!("-1e2"), json!("0")]).normalize();
        assert_eq!(tr.scale, [0.5, 2.0]);
        assert_eq!(tr.translate, [-100.0, 0.0]);
    }

    #[test]
    fn normalize_garbage_to_nan() {
        let tr = params([json!("wide"), json!(1)], [json!(null), json!([1])]).normalize();
        assert!(tr.scale[0].is_nan());
        assert_eq!(tr.scale[1], 1.0);
        assert!(tr.translate[0].is_nan());
        assert!(tr.translate[1].is_nan());
        assert!(!tr.is_finite());
    }

    #[test]
    fn normalize_does_not_touch_the_params() {
        let raw = params([json!("0.5"), json!(1)], [json!(0), json!(0)]);
        let copy = raw.clone();
        raw.normalize();
        assert_eq!(raw, copy);
    }
}

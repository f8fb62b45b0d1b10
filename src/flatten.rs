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

use std::fmt;

use log::{debug, warn};

use crate::json::{JsonObject, Serialize, Serializer};
use crate::{Arc, FlatLine, Geometry, Topology, Transform};

/// Output scaling applied after the quantization transform.
///
/// Each quantized coordinate is divided by `scale`, shifted by the offset and
/// floored to an integer. The defaults leave coordinates at the transform's
/// own resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

/// The flattened form of a topology: one integer coordinate sequence per arc
/// reference, in geometry-then-reference order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flattened {
    pub geometries: Vec<FlatLine>,
}

impl Serialize for Flattened {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = JsonObject::new();
        map.insert(
            String::from("geometries"),
            ::serde_json::to_value(&self.geometries).unwrap(),
        );
        map.serialize(serializer)
    }
}

impl fmt::Display for Flattened {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        ::serde_json::to_string(self)
            .map_err(|_| fmt::Error)
            .and_then(|s| f.write_str(&s))
    }
}

/// Decode one delta-encoded arc into absolute integer coordinates.
///
/// The running sum is accumulated in the arc's stored order; a reversed
/// traversal must be applied to the result, never to the deltas. Each summed
/// coordinate is quantized with the transform, then rescaled and floored:
///
/// ```text
/// x = floor((x_sum * scale[0] + translate[0]) / options.scale + offset_x)
/// ```
///
/// Floor rounds toward negative infinity, so a quotient of -0.5 lands on -1.
fn decode_arc(arc: &Arc, transform: &Transform, options: &RenderOptions) -> FlatLine {
    let (mut x, mut y) = (0.0_f64, 0.0_f64);
    let mut line = Vec::with_capacity(arc.len());
    for point in arc {
        x += point[0];
        y += point[1];
        let qx = x * transform.scale[0] + transform.translate[0];
        let qy = y * transform.scale[1] + transform.translate[1];
        line.push([
            (qx / options.scale + options.offset_x).floor() as i64,
            (qy / options.scale + options.offset_y).floor() as i64,
        ]);
    }
    line
}

/// Flatten a topology into renderable coordinate sequences.
///
/// Only the first object is consulted. LineStrings contribute every arc they
/// reference; Polygons contribute their outer ring only, holes are dropped by
/// design. Points and unrecognized geometry types are skipped. A negative
/// arc reference selects the complemented index and reverses the decoded
/// sequence.
///
/// Returns `None` when the topology has no transform or no objects. A
/// transform with unparseable components does not fail the call: its
/// components are NaN after normalization and every affected coordinate
/// degenerates instead (clamped to 0 by the integer conversion).
pub fn flatten(topology: &Topology, options: &RenderOptions) -> Option<Flattened> {
    let transform = topology.transform.as_ref()?.normalize();
    if !transform.is_finite() {
        warn!("transform has non-numeric components, output coordinates are degenerate");
    }
    let object = topology.objects.first()?;

    let mut geometries = vec![];
    for geometry in &object.geometries {
        let references = match geometry {
            Geometry::LineString(references) => references.as_slice(),
            // Arcs are undefined past the outer ring, so only ring 0 is kept.
            Geometry::Polygon(rings) => match rings.first() {
                Some(outer) => outer.as_slice(),
                None => continue,
            },
            Geometry::Point | Geometry::Unsupported => {
                debug!("skipping geometry without renderable arcs");
                continue;
            }
        };
        for &reference in references {
            // The complement of a negative reference is the arc to reverse.
            let (index, reversed) = if reference < 0 {
                (!reference as usize, true)
            } else {
                (reference as usize, false)
            };
            let arc = match topology.arcs.get(index) {
                Some(arc) => arc,
                None => {
                    warn!("arc reference {} is out of range, skipping", reference);
                    continue;
                }
            };
            let mut line = decode_arc(arc, &transform, options);
            if reversed {
                line.reverse();
            }
            geometries.push(line);
        }
    }
    Some(Flattened { geometries })
}

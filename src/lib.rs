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

//! Decode TopoJSON topologies into flat integer coordinate sequences.
//!
//! TopoJSON stores shared boundary arcs once, delta-encoded, and references
//! them from geometries by signed index. This crate reconstructs absolute
//! coordinates from those arcs, applying the topology's quantization
//! transform and an output scale/offset, and collects them into a single
//! ordered list of `[x, y]` integer sequences ready for rendering.
//!
//! ```
//! use topoflat::{flatten, RenderOptions, Topology};
//!
//! let topo: Topology = r#"{
//!     "type": "Topology",
//!     "transform": {"scale": [1, 1], "translate": [0, 0]},
//!     "arcs": [[[2, 2], [1, 0], [-1, 1]]],
//!     "objects": {"outline": {
//!         "type": "GeometryCollection",
//!         "geometries": [{"type": "LineString", "arcs": [0]}]
//!     }}
//! }"#.parse().unwrap();
//!
//! let flat = flatten(&topo, &RenderOptions::default()).unwrap();
//! assert_eq!(flat.geometries, vec![vec![[2, 2], [3, 2], [2, 3]]]);
//! ```

pub(crate) mod json {
    pub use serde::{Deserialize, Deserializer, Serialize, Serializer};
    pub use serde_json::Map;
    pub type JsonValue = serde_json::Value;
    pub type JsonObject = Map<String, JsonValue>;
}

/// A single delta-encoded position inside an arc.
pub type Position = Vec<f64>;

/// One delta-encoded arc: the first position is absolute, every later one is
/// an offset from the running sum of all positions before it.
pub type Arc = Vec<Position>;

/// Signed indexes into a topology's arcs. A negative index `v` selects arc
/// `(-v) - 1`, traversed in reverse.
pub type ArcIndexes = Vec<i32>;

/// An absolute, integer output coordinate.
pub type PixelCoord = [i64; 2];

/// One decoded arc as absolute integer coordinates, in traversal order.
pub type FlatLine = Vec<PixelCoord>;

mod error;
mod flatten;
mod geometry;
mod topology;
mod transform;
mod util;

pub use crate::error::Error;
pub use crate::flatten::{flatten, Flattened, RenderOptions};
pub use crate::geometry::Geometry;
pub use crate::topology::{NamedObject, Topology};
pub use crate::transform::{Transform, TransformParams};

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

use crate::json::{JsonObject, JsonValue};
use crate::{util, ArcIndexes, Error};

/// One geometry inside a topology object's collection.
///
/// Only the arc-bearing shapes carry data: a `LineString` holds its flat arc
/// index list, a `Polygon` its rings (ring 0 is the outer boundary, the rest
/// are holes). Points are recognized so they can be filtered, but their
/// coordinates are not kept since they are never rendered. Everything else,
/// including a geometry with no 'type' member at all, is `Unsupported` and
/// contributes nothing to the flattened output.
///
/// [TopoJSON Format Specification § 2.2](https://github.com/topojson/topojson-specification#22-geometry-objects)
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Point,
    LineString(ArcIndexes),
    Polygon(Vec<ArcIndexes>),
    Unsupported,
}

impl Geometry {
    pub fn from_json_object(mut object: JsonObject) -> Result<Self, Error> {
        let type_name = match object.remove("type") {
            Some(JsonValue::String(s)) => s,
            // A missing or non-string 'type' is treated like an unknown one.
            _ => return Ok(Geometry::Unsupported),
        };
        match type_name.as_str() {
            "Point" => Ok(Geometry::Point),
            "LineString" => Ok(Geometry::LineString(util::get_arc_ix(&mut object)?)),
            "Polygon" => Ok(Geometry::Polygon(util::get_arc_ix_1d(&mut object)?)),
            _ => Ok(Geometry::Unsupported),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::json::JsonObject;
    use crate::{Error, Geometry};

    fn geometry_from_str(s: &str) -> Result<Geometry, Error> {
        let object: JsonObject = serde_json::from_str(s).unwrap();
        Geometry::from_json_object(object)
    }

    #[test]
    fn decode_linestring() {
        let geometry = geometry_from_str(r#"{"type": "LineString", "arcs": [0, -2]}"#).unwrap();
        assert_eq!(geometry, Geometry::LineString(vec![0, -2]));
    }

    #[test]
    fn decode_polygon_keeps_all_rings() {
        let geometry =
            geometry_from_str(r#"{"type": "Polygon", "arcs": [[0], [1, 2]]}"#).unwrap();
        assert_eq!(geometry, Geometry::Polygon(vec![vec![0], vec![1, 2]]));
    }

    #[test]
    fn decode_point_drops_coordinates() {
        let geometry =
            geometry_from_str(r#"{"type": "Point", "coordinates": [4000, 5000]}"#).unwrap();
        assert_eq!(geometry, Geometry::Point);
    }

    #[test]
    fn decode_linestring_without_arcs() {
        let result = geometry_from_str(r#"{"type": "LineString", "coordinates": [0]}"#);
        assert_eq!(result, Err(Error::ExpectedProperty(String::from("arcs"))));
    }

    #[test]
    fn unknown_and_missing_types_are_unsupported() {
        for json in [
            r#"{"type": "MultiPolygon", "arcs": [[[0]]]}"#,
            r#"{"type": 7, "arcs": [0]}"#,
            r#"{"arcs": [0]}"#,
        ] {
            assert_eq!(geometry_from_str(json).unwrap(), Geometry::Unsupported);
        }
    }

    #[test]
    fn non_integer_arc_index() {
        let result = geometry_from_str(r#"{"type": "LineString", "arcs": [0.5]}"#);
        assert_eq!(result, Err(Error::Expectedi32Value));
    }
}

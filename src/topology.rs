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

use std::str::FromStr;

use crate::json::{Deserialize, Deserializer, JsonObject, JsonValue};
use crate::{util, Arc, Error, Geometry, TransformParams};

/// One member of the 'objects' member of a Topology.
///
/// [TopoJSON Format Specification § 2.1.5](https://github.com/topojson/topojson-specification#215-objects)
#[derive(Clone, Debug, PartialEq)]
pub struct NamedObject {
    pub name: String,
    pub geometries: Vec<Geometry>,
}

/// Topology object.
///
/// The 'arcs' and 'objects' members must be present; 'transform' may be
/// absent, in which case [`flatten`](crate::flatten()) reports no result.
/// Other members of the document ('type', 'bbox', foreign members) are
/// ignored.
///
/// [TopoJSON Format Specification § 2.1](https://github.com/topojson/topojson-specification#21-topology-objects)
#[derive(Clone, Debug, PartialEq)]
pub struct Topology {
    pub transform: Option<TransformParams>,
    pub arcs: Vec<Arc>,
    pub objects: Vec<NamedObject>,
}

impl Topology {
    pub fn from_json_object(mut object: JsonObject) -> Result<Self, Error> {
        Ok(Topology {
            transform: util::get_transform_params(&mut object)?,
            arcs: util::get_arcs_position(&mut object)?,
            objects: util::get_objects(&mut object)?,
        })
    }

    pub fn from_json_value(value: JsonValue) -> Result<Self, Error> {
        match value {
            JsonValue::Object(object) => Topology::from_json_object(object),
            _ => Err(Error::ExpectedObjectValue),
        }
    }
}

impl FromStr for Topology {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = serde_json::from_str(s).map_err(|_| Error::MalformedJson)?;
        Topology::from_json_value(value)
    }
}

impl<'de> Deserialize<'de> for Topology {
    fn deserialize<D>(deserializer: D) -> Result<Topology, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error as SerdeError;

        let val = JsonObject::deserialize(deserializer)?;

        Topology::from_json_object(val).map_err(|e| D::Error::custom(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, Geometry, Topology};
    use serde_json::json;

    #[test]
    fn decode_simple_topology_from_spec() {
        let topo_str = r#"{
            "type": "Topology",
            "objects": {
                "example": {
                    "type": "GeometryCollection",
                    "geometries": [
                        {"type": "Point", "properties": {"prop0": "value0"}, "coordinates": [102, 0.5]},
                        {"type": "LineString", "properties": {"prop0": "value0"}, "arcs": [0]},
                        {"type": "Polygon", "properties": {"prop0": "value0"}, "arcs": [[-2]]}
                    ]
                }
            },
            "arcs": [
                [[102, 0], [103, 1], [104, 0], [105, 1]],
                [[100, 0], [101, 0], [101, 1], [100, 1], [100, 0]]
            ]
        }"#;
        let topo: Topology = topo_str.parse().unwrap();

        assert!(topo.transform.is_none());
        assert_eq!(topo.arcs.len(), 2);
        assert_eq!(topo.arcs[1].len(), 5);
        assert_eq!(topo.objects.len(), 1);
        assert_eq!(topo.objects[0].name, "example");
        assert_eq!(
            topo.objects[0].geometries,
            vec![
                Geometry::Point,
                Geometry::LineString(vec![0]),
                Geometry::Polygon(vec![vec![-2]]),
            ]
        );
    }

    #[test]
    fn decode_transform_keeps_raw_components() {
        let topo: Topology = r#"{
            "transform": {"scale": ["0.5", 1], "translate": [100, 0]},
            "arcs": [],
            "objects": {}
        }"#
        .parse()
        .unwrap();

        let params = topo.transform.unwrap();
        assert_eq!(params.scale, [json!("0.5"), json!(1)]);
        assert_eq!(params.translate, [json!(100), json!(0)]);
    }

    #[test]
    fn decode_object_without_geometries() {
        let topo: Topology = r#"{
            "arcs": [],
            "objects": {"empty": {"type": "GeometryCollection"}}
        }"#
        .parse()
        .unwrap();
        assert_eq!(topo.objects[0].geometries, vec![]);
    }

    #[test]
    fn decode_invalid_topologies() {
        fn expect_err(json: &str, expected: Error) {
            assert_eq!(json.parse::<Topology>(), Err(expected));
        }
        expect_err("not json", Error::MalformedJson);
        expect_err("[1, 2]", Error::ExpectedObjectValue);
        expect_err(r#"{"objects": {}}"#, Error::TopologyExpectedArcs);
        expect_err(r#"{"arcs": []}"#, Error::TopologyExpectedObjects);
        expect_err(
            r#"{"transform": {"translate": [0, 0]}, "arcs": [], "objects": {}}"#,
            Error::TransformExpectedScale,
        );
        expect_err(
            r#"{"transform": {"scale": [1, 1]}, "arcs": [], "objects": {}}"#,
            Error::TransformExpectedTranslate,
        );
        expect_err(
            r#"{"transform": {"scale": [1], "translate": [0, 0]}, "arcs": [], "objects": {}}"#,
            Error::ScaleExpectedTwoValues,
        );
        expect_err(
            r#"{"arcs": [[[0]]], "objects": {}}"#,
            Error::PositionExpectedTwoValues,
        );
    }

    #[test]
    fn deserialize_with_serde() {
        let topo: Topology = serde_json::from_value(json!({
            "arcs": [[[0, 0], [1, 1]]],
            "objects": {"a": {"geometries": []}}
        }))
        .unwrap();
        assert_eq!(topo.arcs, vec![vec![vec![0.0, 0.0], vec![1.0, 1.0]]]);
    }
}

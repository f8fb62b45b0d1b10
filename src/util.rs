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
use crate::{Arc, ArcIndexes, Error, Geometry, NamedObject, Position, TransformParams};

pub fn expect_f64(value: &JsonValue) -> Result<f64, Error> {
    match value.as_f64() {
        Some(v) => Ok(v),
        None => Err(Error::ExpectedF64Value),
    }
}

pub fn expect_i32(value: &JsonValue) -> Result<i32, Error> {
    match value.as_i64() {
        Some(v) => Ok(v as i32),
        None => Err(Error::Expectedi32Value),
    }
}

pub fn expect_array(value: &JsonValue) -> Result<&Vec<JsonValue>, Error> {
    match value.as_array() {
        Some(v) => Ok(v),
        None => Err(Error::ExpectedArrayValue),
    }
}

fn expect_property(obj: &mut JsonObject, name: &'static str) -> Result<JsonValue, Error> {
    match obj.remove(name) {
        Some(v) => Ok(v),
        None => Err(Error::ExpectedProperty(name.to_string())),
    }
}

fn expect_owned_object(value: JsonValue) -> Result<JsonObject, Error> {
    match value {
        JsonValue::Object(o) => Ok(o),
        _ => Err(Error::ExpectedObjectValue),
    }
}

/// Retrieve the 'arcs' member of a Topology.
///
/// Used by Topology.
pub fn get_arcs_position(object: &mut JsonObject) -> Result<Vec<Arc>, Error> {
    match object.remove("arcs") {
        Some(a) => json_to_arc_positions(&a),
        None => Err(Error::TopologyExpectedArcs),
    }
}

/// Retrieve an ArcIndexes from the value of the 'arcs' member of a Geometry.
///
/// Used by Geometry::LineString
pub fn get_arc_ix(object: &mut JsonObject) -> Result<ArcIndexes, Error> {
    let arc_indexes_json = expect_property(object, "arcs")?;
    json_to_arc_indexes(&arc_indexes_json)
}

/// Retrieve a one dimensional Vec of ArcIndexes from the value
/// of the 'arcs' member of a Geometry.
///
/// Used by Geometry::Polygon
pub fn get_arc_ix_1d(object: &mut JsonObject) -> Result<Vec<ArcIndexes>, Error> {
    let arc_indexes_json = expect_property(object, "arcs")?;
    let arc_array = expect_array(&arc_indexes_json)?;
    let mut arc_ixs = Vec::with_capacity(arc_array.len());
    for item in arc_array {
        arc_ixs.push(json_to_arc_indexes(item)?);
    }
    Ok(arc_ixs)
}

/// Retrieve the quantization parameters of the Topology if any.
///
/// The components of 'scale' and 'translate' are kept as raw JSON values;
/// numeric coercion happens later, in [`TransformParams::normalize`].
///
/// Used by Topology
pub fn get_transform_params(object: &mut JsonObject) -> Result<Option<TransformParams>, Error> {
    let tr_json = match object.remove("transform") {
        None => return Ok(None),
        Some(t) => t,
    };
    let mut tr_obj = expect_owned_object(tr_json)?;
    let scale = match tr_obj.remove("scale") {
        Some(s) => json_to_component_pair(s, Error::ScaleExpectedTwoValues)?,
        None => return Err(Error::TransformExpectedScale),
    };
    let translate = match tr_obj.remove("translate") {
        Some(t) => json_to_component_pair(t, Error::TranslateExpectedTwoValues)?,
        None => return Err(Error::TransformExpectedTranslate),
    };
    Ok(Some(TransformParams { scale, translate }))
}

fn json_to_component_pair(json: JsonValue, too_short: Error) -> Result<[JsonValue; 2], Error> {
    let array = match json {
        JsonValue::Array(a) => a,
        _ => return Err(Error::ExpectedArrayValue),
    };
    let mut iter = array.into_iter();
    match (iter.next(), iter.next()) {
        (Some(a), Some(b)) => Ok([a, b]),
        _ => Err(too_short),
    }
}

/// Retrieve the 'objects' member of a Topology.
///
/// Used by Topology
pub fn get_objects(object: &mut JsonObject) -> Result<Vec<NamedObject>, Error> {
    match object.remove("objects") {
        Some(JsonValue::Object(objects_json)) => {
            let mut res = Vec::with_capacity(objects_json.len());
            for (name, value) in objects_json {
                let obj = expect_owned_object(value)?;
                res.push(NamedObject {
                    name,
                    geometries: get_geometries(obj)?,
                });
            }
            Ok(res)
        }
        Some(_) | None => Err(Error::TopologyExpectedObjects),
    }
}

/// Retrieve the geometries contained in one named object.
///
/// An object without a 'geometries' array contributes an empty collection
/// rather than an error.
fn get_geometries(mut object: JsonObject) -> Result<Vec<Geometry>, Error> {
    let geometries_array = match object.remove("geometries") {
        Some(JsonValue::Array(a)) => a,
        _ => return Ok(vec![]),
    };
    let mut geometries = Vec::with_capacity(geometries_array.len());
    for json in geometries_array {
        let obj = expect_owned_object(json)?;
        geometries.push(Geometry::from_json_object(obj)?);
    }
    Ok(geometries)
}

fn json_to_position(json: &JsonValue) -> Result<Position, Error> {
    let coords_array = expect_array(json)?;
    if coords_array.len() < 2 {
        return Err(Error::PositionExpectedTwoValues);
    }
    let mut coords = Vec::with_capacity(coords_array.len());
    for position in coords_array {
        coords.push(expect_f64(position)?);
    }
    Ok(coords)
}

fn json_to_arc_indexes(json: &JsonValue) -> Result<ArcIndexes, Error> {
    let arc_array = expect_array(json)?;
    let mut arc_ixs = Vec::with_capacity(arc_array.len());
    for item in arc_array {
        arc_ixs.push(expect_i32(item)?);
    }
    Ok(arc_ixs)
}

fn json_to_arc_positions(json: &JsonValue) -> Result<Vec<Arc>, Error> {
    let coords_array = expect_array(json)?;
    let mut arcs = Vec::with_capacity(coords_array.len());
    for item in coords_array {
        let positions_array = expect_array(item)?;
        let mut arc = Vec::with_capacity(positions_array.len());
        for position in positions_array {
            arc.push(json_to_position(position)?);
        }
        arcs.push(arc);
    }
    Ok(arcs)
}

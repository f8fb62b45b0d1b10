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

/// Error when reading a Topology from JSON.
///
/// These only cover presence and shape checks on the input document. The
/// decode pipeline itself never fails: missing transforms and empty object
/// maps yield a "no result" sentinel, and non-numeric transform components
/// poison coordinates as NaN instead of raising.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    TopologyExpectedObjects,
    TopologyExpectedArcs,
    TransformExpectedScale,
    TransformExpectedTranslate,
    ScaleExpectedTwoValues,
    TranslateExpectedTwoValues,
    PositionExpectedTwoValues,
    MalformedJson,

    ExpectedProperty(String),
    Expectedi32Value,
    ExpectedF64Value,
    ExpectedArrayValue,
    ExpectedObjectValue,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::TopologyExpectedObjects => {
                write!(f, "Expected member with the name 'objects' in Topology.")
            }
            Error::TopologyExpectedArcs => {
                write!(f, "Expected member with the name 'arcs' in Topology.")
            }
            Error::TransformExpectedScale => {
                write!(f, "Transform must have a member with the name 'scale'.")
            }
            Error::TransformExpectedTranslate => {
                write!(f, "Transform must have a member with the name 'translate'.")
            }
            Error::ScaleExpectedTwoValues => {
                write!(f, "The 'scale' member must be a two-element array.")
            }
            Error::TranslateExpectedTwoValues => {
                write!(f, "The 'translate' member must be a two-element array.")
            }
            Error::PositionExpectedTwoValues => {
                write!(f, "Each arc position must have at least two elements.")
            }
            Error::MalformedJson => write!(f, "Encountered malformed JSON."),
            Error::ExpectedProperty(ref prop_name) => {
                write!(f, "Expected TopoJSON property '{}'.", prop_name)
            }
            Error::Expectedi32Value => write!(f, "Expected an integer arc index."),
            Error::ExpectedF64Value => write!(f, "Expected a floating-point value."),
            Error::ExpectedArrayValue => write!(f, "Expected an array."),
            Error::ExpectedObjectValue => write!(f, "Expected an object."),
        }
    }
}

impl std::error::Error for Error {}

//! StructureDefinition file loading and shape validation.
//!
//! The loader is the boundary where precondition violations are reported:
//! a document that does not minimally look like a StructureDefinition is
//! rejected here, before any reviewer runs. Anything beyond the minimal
//! shape is data: a missing or unparseable cardinality bound is carried
//! into the model as missing and degrades to an `unknown` result.

use std::path::Path;

use fhir_match_core::errors::{MatchError, Result};
use fhir_match_core::model::{CardinalityMax, Element, Profile};
use serde_json::Value;

/// Load a StructureDefinition JSON file and convert it to a [`Profile`].
pub fn load_profile(path: &Path) -> Result<Profile> {
    let is_json = path.extension().and_then(|e| e.to_str()) == Some("json");
    if !is_json || !path.is_file() {
        return Err(MatchError::UnsupportedResource {
            path: path.display().to_string(),
        });
    }

    let text = std::fs::read_to_string(path).map_err(|source| MatchError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let value: Value = serde_json::from_str(&text).map_err(|source| MatchError::InvalidJson {
        path: path.display().to_string(),
        source,
    })?;
    profile_from_value(&value)
}

/// Convert parsed StructureDefinition JSON to a [`Profile`].
///
/// Requires an object with a string `id`; `type`, `fhirVersion`, and
/// `snapshot.element` are optional. Each snapshot element must be an
/// object with a string `path`; its `id` falls back to the path when
/// absent.
pub fn profile_from_value(value: &Value) -> Result<Profile> {
    let object = value
        .as_object()
        .ok_or_else(|| invalid("resource JSON root must be an object"))?;
    let id = object
        .get("id")
        .and_then(Value::as_str)
        .ok_or_else(|| invalid("resource must have a string `id`"))?;

    let mut profile = Profile::new(id);
    profile.type_ = object.get("type").and_then(Value::as_str).map(str::to_string);
    profile.fhir_version = object
        .get("fhirVersion")
        .and_then(Value::as_str)
        .map(str::to_string);

    if let Some(elements) = object
        .get("snapshot")
        .and_then(|s| s.get("element"))
        .and_then(Value::as_array)
    {
        profile.elements = elements
            .iter()
            .map(element_from_value)
            .collect::<Result<Vec<_>>>()?;
    }

    Ok(profile)
}

fn element_from_value(value: &Value) -> Result<Element> {
    let object = value
        .as_object()
        .ok_or_else(|| invalid("snapshot element must be an object"))?;
    let path = object
        .get("path")
        .and_then(Value::as_str)
        .ok_or_else(|| invalid("snapshot element must have a string `path`"))?;
    let id = object.get("id").and_then(Value::as_str).unwrap_or(path);

    let mut element = Element::new(id, path);
    element.min = object
        .get("min")
        .and_then(Value::as_u64)
        .and_then(|min| u32::try_from(min).ok());
    element.max = object.get("max").and_then(|raw| match raw {
        Value::String(text) => match text.parse::<CardinalityMax>() {
            Ok(max) => Some(max),
            Err(_) => {
                tracing::warn!(
                    element = id,
                    max = text.as_str(),
                    "element has an unparseable max cardinality; treating it as missing"
                );
                None
            }
        },
        Value::Number(_) => raw
            .as_u64()
            .and_then(|max| u32::try_from(max).ok())
            .map(CardinalityMax::Count),
        _ => None,
    });
    element.type_profiles = object
        .get("type")
        .and_then(Value::as_array)
        .and_then(|types| types.first())
        .and_then(|first| first.get("profile"))
        .and_then(Value::as_array)
        .map(|profiles| {
            profiles
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(element)
}

fn invalid(reason: &str) -> MatchError {
    MatchError::InvalidResource {
        reason: reason.to_string(),
    }
}

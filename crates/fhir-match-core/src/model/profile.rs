//! Profile domain model
//!
//! A Profile describes the set of data instances it permits: an identifier,
//! a base resource type, the FHIR version it was authored against, and a
//! flat list of element constraints (the expanded snapshot of a
//! StructureDefinition). Profiles are read-only inputs: the reviewers never
//! mutate them.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A schema-constraint document under comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique identifier of the profile
    pub id: String,

    /// Base resource type the profile constrains (e.g., "Patient")
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub type_: Option<String>,

    /// FHIR version the profile was authored against (e.g., "4.0.1")
    #[serde(
        rename = "fhirVersion",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub fhir_version: Option<String>,

    /// Expanded element constraints, in document order
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Profile {
    /// Create a profile with no type, version, or elements.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            type_: None,
            fhir_version: None,
            elements: Vec::new(),
        }
    }

    /// All elements sharing the given structural path, in document order.
    ///
    /// Sibling slices of the same element repeat a path, so this may return
    /// more than one element.
    pub fn elements_at_path<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a Element> {
        self.elements.iter().filter(move |e| e.path == path)
    }

    /// The first element with the given id, if any.
    ///
    /// Element ids are unique within one profile, so "first" is "only" for
    /// well-formed input.
    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }
}

/// One constraint node within a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Dotted structural identifier, unique within one profile
    /// (e.g., `Patient.identifier` or `Patient.extension:Race`)
    pub id: String,

    /// Type-qualified structural path; repeats across sibling slices
    pub path: String,

    /// Minimum occurrence count
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub min: Option<u32>,

    /// Maximum occurrence count
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max: Option<CardinalityMax>,

    /// Profile URIs constraining the element's declared type (relevant to
    /// extension matching)
    #[serde(
        rename = "typeProfiles",
        skip_serializing_if = "Vec::is_empty",
        default
    )]
    pub type_profiles: Vec<String>,
}

impl Element {
    /// Create an element with no cardinality or type-profile constraints.
    pub fn new(id: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            min: None,
            max: None,
            type_profiles: Vec::new(),
        }
    }
}

/// The upper bound of a cardinality interval.
///
/// `Unbounded` is a tagged value distinct from every finite count and from
/// a missing bound (`Option::None` on [`Element::max`]). The derived
/// ordering places `Unbounded` above every `Count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CardinalityMax {
    /// A finite occurrence count
    Count(u32),
    /// No upper limit (the FHIR wildcard `*`)
    Unbounded,
}

impl CardinalityMax {
    /// Add two upper bounds. `Unbounded` absorbs anything, including
    /// another `Unbounded`; finite counts saturate rather than wrap.
    pub fn saturating_add(self, other: CardinalityMax) -> CardinalityMax {
        match (self, other) {
            (CardinalityMax::Count(a), CardinalityMax::Count(b)) => {
                CardinalityMax::Count(a.saturating_add(b))
            }
            _ => CardinalityMax::Unbounded,
        }
    }
}

impl fmt::Display for CardinalityMax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardinalityMax::Count(n) => write!(f, "{}", n),
            CardinalityMax::Unbounded => write!(f, "*"),
        }
    }
}

impl FromStr for CardinalityMax {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "*" | "unbounded" => Ok(CardinalityMax::Unbounded),
            _ => s
                .parse::<u32>()
                .map(CardinalityMax::Count)
                .map_err(|_| format!("invalid cardinality max: {:?}", s)),
        }
    }
}

impl Serialize for CardinalityMax {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CardinalityMax::Count(n) => serializer.serialize_u32(*n),
            CardinalityMax::Unbounded => serializer.serialize_str("*"),
        }
    }
}

impl<'de> Deserialize<'de> for CardinalityMax {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Count(u32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Count(n) => Ok(CardinalityMax::Count(n)),
            Raw::Text(s) => s.parse().map_err(de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cardinality_max_ordering() {
        assert!(CardinalityMax::Count(0) < CardinalityMax::Count(1));
        assert!(CardinalityMax::Count(u32::MAX) < CardinalityMax::Unbounded);
        assert_eq!(CardinalityMax::Unbounded, CardinalityMax::Unbounded);
    }

    #[test]
    fn test_cardinality_max_saturating_add() {
        assert_eq!(
            CardinalityMax::Count(1).saturating_add(CardinalityMax::Count(3)),
            CardinalityMax::Count(4)
        );
        assert_eq!(
            CardinalityMax::Count(1).saturating_add(CardinalityMax::Unbounded),
            CardinalityMax::Unbounded
        );
        assert_eq!(
            CardinalityMax::Unbounded.saturating_add(CardinalityMax::Unbounded),
            CardinalityMax::Unbounded
        );
        assert_eq!(
            CardinalityMax::Count(u32::MAX).saturating_add(CardinalityMax::Count(1)),
            CardinalityMax::Count(u32::MAX)
        );
    }

    #[test]
    fn test_cardinality_max_parse() {
        assert_eq!("*".parse(), Ok(CardinalityMax::Unbounded));
        assert_eq!("unbounded".parse(), Ok(CardinalityMax::Unbounded));
        assert_eq!("3".parse(), Ok(CardinalityMax::Count(3)));
        assert!("three".parse::<CardinalityMax>().is_err());
        assert!("-1".parse::<CardinalityMax>().is_err());
    }

    #[test]
    fn test_cardinality_max_serde() {
        assert_eq!(
            serde_json::to_value(CardinalityMax::Count(2)).unwrap(),
            json!(2)
        );
        assert_eq!(
            serde_json::to_value(CardinalityMax::Unbounded).unwrap(),
            json!("*")
        );
        let from_num: CardinalityMax = serde_json::from_value(json!(5)).unwrap();
        assert_eq!(from_num, CardinalityMax::Count(5));
        let from_star: CardinalityMax = serde_json::from_value(json!("*")).unwrap();
        assert_eq!(from_star, CardinalityMax::Unbounded);
        let from_digits: CardinalityMax = serde_json::from_value(json!("4")).unwrap();
        assert_eq!(from_digits, CardinalityMax::Count(4));
    }

    #[test]
    fn test_profile_element_lookup() {
        let mut profile = Profile::new("simple-patient");
        profile.elements.push(Element::new("Patient", "Patient"));
        profile
            .elements
            .push(Element::new("Patient.extension:One", "Patient.extension"));
        profile
            .elements
            .push(Element::new("Patient.extension:Two", "Patient.extension"));

        assert_eq!(
            profile.element_by_id("Patient").map(|e| e.path.as_str()),
            Some("Patient")
        );
        assert!(profile.element_by_id("Patient.name").is_none());
        assert_eq!(profile.elements_at_path("Patient.extension").count(), 2);
    }

    #[test]
    fn test_profile_serde_round_trip() {
        let profile = Profile {
            id: "simple-patient".to_string(),
            type_: Some("Patient".to_string()),
            fhir_version: Some("4.0.1".to_string()),
            elements: vec![Element {
                id: "Patient.identifier".to_string(),
                path: "Patient.identifier".to_string(),
                min: Some(0),
                max: Some(CardinalityMax::Unbounded),
                type_profiles: Vec::new(),
            }],
        };
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["type"], json!("Patient"));
        assert_eq!(value["fhirVersion"], json!("4.0.1"));
        assert_eq!(value["elements"][0]["max"], json!("*"));
        let back: Profile = serde_json::from_value(value).unwrap();
        assert_eq!(back, profile);
    }
}

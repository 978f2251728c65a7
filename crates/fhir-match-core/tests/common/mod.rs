use fhir_match_core::model::{CardinalityMax, Element, Profile};
use fhir_match_core::review::Review;

/// Create a profile with the given type and FHIR version and no elements.
#[allow(dead_code)]
pub fn profile(id: &str, type_: &str, fhir_version: &str) -> Profile {
    let mut profile = Profile::new(id);
    profile.type_ = Some(type_.to_string());
    profile.fhir_version = Some(fhir_version.to_string());
    profile
}

/// Create an element whose path equals its id, with the given bounds.
#[allow(dead_code)]
pub fn element(id: &str, min: u32, max: &str) -> Element {
    element_at(id, id, min, max)
}

/// Create an element with distinct id and path (e.g. a named slice).
#[allow(dead_code)]
pub fn element_at(id: &str, path: &str, min: u32, max: &str) -> Element {
    let mut element = Element::new(id, path);
    element.min = Some(min);
    element.max = Some(max.parse::<CardinalityMax>().unwrap());
    element
}

/// Create an extension slice carrying type-profile constraints.
#[allow(dead_code)]
pub fn extension_slot(id: &str, path: &str, min: u32, max: &str, profiles: &[&str]) -> Element {
    let mut element = element_at(id, path, min, max);
    element.type_profiles = profiles.iter().map(|p| p.to_string()).collect();
    element
}

/// A small Patient profile with a handful of ordinary elements.
#[allow(dead_code)]
pub fn simple_patient(id: &str) -> Profile {
    let mut p = profile(id, "Patient", "4.0.1");
    p.elements = vec![
        element("Patient", 0, "*"),
        element("Patient.identifier", 0, "*"),
        element("Patient.name", 0, "*"),
        element("Patient.gender", 0, "1"),
        element("Patient.communication", 0, "*"),
    ];
    p
}

/// A Patient profile constraining two extension slots: `ExtA` on the
/// Patient itself and `ExtB` on Patient.communication.
#[allow(dead_code)]
pub fn extension_patient(id: &str) -> Profile {
    let mut p = profile(id, "Patient", "4.0.1");
    p.elements = vec![
        element("Patient", 0, "*"),
        element_at("Patient.extension", "Patient.extension", 0, "*"),
        extension_slot(
            "Patient.extension:ExtA",
            "Patient.extension",
            0,
            "1",
            &["http://example.org/StructureDefinition/ExtensionA"],
        ),
        element("Patient.communication", 0, "*"),
        element_at(
            "Patient.communication.extension",
            "Patient.communication.extension",
            0,
            "*",
        ),
        extension_slot(
            "Patient.communication.extension:ExtB",
            "Patient.communication.extension",
            0,
            "1",
            &["http://example.org/StructureDefinition/ExtensionB"],
        ),
        element_at("Patient.modifierExtension", "Patient.modifierExtension", 0, "*"),
    ];
    p
}

/// Find the one review whose A or B side refers to the given document and
/// element path. Panics if more than one matches.
#[allow(dead_code)]
pub fn get_review<'a>(reviews: &'a [Review], id: &str, path: &str) -> Option<&'a Review> {
    let matches: Vec<&Review> = reviews
        .iter()
        .filter(|r| {
            (r.a.id == id && r.a.path.as_deref() == Some(path))
                || (r.b.id == id && r.b.path.as_deref() == Some(path))
        })
        .collect();
    assert!(
        matches.len() <= 1,
        "expected at most one review for {id} {path}, found {}",
        matches.len()
    );
    matches.first().copied()
}

/// Mutate the element with the given id.
#[allow(dead_code)]
pub fn edit_element(profile: &mut Profile, id: &str, edit: impl FnOnce(&mut Element)) {
    let element = profile
        .elements
        .iter_mut()
        .find(|e| e.id == id)
        .unwrap_or_else(|| panic!("no element {id}"));
    edit(element);
}

/// Remove the element with the given id.
#[allow(dead_code)]
pub fn remove_element(profile: &mut Profile, id: &str) {
    profile.elements.retain(|e| e.id != id);
}

use super::*;

fn lion_json() -> &'static str {
    r#"{"name":"Lion","taxonomy":{"kingdom":"Animalia"},"characteristics":{"habitat":"Savannah","diet":"Carnivore","top_speed":"80 km/h"}}"#
}

#[test]
fn animal_decodes_and_ignores_unknown_fields() {
    let animal: Animal = serde_json::from_str(lion_json()).unwrap();
    assert_eq!(animal.name, "Lion");
    assert_eq!(animal.characteristics.len(), 3);
    assert!(animal.rating.is_none());
}

#[test]
fn animal_attributes_keep_delivery_order() {
    let animal: Animal = serde_json::from_str(lion_json()).unwrap();
    assert_eq!(animal.attributes(), vec!["habitat", "diet", "top_speed"]);
}

#[test]
fn animal_without_characteristics_decodes_empty() {
    let animal: Animal = serde_json::from_str(r#"{"name":"Okapi"}"#).unwrap();
    assert!(animal.characteristics.is_empty());
    assert!(animal.attributes().is_empty());
}

#[test]
fn animal_without_name_is_rejected() {
    assert!(serde_json::from_str::<Animal>(r#"{"characteristics":{}}"#).is_err());
}

#[test]
fn animal_keeps_stored_rating() {
    let animal: Animal = serde_json::from_str(r#"{"name":"Tiger","characteristics":{},"rating":3}"#).unwrap();
    assert_eq!(animal.rating, Some(3));
}

#[test]
fn animal_serializes_without_absent_rating() {
    let animal = Animal::new("Tiger", Characteristics::new());
    assert_eq!(serde_json::to_string(&animal).unwrap(), r#"{"name":"Tiger","characteristics":{}}"#);
}

#[test]
fn characteristic_text_unquotes_strings() {
    let animal: Animal = serde_json::from_str(
        r#"{"name":"Lion","characteristics":{"habitat":"Savannah","lifespan":15}}"#,
    )
    .unwrap();
    assert_eq!(animal.characteristic_text("habitat").as_deref(), Some("Savannah"));
    assert_eq!(animal.characteristic_text("lifespan").as_deref(), Some("15"));
    assert!(animal.characteristic_text("diet").is_none());
}

#[test]
fn fetch_error_messages() {
    assert_eq!(FetchError::Status { status: 401 }.to_string(), "API response error: status 401");
    assert_eq!(FetchError::NotConfigured.to_string(), "animal API is not configured");
}

use patchwork::{PatchConfig, PatchErrorKind, PatchMode};
use patchwork_demo::{Gender, InMemoryPersons, Person, PersonService, ServiceError};
use serde_json::json;

fn service() -> PersonService<InMemoryPersons> {
    PersonService::new(InMemoryPersons::seeded())
}

#[test]
fn patch_updates_supplied_fields_only() {
    let mut service = service();

    let patched = service
        .patch(1, &json!({ "firstname": "Joan", "age": 24 }))
        .unwrap()
        .cloned();

    assert_eq!(
        patched,
        Some(Person::new(1, "Joan", "Doe", "Nyhavn 1", "1051", "Copenhagen K", 24))
    );
    assert_eq!(service.get_by_id(2).map(|p| p.firstname.as_str()), Some("John"));
}

#[test]
fn patch_never_changes_the_identifier() {
    let mut service = service();

    let patched = service
        .patch(1, &json!({ "id": 99, "firstname": "Joan" }))
        .unwrap()
        .cloned()
        .unwrap();

    assert_eq!(patched.id, 1);
    assert_eq!(patched.firstname, "Joan");
    assert!(service.get_by_id(99).is_none());
}

#[test]
fn patch_of_unknown_identifier_is_none() {
    let mut service = service();

    assert!(service.patch(42, &json!({ "age": 1 })).unwrap().is_none());
}

#[test]
fn patch_sets_camel_case_and_enum_fields() {
    let mut service = service();

    let patched = service
        .patch(3, &json!({ "postalCode": "5200", "gender": "male" }))
        .unwrap()
        .cloned()
        .unwrap();

    assert_eq!(patched.postal_code, "5200");
    assert_eq!(patched.gender, Some(Gender::Male));
}

#[test]
fn failed_patch_is_partial_in_place_and_discarded_when_atomic() {
    let document = json!({ "city": "Aarhus", "age": "old" });

    let mut in_place = service();
    let err = in_place.patch(2, &document).unwrap_err();
    assert!(matches!(
        &err,
        ServiceError::Patch(patch) if patch.kind() == PatchErrorKind::ConversionFailure
    ));
    assert_eq!(in_place.get_by_id(2).map(|p| p.city.as_str()), Some("Aarhus"));

    let mut atomic = PersonService::with_config(
        InMemoryPersons::seeded(),
        PatchConfig::new().with_mode(PatchMode::Atomic),
    );
    assert!(atomic.patch(2, &document).is_err());
    assert_eq!(
        atomic.get_by_id(2).map(|p| p.city.as_str()),
        Some("Copenhagen K")
    );
}

#[test]
fn post_assigns_the_next_identifier() {
    let mut service = service();
    let person = Person::new(0, "Karen", "Blixen", "Strandvej 111", "2960", "Rungsted", 77);

    let stored = service.post(person).unwrap().clone();

    assert_eq!(stored.id, 4);
    assert_eq!(service.list().len(), 4);
    assert_eq!(service.get_by_id(4), Some(&stored));
}

#[test]
fn post_rejects_preassigned_identifiers() {
    let mut service = service();
    let person = Person::new(9, "Karen", "Blixen", "", "", "", 77);

    let err = service.post(person).unwrap_err();

    assert!(matches!(err, ServiceError::IdentifierAssigned { id: 9 }));
    assert_eq!(service.list().len(), 3);
}

#[test]
fn persons_serialize_with_camel_case_names() {
    let service = service();

    let value = serde_json::to_value(service.get_by_id(3).unwrap()).unwrap();

    assert_eq!(value["postalCode"], json!("5000"));
    assert_eq!(value["firstname"], json!("Hans-Christian"));
    assert!(value.get("gender").is_none());
}

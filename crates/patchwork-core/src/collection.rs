//! Array and collection merger.
//!
//! Fixed arrays (`Box<[E]>`) are rebuilt from the document and replace the
//! old value. Ordered collections (`Vec`, `VecDeque`) keep their allocation
//! but are cleared and repopulated from object elements only, whatever their
//! element type.

use crate::{
    error::PatchError,
    node::{NodeKind, Value},
    traits::{FieldKind, FieldShape, PatchField, type_label},
    walker::Walker,
};
use std::collections::VecDeque;
use tracing::debug;

// ---------------------------------------------------------------------------
// Fixed arrays
// ---------------------------------------------------------------------------

impl<E: PatchField> PatchField for Box<[E]> {
    fn kind() -> FieldKind {
        FieldKind::required(FieldShape::Array)
    }

    fn instantiate() -> Option<Self> {
        Some(Self::default())
    }

    fn merge_array(&mut self, items: &[Value], walker: &mut Walker<'_>) -> Result<(), PatchError> {
        let replaced = items
            .iter()
            .enumerate()
            .map(|(index, node)| element::<E>(node, walker).map_err(|err| err.with_index(index)))
            .collect::<Result<Self, _>>()?;

        *self = replaced;

        Ok(())
    }
}

// Builds one array element the way a leaf or nested object would be built.
fn element<E: PatchField>(node: &Value, walker: &mut Walker<'_>) -> Result<E, PatchError> {
    match node {
        Value::Null => E::from_null(),
        Value::Object(fields) => {
            let mut item = E::instantiate().ok_or(PatchError::UnsupportedArrayType {
                type_name: type_label::<E>(),
            })?;
            item.merge_object(fields, walker)?;

            Ok(item)
        }
        Value::Array(_) => Err(PatchError::UnsupportedArrayType {
            type_name: type_label::<E>(),
        }),
        scalar => E::from_scalar(scalar),
    }
}

// ---------------------------------------------------------------------------
// Ordered collections
// ---------------------------------------------------------------------------

impl<N: PatchField> PatchField for Vec<N> {
    fn kind() -> FieldKind {
        FieldKind::required(FieldShape::Collection)
    }

    fn instantiate() -> Option<Self> {
        Some(Self::new())
    }

    fn merge_array(&mut self, items: &[Value], walker: &mut Walker<'_>) -> Result<(), PatchError> {
        self.clear();
        repopulate(items, walker, |item| self.push(item))
    }
}

impl<N: PatchField> PatchField for VecDeque<N> {
    fn kind() -> FieldKind {
        FieldKind::required(FieldShape::Collection)
    }

    fn instantiate() -> Option<Self> {
        Some(Self::new())
    }

    fn merge_array(&mut self, items: &[Value], walker: &mut Walker<'_>) -> Result<(), PatchError> {
        self.clear();
        repopulate(items, walker, |item| self.push_back(item))
    }
}

// Items are pushed as they complete, so a failing element leaves the
// earlier ones in place. Only object elements become items; a collection of
// leaf values therefore ends up empty.
fn repopulate<N: PatchField>(
    items: &[Value],
    walker: &mut Walker<'_>,
    mut push: impl FnMut(N),
) -> Result<(), PatchError> {
    for (index, node) in items.iter().enumerate() {
        let Value::Object(fields) = node else {
            debug!(
                index,
                found = %NodeKind::of(node),
                item = type_label::<N>(),
                "dropping non-object collection element"
            );
            continue;
        };

        let mut item = N::instantiate().ok_or_else(|| {
            PatchError::UnsupportedArrayType {
                type_name: type_label::<N>(),
            }
            .with_index(index)
        })?;
        item.merge_object(fields, walker)
            .map_err(|err| err.with_index(index))?;
        push(item);
    }

    Ok(())
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::PatchConfig,
        error::PatchErrorKind,
        test_support::{Address, Contact},
    };
    use serde_json::json;

    fn items(value: &Value) -> &[Value] {
        value.as_array().map(Vec::as_slice).unwrap()
    }

    fn merge<F: PatchField>(target: &mut F, document: &Value) -> Result<(), PatchError> {
        let config = PatchConfig::default();
        let mut walker = Walker::new(&config);

        target.merge_array(items(document), &mut walker)
    }

    #[test]
    fn arrays_are_replaced_not_appended() {
        let mut scores: Box<[i32]> = Box::new([1, 2, 3]);

        merge(&mut scores, &json!([9, 8])).unwrap();

        assert_eq!(&*scores, &[9, 8]);
    }

    #[test]
    fn array_objects_are_default_constructed() {
        let mut history: Box<[Address]> = Box::default();

        merge(&mut history, &json!([{ "city": "Odense" }, { "street": "Main" }])).unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].city, "Odense");
        assert_eq!(history[0].street, "");
        assert_eq!(history[1].street, "Main");
    }

    #[test]
    fn array_nulls_follow_element_nullability() {
        let mut optional: Box<[Option<i32>]> = Box::default();
        merge(&mut optional, &json!([1, null])).unwrap();
        assert_eq!(&*optional, &[Some(1), None]);

        let mut required: Box<[i32]> = Box::new([5]);
        let err = merge(&mut required, &json!([1, null])).unwrap_err();
        assert_eq!(err.path(), Some("[1]"));
        assert_eq!(err.kind(), PatchErrorKind::NullNotAllowed);
        assert_eq!(&*required, &[5]);
    }

    #[test]
    fn unsupported_elements_fail() {
        let mut nested: Box<[i32]> = Box::default();
        let err = merge(&mut nested, &json!([[1]])).unwrap_err();
        assert_eq!(err.kind(), PatchErrorKind::UnsupportedArrayType);

        let err = merge(&mut nested, &json!([{ "a": 1 }])).unwrap_err();
        assert_eq!(err.kind(), PatchErrorKind::UnsupportedArrayType);

        let err = merge(&mut nested, &json!([1, "x"])).unwrap_err();
        assert_eq!(err.kind(), PatchErrorKind::ConversionFailure);
        assert_eq!(err.path(), Some("[1]"));
    }

    #[test]
    fn collections_are_cleared_and_repopulated() {
        let mut contacts = vec![
            Contact::new("mail", "a@example.com"),
            Contact::new("mail", "b@example.com"),
            Contact::new("mail", "c@example.com"),
        ];

        merge(
            &mut contacts,
            &json!([
                { "kind": "phone", "value": "1" },
                { "value": "2" },
            ]),
        )
        .unwrap();

        assert_eq!(
            contacts,
            vec![Contact::new("phone", "1"), Contact::new("", "2")]
        );
    }

    #[test]
    fn collections_drop_non_object_elements() {
        let mut contacts: VecDeque<Contact> = VecDeque::from([Contact::new("mail", "x")]);

        merge(&mut contacts, &json!([1, { "value": "kept" }, "text", null])).unwrap();

        assert_eq!(contacts, VecDeque::from([Contact::new("", "kept")]));
    }

    #[test]
    fn collection_errors_carry_the_index() {
        let mut contacts: Vec<Contact> = Vec::new();

        let err = merge(&mut contacts, &json!([{ "value": "ok" }, { "value": 5 }])).unwrap_err();

        assert_eq!(err.path(), Some("[1].value"));
        assert_eq!(contacts, vec![Contact::new("", "ok")]);
    }

    #[test]
    fn leaf_collections_drop_their_scalar_elements() {
        let mut tags = vec!["old".to_string()];

        merge(&mut tags, &json!(["a", "b", 3])).unwrap();

        assert!(tags.is_empty());
    }

    #[test]
    fn leaf_collections_reject_object_elements() {
        let mut tags: VecDeque<String> = VecDeque::new();

        let err = merge(&mut tags, &json!(["a", { "b": 1 }])).unwrap_err();

        assert_eq!(err.path(), Some("[1]"));
        assert_eq!(
            err.leaf(),
            &PatchError::UnsupportedArrayType { type_name: "String" }
        );
    }

    #[test]
    fn absent_optional_collections_are_created() {
        let mut backups: Option<Vec<Contact>> = None;

        merge(&mut backups, &json!([{ "kind": "fax" }])).unwrap();

        assert_eq!(backups, Some(vec![Contact::new("fax", "")]));
    }

    #[test]
    fn scalar_targets_reject_arrays() {
        let mut age = 3_i32;

        assert_eq!(
            merge(&mut age, &json!([1])),
            Err(PatchError::UnsupportedArrayType { type_name: "i32" })
        );
    }
}

//! ## Crate layout
//! - `core`: the patch engine (walker, resolver, policy, converters).
//! - `config` / `settings`: per-call policy and its file/env form.
//! - `descriptor` / `traits`: the contracts derived types implement.
//! - `Patchable` / `PatchEnum` derives: descriptor tables without hand wiring.
//!
//! The `prelude` module carries what a crate needs to declare and patch
//! targets.

pub use patchwork_core as core;

// export so derive output resolves inside this crate's tests
extern crate self as patchwork;

pub use patchwork_core::{
    DEFAULT_MAX_DEPTH, IMPLICIT_IGNORED_PROPERTIES, collection, config, descriptor, enums, error,
    node, patcher, policy, scalar, settings, traits, walker,
};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Macros
//

pub use patchwork_core::{patch_enum, patch_from_str, patch_object};
pub use patchwork_derive::{PatchEnum, Patchable};

//
// Entry points
//

pub use patchwork_core::{
    config::{PatchConfig, PatchMode},
    error::{PatchError, PatchErrorKind},
    patcher::{Patcher, apply},
    settings::{PatchSettings, SettingsError},
};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{PatchEnum, Patchable};
    pub use patchwork_core::prelude::*;
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::{descriptor::TypeDescriptor, error::PatchErrorKind, traits::TypeKey};
    use serde_json::json;

    #[derive(Clone, Copy, Debug, Eq, PartialEq, PatchEnum)]
    enum Level {
        Low = 1,
        #[patch(rename = "mid")]
        Medium,
        High = 10,
    }

    #[derive(Clone, Debug, Default, PartialEq, Patchable)]
    struct Sensor {
        postal_code: i32,
        #[patch(rename = "Label")]
        display_name: String,
        #[patch(skip)]
        secret: String,
        level: Option<Level>,
        r#type: Option<String>,
    }

    fn descriptor() -> &'static TypeDescriptor<Sensor> {
        <Sensor as Patchable>::descriptor()
    }

    #[test]
    fn derived_properties_use_upper_camel_names() {
        let names: Vec<_> = descriptor().fields().iter().map(|f| f.property()).collect();

        assert_eq!(names, ["PostalCode", "Label", "Level", "Type"]);
        assert_eq!(descriptor().name(), "Sensor");
        assert_eq!(
            Sensor::kind().object_type(),
            Some(TypeKey::of::<Sensor>())
        );
    }

    #[test]
    fn derived_targets_patch_end_to_end() {
        let mut sensor = Sensor::default();

        apply(
            &json!({ "postalCode": 5000, "label": "north", "level": "MID", "type": "" }),
            &mut sensor,
        )
        .unwrap();

        assert_eq!(sensor.postal_code, 5000);
        assert_eq!(sensor.display_name, "north");
        assert_eq!(sensor.level, Some(Level::Medium));
        assert_eq!(sensor.r#type, None);
    }

    #[test]
    fn skipped_and_original_names_are_not_found() {
        let mut sensor = Sensor::default();

        for document in [json!({ "secret": "x" }), json!({ "displayName": "x" })] {
            let err = apply(&document, &mut sensor).unwrap_err();
            assert_eq!(err.kind(), PatchErrorKind::PropertyNotFound);
        }
        assert_eq!(sensor.secret, "");
    }

    #[test]
    fn derived_enums_number_variants_after_explicit_discriminants() {
        assert_eq!(<Level as PatchEnum>::NAME, "Level");
        assert_eq!(
            <Level as PatchEnum>::VARIANTS,
            &[("Low", 1), ("mid", 2), ("High", 10)]
        );
        assert_eq!(crate::enums::parse::<Level>("10"), Some(Level::High));
        assert_eq!(crate::enums::parse::<Level>("medium"), None);
    }
}

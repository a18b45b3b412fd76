///
/// Scalar Registry
///
/// Single source of truth for the leaf types the converter understands.
/// Each entry binds a Rust type to its `ScalarKind` and the typed extraction
/// used to read it from a JSON scalar.
///

// NOTE: several Rust types share one kind (DateTime). The kind is what
// nullable wrappers and error messages report; the extraction is per type.
// NOTE: "Other" is deliberately absent. Types reach it through
// `patch_from_str!`, not through this table.
macro_rules! scalar_registry_entries {
    ($macro:ident) => {
        $macro! {
            (Boolean, bool, extract_bool),
            (Byte, u8, extract_byte),
            (DateTime, ::chrono::DateTime<::chrono::Utc>, extract_date_time),
            (DateTime, ::chrono::NaiveDateTime, extract_naive_date_time),
            (DateTime, ::chrono::NaiveDate, extract_naive_date),
            (Decimal, ::rust_decimal::Decimal, extract_decimal),
            (Guid, ::uuid::Uuid, extract_guid),
            (Int16, i16, extract_int),
            (Int32, i32, extract_int),
            (Int64, i64, extract_int),
            (Single, f32, extract_single),
            (Double, f64, extract_double),
            (String, String, extract_string),
        }
    };
}

macro_rules! scalar_registry {
    ($macro:ident) => {
        scalar_registry_entries! { $macro }
    };
}

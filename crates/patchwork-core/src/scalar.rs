//! Scalar converter: typed extraction of JSON scalars into leaf fields.

use crate::{
    error::PatchError,
    node::{Value, raw_text},
    traits::{FieldKind, FieldShape, PatchField, type_label},
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use derive_more::Display;
use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

///
/// CONSTANTS
///

const NAIVE_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const DATE_FORMAT: &str = "%Y-%m-%d";

///
/// ScalarKind
///
/// Primitive category of a leaf value, independent of nullability.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum ScalarKind {
    Boolean,
    Byte,
    DateTime,
    Decimal,
    Guid,
    Int16,
    Int32,
    Int64,
    Single,
    Double,
    String,
    Other,
}

// ---------------------------------------------------------------------------
// Registered scalar fields
// ---------------------------------------------------------------------------

macro_rules! impl_scalar_field {
    ( $( ($kind:ident, $ty:ty, $extract:ident) ),* $(,)? ) => {
        $(
            impl PatchField for $ty {
                fn kind() -> FieldKind {
                    FieldKind::required(FieldShape::Scalar(ScalarKind::$kind))
                }

                fn from_scalar(node: &Value) -> Result<Self, PatchError> {
                    $extract(node)
                }
            }
        )*
    };
}

scalar_registry!(impl_scalar_field);

crate::patch_from_str!(
    i8,
    i128,
    u16,
    u32,
    u64,
    u128,
    usize,
    isize,
    char,
    std::net::IpAddr,
);

/// Generic conversion for "other" targets: parse the node's raw text.
pub fn parse_other<T: FromStr>(node: &Value) -> Result<T, PatchError> {
    raw_text(node)
        .parse::<T>()
        .map_err(|_| PatchError::conversion(type_label::<T>(), node))
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

fn extract_bool(node: &Value) -> Result<bool, PatchError> {
    node.as_bool()
        .ok_or_else(|| PatchError::conversion("bool", node))
}

fn extract_byte(node: &Value) -> Result<u8, PatchError> {
    node.as_u64()
        .and_then(|n| u8::try_from(n).ok())
        .ok_or_else(|| PatchError::conversion("u8", node))
}

// fractional and out-of-range numbers both fail
fn extract_int<I: TryFrom<i64>>(node: &Value) -> Result<I, PatchError> {
    node.as_i64()
        .and_then(|n| I::try_from(n).ok())
        .ok_or_else(|| PatchError::conversion(type_label::<I>(), node))
}

#[allow(clippy::cast_possible_truncation)]
fn extract_single(node: &Value) -> Result<f32, PatchError> {
    node.as_f64()
        .filter(|n| n.is_finite() && n.abs() <= f64::from(f32::MAX))
        .map(|n| n as f32)
        .ok_or_else(|| PatchError::conversion("f32", node))
}

fn extract_double(node: &Value) -> Result<f64, PatchError> {
    node.as_f64()
        .ok_or_else(|| PatchError::conversion("f64", node))
}

fn extract_decimal(node: &Value) -> Result<Decimal, PatchError> {
    let Value::Number(number) = node else {
        return Err(PatchError::conversion("Decimal", node));
    };
    let text = number.to_string();

    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| PatchError::conversion("Decimal", node))
}

fn extract_guid(node: &Value) -> Result<Uuid, PatchError> {
    node.as_str()
        .and_then(|text| Uuid::parse_str(text).ok())
        .ok_or_else(|| PatchError::conversion("Uuid", node))
}

fn extract_string(node: &Value) -> Result<String, PatchError> {
    node.as_str()
        .map(str::to_owned)
        .ok_or_else(|| PatchError::conversion("String", node))
}

fn extract_date_time(node: &Value) -> Result<DateTime<Utc>, PatchError> {
    node.as_str()
        .and_then(|text| {
            DateTime::parse_from_rfc3339(text)
                .map(|dt| dt.with_timezone(&Utc))
                .ok()
                .or_else(|| parse_naive_date_time(text).map(|naive| naive.and_utc()))
        })
        .ok_or_else(|| PatchError::conversion("DateTime<Utc>", node))
}

fn extract_naive_date_time(node: &Value) -> Result<NaiveDateTime, PatchError> {
    node.as_str()
        .and_then(parse_any_naive)
        .ok_or_else(|| PatchError::conversion("NaiveDateTime", node))
}

fn extract_naive_date(node: &Value) -> Result<NaiveDate, PatchError> {
    node.as_str()
        .and_then(parse_any_naive)
        .map(|dt| dt.date())
        .ok_or_else(|| PatchError::conversion("NaiveDate", node))
}

// Offset-qualified text is normalized to UTC.
fn parse_any_naive(text: &str) -> Option<NaiveDateTime> {
    parse_naive_date_time(text).or_else(|| {
        DateTime::parse_from_rfc3339(text)
            .ok()
            .map(|dt| dt.naive_utc())
    })
}

// Date-only text is read as midnight.
fn parse_naive_date_time(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, NAIVE_DATE_TIME_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(text, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

///
/// TESTS
///

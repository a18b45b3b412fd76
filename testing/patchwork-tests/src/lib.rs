//! Derived fixtures shared by the end-to-end tests.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use patchwork::{PatchEnum, Patchable};
use rust_decimal::Decimal;
use std::collections::VecDeque;
use uuid::Uuid;

///
/// Tier
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PatchEnum)]
pub enum Tier {
    #[default]
    Bronze,
    Silver,
    Gold,
}

///
/// Status
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, PatchEnum)]
pub enum Status {
    Active = 1,
    Suspended = 5,
    #[patch(rename = "closed_by_owner")]
    Closed,
}

///
/// Geo
///

#[derive(Clone, Debug, Default, PartialEq, Patchable)]
pub struct Geo {
    pub lat: f64,
    pub lon: f64,
}

///
/// Address
///

#[derive(Clone, Debug, Default, PartialEq, Patchable)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub postal_code: Option<String>,
    pub geo: Option<Geo>,
}

///
/// Order
///

#[derive(Clone, Debug, Default, PartialEq, Patchable)]
pub struct Order {
    pub sku: String,
    pub quantity: i32,
    pub price: Option<Decimal>,
}

impl Order {
    #[must_use]
    pub fn new(sku: &str, quantity: i32) -> Self {
        Self {
            sku: sku.to_string(),
            quantity,
            price: None,
        }
    }
}

///
/// AuditEntry
///

#[derive(Clone, Debug, Default, PartialEq, Patchable)]
pub struct AuditEntry {
    pub action: String,
    pub at: Option<NaiveDateTime>,
}

///
/// Credentials
///

#[derive(Clone, Debug, Default, PartialEq, Patchable)]
pub struct Credentials {
    pub token: String,
}

///
/// Customer
///

#[derive(Clone, Debug, Default, PartialEq, Patchable)]
pub struct Customer {
    pub id: i32,
    pub number: String,
    pub name: String,
    pub email: Option<String>,
    pub age: i32,
    pub vip: bool,
    pub balance: Decimal,
    pub ratio: f64,
    pub port: u16,
    pub tier: Tier,
    pub status: Option<Status>,
    pub external_id: Option<Uuid>,
    pub joined: Option<NaiveDate>,
    pub last_seen: Option<DateTime<Utc>>,
    pub address: Option<Address>,
    pub billing: Address,
    pub credentials: Option<Credentials>,
    pub scores: Box<[i64]>,
    pub orders: Vec<Order>,
    pub tags: Vec<String>,
    pub audit: Option<VecDeque<AuditEntry>>,
    #[patch(skip)]
    pub revision: u32,
}

impl Customer {
    /// Customer `1`, "Jane Doe", 23 years old, everything else default.
    #[must_use]
    pub fn jane() -> Self {
        Self {
            id: 1,
            number: "C-0001".to_string(),
            name: "Jane Doe".to_string(),
            age: 23,
            ..Self::default()
        }
    }
}

///
/// Triple
///
/// Three independent fields for selective-update checks.
///

#[derive(Clone, Debug, Default, PartialEq, Patchable)]
pub struct Triple {
    pub a: i32,
    pub b: String,
    pub c: bool,
}

///
/// Category
///
/// Self-nesting tree for depth checks.
///

#[derive(Clone, Debug, Default, PartialEq, Patchable)]
pub struct Category {
    pub name: String,
    pub children: Vec<Category>,
}

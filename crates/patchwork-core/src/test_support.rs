//! Hand-registered fixtures shared by the unit tests.

use crate::{descriptor::TypeDescriptor, enums::PatchEnum, traits::Patchable};
use std::{collections::VecDeque, sync::OnceLock};

///
/// Gender
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Gender {
    Male,
    Female,
}

impl PatchEnum for Gender {
    const NAME: &'static str = "Gender";
    const VARIANTS: &'static [(&'static str, i64)] = &[("Male", 0), ("Female", 1)];

    fn from_variant(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Male),
            1 => Some(Self::Female),
            _ => None,
        }
    }
}

crate::patch_enum!(Gender);

///
/// Address
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Address {
    pub(crate) street: String,
    pub(crate) city: String,
    pub(crate) postal_code: Option<i32>,
}

impl Patchable for Address {
    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESCRIPTOR: OnceLock<TypeDescriptor<Address>> = OnceLock::new();

        DESCRIPTOR.get_or_init(|| {
            TypeDescriptor::<Self>::builder("Address")
                .field("Street", |a: &mut Self| &mut a.street)
                .field("City", |a: &mut Self| &mut a.city)
                .field("PostalCode", |a: &mut Self| &mut a.postal_code)
                .build()
        })
    }
}

crate::patch_object!(Address);

///
/// Contact
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Contact {
    pub(crate) kind: String,
    pub(crate) value: String,
}

impl Contact {
    pub(crate) fn new(kind: &str, value: &str) -> Self {
        Self {
            kind: kind.to_string(),
            value: value.to_string(),
        }
    }
}

impl Patchable for Contact {
    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESCRIPTOR: OnceLock<TypeDescriptor<Contact>> = OnceLock::new();

        DESCRIPTOR.get_or_init(|| {
            TypeDescriptor::<Self>::builder("Contact")
                .field("Kind", |c: &mut Self| &mut c.kind)
                .field("Value", |c: &mut Self| &mut c.value)
                .build()
        })
    }
}

crate::patch_object!(Contact);

///
/// Person
///

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Person {
    pub(crate) id: i32,
    pub(crate) number: Option<String>,
    pub(crate) firstname: String,
    pub(crate) lastname: Option<String>,
    pub(crate) age: i32,
    pub(crate) active: bool,
    pub(crate) gender: Option<Gender>,
    pub(crate) address: Option<Address>,
    pub(crate) billing: Address,
    pub(crate) scores: Box<[i32]>,
    pub(crate) history: Box<[Address]>,
    pub(crate) contacts: Vec<Contact>,
    pub(crate) backups: Option<VecDeque<Contact>>,
}

impl Person {
    pub(crate) fn jane() -> Self {
        Self {
            id: 1,
            firstname: "Jane".to_string(),
            lastname: Some("Doe".to_string()),
            age: 23,
            ..Self::default()
        }
    }
}

impl Patchable for Person {
    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESCRIPTOR: OnceLock<TypeDescriptor<Person>> = OnceLock::new();

        DESCRIPTOR.get_or_init(|| {
            TypeDescriptor::<Self>::builder("Person")
                .field("Id", |p: &mut Self| &mut p.id)
                .field("Number", |p: &mut Self| &mut p.number)
                .field("Firstname", |p: &mut Self| &mut p.firstname)
                .field("Lastname", |p: &mut Self| &mut p.lastname)
                .field("Age", |p: &mut Self| &mut p.age)
                .field("Active", |p: &mut Self| &mut p.active)
                .field("Gender", |p: &mut Self| &mut p.gender)
                .field("Address", |p: &mut Self| &mut p.address)
                .field("Billing", |p: &mut Self| &mut p.billing)
                .field("Scores", |p: &mut Self| &mut p.scores)
                .field("History", |p: &mut Self| &mut p.history)
                .field("Contacts", |p: &mut Self| &mut p.contacts)
                .field("Backups", |p: &mut Self| &mut p.backups)
                .build()
        })
    }
}

crate::patch_object!(Person);

///
/// TreeNode
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct TreeNode {
    pub(crate) label: String,
    pub(crate) children: Vec<TreeNode>,
}

impl Patchable for TreeNode {
    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESCRIPTOR: OnceLock<TypeDescriptor<TreeNode>> = OnceLock::new();

        DESCRIPTOR.get_or_init(|| {
            TypeDescriptor::<Self>::builder("TreeNode")
                .field("Label", |n: &mut Self| &mut n.label)
                .field("Children", |n: &mut Self| &mut n.children)
                .build()
        })
    }
}

crate::patch_object!(TreeNode);

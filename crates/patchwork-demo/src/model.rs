use patchwork::{PatchEnum, Patchable};
use serde::{Deserialize, Serialize};

///
/// Gender
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, PatchEnum, Serialize)]
pub enum Gender {
    Male,
    Female,
}

///
/// Person
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Patchable, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Person {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub street: String,
    pub postal_code: String,
    pub city: String,
    pub age: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

impl Person {
    #[must_use]
    pub fn new(
        id: i32,
        firstname: &str,
        lastname: &str,
        street: &str,
        postal_code: &str,
        city: &str,
        age: i32,
    ) -> Self {
        Self {
            id,
            firstname: firstname.to_string(),
            lastname: lastname.to_string(),
            street: street.to_string(),
            postal_code: postal_code.to_string(),
            city: city.to_string(),
            age,
            gender: None,
        }
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        age: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            age,
        }
    }
}

use crate::model::User as ModelUser;
use async_graphql::{ID, SimpleObject};

#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl From<&ModelUser> for User {
    fn from(u: &ModelUser) -> Self {
        Self {
            id: ID(u.id.clone()),
            name: u.name.clone(),
            email: u.email.clone(),
            age: u.age,
        }
    }
}

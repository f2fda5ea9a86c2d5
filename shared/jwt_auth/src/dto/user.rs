use std::{ops::Deref, sync::Arc};
use uuid::Uuid;

///
/// Authenticated caller.
///
/// Cloned into every request extension so the data
/// lives behind an Arc. Fields are reachable through [Deref].
///
#[derive(Clone, Debug)]
pub struct User {
    inner: Arc<InnerUser>,
}

#[derive(Debug)]
pub struct InnerUser {
    pub id: Uuid,
    pub roles: Vec<String>,
}

impl User {
    pub fn new(id: Uuid, roles: Vec<String>) -> Self {
        Self {
            inner: Arc::new(InnerUser { id, roles }),
        }
    }
}

impl Deref for User {
    type Target = InnerUser;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

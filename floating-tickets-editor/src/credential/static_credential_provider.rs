use super::CredentialProvider;
use std::sync::RwLock;

///
/// Holds token set after sign in and cleared after sign out.
///
#[derive(Default)]
pub struct StaticCredentialProvider {
    token: RwLock<Option<String>>,
}

impl StaticCredentialProvider {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: RwLock::new(token),
        }
    }

    pub fn replace(&self, token: Option<String>) {
        match self.token.write() {
            Ok(mut guard) => *guard = token,
            Err(poisoned) => *poisoned.into_inner() = token,
        }
    }
}

impl CredentialProvider for StaticCredentialProvider {
    fn credential(&self) -> Option<String> {
        let token = match self.token.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };

        token.filter(|token| !token.is_empty())
    }
}

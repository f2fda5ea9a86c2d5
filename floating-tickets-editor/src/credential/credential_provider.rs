///
/// Source of the bearer token attached to every request.
///
/// Injected into the client, nothing is read from ambient state.
///
#[cfg_attr(test, mockall::automock)]
pub trait CredentialProvider: Send + Sync {
    ///
    /// ### Returns
    /// token without the `Bearer ` prefix, None when agent is not signed in
    ///
    fn credential(&self) -> Option<String>;
}

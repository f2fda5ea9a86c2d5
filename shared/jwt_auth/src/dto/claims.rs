use serde::Deserialize;
use uuid::Uuid;

///
/// Claims issued by the agency identity provider on admin login.
///
#[derive(Deserialize)]
pub struct Claims {
    pub sub: Uuid,

    #[serde(default)]
    pub roles: Vec<String>,
}

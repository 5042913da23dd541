use ab_core::UserIdentity;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
}

impl From<UserIdentity> for UserInfo {
    fn from(u: UserIdentity) -> Self {
        Self {
            username: u.username,
            email: u.email,
            full_name: u.full_name,
        }
    }
}

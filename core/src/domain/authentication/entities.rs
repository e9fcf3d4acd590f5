use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::authentication::value_objects::{Identity, Role};

/// Claims carried by bearer tokens issued to portal users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaim {
    pub sub: Uuid,
    pub role: Role,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl From<JwtClaim> for Identity {
    fn from(claim: JwtClaim) -> Self {
        Identity::new(claim.sub, claim.role)
    }
}

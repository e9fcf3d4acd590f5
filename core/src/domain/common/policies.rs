use crate::domain::{
    authentication::value_objects::{Identity, Role},
    common::entities::app_errors::CoreError,
};

/// Role-based policy shared by every domain module.
#[derive(Debug, Clone, Default)]
pub struct CurelyPolicy;

impl CurelyPolicy {
    pub fn new() -> Self {
        Self
    }

    pub fn has_one_of_roles(identity: &Identity, roles: &[Role]) -> bool {
        roles.iter().any(|role| identity.has_role(*role))
    }
}

pub fn ensure_policy(
    result_has_permission: Result<bool, CoreError>,
    error_message: &str,
) -> Result<(), CoreError> {
    match result_has_permission {
        Ok(true) => Ok(()),
        Ok(false) => Err(CoreError::Forbidden(error_message.to_string())),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_ensure_policy() {
        assert_eq!(ensure_policy(Ok(true), "nope"), Ok(()));
        assert_eq!(
            ensure_policy(Ok(false), "nope"),
            Err(CoreError::Forbidden("nope".to_string()))
        );
        assert_eq!(
            ensure_policy(Err(CoreError::InternalServerError), "nope"),
            Err(CoreError::InternalServerError)
        );
    }

    #[test]
    fn test_has_one_of_roles() {
        let doctor = Identity::new(Uuid::new_v4(), Role::Doctor);
        assert!(CurelyPolicy::has_one_of_roles(
            &doctor,
            &[Role::Doctor, Role::Admin]
        ));
        assert!(!CurelyPolicy::has_one_of_roles(&doctor, &[Role::Patient]));
    }
}

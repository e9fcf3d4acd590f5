use std::future::Future;

use crate::domain::{
    authentication::value_objects::{AuthorizeRequestInput, AuthorizeRequestOutput},
    common::entities::app_errors::CoreError,
};

#[cfg_attr(test, mockall::automock)]
pub trait AuthService: Send + Sync {
    fn authorize_request(
        &self,
        input: AuthorizeRequestInput,
    ) -> impl Future<Output = Result<AuthorizeRequestOutput, CoreError>> + Send;
}

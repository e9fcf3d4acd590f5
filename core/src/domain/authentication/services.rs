use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, errors::ErrorKind};
use tracing::debug;

use crate::domain::{
    authentication::{
        entities::JwtClaim,
        ports::AuthService,
        value_objects::{AuthorizeRequestInput, AuthorizeRequestOutput},
    },
    common::{AuthConfig, entities::app_errors::CoreError, services::Service},
    consultation::ports::ConsultationRepository,
    symptom::ports::SymptomRepository,
};

pub struct JwtKeys {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtKeys {
    pub fn from_config(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.leeway_seconds;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    pub fn verify(&self, token: &str) -> Result<JwtClaim, CoreError> {
        decode::<JwtClaim>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => CoreError::TokenExpired,
                _ => {
                    debug!("rejected bearer token: {}", e);
                    CoreError::InvalidToken
                }
            })
    }
}

impl<CO, SY> AuthService for Service<CO, SY>
where
    CO: ConsultationRepository,
    SY: SymptomRepository,
{
    async fn authorize_request(
        &self,
        input: AuthorizeRequestInput,
    ) -> Result<AuthorizeRequestOutput, CoreError> {
        let claims = self.jwt_keys.verify(&input.token)?;

        Ok(AuthorizeRequestOutput {
            identity: claims.into(),
        })
    }
}

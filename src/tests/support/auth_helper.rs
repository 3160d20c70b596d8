use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};

pub fn create_test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        issuer: "Ekstion".to_string(),
        secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
    })
}

pub fn bearer() -> (&'static str, &'static str) {
    ("Authorization", "Bearer test-token")
}

/// Accepts any bearer token and answers with fixed claims.
#[derive(Clone)]
pub struct StubTokenProvider {
    user_id: Uuid,
    is_verified: bool,
    token_type: &'static str,
    reject: bool,
}

impl StubTokenProvider {
    pub fn verified(user_id: Uuid) -> Self {
        Self {
            user_id,
            is_verified: true,
            token_type: "access",
            reject: false,
        }
    }

    pub fn unverified(user_id: Uuid) -> Self {
        Self {
            is_verified: false,
            ..Self::verified(user_id)
        }
    }

    pub fn with_type(user_id: Uuid, token_type: &'static str) -> Self {
        Self {
            token_type,
            ..Self::verified(user_id)
        }
    }

    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Self::verified(Uuid::nil())
        }
    }
}

impl TokenProvider for StubTokenProvider {
    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        if self.reject {
            return Err(TokenError::InvalidSignature);
        }

        Ok(TokenClaims {
            sub: self.user_id,
            exp: 9_999_999_999,
            iat: 0,
            nbf: 0,
            iss: "Ekstion".to_string(),
            token_type: self.token_type.to_string(),
            is_verified: self.is_verified,
        })
    }
}

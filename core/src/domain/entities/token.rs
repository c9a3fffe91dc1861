//! Token entities for JWT-based authentication.
//!
//! Tokens are minted by the remote authentication service; the gateway
//! only decodes and checks them. The claims layout here must therefore
//! stay wire-compatible with what that service issues.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token-type tag carried in [`TokenPair`] responses
pub const BEARER_TOKEN_TYPE: &str = "bearer";

/// The two kinds of tokens the authentication service issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Short-lived token presented on API calls
    Access,
    /// Long-lived token exchanged for a new pair
    Refresh,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Access => "access",
            TokenType::Refresh => "refresh",
        }
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform roles embedded in access tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular end user of the platform
    User,
    /// Customer support staff
    CssEmployee,
    /// Customer support administrator
    CssAdmin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::CssEmployee => "css_employee",
            Role::CssAdmin => "css_admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// JWT ID (unique identifier for the token)
    pub jti: String,

    /// Which kind of token this is ("access" or "refresh")
    pub token_type: TokenType,

    /// Roles granted to the subject
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl Claims {
    /// Build claims with the given lifetime, issued now.
    ///
    /// The gateway never signs these in production; this constructor
    /// exists so adapters and tests can fabricate wire-compatible claims.
    pub fn new(user_id: Uuid, token_type: TokenType, roles: Vec<Role>, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(ttl_seconds);

        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            jti: Uuid::new_v4().to_string(),
            token_type,
            roles,
        }
    }

    /// Check whether the subject holds a role
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Parse the subject back into a user ID
    pub fn user_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }
}

/// Access + refresh token bundle returned by the authentication service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token for API authentication
    pub access_token: String,

    /// JWT refresh token for obtaining new access tokens
    pub refresh_token: String,

    /// Token-type tag, conventionally `"bearer"`
    pub token_type: String,
}

impl TokenPair {
    /// Create a bearer token pair
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            token_type: BEARER_TOKEN_TYPE.to_string(),
        }
    }

    /// Create a token pair with an explicit type tag
    pub fn with_token_type(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        token_type: impl Into<String>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            token_type: token_type.into(),
        }
    }
}

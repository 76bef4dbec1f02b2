//! Session token issuance and verification
//!
//! The codec is the sole source of truth for what a logged-in caller looks
//! like downstream: `verify` turns a bearer token into a [`Principal`]
//! without touching any store.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Debug;
use tracing::warn;

use crate::domain::profile::{Profile, ProfileId};
use crate::domain::team::TeamId;
use crate::domain::{DomainError, Principal};

/// Fallback applied when a TTL string cannot be parsed
const DEFAULT_TTL_MINUTES: i64 = 15;

/// Access/refresh token pair returned by login, refresh and switch-team
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Claim set carried by both token kinds.
///
/// Claim names (`sub`, `email`, `plan`, `teamId`, `exp`, `iat`) are part of
/// the wire contract; clients decode tokens independently. Optional claims
/// of the wrong JSON type decode as absent rather than failing the token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(default)]
    pub sub: String,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub plan: Option<String>,
    #[serde(
        rename = "teamId",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub team_id: Option<String>,
    pub iat: i64,
    pub exp: i64,
}

/// Accept any JSON value, keeping only non-empty strings
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    })
}

/// Configuration for the token codec
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_ttl: Duration,
    pub refresh_ttl: Duration,
}

impl JwtConfig {
    /// Build from a secret and Go-style duration strings (`"15m"`, `"7d"`).
    ///
    /// Unparseable TTLs fail closed to 15 minutes instead of rejecting
    /// startup; availability is preferred over strict configuration here.
    pub fn new(secret: impl Into<String>, access_ttl: &str, refresh_ttl: &str) -> Self {
        Self {
            secret: secret.into(),
            access_ttl: parse_ttl_or_default(access_ttl, "access"),
            refresh_ttl: parse_ttl_or_default(refresh_ttl, "refresh"),
        }
    }
}

fn parse_ttl_or_default(value: &str, kind: &str) -> Duration {
    match parse_ttl(value) {
        Some(ttl) => ttl,
        None => {
            warn!(
                "Unparseable {} token TTL '{}', falling back to {} minutes",
                kind, value, DEFAULT_TTL_MINUTES
            );
            Duration::minutes(DEFAULT_TTL_MINUTES)
        }
    }
}

/// Parse durations of the form `<number><unit>` with unit `s`, `m`, `h`
/// or `d`
fn parse_ttl(value: &str) -> Option<Duration> {
    let value = value.trim();
    if value.len() < 2 {
        return None;
    }

    let (amount, unit) = value.split_at(value.len() - 1);
    let amount: i64 = amount.parse().ok().filter(|n| *n > 0)?;

    match unit {
        "s" => Some(Duration::seconds(amount)),
        "m" => Some(Duration::minutes(amount)),
        "h" => Some(Duration::hours(amount)),
        "d" => Some(Duration::days(amount)),
        _ => None,
    }
}

/// Token codec signing and verifying session tokens with a single shared
/// HS256 secret
#[derive(Clone)]
pub struct TokenCodec {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("access_ttl", &self.config.access_ttl)
            .field("refresh_ttl", &self.config.refresh_ttl)
            .field("keys", &"[hidden]")
            .finish()
    }
}

impl TokenCodec {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issue an access/refresh pair for a profile, optionally bound to a
    /// team whose membership the caller has already verified.
    ///
    /// Only the access token carries the `plan` claim; the refresh token
    /// carries the subject, email and team binding.
    pub fn issue(
        &self,
        profile: &Profile,
        team_id: Option<TeamId>,
    ) -> Result<TokenPair, DomainError> {
        let now = Utc::now();

        let access = SessionClaims {
            sub: profile.id().to_string(),
            email: profile.email().map(str::to_string),
            plan: profile.plan().map(str::to_string),
            team_id: team_id.map(|t| t.to_string()),
            iat: now.timestamp(),
            exp: (now + self.config.access_ttl).timestamp(),
        };

        let refresh = SessionClaims {
            plan: None,
            exp: (now + self.config.refresh_ttl).timestamp(),
            ..access.clone()
        };

        let access_token = self.sign(&access)?;
        let refresh_token = self.sign(&refresh)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    fn sign(&self, claims: &SessionClaims) -> Result<String, DomainError> {
        // Signing only fails on misconfiguration; surface it instead of
        // handing out an empty token.
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("Failed to sign token: {}", e)))
    }

    /// Verify a token and recover the caller's [`Principal`].
    ///
    /// Only HS256 is accepted; tokens signed with any other algorithm fail
    /// as invalid regardless of signature validity.
    pub fn verify(&self, token: &str) -> Result<Principal, DomainError> {
        let validation = Validation::new(Algorithm::HS256);

        let data =
            decode::<SessionClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => DomainError::TokenExpired,
                    _ => DomainError::invalid_token(e.to_string()),
                }
            })?;

        let claims = data.claims;

        if claims.sub.is_empty() {
            return Err(DomainError::invalid_token("missing sub"));
        }

        let subject_id = ProfileId::parse(&claims.sub)
            .map_err(|_| DomainError::invalid_token("invalid user ID in token"))?;

        // Malformed team ids are treated as an absent claim, not a failure
        let team_id = claims
            .team_id
            .as_deref()
            .and_then(|t| TeamId::parse(t).ok());

        Ok(Principal::new(
            subject_id,
            claims.email,
            claims.plan,
            team_id,
            chrono::DateTime::from_timestamp(claims.iat, 0).unwrap_or_else(Utc::now),
            chrono::DateTime::from_timestamp(claims.exp, 0).unwrap_or_else(Utc::now),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn create_codec() -> TokenCodec {
        TokenCodec::new(JwtConfig::new("test-secret-key-12345", "15m", "7d"))
    }

    fn create_profile() -> Profile {
        Profile::new(
            ProfileId::new(Uuid::new_v4()),
            Some("user@example.com".to_string()),
            Some("Test User".to_string()),
            None,
            Some("pro".to_string()),
        )
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let codec = create_codec();
        let profile = create_profile();
        let team_id = TeamId::generate();

        let pair = codec.issue(&profile, Some(team_id)).unwrap();

        let principal = codec.verify(&pair.access_token).unwrap();
        assert_eq!(principal.subject_id(), profile.id());
        assert_eq!(principal.email(), Some("user@example.com"));
        assert_eq!(principal.plan(), Some("pro"));
        assert_eq!(principal.team_id(), Some(team_id));
    }

    #[test]
    fn test_verify_is_idempotent() {
        let codec = create_codec();
        let profile = create_profile();

        let pair = codec.issue(&profile, None).unwrap();

        let first = codec.verify(&pair.access_token).unwrap();
        let second = codec.verify(&pair.access_token).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_refresh_token_has_no_plan_claim() {
        let codec = create_codec();
        let profile = create_profile();

        let pair = codec.issue(&profile, None).unwrap();

        let principal = codec.verify(&pair.refresh_token).unwrap();
        assert_eq!(principal.plan(), None);
        assert_eq!(principal.email(), Some("user@example.com"));
    }

    #[test]
    fn test_unbound_token_has_no_team_claim() {
        let codec = create_codec();
        let profile = create_profile();

        let pair = codec.issue(&profile, None).unwrap();

        let principal = codec.verify(&pair.access_token).unwrap();
        assert_eq!(principal.team_id(), None);
    }

    #[test]
    fn test_wrong_secret_fails() {
        let codec1 = TokenCodec::new(JwtConfig::new("secret-1", "15m", "7d"));
        let codec2 = TokenCodec::new(JwtConfig::new("secret-2", "15m", "7d"));

        let pair = codec1.issue(&create_profile(), None).unwrap();

        let err = codec2.verify(&pair.access_token).unwrap_err();
        assert!(matches!(err, DomainError::InvalidToken { .. }));
    }

    #[test]
    fn test_garbage_token_fails() {
        let codec = create_codec();
        let err = codec.verify("not-a-jwt").unwrap_err();
        assert!(matches!(err, DomainError::InvalidToken { .. }));
    }

    #[test]
    fn test_expired_token_fails_as_expired() {
        let codec = create_codec();
        let profile = create_profile();

        let now = Utc::now();
        let claims = SessionClaims {
            sub: profile.id().to_string(),
            email: None,
            plan: None,
            team_id: None,
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
        };
        let token = codec.sign(&claims).unwrap();

        let err = codec.verify(&token).unwrap_err();
        assert!(matches!(err, DomainError::TokenExpired));
    }

    #[test]
    fn test_asymmetric_algorithm_rejected() {
        // A token claiming HS384 signed with the same secret must not pass
        // an HS256-only validation.
        let codec = create_codec();
        let profile = create_profile();

        let claims = SessionClaims {
            sub: profile.id().to_string(),
            email: None,
            plan: None,
            team_id: None,
            iat: Utc::now().timestamp(),
            exp: (Utc::now() + Duration::minutes(15)).timestamp(),
        };

        let token = encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret(b"test-secret-key-12345"),
        )
        .unwrap();

        let err = codec.verify(&token).unwrap_err();
        assert!(matches!(err, DomainError::InvalidToken { .. }));
    }

    #[test]
    fn test_missing_sub_rejected() {
        let codec = create_codec();

        // Serialize claims without a sub field at all
        #[derive(Serialize)]
        struct NoSub {
            iat: i64,
            exp: i64,
        }

        let token = encode(
            &Header::default(),
            &NoSub {
                iat: Utc::now().timestamp(),
                exp: (Utc::now() + Duration::minutes(15)).timestamp(),
            },
            &EncodingKey::from_secret(b"test-secret-key-12345"),
        )
        .unwrap();

        let err = codec.verify(&token).unwrap_err();
        assert_eq!(err.to_string(), "Invalid token: missing sub");
    }

    #[test]
    fn test_malformed_optional_claims_are_absent() {
        let codec = create_codec();

        #[derive(Serialize)]
        struct WeirdClaims {
            sub: String,
            email: u32,
            plan: bool,
            #[serde(rename = "teamId")]
            team_id: Vec<u8>,
            iat: i64,
            exp: i64,
        }

        let token = encode(
            &Header::default(),
            &WeirdClaims {
                sub: Uuid::new_v4().to_string(),
                email: 7,
                plan: true,
                team_id: vec![1, 2, 3],
                iat: Utc::now().timestamp(),
                exp: (Utc::now() + Duration::minutes(15)).timestamp(),
            },
            &EncodingKey::from_secret(b"test-secret-key-12345"),
        )
        .unwrap();

        let principal = codec.verify(&token).unwrap();
        assert_eq!(principal.email(), None);
        assert_eq!(principal.plan(), None);
        assert_eq!(principal.team_id(), None);
    }

    #[test]
    fn test_ttl_parsing() {
        assert_eq!(parse_ttl("30s"), Some(Duration::seconds(30)));
        assert_eq!(parse_ttl("15m"), Some(Duration::minutes(15)));
        assert_eq!(parse_ttl("2h"), Some(Duration::hours(2)));
        assert_eq!(parse_ttl("7d"), Some(Duration::days(7)));
    }

    #[test]
    fn test_ttl_fails_closed() {
        assert_eq!(parse_ttl("soon"), None);
        assert_eq!(parse_ttl(""), None);
        assert_eq!(parse_ttl("-5m"), None);
        assert_eq!(parse_ttl("15"), None);

        let config = JwtConfig::new("secret", "garbage", "also garbage");
        assert_eq!(config.access_ttl, Duration::minutes(15));
        assert_eq!(config.refresh_ttl, Duration::minutes(15));
    }
}

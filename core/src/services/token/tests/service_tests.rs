use chrono::{Duration, Utc};

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

fn create_test_service() -> TokenService {
    let config = TokenServiceConfig {
        jwt_secret: "unit-test-secret".to_string(),
        ..TokenServiceConfig::default()
    };
    TokenService::new(config)
}

#[test]
fn test_issue_token_format() {
    let service = create_test_service();

    let token = service.issue_token("user-1").unwrap();

    // Compact JWT: header.payload.signature
    assert_eq!(token.split('.').count(), 3);
}

#[test]
fn test_issue_then_decode_roundtrip() {
    let service = create_test_service();

    let token = service.issue_token("user-1").unwrap();
    let claims = service.decode_token(&token).unwrap();

    assert_eq!(claims.user_id(), "user-1");
    assert!(claims.is_valid());
}

#[test]
fn test_verify_token_returns_claims() {
    let service = create_test_service();

    let token = service.issue_token("user-2").unwrap();
    let claims = service.verify_token(&token).unwrap();

    assert_eq!(claims.user_id(), "user-2");
}

#[test]
fn test_decode_malformed_token() {
    let service = create_test_service();

    for input in ["", "invalid_token", "a.b.c", "...."] {
        let result = service.decode_token(input);
        assert!(matches!(
            result.unwrap_err(),
            DomainError::Token(TokenError::InvalidTokenFormat)
        ));
        assert!(service.verify_token(input).is_none());
    }
}

#[test]
fn test_decode_token_signed_with_other_secret() {
    let service = create_test_service();
    let other = TokenService::new(TokenServiceConfig {
        jwt_secret: "a-different-secret".to_string(),
        ..TokenServiceConfig::default()
    });

    let token = other.issue_token("user-1").unwrap();
    let result = service.decode_token(&token);

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::InvalidSignature)
    ));
    assert!(service.verify_token(&token).is_none());
}

#[test]
fn test_decode_expired_token() {
    let service = create_test_service();

    // Mint a token whose expiration is well in the past
    let mut claims = Claims::new("user-1");
    claims.iat = (Utc::now() - Duration::days(31)).timestamp();
    claims.exp = (Utc::now() - Duration::days(1)).timestamp();

    let token = service.encode_claims(&claims).unwrap();
    let result = service.decode_token(&token);

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::TokenExpired)
    ));
    assert!(service.verify_token(&token).is_none());
}

#[test]
fn test_tokens_issued_at_different_times_are_distinct() {
    let service = create_test_service();
    let now = Utc::now();

    let mut first = Claims::new("user-1");
    first.iat = now.timestamp();

    let mut second = first.clone();
    second.iat = (now + Duration::seconds(5)).timestamp();

    let token_a = service.encode_claims(&first).unwrap();
    let token_b = service.encode_claims(&second).unwrap();

    assert_ne!(token_a, token_b);

    // Both still verify to the same identifier while unexpired
    assert_eq!(service.verify_token(&token_a).unwrap().user_id(), "user-1");
    assert_eq!(service.verify_token(&token_b).unwrap().user_id(), "user-1");
}

#[test]
fn test_tampered_payload_is_rejected() {
    let service = create_test_service();

    let token = service.issue_token("user-1").unwrap();
    let mut parts: Vec<&str> = token.split('.').collect();

    // Swap in the payload of a token for another user, keeping the signature
    let forged = service.issue_token("user-99").unwrap();
    let forged_parts: Vec<&str> = forged.split('.').collect();
    parts[1] = forged_parts[1];
    let tampered = parts.join(".");

    assert!(service.verify_token(&tampered).is_none());
}

#[test]
fn test_configured_validity_window() {
    let config = TokenServiceConfig {
        jwt_secret: "unit-test-secret".to_string(),
        token_validity_days: 1,
        ..TokenServiceConfig::default()
    };
    let service = TokenService::new(config);

    let token = service.issue_token("user-1").unwrap();
    let claims = service.decode_token(&token).unwrap();

    assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
}

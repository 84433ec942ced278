//! Slack request signing.
//!
//! Slack signs `v0:{timestamp}:{raw body}` with HMAC-SHA256 keyed by the app
//! signing secret and sends `v0={hex digest}` in `X-Slack-Signature`.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::types::{Rejection, SignedRequest};

pub const SIGNATURE_VERSION: &str = "v0";

/// Maximum allowed clock skew between request timestamp and receipt (5 minutes).
pub const REPLAY_WINDOW_SECS: u64 = 60 * 5;

type HmacSha256 = Hmac<Sha256>;

fn keyed_mac(secret: &str, timestamp: &str, raw_body: &str) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(format!("{SIGNATURE_VERSION}:{timestamp}:{raw_body}").as_bytes());
    mac
}

/// Compute the `v0=` signature for a raw body.
pub fn signature(secret: &str, timestamp: &str, raw_body: &str) -> String {
    let digest = keyed_mac(secret, timestamp, raw_body).finalize().into_bytes();
    format!("{SIGNATURE_VERSION}={}", hex::encode(digest))
}

/// Check the replay window, then the signature.
pub fn verify(request: &SignedRequest, secret: &str, now: i64) -> Result<(), Rejection> {
    let timestamp: i64 = request
        .timestamp
        .trim()
        .parse()
        .map_err(|_| Rejection::MalformedTimestamp)?;

    if now.abs_diff(timestamp) > REPLAY_WINDOW_SECS {
        return Err(Rejection::StaleTimestamp);
    }

    let provided = request
        .signature
        .as_deref()
        .ok_or(Rejection::MissingSignature)?;

    let digest_hex = provided
        .strip_prefix(&format!("{SIGNATURE_VERSION}="))
        .ok_or(Rejection::UnsupportedVersion)?;

    let digest = hex::decode(digest_hex).map_err(|_| Rejection::SignatureMismatch)?;
    // Only the lowercase form Slack sends is an exact match.
    if hex::encode(&digest) != digest_hex {
        return Err(Rejection::SignatureMismatch);
    }

    keyed_mac(secret, &request.timestamp, &request.raw_body)
        .verify_slice(&digest)
        .map_err(|_| Rejection::SignatureMismatch)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "8f742231b10e8888abcd99yyyzzz85a5";
    const NOW: i64 = 1_531_420_618;

    fn signed(timestamp: i64, body: &str) -> SignedRequest {
        let timestamp = timestamp.to_string();
        SignedRequest {
            signature: Some(signature(SECRET, &timestamp, body)),
            timestamp,
            raw_body: body.to_string(),
        }
    }

    #[test]
    fn test_signature_known_vector() {
        // Example from Slack's "Verifying requests" guide.
        let body = "token=xyzz0WbapA4vBCDEFasx0q6G&team_id=T1DC2JH3J&team_domain=testteamnow&channel_id=G8PSS9T3V&channel_name=foobar&user_id=U2CERLKJA&user_name=roadrunner&command=%2Fwebhook-collect&text=&response_url=https%3A%2F%2Fhooks.slack.com%2Fcommands%2FT1DC2JH3J%2F397700885554%2F96rGlfmibIGlgcZRskXaIFfN&trigger_id=398738663015.47445629121.803a0bc887a14d10d2c447fce8b6703c";
        assert_eq!(
            signature(SECRET, "1531420618", body),
            "v0=a2114d57b48eac39b9ad189dd8316235a7b4a8d21a10bd27519666489c69b503"
        );
    }

    #[test]
    fn test_accepts_valid_signature() {
        assert_eq!(verify(&signed(NOW, r#"{"event":{}}"#), SECRET, NOW), Ok(()));
    }

    #[test]
    fn test_accepts_at_window_edge() {
        assert_eq!(verify(&signed(NOW - 300, "{}"), SECRET, NOW), Ok(()));
        assert_eq!(verify(&signed(NOW + 300, "{}"), SECRET, NOW), Ok(()));
    }

    #[test]
    fn test_rejects_outside_window_even_when_signed() {
        for skew in [301, 600, 86_400] {
            assert_eq!(
                verify(&signed(NOW - skew, "{}"), SECRET, NOW),
                Err(Rejection::StaleTimestamp)
            );
            assert_eq!(
                verify(&signed(NOW + skew, "{}"), SECRET, NOW),
                Err(Rejection::StaleTimestamp)
            );
        }
    }

    #[test]
    fn test_rejects_extreme_timestamp() {
        for timestamp in [i64::MIN, i64::MAX, NOW.wrapping_add(i64::MIN)] {
            assert_eq!(
                verify(&signed(timestamp, "{}"), SECRET, NOW),
                Err(Rejection::StaleTimestamp)
            );
        }

        let mut request = signed(NOW, "{}");
        request.timestamp = "-9223372036854775808".to_string();
        assert_eq!(
            verify(&request, SECRET, NOW),
            Err(Rejection::StaleTimestamp)
        );
    }

    #[test]
    fn test_rejects_non_hex_digest() {
        let mut request = signed(NOW, "{}");
        request.signature = Some("v0=not-hex".to_string());
        assert_eq!(
            verify(&request, SECRET, NOW),
            Err(Rejection::SignatureMismatch)
        );
    }

    #[test]
    fn test_rejects_truncated_digest() {
        let mut request = signed(NOW, "{}");
        let sig = request.signature.take().unwrap();
        request.signature = Some(sig[..sig.len() - 2].to_string());
        assert_eq!(
            verify(&request, SECRET, NOW),
            Err(Rejection::SignatureMismatch)
        );
    }

    #[test]
    fn test_rejects_tampered_body() {
        let mut request = signed(NOW, r#"{"text":"glassware"}"#);
        request.raw_body = r#"{"text":"glassware!"}"#.to_string();
        assert_eq!(
            verify(&request, SECRET, NOW),
            Err(Rejection::SignatureMismatch)
        );
    }

    #[test]
    fn test_rejects_wrong_secret() {
        assert_eq!(
            verify(&signed(NOW, "{}"), "another-secret", NOW),
            Err(Rejection::SignatureMismatch)
        );
    }

    #[test]
    fn test_rejects_uppercase_digest() {
        let mut request = signed(NOW, "{}");
        let sig = request.signature.take().unwrap();
        request.signature = Some(format!("v0={}", sig[3..].to_uppercase()));
        assert_eq!(
            verify(&request, SECRET, NOW),
            Err(Rejection::SignatureMismatch)
        );
    }

    #[test]
    fn test_rejects_unknown_version() {
        let mut request = signed(NOW, "{}");
        let sig = request.signature.take().unwrap();
        request.signature = Some(sig.replacen("v0=", "v1=", 1));
        assert_eq!(
            verify(&request, SECRET, NOW),
            Err(Rejection::UnsupportedVersion)
        );
    }

    #[test]
    fn test_rejects_missing_signature() {
        let mut request = signed(NOW, "{}");
        request.signature = None;
        assert_eq!(
            verify(&request, SECRET, NOW),
            Err(Rejection::MissingSignature)
        );
    }

    #[test]
    fn test_rejects_malformed_timestamp() {
        let mut request = signed(NOW, "{}");
        request.timestamp = "yesterday".to_string();
        assert_eq!(
            verify(&request, SECRET, NOW),
            Err(Rejection::MalformedTimestamp)
        );
    }
}

use std::fmt;

use serde::Serialize;

/// Whether to announce, and where.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnounceDecision {
    pub announce: bool,
    /// Parent message to reply under. `None` replies at top level.
    pub thread_ts: Option<String>,
}

/// Why a request failed authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    StaleTimestamp,
    MalformedTimestamp,
    MissingSignature,
    UnsupportedVersion,
    SignatureMismatch,
    Unsigned,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Rejection::StaleTimestamp => "timestamp outside replay window",
            Rejection::MalformedTimestamp => "timestamp is not an integer",
            Rejection::MissingSignature => "signature header missing",
            Rejection::UnsupportedVersion => "signature version is not v0",
            Rejection::SignatureMismatch => "signature mismatch",
            Rejection::Unsigned => "unsigned requests are not allowed",
        };
        f.write_str(reason)
    }
}

/// What the invocation framework gets back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Challenge(String),
    BadRequest,
    Ok,
    Rejected(Rejection),
}

impl Response {
    pub fn status(&self) -> &'static str {
        match self {
            Response::Challenge(_) => "challenge",
            Response::BadRequest => "bad_request",
            Response::Ok => "ok",
            Response::Rejected(_) => "rejected",
        }
    }
}

/// Renders the literal body returned to the caller. Rejections render empty.
impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Challenge(challenge) => f.write_str(challenge),
            Response::BadRequest => f.write_str("400 Bad Request"),
            Response::Ok => f.write_str("200 OK"),
            Response::Rejected(_) => Ok(()),
        }
    }
}

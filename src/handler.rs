use serde_json::Value;

use crate::auth;
use crate::classify::{classify, KeywordMatcher};
use crate::client::{Notifier, PostMessage};
use crate::config::Settings;
use crate::error::Result;
use crate::types::{InboundEvent, Invocation, Rejection, Response};

/// Stateless per-invocation pipeline: authenticate, classify, notify.
pub struct EventHandler<N> {
    notifier: N,
    matcher: KeywordMatcher,
    signing_secret: String,
    announce_text: String,
    allow_unsigned: bool,
}

impl<N: Notifier> EventHandler<N> {
    pub fn new(settings: &Settings, notifier: N) -> Result<Self> {
        Ok(Self {
            notifier,
            matcher: KeywordMatcher::new(&settings.keyword)?,
            signing_secret: settings.signing_secret.clone(),
            announce_text: settings.announce_text(),
            allow_unsigned: settings.allow_unsigned,
        })
    }

    /// `now` is the receipt time in seconds since the epoch.
    pub async fn handle(&self, invocation: Invocation, now: i64) -> Result<Response> {
        tracing::info!(payload = %invocation.payload(), "inbound invocation");

        let payload = match invocation {
            Invocation::Signed { payload, request } => {
                if let Err(rejection) = auth::verify(&request, &self.signing_secret, now) {
                    tracing::warn!(%rejection, timestamp = %request.timestamp, "rejected request");
                    return Ok(Response::Rejected(rejection));
                }
                payload
            }
            Invocation::Unsigned(payload) => {
                if !self.allow_unsigned {
                    tracing::warn!("rejected request without signature metadata");
                    return Ok(Response::Rejected(Rejection::Unsigned));
                }
                tracing::warn!("no signature metadata, skipping authentication");
                payload
            }
        };

        let inbound: InboundEvent = serde_json::from_value(payload)?;

        // URL verification handshake
        if let Some(challenge) = inbound.challenge {
            let body = match challenge {
                Value::String(challenge) => challenge,
                other => other.to_string(),
            };
            return Ok(Response::Challenge(body));
        }

        let Some(event) = inbound.event else {
            return Ok(Response::BadRequest);
        };

        let decision = classify(&event, &self.matcher);
        tracing::debug!(
            kind = %event.kind,
            subtype = event.subtype.as_deref().unwrap_or("-"),
            announce = decision.announce,
            "classified event"
        );

        if decision.announce {
            let channel = event.channel.unwrap_or_else(|| {
                tracing::warn!("announcing event carries no channel");
                String::new()
            });

            self.notifier
                .post_message(&PostMessage {
                    channel,
                    text: self.announce_text.clone(),
                    thread_ts: decision.thread_ts,
                })
                .await?;
        }

        Ok(Response::Ok)
    }
}

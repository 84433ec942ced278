use regex::{Regex, RegexBuilder};

use crate::error::{GlassbotError, Result};
use crate::types::{AnnounceDecision, PlatformEvent};

/// Case-insensitive literal search for the announce keyword.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    pattern: Regex,
}

impl KeywordMatcher {
    pub fn new(keyword: &str) -> Result<Self> {
        let pattern = RegexBuilder::new(&regex::escape(keyword))
            .case_insensitive(true)
            .build()
            .map_err(|_| GlassbotError::InvalidSetting {
                key: "keyword",
                value: keyword.to_string(),
            })?;
        Ok(Self { pattern })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Decide whether an event mentions the keyword and which thread to answer in.
pub fn classify(event: &PlatformEvent, matcher: &KeywordMatcher) -> AnnounceDecision {
    let mut decision = AnnounceDecision::default();

    // Messages posted by people
    if event.is_plain_message() {
        if let Some(text) = event.text.as_deref() {
            if matcher.is_match(text) {
                decision.announce = true;
                decision.thread_ts = event.thread_ts.clone();
            }
        }
    }

    // Link unfurls arrive as an edit of the original message
    if event.is_message_changed() {
        if let Some(message) = &event.message {
            if let Some(attachments) = &message.attachments {
                if message.thread_ts.is_some() {
                    decision.thread_ts = message.thread_ts.clone();
                }

                let unfurl_matches = attachments
                    .iter()
                    .filter_map(|a| a.text.as_deref())
                    .any(|text| matcher.is_match(text));
                if unfurl_matches {
                    decision.announce = true;
                }
            }
        }
    }

    decision
}

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use url::Url;

use crate::error::Result;

/// Reply to post through `chat.postMessage`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostMessage {
    pub channel: String,
    pub text: String,
    pub thread_ts: Option<String>,
}

#[async_trait]
pub trait Notifier {
    async fn post_message(&self, message: &PostMessage) -> Result<()>;
}

pub struct SlackClient {
    http: Client,
    bot_token: String,
    api_url: Url,
}

#[derive(Serialize)]
struct PostMessageForm<'a> {
    token: &'a str,
    channel: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    thread_ts: Option<&'a str>,
}

impl SlackClient {
    pub fn new(bot_token: String, api_url: Url) -> Self {
        Self {
            http: Client::new(),
            bot_token,
            api_url,
        }
    }

    fn request(&self, message: &PostMessage) -> reqwest::RequestBuilder {
        let form = PostMessageForm {
            token: &self.bot_token,
            channel: &message.channel,
            text: &message.text,
            thread_ts: message.thread_ts.as_deref(),
        };

        self.http.post(self.api_url.clone()).form(&form)
    }
}

#[async_trait]
impl Notifier for SlackClient {
    async fn post_message(&self, message: &PostMessage) -> Result<()> {
        tracing::info!(
            channel = %message.channel,
            thread_ts = message.thread_ts.as_deref().unwrap_or("-"),
            "posting announcement"
        );

        let response = self.request(message).send().await?;
        let status = response.status();
        let body = response.text().await?;

        // chat.postMessage reports failures as `"ok": false` with a 200; not acted on.
        tracing::debug!(%status, %body, "chat.postMessage response");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_API_URL;

    fn client() -> SlackClient {
        SlackClient::new(
            "xoxb-token".to_string(),
            Url::parse(DEFAULT_API_URL).unwrap(),
        )
    }

    fn form_body(message: &PostMessage) -> (reqwest::Request, String) {
        let request = client().request(message).build().unwrap();
        let body = request
            .body()
            .and_then(|b| b.as_bytes())
            .map(|b| String::from_utf8(b.to_vec()).unwrap())
            .unwrap();
        (request, body)
    }

    #[test]
    fn test_form_without_thread() {
        let (request, body) = form_body(&PostMessage {
            channel: "C024BE91L".to_string(),
            text: "<@U123>. Glassware.".to_string(),
            thread_ts: None,
        });

        assert_eq!(request.method(), reqwest::Method::POST);
        assert_eq!(request.url().as_str(), DEFAULT_API_URL);
        assert_eq!(
            request.headers()[reqwest::header::CONTENT_TYPE],
            "application/x-www-form-urlencoded"
        );
        assert_eq!(
            body,
            "token=xoxb-token&channel=C024BE91L&text=%3C%40U123%3E.+Glassware."
        );
    }

    #[test]
    fn test_form_with_thread() {
        let (_, body) = form_body(&PostMessage {
            channel: "C1".to_string(),
            text: "hi".to_string(),
            thread_ts: Some("123.456".to_string()),
        });
        assert_eq!(body, "token=xoxb-token&channel=C1&text=hi&thread_ts=123.456");
    }
}

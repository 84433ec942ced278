use chrono::Utc;
use serde_json::json;

use crate::auth;
use crate::cli::SignArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::output;

pub fn run(settings: &Settings, args: SignArgs) -> Result<()> {
    let raw_body = super::read_input(args.file.as_deref())?;
    let timestamp = args
        .timestamp
        .unwrap_or_else(|| Utc::now().timestamp())
        .to_string();

    let signature = auth::signature(&settings.signing_secret, &timestamp, &raw_body);

    if output::is_json_output() {
        println!(
            "{}",
            json!({ "timestamp": timestamp, "signature": signature })
        );
    } else {
        output::print_message(&format!("X-Slack-Request-Timestamp: {timestamp}"));
        output::print_message(&format!("X-Slack-Signature: {signature}"));
    }

    Ok(())
}

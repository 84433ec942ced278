use chrono::Utc;
use serde_json::Value;

use crate::cli::HandleArgs;
use crate::client::SlackClient;
use crate::config::Settings;
use crate::error::Result;
use crate::handler::EventHandler;
use crate::output;
use crate::types::Invocation;

pub async fn run(settings: &Settings, args: HandleArgs) -> Result<()> {
    let input = super::read_input(args.file.as_deref())?;
    let value: Value = serde_json::from_str(&input)?;

    let client = SlackClient::new(settings.bot_token.clone(), settings.api_url.clone());
    let handler = EventHandler::new(settings, client)?;

    let now = args.now.unwrap_or_else(|| Utc::now().timestamp());
    let response = handler.handle(Invocation::from_value(value), now).await?;

    output::print_response(&response);

    Ok(())
}

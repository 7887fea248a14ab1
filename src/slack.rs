//! Outbound Slack messaging.

use reqwest::Client;
use serde_json::json;
use tracing::{error, info};

use crate::TARGET_SLACK_REQUEST;

/// Posts a text message to a Slack channel. Failures are logged rather than
/// propagated; there is no further place to report them.
pub async fn send_message(
    client: &Client,
    api_base_url: &str,
    token: &str,
    channel: &str,
    text: &str,
) {
    let payload = json!({
        "channel": channel,
        "text": text,
        "unfurl_links": false,
        "unfurl_media": false,
    });

    info!(target: TARGET_SLACK_REQUEST, "Sending Slack message with payload: {}", payload);
    let url = format!("{}/chat.postMessage", api_base_url.trim_end_matches('/'));
    let res = client
        .post(&url)
        .header("Content-Type", "application/json")
        .bearer_auth(token)
        .body(payload.to_string())
        .send()
        .await;

    match res {
        Ok(response) => {
            if response.status().is_success() {
                info!(target: TARGET_SLACK_REQUEST, "Slack message sent successfully");
            } else {
                let error_text = response.text().await.unwrap_or_default();
                error!(target: TARGET_SLACK_REQUEST, "Error sending Slack message: {}", error_text);
                error!(target: TARGET_SLACK_REQUEST, "Payload: {}", payload);
            }
        }
        Err(err) => {
            error!(target: TARGET_SLACK_REQUEST, "Error sending Slack message: {:?}", err);
        }
    }
}

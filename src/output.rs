use std::sync::atomic::{AtomicBool, Ordering};

use serde_json::json;

use crate::types::Response;

/// Global output format setting
static OUTPUT_JSON: AtomicBool = AtomicBool::new(false);

pub fn set_json_output(json: bool) {
    OUTPUT_JSON.store(json, Ordering::Relaxed);
}

pub fn is_json_output() -> bool {
    OUTPUT_JSON.load(Ordering::Relaxed)
}

/// Print the handler response exactly as the invocation framework would return it.
///
/// Rejections have no body, so nothing is printed for them in plain mode.
pub fn print_response(response: &Response) {
    if is_json_output() {
        println!("{}", response_json(response));
    } else if !matches!(response, Response::Rejected(_)) {
        println!("{response}");
    }
}

fn response_json(response: &Response) -> serde_json::Value {
    match response {
        Response::Rejected(reason) => json!({
            "status": response.status(),
            "body": null,
            "reason": reason,
        }),
        _ => json!({
            "status": response.status(),
            "body": response.to_string(),
        }),
    }
}

/// Print a message (skipped in JSON mode, or prints simple object)
pub fn print_message(message: &str) {
    if is_json_output() {
        println!("{}", json!({ "message": message }));
    } else {
        println!("{message}");
    }
}

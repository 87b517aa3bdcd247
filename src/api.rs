//! Items Endpoint Wrappers
//!
//! Frontend bindings to the items HTTP endpoint, one function per request.
//! No auth, no retries; any non-2xx status is a uniform error string.

use crate::models::Item;

/// Fixed endpoint base. There is no configuration surface beyond this.
pub const BASE_URL: &str = "http://localhost:3000";

/// Decode an items payload. Split out of [`fetch_items`] so it can be
/// exercised without a network.
pub fn parse_items(body: &str) -> Result<Vec<Item>, String> {
    serde_json::from_str(body).map_err(|e| e.to_string())
}

/// `GET /items.json` - the full item list, in server order
pub async fn fetch_items() -> Result<Vec<Item>, String> {
    let response = reqwest::get(format!("{}/items.json", BASE_URL))
        .await
        .map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("GET /items.json returned {}", response.status()));
    }
    let body = response.text().await.map_err(|e| e.to_string())?;
    parse_items(&body)
}

/// `DELETE /items/{id}` - empty body, success is any 2xx status
pub async fn delete_item(id: u32) -> Result<(), String> {
    let response = reqwest::Client::new()
        .delete(format!("{}/items/{}", BASE_URL, id))
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if response.status().is_success() {
        Ok(())
    } else {
        Err(format!("DELETE /items/{} returned {}", id, response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_items() {
        let body = r#"[
            {"id": 1, "what": "Buy milk", "when": "Today"},
            {"id": 2, "what": "Call the bank", "when": "Tomorrow"}
        ]"#;
        let items = parse_items(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[0].what, "Buy milk");
        assert_eq!(items[1].when, "Tomorrow");
    }

    #[test]
    fn test_parse_empty_list() {
        assert_eq!(parse_items("[]").unwrap(), vec![]);
    }

    #[test]
    fn test_parse_rejects_malformed_body() {
        assert!(parse_items("not json").is_err());
        assert!(parse_items(r#"{"id": 1}"#).is_err());
    }
}

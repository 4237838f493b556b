use serde::{Deserialize, Serialize};

/// Snapshot of every service the supervisor reports, keyed by service name
/// with a free-form status string. Iteration order matches the order of the
/// backend's JSON object.
pub type StatusMap = serde_json::Map<String, serde_json::Value>;

/// Payload for `/containers/start` and `/containers/stop`.
/// The name is the user's selection, passed through unchanged.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ActionRequest {
    pub name: String,
}

/// Reply to a start/stop action. The message is shown to the user verbatim,
/// whatever the HTTP status said.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ActionReply {
    pub message: String,
}

/// Flattens a status map into `(service, status)` rows, keeping map order.
/// A non-string status renders as its JSON form.
pub fn status_rows(map: &StatusMap) -> Vec<(String, String)> {
    map.iter()
        .map(|(name, status)| {
            let status = status
                .as_str()
                .map(str::to_owned)
                .unwrap_or_else(|| status.to_string());
            (name.clone(), status)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rows_keep_map_order() {
        let map: StatusMap = serde_json::from_value(json!({
            "auth": "running",
            "db": "stopped",
            "web": "running"
        }))
        .unwrap();
        let rows = status_rows(&map);
        assert_eq!(
            rows,
            vec![
                ("auth".to_string(), "running".to_string()),
                ("db".to_string(), "stopped".to_string()),
                ("web".to_string(), "running".to_string()),
            ]
        );
    }

    #[test]
    fn non_string_status_renders_as_json() {
        let map: StatusMap = serde_json::from_value(json!({"web": 3})).unwrap();
        assert_eq!(status_rows(&map), vec![("web".to_string(), "3".to_string())]);
    }
}

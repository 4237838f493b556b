use crate::models::{ActionReply, ActionRequest, StatusMap};
use reqwest::Client as ReqwestClient;

/// Thin client over the supervisor's HTTP API. One method per endpoint;
/// rendering of the results is the panel's job.
pub struct PanelClient {
    http_client: ReqwestClient,
    base_url: String,
}

impl PanelClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: ReqwestClient::new(),
            base_url,
        }
    }

    /// Fetches the current status map from `GET /containers`.
    pub async fn list(&self) -> Result<StatusMap, Box<dyn std::error::Error>> {
        let url = format!("{}/containers", self.base_url);
        let response = self.http_client.get(&url).send().await?;
        tracing::debug!(status = %response.status(), %url, "list response");
        let map: StatusMap = response.json().await?;
        Ok(map)
    }

    /// Asks the supervisor to start the named service and returns its reply
    /// message.
    pub async fn start(&self, name: String) -> Result<String, Box<dyn std::error::Error>> {
        self.action("start", name).await
    }

    /// Asks the supervisor to stop the named service and returns its reply
    /// message.
    pub async fn stop(&self, name: String) -> Result<String, Box<dyn std::error::Error>> {
        self.action("stop", name).await
    }

    async fn action(&self, verb: &str, name: String) -> Result<String, Box<dyn std::error::Error>> {
        let url = format!("{}/containers/{}", self.base_url, verb);
        let response = self
            .http_client
            .post(&url)
            .json(&ActionRequest { name })
            .send()
            .await?;

        // The status code is not a failure signal: the supervisor answers
        // every action with a JSON body whose message is shown as-is.
        tracing::debug!(status = %response.status(), %url, "action response");
        let reply: ActionReply = response.json().await?;
        Ok(reply.message)
    }
}

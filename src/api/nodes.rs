//! Node listing, mutations, and the usage-aggregation fan-out.

use futures::future::join_all;
use tracing::{info, warn};

use super::models::{
    EnrichedNode, NodeCountResponse, NodeDescriptor, NodeUsageResponse, NodesResponse,
};
use super::{ApiClient, ApiError};

impl ApiClient {
    /// Fetches the raw node list from `GET /nodes`.
    ///
    /// Any failure here is fatal to the caller: without the list there
    /// is nothing to enrich, so transport errors, non-success statuses
    /// and undecodable bodies all map to
    /// [`ApiError::NodeListUnavailable`]. There is no retry.
    pub async fn list_nodes(&self) -> Result<Vec<NodeDescriptor>, ApiError> {
        let response = self
            .http
            .get(self.endpoint("/nodes"))
            .send()
            .await
            .map_err(|e| ApiError::NodeListUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::NodeListUnavailable(format!(
                "backend returned {status}"
            )));
        }

        let body: NodesResponse = response
            .json()
            .await
            .map_err(|e| ApiError::NodeListUnavailable(e.to_string()))?;
        Ok(body.nodes)
    }

    /// Usage sample for a single node, from `GET /nodes/{id}?usage=true`.
    pub async fn node_usage(&self, id: &str) -> Result<Option<String>, reqwest::Error> {
        let url = format!(
            "{}?usage=true",
            self.endpoint(&format!("/nodes/{}", urlencoding::encode(id)))
        );
        let body: NodeUsageResponse = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(body.usage)
    }

    /// One aggregation cycle: fetch the node list, then fetch every
    /// node's usage concurrently, joining only once all fetches have
    /// settled.
    ///
    /// The result has the same length and order as the node list. A
    /// failed usage fetch leaves that node's `usage` empty; it never
    /// removes the node from the result or aborts the batch.
    pub async fn fetch_enriched_nodes(&self) -> Result<Vec<EnrichedNode>, ApiError> {
        let nodes = self.list_nodes().await?;

        let fetches = nodes.into_iter().map(|node| async move {
            match self.node_usage(&node.id).await {
                Ok(usage) => EnrichedNode { node, usage },
                Err(e) => {
                    warn!(node_id = %node.id, error = %e, "Failed to fetch usage for node.");
                    EnrichedNode { node, usage: None }
                }
            }
        });

        Ok(join_all(fetches).await)
    }

    pub async fn count_nodes(&self) -> Result<u64, ApiError> {
        let body: NodeCountResponse = self
            .http
            .get(self.endpoint("/nodes/count"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(body.count)
    }

    /// Registers a node with the backend. The backend expects a
    /// multipart form with `name` and `url` fields.
    pub async fn add_node(&self, name: &str, url: &str) -> Result<(), ApiError> {
        let form = reqwest::multipart::Form::new()
            .text("name", name.to_string())
            .text("url", url.to_string());

        let response = self
            .http
            .post(self.endpoint("/nodes"))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            return Err(ApiError::MutationFailed(format!(
                "failed to add node: backend returned {status}: {body}"
            )));
        }

        info!(name = %name, "Node registered.");
        Ok(())
    }

    pub async fn delete_node(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.endpoint(&format!("/nodes/{}", urlencoding::encode(id))))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            return Err(ApiError::MutationFailed(format!(
                "failed to delete node {id}: backend returned {status}: {body}"
            )));
        }

        info!(node_id = %id, "Node removed.");
        Ok(())
    }
}

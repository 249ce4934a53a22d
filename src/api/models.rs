use serde::{Deserialize, Serialize};

/// A node as reported by the backend. Immutable once fetched; the
/// backend assigns the id and it is stable across cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDescriptor {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct NodesResponse {
    #[serde(default)]
    pub message: String,
    pub nodes: Vec<NodeDescriptor>,
}

/// Response for `GET /nodes/{id}?usage=true`. Only the usage field is
/// interpreted; the echoed node fields are ignored.
#[derive(Debug, Deserialize)]
pub struct NodeUsageResponse {
    pub usage: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NodeCountResponse {
    #[serde(default)]
    pub message: String,
    pub count: u64,
}

/// A node plus its raw usage sample (`"<usedBytes>,<totalBytes>"`),
/// when one could be retrieved. Built fresh on every aggregation cycle
/// and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedNode {
    #[serde(flatten)]
    pub node: NodeDescriptor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
}

/// One piece of content pinned on the fleet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostedUser {
    pub name: String,
    pub node: String,
    pub hash: String,
    pub file_size: u64,
}

#[derive(Debug, Deserialize)]
pub struct HostedUsersResponse {
    #[serde(default)]
    pub message: String,
    pub users: Vec<HostedUser>,
}

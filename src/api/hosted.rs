//! Hosted (pinned) content queries.

use super::models::{HostedUser, HostedUsersResponse};
use super::{ApiClient, ApiError};

/// Public gateway used for link-out. The hash is embedded as-is; the
/// backend is trusted to hand out well-formed CIDs.
pub const IPFS_GATEWAY: &str = "https://ipfs.io/ipfs";

pub fn gateway_url(hash: &str) -> String {
    format!("{IPFS_GATEWAY}/{hash}")
}

impl ApiClient {
    pub async fn hosted_users(&self) -> Result<Vec<HostedUser>, ApiError> {
        let body: HostedUsersResponse = self
            .http
            .get(self.endpoint("/hosted"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(body.users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_url_embeds_hash_verbatim() {
        assert_eq!(
            gateway_url("QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG"),
            "https://ipfs.io/ipfs/QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG"
        );
    }
}

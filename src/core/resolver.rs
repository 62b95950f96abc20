//! Workspace resolution
//!
//! Validates a workspace handle against the API and retrieves its
//! collection inventory. Workspaces are fetched fresh on every call.

use crate::adapters::api::ApiClient;
use crate::domain::{CollectionSummary, ExportError, Result, Workspace, WorkspaceHandle, WorkspaceSummary};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

/// Read-only view of workspaces and their collections
pub struct Resolver {
    client: Arc<ApiClient>,
}

impl Resolver {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List every workspace the credential can see
    pub async fn list_workspaces(&self) -> Result<Vec<WorkspaceSummary>> {
        let workspaces = self.client.get_workspaces().await.map_err(map_auth_error)?;
        tracing::info!(count = workspaces.len(), "Fetched workspaces");
        Ok(workspaces)
    }

    /// Fetch the workspace behind `handle`
    ///
    /// # Errors
    ///
    /// - [`ExportError::InvalidCredential`] when the API answers 401
    /// - [`ExportError::WorkspaceNotFound`] when it answers 404; the message
    ///   carries the handle as originally supplied
    /// - any other API error unchanged
    pub async fn validate_workspace(&self, handle: &WorkspaceHandle) -> Result<Workspace> {
        tracing::debug!(
            workspace = %handle.original(),
            workspace_id = %handle.id(),
            "Validating workspace"
        );

        let workspace = self
            .client
            .get_workspace(handle.id())
            .await
            .map_err(|e| map_workspace_error(handle, e))?
            .ok_or_else(|| {
                ExportError::Serialization(format!(
                    "Response for workspace {} has no workspace record",
                    handle.original()
                ))
            })?;

        tracing::info!(
            workspace_id = %workspace.id,
            workspace_name = %workspace.name,
            "Workspace validated"
        );
        Ok(workspace)
    }

    /// List the collections of the workspace behind `handle`
    ///
    /// The workspace record is read leniently: a body without a record, a
    /// record without a collection list, an unreadable list and an empty
    /// list all raise [`ExportError::EmptyInventory`].
    ///
    /// # Errors
    ///
    /// The 401/404 mapping of [`Resolver::validate_workspace`], any other
    /// API error unchanged, plus [`ExportError::EmptyInventory`].
    pub async fn list_collections(&self, handle: &WorkspaceHandle) -> Result<Vec<CollectionSummary>> {
        tracing::debug!(
            workspace = %handle.original(),
            workspace_id = %handle.id(),
            "Fetching workspace inventory"
        );

        let body = match self.client.get_workspace_raw(handle.id()).await {
            Ok(body) => body,
            Err(ExportError::Serialization(reason)) => {
                tracing::warn!(workspace_id = %handle.id(), %reason, "Workspace response is not JSON");
                return Err(ExportError::EmptyInventory(handle.original().to_string()));
            }
            Err(e) => return Err(map_workspace_error(handle, e)),
        };

        match read_inventory(&body) {
            Inventory::Collections(collections) => {
                tracing::info!(
                    workspace_id = %handle.id(),
                    count = collections.len(),
                    "Fetched collections"
                );
                Ok(collections)
            }
            Inventory::Empty => {
                tracing::warn!(workspace_id = %handle.id(), "Workspace has no collections");
                Err(ExportError::EmptyInventory(handle.original().to_string()))
            }
            Inventory::NoList => {
                tracing::warn!(
                    workspace_id = %handle.id(),
                    "Workspace record carries no collection list"
                );
                Err(ExportError::EmptyInventory(handle.original().to_string()))
            }
            Inventory::NoRecord => {
                tracing::warn!(workspace_id = %handle.id(), "Response has no workspace record");
                Err(ExportError::EmptyInventory(handle.original().to_string()))
            }
            Inventory::Malformed(reason) => {
                tracing::warn!(
                    workspace_id = %handle.id(),
                    %reason,
                    "Workspace collection list is malformed"
                );
                Err(ExportError::EmptyInventory(handle.original().to_string()))
            }
        }
    }
}

/// Outcome of reading a `GET /workspaces/{id}` body
#[derive(Debug, PartialEq)]
enum Inventory {
    Collections(Vec<CollectionSummary>),
    Empty,
    NoList,
    NoRecord,
    Malformed(String),
}

fn read_inventory(body: &Value) -> Inventory {
    let Some(record) = body.get("workspace").filter(|r| r.is_object()) else {
        return Inventory::NoRecord;
    };

    match record.get("collections") {
        None | Some(Value::Null) => Inventory::NoList,
        Some(list) => match Vec::<CollectionSummary>::deserialize(list) {
            Ok(collections) if collections.is_empty() => Inventory::Empty,
            Ok(collections) => Inventory::Collections(collections),
            Err(e) => Inventory::Malformed(e.to_string()),
        },
    }
}

fn map_workspace_error(handle: &WorkspaceHandle, err: ExportError) -> ExportError {
    match err.status() {
        Some(404) => ExportError::WorkspaceNotFound(handle.original().to_string()),
        _ => map_auth_error(err),
    }
}

fn map_auth_error(err: ExportError) -> ExportError {
    match err {
        ExportError::Remote {
            status: 401,
            message,
            ..
        } => ExportError::InvalidCredential(message),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{secret_string, ApiConfig};
    use serde_json::json;
    use test_case::test_case;

    async fn resolver_for(server: &mockito::ServerGuard) -> Resolver {
        let config = ApiConfig {
            base_url: server.url(),
            api_key: Some(secret_string("PMAK-test".to_string())),
            ..Default::default()
        };
        Resolver::new(Arc::new(ApiClient::new(&config).unwrap()))
    }

    #[tokio::test]
    async fn test_validate_workspace_normalizes_handle() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/workspaces/ws1")
            .with_status(200)
            .with_body(json!({"workspace": {"id": "ws1", "name": "Team"}}).to_string())
            .create_async()
            .await;

        let resolver = resolver_for(&server).await;
        let handle = WorkspaceHandle::new(" workspace:ws1 ").unwrap();
        let workspace = resolver.validate_workspace(&handle).await.unwrap();

        mock.assert_async().await;
        assert_eq!(workspace.name, "Team");
    }

    #[tokio::test]
    async fn test_validate_workspace_not_found_keeps_original_handle() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/workspaces/missing-ws")
            .with_status(404)
            .with_body(r#"{"error":{"name":"instanceNotFoundError","message":"not found"}}"#)
            .create_async()
            .await;

        let resolver = resolver_for(&server).await;
        let handle = WorkspaceHandle::new("workspace-missing-ws").unwrap();
        let err = resolver.validate_workspace(&handle).await.unwrap_err();

        match err {
            ExportError::WorkspaceNotFound(ref original) => {
                assert_eq!(original, "workspace-missing-ws")
            }
            other => panic!("Expected WorkspaceNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_validate_workspace_unauthorized() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/workspaces/ws1")
            .with_status(401)
            .with_body(r#"{"error":{"name":"AuthenticationError","message":"Invalid API Key"}}"#)
            .create_async()
            .await;

        let resolver = resolver_for(&server).await;
        let handle = WorkspaceHandle::new("ws1").unwrap();
        let err = resolver.validate_workspace(&handle).await.unwrap_err();

        assert!(matches!(err, ExportError::InvalidCredential(ref m) if m == "Invalid API Key"));
    }

    #[tokio::test]
    async fn test_validate_workspace_other_errors_propagate() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/workspaces/ws1")
            .with_status(500)
            .create_async()
            .await;

        let resolver = resolver_for(&server).await;
        let handle = WorkspaceHandle::new("ws1").unwrap();
        let err = resolver.validate_workspace(&handle).await.unwrap_err();

        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_list_collections_empty_and_missing() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/workspaces/empty")
            .with_status(200)
            .with_body(json!({"workspace": {"id": "empty", "name": "E", "collections": []}}).to_string())
            .create_async()
            .await;
        server
            .mock("GET", "/workspaces/bare")
            .with_status(200)
            .with_body(json!({"workspace": {"id": "bare", "name": "B"}}).to_string())
            .create_async()
            .await;

        let resolver = resolver_for(&server).await;

        for raw in ["empty", "bare"] {
            let handle = WorkspaceHandle::new(raw).unwrap();
            let err = resolver.list_collections(&handle).await.unwrap_err();
            assert!(matches!(err, ExportError::EmptyInventory(ref h) if h == raw));
        }
    }

    #[test_case(r#"{}"# ; "no workspace record")]
    #[test_case(r#"{"workspace":null}"# ; "null workspace record")]
    #[test_case(r#"{"workspace":{"id":"odd","name":"O","collections":"oops"}}"# ; "collections not a list")]
    #[test_case(r#"{"workspace":{"id":"odd","name":"O","collections":[{"name":"no uid"}]}}"# ; "entry without uid")]
    #[test_case("<html>gateway</html>" ; "body not json")]
    #[tokio::test]
    async fn test_list_collections_malformed_is_empty_inventory(body: &str) {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/workspaces/odd")
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let resolver = resolver_for(&server).await;
        let handle = WorkspaceHandle::new("workspace-odd").unwrap();
        let err = resolver.list_collections(&handle).await.unwrap_err();

        assert!(
            matches!(err, ExportError::EmptyInventory(ref h) if h == "workspace-odd"),
            "got {err:?}"
        );
    }

    #[tokio::test]
    async fn test_list_collections_record_without_name() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/workspaces/ws1")
            .with_status(200)
            .with_body(r#"{"workspace":{"id":"ws1","collections":[{"uid":"col1","name":"A"}]}}"#)
            .create_async()
            .await;

        let resolver = resolver_for(&server).await;
        let handle = WorkspaceHandle::new("ws1").unwrap();
        let collections = resolver.list_collections(&handle).await.unwrap();

        assert_eq!(collections.len(), 1);
        assert_eq!(collections[0].uid.as_str(), "col1");
    }

    #[tokio::test]
    async fn test_list_collections_keeps_not_found_mapping() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/workspaces/gone")
            .with_status(404)
            .create_async()
            .await;

        let resolver = resolver_for(&server).await;
        let handle = WorkspaceHandle::new("workspace:gone").unwrap();
        let err = resolver.list_collections(&handle).await.unwrap_err();

        assert!(matches!(err, ExportError::WorkspaceNotFound(ref h) if h == "workspace:gone"));
    }

    #[test]
    fn test_read_inventory_cases() {
        assert_eq!(read_inventory(&json!({})), Inventory::NoRecord);
        assert_eq!(read_inventory(&json!({"workspace": "ws1"})), Inventory::NoRecord);
        assert_eq!(read_inventory(&json!({"workspace": {"id": "ws1"}})), Inventory::NoList);
        assert_eq!(
            read_inventory(&json!({"workspace": {"collections": null}})),
            Inventory::NoList
        );
        assert_eq!(
            read_inventory(&json!({"workspace": {"collections": []}})),
            Inventory::Empty
        );
        assert!(matches!(
            read_inventory(&json!({"workspace": {"collections": {"uid": "col1"}}})),
            Inventory::Malformed(_)
        ));
        assert!(matches!(
            read_inventory(&json!({"workspace": {"collections": [{"uid": "col1", "name": "A"}]}})),
            Inventory::Collections(ref c) if c.len() == 1
        ));
    }

    #[tokio::test]
    async fn test_list_workspaces_unauthorized() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/workspaces")
            .with_status(401)
            .create_async()
            .await;

        let resolver = resolver_for(&server).await;
        let err = resolver.list_workspaces().await.unwrap_err();
        assert!(matches!(err, ExportError::InvalidCredential(_)));
    }
}

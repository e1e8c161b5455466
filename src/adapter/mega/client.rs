//! MEGA Client Adapter
//!
//! RemoteStorage / StorageConnector implementations on top of the `mega` crate.
//! The crate does not return handles for created nodes, so every create or
//! upload is followed by a node tree refresh that picks the parent's new
//! child with the requested name.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use tokio::sync::Mutex;
use tokio_util::compat::TokioAsyncReadCompatExt;

use super::progress_reader::ProgressReader;
use crate::domain::entities::remote_node::{RemoteDir, RemoteFile};
use crate::domain::repositories::remote_storage::{ProgressSender, RemoteStorage, StorageConnector};

/// Logs in to MEGA with email and password
pub struct MegaConnector;

impl MegaConnector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MegaConnector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl StorageConnector for MegaConnector {
    async fn connect(&self, email: &str, password: &str) -> Result<Box<dyn RemoteStorage>> {
        let http_client = reqwest::Client::new();
        let mut client = mega::Client::builder()
            .build(http_client)
            .context("Failed to create MEGA client")?;

        client
            .login(email, password, None)
            .await
            .context("MEGA authentication failed")?;
        info!("Logged in as {}", email);

        let nodes = client
            .fetch_own_nodes()
            .await
            .context("Failed to fetch remote node tree")?;
        let root = nodes
            .cloud_drive()
            .map(|node| RemoteDir::new(node.handle()))
            .context("Account has no Cloud Drive root")?;
        debug!("Cloud Drive root: {}", root);

        Ok(Box::new(MegaStorage::new(client, nodes, root)))
    }
}

/// Logged-in MEGA session with a cached copy of the account's node tree
pub struct MegaStorage {
    client: mega::Client,
    nodes: Mutex<mega::Nodes>,
    root: RemoteDir,
}

impl MegaStorage {
    pub fn new(client: mega::Client, nodes: mega::Nodes, root: RemoteDir) -> Self {
        Self {
            client,
            nodes: Mutex::new(nodes),
            root,
        }
    }

    /// Refreshes the node tree and returns the handle of the child of
    /// `parent` named `name` that is not in `known_children`.
    async fn resolve_new_child(
        &self,
        parent: &RemoteDir,
        name: &str,
        known_children: &HashSet<String>,
    ) -> Result<String> {
        let fresh = self
            .client
            .fetch_own_nodes()
            .await
            .context("Failed to refresh remote node tree")?;

        let handle = {
            let parent_node = fresh
                .get_node_by_handle(parent.handle())
                .with_context(|| format!("Remote folder {} disappeared", parent))?;

            select_new_child(
                parent_node.children(),
                known_children,
                |handle| fresh.get_node_by_handle(handle).map(|node| node.name()),
                name,
            )
            .with_context(|| format!("Created node {} not found under {}", name, parent))?
        };

        *self.nodes.lock().await = fresh;
        debug!("Resolved {} under {} to {}", name, parent, handle);
        Ok(handle)
    }
}

/// Picks the child named `name` whose handle is not in `known_children`.
///
/// Same-named siblings that existed before the call are skipped, so the
/// returned handle belongs to the node the call created.
pub fn select_new_child<'a, F>(
    children: &[String],
    known_children: &HashSet<String>,
    name_of: F,
    name: &str,
) -> Option<String>
where
    F: Fn(&str) -> Option<&'a str>,
{
    children
        .iter()
        .filter(|handle| !known_children.contains(handle.as_str()))
        .find(|handle| name_of(handle.as_str()) == Some(name))
        .cloned()
}

fn child_handles(node: &mega::Node) -> HashSet<String> {
    node.children().iter().cloned().collect()
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl RemoteStorage for MegaStorage {
    fn root_dir(&self) -> RemoteDir {
        self.root.clone()
    }

    async fn create_dir(&self, parent: &RemoteDir, name: &str) -> Result<RemoteDir> {
        let known_children = {
            let nodes = self.nodes.lock().await;
            let parent_node = nodes
                .get_node_by_handle(parent.handle())
                .with_context(|| format!("Remote folder {} not found", parent))?;
            let known_children = child_handles(parent_node);

            self.client
                .create_folder(parent_node, name)
                .await
                .context("MEGA folder creation failed")?;
            known_children
        };

        let handle = self.resolve_new_child(parent, name, &known_children).await?;
        Ok(RemoteDir::new(handle))
    }

    async fn upload_file(
        &self,
        parent: &RemoteDir,
        local_path: &Path,
        name: &str,
        size: u64,
        progress: Option<ProgressSender>,
    ) -> Result<RemoteFile> {
        let file = tokio::fs::File::open(local_path)
            .await
            .with_context(|| format!("Failed to open {}", local_path.display()))?;
        let reader = ProgressReader::new(file.compat(), progress);

        let known_children = {
            let nodes = self.nodes.lock().await;
            let parent_node = nodes
                .get_node_by_handle(parent.handle())
                .with_context(|| format!("Remote folder {} not found", parent))?;
            let known_children = child_handles(parent_node);

            self.client
                .upload_node(parent_node, name, size, reader, mega::LastModified::Now)
                .await
                .context("MEGA upload failed")?;
            known_children
        };

        let handle = self.resolve_new_child(parent, name, &known_children).await?;
        Ok(RemoteFile::new(handle))
    }
}

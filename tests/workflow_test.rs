//! Workflow Integration Tests
//!
//! UploadWorkflow の統合テスト（実ファイルシステム + 偽のリモートストレージ）

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use tempfile::TempDir;

use megaup::adapter::progress::LineDisplayFactory;
use megaup::application::dto::upload_request::{UploadRequest, UploadTarget};
use megaup::domain::entities::remote_node::{RemoteDir, RemoteFile, RemoteNode};
use megaup::domain::errors::UploadError;
use megaup::domain::repositories::remote_storage::{
    ProgressSender, RemoteStorage, StorageConnector,
};
use megaup::driver::workflow::UploadWorkflow;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Call {
    Mkdir { parent: String, name: String },
    Upload { parent: String, name: String, size: u64 },
}

/// リモートパスをハンドルとして使う偽のストレージ
struct FakeStorage {
    calls: Arc<Mutex<Vec<Call>>>,
    progress_total: Arc<Mutex<u64>>,
}

#[async_trait]
impl RemoteStorage for FakeStorage {
    fn root_dir(&self) -> RemoteDir {
        RemoteDir::new("/Root")
    }

    async fn create_dir(&self, parent: &RemoteDir, name: &str) -> Result<RemoteDir> {
        self.calls.lock().unwrap().push(Call::Mkdir {
            parent: parent.handle().to_string(),
            name: name.to_string(),
        });
        Ok(RemoteDir::new(format!("{}/{}", parent, name)))
    }

    async fn upload_file(
        &self,
        parent: &RemoteDir,
        local_path: &Path,
        name: &str,
        size: u64,
        progress: Option<ProgressSender>,
    ) -> Result<RemoteFile> {
        let content = fs::read(local_path)?;
        assert_eq!(content.len() as u64, size);

        if let Some(sender) = progress {
            for chunk in content.chunks(3) {
                sender.send(chunk.len() as u64).await?;
                *self.progress_total.lock().unwrap() += chunk.len() as u64;
            }
        }

        self.calls.lock().unwrap().push(Call::Upload {
            parent: parent.handle().to_string(),
            name: name.to_string(),
            size,
        });
        Ok(RemoteFile::new(format!("node:{}/{}", parent, name)))
    }
}

#[derive(Default)]
struct FakeConnector {
    connects: AtomicUsize,
    reject: bool,
    calls: Arc<Mutex<Vec<Call>>>,
    progress_total: Arc<Mutex<u64>>,
}

impl FakeConnector {
    fn rejecting() -> Self {
        Self {
            reject: true,
            ..Self::default()
        }
    }

    fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl StorageConnector for FakeConnector {
    async fn connect(&self, email: &str, password: &str) -> Result<Box<dyn RemoteStorage>> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        if self.reject || password != "correct horse" {
            anyhow::bail!("invalid credentials for {}", email);
        }
        Ok(Box::new(FakeStorage {
            calls: self.calls.clone(),
            progress_total: self.progress_total.clone(),
        }))
    }
}

fn request(target: UploadTarget) -> UploadRequest {
    UploadRequest::new(
        "alice@example.com".to_string(),
        "correct horse".to_string(),
        target,
    )
    .with_channel_capacity(2)
}

fn workflow(connector: Arc<FakeConnector>) -> UploadWorkflow {
    UploadWorkflow::new(connector, Arc::new(LineDisplayFactory::new()))
}

/// テスト用のディレクトリツリーを作成
///
/// backup/
///   notes.txt (11 bytes)
///   docs/
///     a.md (5 bytes)
///     drafts/ (empty)
///   media/
///     clip.bin (1000 bytes)
fn create_tree(dir: &Path) -> PathBuf {
    let root = dir.join("backup");
    fs::create_dir_all(root.join("docs/drafts")).unwrap();
    fs::create_dir_all(root.join("media")).unwrap();
    fs::write(root.join("notes.txt"), b"hello world").unwrap();
    fs::write(root.join("docs/a.md"), b"# doc").unwrap();
    fs::write(root.join("media/clip.bin"), vec![9u8; 1000]).unwrap();
    root
}

#[tokio::test]
async fn test_directory_upload_mirrors_tree() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_tree(temp_dir.path());
    let connector = Arc::new(FakeConnector::default());

    let outcome = workflow(connector.clone())
        .execute(request(UploadTarget::Path(root)))
        .await
        .unwrap();

    assert_eq!(connector.connects(), 1);
    assert_eq!(outcome.root, RemoteNode::Dir(RemoteDir::new("/Root/backup")));
    assert_eq!(outcome.folders_created, 4);
    assert_eq!(outcome.files_uploaded, 3);
    assert_eq!(outcome.bytes_uploaded, 1016);

    let calls = connector.calls();
    assert_eq!(calls.len(), 7);

    // OSの読み取り順は不定なので集合で比較する
    let expected: HashSet<Call> = [
        Call::Mkdir {
            parent: "/Root".into(),
            name: "backup".into(),
        },
        Call::Mkdir {
            parent: "/Root/backup".into(),
            name: "docs".into(),
        },
        Call::Mkdir {
            parent: "/Root/backup/docs".into(),
            name: "drafts".into(),
        },
        Call::Mkdir {
            parent: "/Root/backup".into(),
            name: "media".into(),
        },
        Call::Upload {
            parent: "/Root/backup".into(),
            name: "notes.txt".into(),
            size: 11,
        },
        Call::Upload {
            parent: "/Root/backup/docs".into(),
            name: "a.md".into(),
            size: 5,
        },
        Call::Upload {
            parent: "/Root/backup/media".into(),
            name: "clip.bin".into(),
            size: 1000,
        },
    ]
    .into_iter()
    .collect();
    assert_eq!(calls.iter().cloned().collect::<HashSet<_>>(), expected);

    // 前順序：どの呼び出しも、親フォルダの作成より後に来る
    let mut created: HashSet<String> = HashSet::from(["/Root".to_string()]);
    for call in &calls {
        match call {
            Call::Mkdir { parent, name } => {
                assert!(created.contains(parent), "{name} before its parent");
                created.insert(format!("{}/{}", parent, name));
            }
            Call::Upload { parent, name, .. } => {
                assert!(created.contains(parent), "{name} before its parent");
            }
        }
    }
    assert_eq!(calls[0], Call::Mkdir {
        parent: "/Root".into(),
        name: "backup".into(),
    });

    assert_eq!(*connector.progress_total.lock().unwrap(), 1016);
}

#[tokio::test]
async fn test_single_file_upload_reports_handle() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("invoice.pdf");
    fs::write(&file, b"%PDF-1.7").unwrap();
    let connector = Arc::new(FakeConnector::default());

    let outcome = workflow(connector.clone())
        .execute(request(UploadTarget::Path(file)))
        .await
        .unwrap();

    assert!(!outcome.is_directory());
    assert_eq!(outcome.root.handle(), "node:/Root/invoice.pdf");
    assert_eq!(
        connector.calls(),
        vec![Call::Upload {
            parent: "/Root".into(),
            name: "invoice.pdf".into(),
            size: 8,
        }]
    );
}

#[tokio::test]
async fn test_empty_directory_creates_folder() {
    let temp_dir = TempDir::new().unwrap();
    let empty = temp_dir.path().join("nothing");
    fs::create_dir(&empty).unwrap();
    let connector = Arc::new(FakeConnector::default());

    let outcome = workflow(connector.clone())
        .execute(request(UploadTarget::Path(empty)))
        .await
        .unwrap();

    assert_eq!(outcome.folders_created, 1);
    assert_eq!(outcome.files_uploaded, 0);
    assert_eq!(
        connector.calls(),
        vec![Call::Mkdir {
            parent: "/Root".into(),
            name: "nothing".into(),
        }]
    );
}

#[tokio::test]
async fn test_missing_path_never_logs_in() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("does-not-exist");
    let connector = Arc::new(FakeConnector::default());

    let err = workflow(connector.clone())
        .execute(request(UploadTarget::Path(missing.clone())))
        .await
        .unwrap_err();

    assert!(matches!(err, UploadError::PathNotFound(ref path) if *path == missing));
    assert_eq!(connector.connects(), 0);
    assert!(connector.calls().is_empty());
}

#[tokio::test]
async fn test_file_target_rejects_directory() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_tree(temp_dir.path());
    let connector = Arc::new(FakeConnector::default());

    let err = workflow(connector.clone())
        .execute(request(UploadTarget::File(root)))
        .await
        .unwrap_err();

    assert!(err.is_usage());
    assert_eq!(connector.connects(), 0);
}

#[tokio::test]
async fn test_auth_failure_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_tree(temp_dir.path());
    let connector = Arc::new(FakeConnector::rejecting());

    let err = workflow(connector.clone())
        .execute(request(UploadTarget::Path(root)))
        .await
        .unwrap_err();

    assert!(matches!(err, UploadError::Auth { .. }));
    assert!(err.to_string().contains("invalid credentials for alice@example.com"));
    assert_eq!(connector.connects(), 1);
    assert!(connector.calls().is_empty());
}

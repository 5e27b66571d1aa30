use std::path::PathBuf;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use forge_logging::{forge_info, forge_warn};

use crate::export::{write_icon_pack, ExportOptions, PackIcon};
use crate::filename::pack_filename;
use crate::ingest::import_files;
use crate::types::{EngineEvent, ExportFailure};

type Clock = Arc<dyn Fn() -> String + Send + Sync>;

/// Engine-side configuration supplied by the frontend.
pub struct EngineConfig {
    /// Directory receiving exported packs and manifests.
    pub output_dir: PathBuf,
    /// Write a JSON manifest next to each exported pack.
    pub write_manifest: bool,
    /// Clock used for manifest timestamps; injected so exports stay
    /// deterministic under test.
    pub now_utc: Clock,
}

impl EngineConfig {
    pub fn default_with_output(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            write_manifest: true,
            now_utc: Arc::new(|| "unknown".to_string()),
        }
    }
}

enum EngineCommand {
    Import {
        paths: Vec<PathBuf>,
    },
    Export {
        collection: Option<(String, u64)>,
        icons: Vec<PackIcon>,
    },
}

/// Handle to the background pipeline: commands go in over a channel, events
/// come back via [`EngineHandle::try_recv`]. Cloning shares both channels.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let config = Arc::new(config);

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let config = config.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(&config, command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn import(&self, paths: Vec<PathBuf>) {
        let _ = self.cmd_tx.send(EngineCommand::Import { paths });
    }

    pub fn export(&self, collection: Option<(String, u64)>, icons: Vec<PackIcon>) {
        let _ = self.cmd_tx.send(EngineCommand::Export { collection, icons });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    config: &EngineConfig,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Import { paths } => {
            let batch = import_files(&paths).await;
            forge_info!(
                "import batch finished: {} loaded, {} failed",
                batch.icons.len(),
                batch.failed
            );
            let _ = event_tx.send(EngineEvent::ImportCompleted {
                icons: batch.icons,
                failed: batch.failed,
            });
        }
        EngineCommand::Export { collection, icons } => {
            let pack = pack_filename(
                collection
                    .as_ref()
                    .map(|(name, id)| (name.as_str(), *id)),
            );
            let manifest = config.write_manifest.then(|| manifest_filename(&pack));
            let options = ExportOptions {
                pack_filename: pack,
                manifest_filename: manifest,
                collection_name: collection.map(|(name, _)| name),
                generated_utc: (config.now_utc)(),
            };
            let output_dir = config.output_dir.clone();

            // Filesystem work stays off the async workers.
            let written = tokio::task::spawn_blocking(move || {
                write_icon_pack(&output_dir, &options, &icons)
            })
            .await;

            let result = match written {
                Ok(Ok(summary)) => {
                    forge_info!(
                        "exported {} icons to {}",
                        summary.icon_count,
                        summary.output_path.display()
                    );
                    Ok(summary)
                }
                Ok(Err(err)) => {
                    forge_warn!("export failed: {err}");
                    Err(ExportFailure {
                        message: err.to_string(),
                    })
                }
                Err(join_err) => {
                    forge_warn!("export task panicked: {join_err}");
                    Err(ExportFailure {
                        message: join_err.to_string(),
                    })
                }
            };
            let _ = event_tx.send(EngineEvent::ExportCompleted { result });
        }
    }
}

fn manifest_filename(pack_filename: &str) -> String {
    let stem = pack_filename.strip_suffix(".ts").unwrap_or(pack_filename);
    format!("{stem}.manifest.json")
}

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use forge_logging::{forge_info, forge_warn};
use iconforge_core::{Effect, ImportedIcon, Msg, PackEntry};
use iconforge_engine::{EngineEvent, EngineHandle, IconData, PackIcon};

/// Executes core effects on the engine and feeds engine events back into
/// the message channel.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, msg_tx: mpsc::Sender<Msg>) -> Self {
        let runner = Self { engine };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadSvgFiles { paths } => {
                    forge_info!("LoadSvgFiles count={}", paths.len());
                    self.engine.import(paths);
                }
                Effect::WriteIconPack {
                    collection,
                    entries,
                } => {
                    forge_info!(
                        "WriteIconPack icons={} collection={:?}",
                        entries.len(),
                        collection.as_ref().map(|c| c.name.as_str())
                    );
                    let collection = collection.map(|c| (c.name, c.collection_id.raw()));
                    let icons = entries.into_iter().map(map_entry).collect();
                    self.engine.export(collection, icons);
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                let msg = match event {
                    EngineEvent::ImportCompleted { icons, failed } => Msg::IconsImported {
                        icons: icons.into_iter().map(map_icon).collect(),
                        failed,
                    },
                    EngineEvent::ExportCompleted { result } => match result {
                        Ok(summary) => Msg::ExportFinished {
                            icon_count: summary.icon_count,
                            succeeded: true,
                        },
                        Err(failure) => {
                            forge_warn!("{failure}");
                            Msg::ExportFinished {
                                icon_count: 0,
                                succeeded: false,
                            }
                        }
                    },
                };
                if msg_tx.send(msg).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_icon(icon: IconData) -> ImportedIcon {
    ImportedIcon {
        name: icon.name,
        original_name: icon.original_name,
        content: icon.content,
        view_box: icon.view_box,
    }
}

fn map_entry(entry: PackEntry) -> PackIcon {
    PackIcon {
        name: entry.name,
        original_name: entry.original_name,
        content: entry.content,
        view_box: entry.view_box,
    }
}

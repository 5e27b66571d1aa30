use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use chrono::Utc;
use forge_logging::forge_info;
use iconforge_core::{update, AppState, AppViewModel, Msg};
use iconforge_engine::{is_svg_candidate, EngineConfig, EngineHandle};

use crate::cli::CliOptions;
use crate::effects::EffectRunner;

/// Overall deadline for any single engine round trip.
const ENGINE_TIMEOUT: Duration = Duration::from_secs(60);

pub fn run(options: CliOptions) -> Result<()> {
    let paths = collect_inputs(&options.inputs)?;
    if paths.is_empty() {
        bail!("no .svg files found in the given inputs");
    }
    forge_info!("starting import of {} files", paths.len());

    let mut config = EngineConfig::default_with_output(options.output_dir.clone());
    config.write_manifest = options.write_manifest;
    config.now_utc = std::sync::Arc::new(|| Utc::now().to_rfc3339());

    let (msg_tx, msg_rx) = mpsc::channel();
    let runner = EffectRunner::new(EngineHandle::new(config), msg_tx);
    let mut session = Session {
        state: AppState::new(),
        runner,
        msg_rx,
    };

    session.dispatch(Msg::FilesDropped(paths));
    session.pump_until(|view| view.last_import.is_some())?;

    let view = session.state.view();
    let import = view.last_import.clone().unwrap_or_default();
    println!("imported {} icons, {} files skipped", import.added, import.failed);
    if view.icon_count == 0 {
        bail!("none of the inputs produced an icon");
    }

    let collection = match &options.collection {
        Some(name) => Some(session.group_into_collection(name)?),
        None => None,
    };

    session.dispatch(Msg::ExportRequested { collection });
    session.pump_until(|view| view.last_export.is_some())?;

    let export = session
        .state
        .view()
        .last_export
        .context("export finished without an outcome")?;
    if !export.succeeded {
        bail!("export failed; see iconforge.log for details");
    }
    println!(
        "exported {} icons to {}",
        export.icon_count,
        options.output_dir.display()
    );
    Ok(())
}

struct Session {
    state: AppState,
    runner: EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
}

impl Session {
    fn dispatch(&mut self, msg: Msg) {
        let (next, effects) = update(std::mem::take(&mut self.state), msg);
        self.state = next;
        self.runner.run(effects);
    }

    /// Applies incoming engine messages until the view satisfies `done`.
    fn pump_until(&mut self, done: impl Fn(&AppViewModel) -> bool) -> Result<()> {
        let deadline = Instant::now() + ENGINE_TIMEOUT;
        loop {
            if done(&self.state.view()) {
                return Ok(());
            }
            if Instant::now() > deadline {
                bail!("timed out waiting for the engine");
            }
            match self.msg_rx.recv_timeout(Duration::from_millis(50)) {
                Ok(msg) => self.dispatch(msg),
                Err(mpsc::RecvTimeoutError::Timeout) => continue,
                Err(mpsc::RecvTimeoutError::Disconnected) => {
                    bail!("engine event channel closed unexpectedly")
                }
            }
        }
    }

    /// Creates a collection holding every imported icon and returns its id.
    fn group_into_collection(&mut self, name: &str) -> Result<iconforge_core::CollectionId> {
        self.dispatch(Msg::CollectionCreated {
            name: name.to_string(),
            description: None,
        });
        let view = self.state.view();
        let collection_id = view
            .collections
            .last()
            .context("collection was not created")?
            .collection_id;
        for icon in &view.icons {
            self.dispatch(Msg::IconAddedToCollection {
                icon_id: icon.icon_id,
                collection_id,
            });
        }
        Ok(collection_id)
    }
}

/// Files are taken as-is; directories are scanned one level deep for
/// `.svg` entries.
fn collect_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let entries = std::fs::read_dir(input)
                .with_context(|| format!("cannot read directory {}", input.display()))?;
            let mut found: Vec<PathBuf> = entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .filter(|path| path.is_file() && is_svg_candidate(path))
                .collect();
            found.sort();
            paths.extend(found);
        } else {
            paths.push(input.clone());
        }
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::collect_inputs;
    use std::path::PathBuf;

    #[test]
    fn directories_are_scanned_for_svg_files() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("b.svg"), "<svg/>").unwrap();
        std::fs::write(temp.path().join("a.svg"), "<svg/>").unwrap();
        std::fs::write(temp.path().join("note.txt"), "hi").unwrap();

        let paths = collect_inputs(&[temp.path().to_path_buf()]).unwrap();

        assert_eq!(
            paths,
            vec![temp.path().join("a.svg"), temp.path().join("b.svg")]
        );
    }

    #[test]
    fn loose_files_pass_through_even_without_extension() {
        // Non-svg loose files are rejected later by the engine, which keeps
        // the per-file failure accounting in one place.
        let paths = collect_inputs(&[PathBuf::from("whatever.png")]).unwrap();
        assert_eq!(paths, vec![PathBuf::from("whatever.png")]);
    }
}

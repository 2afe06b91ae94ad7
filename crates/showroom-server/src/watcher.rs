//! File watching for live reload.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc as async_mpsc;

/// Events emitted by the file watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// A configured stylesheet changed
    StyleChanged(PathBuf),

    /// The site configuration changed
    ConfigChanged(PathBuf),

    /// A public file was created, modified or removed
    AssetChanged(PathBuf),
}

impl WatchEvent {
    pub fn path(&self) -> &Path {
        match self {
            WatchEvent::StyleChanged(path)
            | WatchEvent::ConfigChanged(path)
            | WatchEvent::AssetChanged(path) => path,
        }
    }
}

/// File watcher for detecting changes.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
}

impl FileWatcher {
    /// Create a new file watcher for the given paths.
    ///
    /// Paths that do not exist are skipped. Returns the watcher and a channel
    /// to receive events; dropping the watcher stops the events.
    pub fn new(
        paths: &[PathBuf],
    ) -> Result<(Self, async_mpsc::Receiver<WatchEvent>), std::io::Error> {
        let (sync_tx, sync_rx) = mpsc::channel();
        let (async_tx, async_rx) = async_mpsc::channel(100);

        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if let Ok(event) = res {
                let _ = sync_tx.send(event);
            }
        })
        .map_err(std::io::Error::other)?;

        for path in paths {
            if path.exists() {
                watcher
                    .watch(path, RecursiveMode::Recursive)
                    .map_err(std::io::Error::other)?;
                tracing::debug!("Watching {}", path.display());
            } else {
                tracing::debug!("Not watching missing path {}", path.display());
            }
        }

        std::thread::spawn(move || {
            let mut last_event_time: Option<Instant> = None;
            let debounce_duration = Duration::from_millis(100);

            while let Ok(event) = sync_rx.recv() {
                // Debounce rapid events
                let now = Instant::now();
                if last_event_time.is_some_and(|last| now.duration_since(last) < debounce_duration) {
                    continue;
                }

                let mut forwarded = false;
                for path in &event.paths {
                    if let Some(e) = classify_event(path, &event.kind) {
                        forwarded = true;
                        if async_tx.blocking_send(e).is_err() {
                            return;
                        }
                    }
                }
                if forwarded {
                    last_event_time = Some(now);
                }
            }
        });

        Ok((Self { _watcher: watcher }, async_rx))
    }
}

/// Classify a notify event into a WatchEvent.
fn classify_event(path: &Path, kind: &notify::EventKind) -> Option<WatchEvent> {
    use notify::EventKind;

    if !matches!(
        kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    ) {
        return None;
    }

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let event = match ext {
        "css" => WatchEvent::StyleChanged(path.to_path_buf()),
        "toml" => WatchEvent::ConfigChanged(path.to_path_buf()),
        _ => WatchEvent::AssetChanged(path.to_path_buf()),
    };
    Some(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, ModifyKind, RemoveKind};
    use notify::EventKind;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn classifies_by_file_kind() {
        let modify = EventKind::Modify(ModifyKind::Any);

        assert_eq!(
            classify_event(Path::new("styles/brand.css"), &modify),
            Some(WatchEvent::StyleChanged(PathBuf::from("styles/brand.css")))
        );
        assert_eq!(
            classify_event(Path::new("site.toml"), &modify),
            Some(WatchEvent::ConfigChanged(PathBuf::from("site.toml")))
        );
        assert_eq!(
            classify_event(Path::new("public/logo.png"), &EventKind::Create(CreateKind::File)),
            Some(WatchEvent::AssetChanged(PathBuf::from("public/logo.png")))
        );
        assert_eq!(
            classify_event(Path::new("public/old.png"), &EventKind::Remove(RemoveKind::File))
                .map(|e| e.path().to_path_buf()),
            Some(PathBuf::from("public/old.png"))
        );
    }

    #[test]
    fn ignores_reads() {
        let access = EventKind::Access(AccessKind::Any);
        assert_eq!(classify_event(Path::new("site.toml"), &access), None);
    }

    #[tokio::test]
    async fn watches_file_changes() {
        let temp = tempdir().unwrap();
        let test_file = temp.path().join("brand.css");

        // Create the watcher first (so it catches file creation)
        let (watcher, mut rx) = FileWatcher::new(&[temp.path().to_path_buf()]).unwrap();

        // Give inotify time to set up
        tokio::time::sleep(Duration::from_millis(100)).await;

        fs::write(&test_file, ".a { color: red; }").unwrap();

        let event = tokio::time::timeout(Duration::from_secs(3), rx.recv()).await;

        // Keep watcher alive until we're done
        drop(watcher);

        let event = event
            .expect("timeout waiting for file watch event")
            .expect("channel should not be closed");
        assert!(matches!(event, WatchEvent::StyleChanged(_)));
    }

    #[test]
    fn skips_missing_paths() {
        let temp = tempdir().unwrap();
        let result = FileWatcher::new(&[temp.path().join("does-not-exist")]);
        assert!(result.is_ok());
    }
}

// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! File watcher for hot-reloading project files.
//!
//! Watches a project YAML file (or a directory of them) and emits
//! events when files change. Reloaded documents are parsed and
//! validated before they are surfaced, so a consumer only ever sees
//! well-formed projects or an error message.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::warn;

use super::ProjectFile;

/// Events emitted by the project watcher
#[derive(Debug, Clone)]
pub enum ProjectEvent {
    /// A project file changed and reloaded successfully
    Reloaded(Box<ProjectFile>),
    /// A project file changed but failed to parse or validate
    Error(String),
    /// A new file appeared in the watch directory
    FileCreated(PathBuf),
    /// A file disappeared from the watch directory
    FileDeleted(PathBuf),
}

/// Debounced project file watcher
pub struct ProjectWatcher {
    _watcher: RecommendedWatcher,
    event_receiver: Receiver<ProjectEvent>,
    watched_path: PathBuf,
}

impl ProjectWatcher {
    /// Create a watcher for the specified path.
    ///
    /// # Arguments
    /// * `path` - Path to watch (file or directory)
    /// * `debounce_ms` - Debounce duration in milliseconds (default: 500)
    pub fn new<P: AsRef<Path>>(path: P, debounce_ms: Option<u64>) -> Result<Self> {
        let watched_path = path.as_ref().to_path_buf();
        let debounce_duration = Duration::from_millis(debounce_ms.unwrap_or(500));

        let (event_tx, event_rx): (Sender<ProjectEvent>, Receiver<ProjectEvent>) =
            mpsc::channel();

        let watch_target = watched_path.clone();
        let (notify_tx, notify_rx): (Sender<Event>, Receiver<Event>) = mpsc::channel();

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    let _ = notify_tx.send(event);
                }
            },
            Config::default(),
        )
        .map_err(|e| anyhow!("Failed to create file watcher: {}", e))?;

        let mode = if watched_path.is_dir() {
            RecursiveMode::Recursive
        } else {
            RecursiveMode::NonRecursive
        };

        watcher
            .watch(&watched_path, mode)
            .map_err(|e| anyhow!("Failed to watch path {:?}: {}", watched_path, e))?;

        // Debounce thread: coalesce bursts of modify events and reload
        // once the file has settled
        std::thread::spawn(move || {
            let mut last_event_time: Option<Instant> = None;
            let mut pending_paths: Vec<PathBuf> = Vec::new();

            loop {
                match notify_rx.recv_timeout(Duration::from_millis(100)) {
                    Ok(event) => match event.kind {
                        EventKind::Create(_) => {
                            for path in event.paths {
                                let _ = event_tx.send(ProjectEvent::FileCreated(path));
                            }
                        }
                        EventKind::Remove(_) => {
                            for path in event.paths {
                                let _ = event_tx.send(ProjectEvent::FileDeleted(path));
                            }
                        }
                        EventKind::Modify(_) => {
                            for path in event.paths {
                                if !pending_paths.contains(&path) {
                                    pending_paths.push(path);
                                }
                            }
                            last_event_time = Some(Instant::now());
                        }
                        _ => {}
                    },
                    Err(mpsc::RecvTimeoutError::Timeout) => {
                        let Some(last_time) = last_event_time else {
                            continue;
                        };
                        if last_time.elapsed() < debounce_duration {
                            continue;
                        }

                        for path in pending_paths.drain(..) {
                            if !is_project_file(&path, &watch_target) {
                                continue;
                            }
                            match ProjectFile::load(&path) {
                                Ok(file) => {
                                    let _ = event_tx
                                        .send(ProjectEvent::Reloaded(Box::new(file)));
                                }
                                Err(e) => {
                                    warn!(path = ?path, error = %e, "project reload failed");
                                    let _ = event_tx.send(ProjectEvent::Error(format!(
                                        "Failed to load {:?}: {}",
                                        path, e
                                    )));
                                }
                            }
                        }
                        last_event_time = None;
                    }
                    Err(mpsc::RecvTimeoutError::Disconnected) => {
                        // Watcher was dropped, exit thread
                        break;
                    }
                }
            }
        });

        Ok(Self {
            _watcher: watcher,
            event_receiver: event_rx,
            watched_path,
        })
    }

    /// Try to receive the next event (non-blocking)
    pub fn try_recv(&self) -> Option<ProjectEvent> {
        self.event_receiver.try_recv().ok()
    }

    /// Receive all pending events
    pub fn recv_all(&self) -> Vec<ProjectEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }

    /// Block until the next event is received
    pub fn recv(&self) -> Option<ProjectEvent> {
        self.event_receiver.recv().ok()
    }

    /// Get the path being watched
    pub fn watched_path(&self) -> &Path {
        &self.watched_path
    }
}

/// Whether a changed path should trigger a reload
fn is_project_file(path: &Path, watch_target: &Path) -> bool {
    match path.extension() {
        Some(ext) => ext == "yaml" || ext == "yml",
        None => path == watch_target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    use crate::timeline::Project;

    fn project_yaml(name: &str, duration: u64) -> String {
        let mut project = Project::new("p1", name);
        project.duration_in_frames = duration;
        ProjectFile::new(project).to_yaml().unwrap()
    }

    #[test]
    fn test_watcher_creation() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("watch_test.yaml");
        fs::write(&file_path, project_yaml("Watch Test", 300)).unwrap();

        let watcher = ProjectWatcher::new(dir.path(), Some(100));
        assert!(watcher.is_ok());

        let watcher = watcher.unwrap();
        assert_eq!(watcher.watched_path(), dir.path());
    }

    #[test]
    fn test_project_event_variants() {
        let file = ProjectFile::new(Project::default());

        let _reloaded = ProjectEvent::Reloaded(Box::new(file));
        let _error = ProjectEvent::Error("test error".to_string());
        let _created = ProjectEvent::FileCreated(PathBuf::from("/test/path"));
        let _deleted = ProjectEvent::FileDeleted(PathBuf::from("/test/path"));
    }

    #[test]
    fn test_is_project_file() {
        let target = PathBuf::from("/watch/project");

        assert!(is_project_file(Path::new("/watch/a.yaml"), &target));
        assert!(is_project_file(Path::new("/watch/a.yml"), &target));
        assert!(!is_project_file(Path::new("/watch/a.txt"), &target));
        assert!(is_project_file(&target, &target));
        assert!(!is_project_file(Path::new("/watch/other"), &target));
    }

    #[test]
    fn test_watcher_detects_changes() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("detect_test.yaml");
        fs::write(&file_path, project_yaml("Initial", 300)).unwrap();

        let watcher = ProjectWatcher::new(dir.path(), Some(100)).unwrap();

        std::thread::sleep(Duration::from_millis(50));

        let mut file = fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&file_path)
            .unwrap();
        file.write_all(project_yaml("Modified", 600).as_bytes())
            .unwrap();
        file.flush().unwrap();
        drop(file);

        // Wait for debounce + processing
        std::thread::sleep(Duration::from_millis(300));

        let events = watcher.recv_all();
        let reloaded = events
            .iter()
            .find(|e| matches!(e, ProjectEvent::Reloaded(_)));

        if let Some(ProjectEvent::Reloaded(file)) = reloaded {
            assert_eq!(file.project.name, "Modified");
            assert_eq!(file.project.duration_in_frames, 600);
        }
        // Note: The event may not always fire in CI environments due to timing
        // So we don't assert that we definitely got the event
    }

    #[test]
    fn test_watcher_surfaces_invalid_project_as_error() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("invalid_test.yaml");
        fs::write(&file_path, project_yaml("Valid", 300)).unwrap();

        let watcher = ProjectWatcher::new(dir.path(), Some(100)).unwrap();

        std::thread::sleep(Duration::from_millis(50));
        fs::write(&file_path, "this is not valid yaml: [").unwrap();
        std::thread::sleep(Duration::from_millis(300));

        let events = watcher.recv_all();
        let error = events.iter().find(|e| matches!(e, ProjectEvent::Error(_)));

        if let Some(ProjectEvent::Error(message)) = error {
            assert!(message.contains("Failed to load"));
        }
        // Timing-dependent, same caveat as above
    }
}

// vidcat-core/tests/common/mod.rs
//
// Shared helpers for integration tests: a scripted duration probe and a
// small directory-tree builder.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use vidcat_core::{CoreError, CoreResult, DurationProbe};

/// What the scripted probe answers for a given file name.
#[derive(Debug, Clone)]
pub enum Scripted {
    Secs(u64),
    Unreadable,
    MissingTool,
}

/// Probe answering from a table keyed by file name. Unknown names resolve
/// to 0 seconds. Every call is recorded.
#[derive(Default)]
pub struct ScriptedProbe {
    answers: HashMap<String, Scripted>,
    pub calls: RefCell<Vec<PathBuf>>,
}

impl ScriptedProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, answer: Scripted) -> Self {
        self.answers.insert(name.to_string(), answer);
        self
    }

    pub fn secs(self, name: &str, secs: u64) -> Self {
        self.with(name, Scripted::Secs(secs))
    }

    pub fn called_names(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }
}

impl DurationProbe for ScriptedProbe {
    fn duration_secs(&self, path: &Path) -> CoreResult<u64> {
        self.calls.borrow_mut().push(path.to_path_buf());
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        match self.answers.get(&name) {
            Some(Scripted::Secs(secs)) => Ok(*secs),
            Some(Scripted::Unreadable) => Err(CoreError::MediaInfo(
                "file could not be opened or recognized".to_string(),
            )),
            Some(Scripted::MissingTool) => {
                Err(CoreError::DependencyNotFound("mediainfo".to_string()))
            }
            None => Ok(0),
        }
    }
}

/// Creates an empty file at `root/relative`, creating parent directories.
pub fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"").unwrap();
}

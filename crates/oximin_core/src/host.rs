use indexmap::IndexMap;
use log::{debug, trace, warn};
use std::{
    cell::RefCell,
    fs, io,
    path::{Path, PathBuf},
};

/// File access and reporting used by a minification run.
pub trait Host {
    fn read_file(&self, path: &Path) -> io::Result<String>;

    /// Writes `contents` to `path`, creating parent directories as needed.
    fn write_file(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Reports a problem that does not stop the run.
    fn warn(&self, message: &str);

    /// Reports progress, shown only when verbose output is on.
    fn verbose(&self, message: &str);
}

impl<H: Host + ?Sized> Host for &H {
    fn read_file(&self, path: &Path) -> io::Result<String> {
        (**self).read_file(path)
    }

    fn write_file(&self, path: &Path, contents: &str) -> io::Result<()> {
        (**self).write_file(path, contents)
    }

    fn warn(&self, message: &str) {
        (**self).warn(message)
    }

    fn verbose(&self, message: &str) {
        (**self).verbose(message)
    }
}

/// The real filesystem, reporting through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsHost;

impl Host for FsHost {
    fn read_file(&self, path: &Path) -> io::Result<String> {
        trace!("Reading {}", path.display());
        fs::read_to_string(path)
    }

    fn write_file(&self, path: &Path, contents: &str) -> io::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        trace!("Writing {} ({} bytes)", path.display(), contents.len());
        fs::write(path, contents)
    }

    fn warn(&self, message: &str) {
        warn!("{}", message);
    }

    fn verbose(&self, message: &str) {
        debug!("{}", message);
    }
}

/// An in-memory host that records everything written and reported.
#[derive(Debug, Default)]
pub struct MemoryHost {
    files: RefCell<IndexMap<PathBuf, String>>,
    warnings: RefCell<Vec<String>>,
    verbose: RefCell<Vec<String>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.files.borrow_mut().insert(path.into(), contents.into());
        self
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.borrow().clone()
    }

    pub fn verbose_messages(&self) -> Vec<String> {
        self.verbose.borrow().clone()
    }
}

impl Host for MemoryHost {
    fn read_file(&self, path: &Path) -> io::Result<String> {
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path.display()))
        })
    }

    fn write_file(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.files.borrow_mut().insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn warn(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }

    fn verbose(&self, message: &str) {
        self.verbose.borrow_mut().push(message.to_string());
    }
}

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::opt::Opt;

/// Per-user storage locations of an application; all `None` when the platform has no home directory.
#[derive(Default, Clone, Debug)]
pub struct Storage {
  project_directories: Opt<ProjectDirs>,
}
impl Storage {
  pub fn new(application: &str) -> Self {
    let project_directories = ProjectDirs::from("", "Opt", application).into();
    Self { project_directories }
  }

  pub fn project_directories(&self) -> Opt<&ProjectDirs> {
    self.project_directories.as_ref()
  }
}

pub enum DirectoryKind {
  Data,
  LocalData,
  Cache,
}
impl Storage {
  pub fn directory(&self, kind: DirectoryKind) -> Opt<&Path> {
    self.project_directories().map(|project_directories| match kind {
      DirectoryKind::Data => project_directories.data_dir(),
      DirectoryKind::LocalData => project_directories.data_local_dir(),
      DirectoryKind::Cache => project_directories.cache_dir(),
    })
  }
  pub fn local_data_directory(&self) -> Opt<&Path> {
    self.directory(DirectoryKind::LocalData)
  }

  pub fn file(&self, kind: DirectoryKind, file_path: impl AsRef<Path>) -> Opt<PathBuf> {
    self.directory(kind).map(|d| d.join(file_path))
  }
  pub fn local_data_file(&self, file_path: impl AsRef<Path>) -> Opt<PathBuf> {
    self.file(DirectoryKind::LocalData, file_path)
  }
}

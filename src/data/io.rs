use std::{fs::File, io::Write, path::{Path, PathBuf}};

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tempfile::NamedTempFile;

/// Write-then-rename wrapper so a reader never sees a half-written file.
struct PendingWrite {
    target: PathBuf,
    tmp: Option<NamedTempFile>,
}

impl PendingWrite {
    fn open(target: &Path, force: bool) -> Result<Self> {
        let parent = match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create dir {}", parent.display()))?;
        if !force && target.exists() {
            bail!("Refusing to overwrite existing file: {} (use --force)", target.display());
        }
        let tmp = NamedTempFile::new_in(parent).context("create temp file")?;

        Ok(Self { target: target.to_path_buf(), tmp: Some(tmp) })
    }

    fn finalize(mut self) -> Result<()> {
        let Some(tmp) = self.tmp.take() else { return Ok(()) };
        tmp.as_file().sync_all().ok(); // best-effort
        tmp.persist(&self.target)
            .with_context(|| format!("rename to {}", self.target.display()))?;
        if let Some(dir) = self.target.parent() {
            let _ = File::open(dir).and_then(|f| f.sync_all());
        }
        Ok(())
    }

    fn file(&mut self) -> Result<&mut File> {
        self.tmp.as_mut()
            .map(|tmp| tmp.as_file_mut())
            .context("write after finalize")
    }
}

/// Serialize `value` as pretty JSON into `path`, atomically.
/// Refuses to replace an existing file unless `force` is set.
pub fn write_json_file<T: Serialize + ?Sized>(path: &Path, value: &T, force: bool) -> Result<()> {
    let mut sink = PendingWrite::open(path, force)?;
    {
        let file = sink.file()?;
        serde_json::to_writer_pretty(&mut *file, value)
            .with_context(|| format!("serialize JSON for {}", path.display()))?;
        file.write_all(b"\n")?;
    }
    sink.finalize()
}

use anyhow::Context;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Atomic write: write to temp file in same dir, then rename.
pub fn write_atomic(path: &Path, data: &[u8]) -> anyhow::Result<()> {
    write_atomic_with(path, |w| {
        w.write_all(data)?;
        Ok(())
    })
}

/// Atomic write driven by a writer callback.
///
/// The callback writes into a temp file next to `path`. The file is renamed
/// onto `path` only if the callback and the flush succeed; on any error the
/// temp file is removed and `path` is left untouched.
pub fn write_atomic_with<F>(path: &Path, write: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut dyn Write) -> anyhow::Result<()>,
{
    let parent = parent_dir(path)?;
    fs::create_dir_all(&parent).with_context(|| format!("creating {}", parent.display()))?;

    let tmp = tempfile::NamedTempFile::new_in(&parent)
        .with_context(|| format!("creating temp file in {}", parent.display()))?;
    let mut out = BufWriter::new(tmp);
    write(&mut out).with_context(|| format!("writing {}", path.display()))?;
    out.flush()?;
    let tmp = out.into_inner().map_err(|e| e.into_error())?;
    tmp.persist(path)
        .with_context(|| format!("persisting {}", path.display()))?;

    tracing::debug!(path = %path.display(), "wrote output");
    Ok(())
}

/// Resolve `dir/name`, creating `dir` if needed.
pub fn output_path(dir: &Path, name: &str) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    Ok(dir.join(name))
}

fn parent_dir(path: &Path) -> anyhow::Result<PathBuf> {
    match path.parent() {
        // A bare file name has an empty parent: use the working directory.
        Some(p) if p.as_os_str().is_empty() => Ok(PathBuf::from(".")),
        Some(p) => Ok(p.to_path_buf()),
        None => anyhow::bail!("no parent dir for {}", path.display()),
    }
}

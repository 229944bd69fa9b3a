pub(crate) mod add;
pub(crate) mod check_slug;
pub(crate) mod config;
pub(crate) mod icons;
pub(crate) mod slugs;
pub(crate) mod sort;

#[cfg(test)]
pub(crate) mod test_support;

use std::fs;
use std::path::Path;

/// Replace `path` with `contents` via a sibling temp file.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut tmp_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);

    fs::write(&tmp, contents)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(())
}

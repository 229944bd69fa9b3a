use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::DynamicImage;
use image::codecs::webp::WebPEncoder;
use image::imageops::FilterType;

use crate::IconError;

pub const CANONICAL_EXTENSION: &str = "webp";
pub const THUMBNAIL_SIZE: u32 = 256;
/// Extensions accepted as icon sources, in lookup order.
pub const SOURCE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// What happened to a single icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconOutcome {
    /// Re-encoded to WebP under a new name; the original was removed.
    Converted { input: PathBuf, output: PathBuf },
    /// Already WebP, re-encoded in place.
    Reencoded { path: PathBuf },
    /// Already WebP, left alone.
    Skipped { path: PathBuf },
}

/// Progress information for callbacks.
#[derive(Debug, Clone)]
pub enum IconProgress {
    /// Icons found in the directory
    Found { count: usize },
    /// About to convert a file
    Converting {
        file_name: String,
        file_index: usize,
        total: usize,
    },
    /// A file finished, successfully or not
    Finished { outcome: Option<IconOutcome> },
    /// Every file has been handled
    Done,
}

/// Result of normalizing a whole directory.
#[derive(Debug, Default)]
pub struct DirReport {
    pub outcomes: Vec<IconOutcome>,
    pub failures: Vec<(PathBuf, IconError)>,
}

impl DirReport {
    pub fn converted(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, IconOutcome::Converted { .. }))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, IconOutcome::Skipped { .. }))
            .count()
    }
}

/// Scale dimensions down to fit within max bounds, preserving aspect ratio.
/// Never scales up.
pub fn thumbnail_dimensions(src_w: u32, src_h: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    if src_w == 0 || src_h == 0 {
        return (0, 0);
    }

    if src_w <= max_w && src_h <= max_h {
        return (src_w, src_h);
    }

    let scale = (max_w as f64 / src_w as f64).min(max_h as f64 / src_h as f64);
    let new_w = (src_w as f64 * scale).round() as u32;
    let new_h = (src_h as f64 * scale).round() as u32;

    (new_w.clamp(1, max_w), new_h.clamp(1, max_h))
}

/// Find the icon the operator dropped in for `slug`, trying each source
/// extension in order.
pub fn find_icon(dir: &Path, slug: &str) -> Option<PathBuf> {
    SOURCE_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{slug}.{ext}")))
        .find(|path| {
            log::debug!("Checking for icon at {}", path.display());
            path.is_file()
        })
}

/// Normalize one icon, re-encoding it even if it is already WebP.
pub fn normalize_icon(path: &Path) -> Result<IconOutcome, IconError> {
    convert(path, true)
}

/// Normalize one directory entry. WebP files are skipped untouched.
pub fn normalize_dir_entry(path: &Path) -> Result<IconOutcome, IconError> {
    convert(path, false)
}

/// Supported icon files in `dir`, sorted by name. Other files are ignored.
pub fn list_icons(dir: &Path) -> Result<Vec<PathBuf>, IconError> {
    let mut icons: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && source_extension(p).is_some())
        .collect();
    icons.sort();
    Ok(icons)
}

/// Normalize every icon in `dir`. A failure on one file is recorded in the
/// report and does not stop the rest.
pub fn normalize_dir(
    dir: &Path,
    progress: &dyn Fn(IconProgress),
) -> Result<DirReport, IconError> {
    let icons = list_icons(dir)?;
    let total = icons.len();
    progress(IconProgress::Found { count: total });

    let mut report = DirReport::default();
    for (file_index, path) in icons.into_iter().enumerate() {
        progress(IconProgress::Converting {
            file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            file_index,
            total,
        });
        match normalize_dir_entry(&path) {
            Ok(outcome) => {
                progress(IconProgress::Finished {
                    outcome: Some(outcome.clone()),
                });
                report.outcomes.push(outcome);
            }
            Err(e) => {
                progress(IconProgress::Finished { outcome: None });
                report.failures.push((path, e));
            }
        }
    }

    progress(IconProgress::Done);
    Ok(report)
}

fn source_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?;
    SOURCE_EXTENSIONS
        .into_iter()
        .find(|known| known.eq_ignore_ascii_case(ext))
}

fn convert(path: &Path, reencode_canonical: bool) -> Result<IconOutcome, IconError> {
    let ext = source_extension(path).ok_or_else(|| IconError::Unsupported(path.to_path_buf()))?;
    let canonical = ext == CANONICAL_EXTENSION;

    if canonical && !reencode_canonical {
        return Ok(IconOutcome::Skipped {
            path: path.to_path_buf(),
        });
    }

    let output = if canonical {
        path.to_path_buf()
    } else {
        path.with_extension(CANONICAL_EXTENSION)
    };
    if !canonical && output.exists() {
        return Err(IconError::TargetExists {
            input: path.to_path_buf(),
            target: output,
        });
    }

    let img = image::open(path)?;
    let (w, h) = thumbnail_dimensions(img.width(), img.height(), THUMBNAIL_SIZE, THUMBNAIL_SIZE);
    let img = if (w, h) == (img.width(), img.height()) {
        img
    } else {
        log::debug!(
            "Resizing {} from {}x{} to {w}x{h}",
            path.display(),
            img.width(),
            img.height()
        );
        img.resize_exact(w, h, FilterType::Lanczos3)
    };

    write_webp(&img, &output)?;

    if canonical {
        return Ok(IconOutcome::Reencoded { path: output });
    }

    fs::remove_file(path)?;
    log::debug!("Removed {}", path.display());
    Ok(IconOutcome::Converted {
        input: path.to_path_buf(),
        output,
    })
}

/// Encode as WebP into a sibling temp file, then rename over `output`.
fn write_webp(img: &DynamicImage, output: &Path) -> Result<(), IconError> {
    let mut tmp_name = output
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    tmp_name.push(".tmp");
    let tmp = output.with_file_name(tmp_name);

    if let Err(e) = encode_webp(img, &tmp).and_then(|()| Ok(fs::rename(&tmp, output)?)) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }

    log::debug!("Saved {}", output.display());
    Ok(())
}

fn encode_webp(img: &DynamicImage, path: &Path) -> Result<(), IconError> {
    let mut writer = BufWriter::new(File::create(path)?);
    let rgba = DynamicImage::ImageRgba8(img.to_rgba8());
    rgba.write_with_encoder(WebPEncoder::new_lossless(&mut writer))?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;

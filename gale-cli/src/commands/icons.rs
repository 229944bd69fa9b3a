use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gale_icons::{IconOutcome, IconProgress, normalize_dir};

use crate::error::CliError;

/// Convert every icon in `dir` to a 256×256 WebP, reporting each failure.
pub(crate) fn run_icons(dir: &Path, quiet: bool) -> Result<(), CliError> {
    // Hidden in quiet mode
    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(0);
        if let Ok(style) = ProgressStyle::with_template("  {bar:30.cyan/dim} {pos}/{len} {msg}") {
            pb.set_style(style);
        }
        pb
    };

    let report = normalize_dir(dir, &|event| match event {
        IconProgress::Found { count } => pb.set_length(count as u64),
        IconProgress::Converting { file_name, .. } => pb.set_message(file_name),
        IconProgress::Finished { outcome } => {
            if let Some(IconOutcome::Converted { input, output }) = &outcome {
                pb.suspend(|| log::debug!("{} -> {}", input.display(), output.display()));
            }
            pb.inc(1);
        }
        IconProgress::Done => pb.finish_and_clear(),
    })?;

    if report.outcomes.is_empty() && report.failures.is_empty() {
        log::info!(
            "{}",
            format!("No icons found in {}", dir.display()).if_supports_color(Stdout, |t| t.dimmed())
        );
        return Ok(());
    }

    for (path, e) in &report.failures {
        log::warn!(
            "{} {}: {e}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            path.display()
        );
    }
    log::info!(
        "Converted {}, skipped {} already WebP, {} failed",
        report.converted(),
        report.skipped(),
        report.failures.len()
    );

    if report.failures.is_empty() {
        Ok(())
    } else {
        Err(CliError::IconFailures(report.failures.len()))
    }
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::*;

    #[test]
    fn test_icons_converts_directory() {
        let dir = tempfile::tempdir().unwrap();
        RgbaImage::from_pixel(400, 200, Rgba([9, 9, 9, 255]))
            .save(dir.path().join("among-us.png"))
            .unwrap();

        run_icons(dir.path(), true).unwrap();

        assert!(dir.path().join("among-us.webp").exists());
        assert!(!dir.path().join("among-us.png").exists());
    }

    #[test]
    fn test_icons_failure_sets_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.jpg"), b"nope").unwrap();
        assert!(matches!(
            run_icons(dir.path(), true),
            Err(CliError::IconFailures(1))
        ));
    }

    #[test]
    fn test_icons_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        run_icons(dir.path(), true).unwrap();
    }
}

//! Visual regression: screenshot baselines and pixel comparison
//!
//! Every named snapshot owns a triple of files in the snapshots directory:
//! `{name}_baseline.png`, `{name}_current.png`, `{name}_diff.png`. The
//! baseline is created from the current image the first time a name is seen
//! and never touched automatically after that; `update_baseline` is the only
//! way to refresh it.

use std::path::{Path, PathBuf};

use image::{GenericImageView, Pixel, RgbaImage};
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use storecheck_common::{Error, Result, VisualConfig};

use crate::browser::BrowserSession;

/// Paths of the artifact triple for one snapshot name
#[derive(Debug, Clone)]
pub struct SnapshotPaths {
    pub baseline: PathBuf,
    pub current: PathBuf,
    pub diff: PathBuf,
}

/// Filesystem layout of the snapshots directory
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    /// Open a store, creating the directory if needed
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Artifact paths for a snapshot name
    pub fn paths(&self, name: &str) -> SnapshotPaths {
        SnapshotPaths {
            baseline: self.dir.join(format!("{}_baseline.png", name)),
            current: self.dir.join(format!("{}_current.png", name)),
            diff: self.dir.join(format!("{}_diff.png", name)),
        }
    }

    /// Write bytes into the current slot for a name
    pub fn write_current(&self, name: &str, png: &[u8]) -> Result<()> {
        std::fs::write(self.paths(name).current, png)?;
        Ok(())
    }

    /// All snapshot names that have a baseline
    pub fn baseline_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if let Some(name) = stem.strip_suffix("_baseline") {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// All snapshot names that have a current capture
    pub fn current_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if let Some(name) = stem.strip_suffix("_current") {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Delete every diff image in the store
    pub fn clean_diffs(&self) -> Result<usize> {
        let mut removed = 0;
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path
                .file_stem()
                .and_then(|s| s.to_str())
                .map(|s| s.ends_with("_diff"))
                .unwrap_or(false)
            {
                std::fs::remove_file(path)?;
                removed += 1;
            }
        }
        Ok(removed)
    }
}

/// How a comparison concluded without failing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Images matched
    Match,
    /// No baseline existed; the current image became the baseline. A first
    /// run can never detect a regression.
    BaselineCreated,
}

/// Detailed result of a comparison
#[derive(Debug, Clone)]
pub struct Comparison {
    pub name: String,
    pub matches: bool,
    pub diff_pixels: u64,
    pub total_pixels: u64,
    pub diff_percent: f64,
    pub diff_image: Option<PathBuf>,
    pub baseline_created: bool,
}

/// Baseline comparison engine
#[derive(Debug, Clone)]
pub struct VisualComparator {
    store: SnapshotStore,
    pixel_tolerance: u8,
}

impl VisualComparator {
    pub fn new(config: &VisualConfig) -> Result<Self> {
        Ok(Self {
            store: SnapshotStore::open(&config.snapshots_dir)?,
            pixel_tolerance: config.pixel_tolerance,
        })
    }

    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    /// Compare the current image against the baseline, bootstrapping the
    /// baseline when missing. Returns data; never fails on a mismatch.
    pub fn compare(&self, name: &str) -> Result<Comparison> {
        let paths = self.store.paths(name);

        if !paths.current.exists() {
            return Err(Error::ScreenshotNotFound(
                paths.current.to_string_lossy().to_string(),
            ));
        }

        // First run for this name: promote current to baseline and pass.
        if !paths.baseline.exists() {
            info!("No baseline for '{}', saving current as baseline", name);
            std::fs::copy(&paths.current, &paths.baseline)?;
            return Ok(Comparison {
                name: name.to_string(),
                matches: true,
                diff_pixels: 0,
                total_pixels: 0,
                diff_percent: 0.0,
                diff_image: None,
                baseline_created: true,
            });
        }

        // Identical files need no decode.
        if hash_file(&paths.baseline)? == hash_file(&paths.current)? {
            debug!("'{}' matches baseline exactly (same hash)", name);
            let (w, h) = image::open(&paths.current)?.dimensions();
            return Ok(Comparison {
                name: name.to_string(),
                matches: true,
                diff_pixels: 0,
                total_pixels: (w as u64) * (h as u64),
                diff_percent: 0.0,
                diff_image: None,
                baseline_created: false,
            });
        }

        let baseline = image::open(&paths.baseline)?;
        let current = image::open(&paths.current)?;

        if baseline.dimensions() != current.dimensions() {
            warn!(
                "'{}' dimensions changed: baseline {:?}, current {:?}",
                name,
                baseline.dimensions(),
                current.dimensions()
            );
        }

        let (bw, bh) = baseline.dimensions();
        let (cw, ch) = current.dimensions();
        let baseline_rgba = baseline.to_rgba8();
        let current_rgba = current.to_rgba8();

        let mut diff_img = RgbaImage::new(cw, ch);

        // Compare over the union extent: anything outside the overlap exists
        // in only one of the two images and counts as differing.
        let overlap_w = cw.min(bw);
        let overlap_h = ch.min(bh);
        let total_pixels = (cw.max(bw) as u64) * (ch.max(bh) as u64);
        let mut diff_pixels = total_pixels - (overlap_w as u64) * (overlap_h as u64);

        for y in 0..overlap_h {
            for x in 0..overlap_w {
                let a = current_rgba.get_pixel(x, y);
                let b = baseline_rgba.get_pixel(x, y);

                if self.pixels_differ(a, b) {
                    diff_pixels += 1;
                    diff_img.put_pixel(x, y, image::Rgba([255, 0, 0, 255]));
                } else {
                    // Dimmed copy of the matching pixel, so the red stands out
                    let c = a.channels();
                    diff_img.put_pixel(x, y, image::Rgba([c[0] / 2, c[1] / 2, c[2] / 2, 128]));
                }
            }
        }

        let diff_percent = if total_pixels == 0 {
            0.0
        } else {
            (diff_pixels as f64 / total_pixels as f64) * 100.0
        };
        let matches = diff_pixels == 0;

        let diff_image = if matches {
            None
        } else {
            diff_img.save(&paths.diff)?;
            warn!(
                "Visual regression in '{}': {} pixels differ ({:.2}%), diff at {}",
                name,
                diff_pixels,
                diff_percent,
                paths.diff.display()
            );
            Some(paths.diff)
        };

        Ok(Comparison {
            name: name.to_string(),
            matches,
            diff_pixels,
            total_pixels,
            diff_percent,
            diff_image,
            baseline_created: false,
        })
    }

    /// Compare and turn any mismatch into a failure
    pub fn check(&self, name: &str) -> Result<Outcome> {
        let comparison = self.compare(name)?;
        if comparison.baseline_created {
            return Ok(Outcome::BaselineCreated);
        }
        if !comparison.matches {
            return Err(Error::VisualMismatch {
                name: name.to_string(),
                diff_pixels: comparison.diff_pixels,
                diff_percent: comparison.diff_percent,
            });
        }
        Ok(Outcome::Match)
    }

    /// Promote the current image to baseline for a name
    pub fn update_baseline(&self, name: &str) -> Result<()> {
        let paths = self.store.paths(name);
        if !paths.current.exists() {
            return Err(Error::ScreenshotNotFound(
                paths.current.to_string_lossy().to_string(),
            ));
        }
        std::fs::copy(&paths.current, &paths.baseline)?;
        info!("Updated baseline for '{}'", name);
        Ok(())
    }

    fn pixels_differ(&self, a: &image::Rgba<u8>, b: &image::Rgba<u8>) -> bool {
        let a = a.channels();
        let b = b.channels();
        let tolerance = self.pixel_tolerance as i16;
        (0..4).any(|i| (a[i] as i16 - b[i] as i16).abs() > tolerance)
    }
}

/// Settle the page, capture a full-page screenshot into the current slot,
/// and compare against the baseline. The scenario-facing entry point.
pub async fn assert_visual_match(
    session: &BrowserSession,
    comparator: &VisualComparator,
    name: &str,
) -> Result<Outcome> {
    session.settle().await?;
    let png = session.capture_png(true).await?;
    comparator.store().write_current(name, &png)?;
    comparator.check(name)
}

fn hash_file(path: &Path) -> Result<String> {
    let data = std::fs::read(path)?;
    let mut hasher = Sha256::new();
    hasher.update(&data);
    Ok(hex::encode(hasher.finalize()))
}

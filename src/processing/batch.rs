//! Sequential batch execution with per-image progress reporting.
//!
//! Each image is processed inside a `tokio::task::spawn_blocking` call so the
//! async runtime is never blocked; images are dispatched strictly one at a
//! time, in input order. A failed image contributes zero outputs and the
//! batch continues, so a batch as a whole cannot fail.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info, warn};

use crate::core::{
    PixelationJob, PixelationSettings, Progress, ProgressType, ProgressUpdate,
};
use crate::utils::PixelResult;
use super::pixelate::pixelate_image;

/// Cooperative cancellation flag checked between images.
///
/// The default token never cancels, which matches the reference behavior of
/// running every batch to completion.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation; the in-flight image still finishes.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Drives the pixelation transform across an ordered list of source images.
pub struct BatchRunner {
    settings: PixelationSettings,
    cancel: CancelToken,
}

impl BatchRunner {
    pub fn new(settings: PixelationSettings) -> Self {
        Self {
            settings,
            cancel: CancelToken::new(),
        }
    }

    /// Installs a cancellation token checked between images.
    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Processes `inputs` sequentially, invoking `on_progress` after every
    /// image (failed ones included) and once more on completion.
    ///
    /// The returned list concatenates each image's outputs in input order,
    /// with resolution order preserved within an image. Progress percentages
    /// are floored and strictly non-decreasing; the final per-image update of
    /// a non-empty batch reports 100.
    pub async fn run(
        &self,
        inputs: Vec<PathBuf>,
        on_progress: impl Fn(ProgressUpdate) + Send + 'static,
    ) -> Vec<PathBuf> {
        let total = inputs.len();
        info!("Starting batch of {} image(s)", total);

        on_progress(Progress::new(ProgressType::Start, 0, total, "starting").to_progress_update());

        let mut outputs = Vec::new();
        let mut cancelled = false;

        for (idx, input_path) in inputs.into_iter().enumerate() {
            if self.cancel.is_cancelled() {
                info!("Batch cancelled after {} of {} image(s)", idx, total);
                cancelled = true;
                break;
            }

            let completed = idx + 1;
            let job = PixelationJob::new(input_path, self.settings.clone());
            let input_display = job.input_path.display().to_string();

            let result = tokio::task::spawn_blocking(move || pixelate_image(&job))
                .await
                .unwrap_or_else(|e| {
                    Err(crate::utils::PixelError::encode(format!("Job panicked: {e}")))
                });

            match result {
                Ok(paths) => {
                    debug!("'{}' produced {} output(s)", input_display, paths.len());
                    outputs.extend(paths);
                    on_progress(
                        Progress::new(ProgressType::Progress, completed, total, "processing")
                            .to_progress_update(),
                    );
                }
                Err(e) => {
                    // Swallow the error: this image contributes nothing and
                    // the batch moves on
                    warn!("Pixelation failed for '{}': {}", input_display, e);
                    on_progress(
                        Progress::new(ProgressType::Error, completed, total, "error")
                            .with_error(e.to_string())
                            .to_progress_update(),
                    );
                }
            }
        }

        if !cancelled {
            let complete = Progress::new(ProgressType::Complete, total, total, "complete")
                .with_metadata(serde_json::json!({ "outputs": outputs.len() }));
            on_progress(complete.to_progress_update());
        }

        info!("Batch finished with {} output file(s)", outputs.len());
        outputs
    }
}

/// Validates every input against `settings`, then runs the batch.
///
/// This is the shell's submission boundary: validation errors surface here,
/// before any processing starts, and never reach the runner.
pub async fn pixelate_images(
    inputs: Vec<PathBuf>,
    settings: PixelationSettings,
    on_progress: impl Fn(ProgressUpdate) + Send + 'static,
) -> PixelResult<Vec<PathBuf>> {
    for input in &inputs {
        PixelationJob::new(input.clone(), settings.clone())
            .validate()
            .await?;
    }

    Ok(BatchRunner::new(settings).run(inputs, on_progress).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ColorFilter;
    use crate::utils::{OutputFormat, PixelError};
    use image::{Rgba, RgbaImage};
    use std::sync::Mutex;

    fn write_source(dir: &std::path::Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut img = RgbaImage::new(16, 16);
        for pixel in img.pixels_mut() {
            *pixel = Rgba([0, 128, 0, 255]);
        }
        img.save(&path).unwrap();
        path
    }

    fn settings(dir: &std::path::Path) -> PixelationSettings {
        PixelationSettings {
            output_dir: dir.join("out"),
            resolutions: vec![2, 4],
            filter: ColorFilter::None,
            format: OutputFormat::Png,
        }
    }

    fn collect_progress() -> (Arc<Mutex<Vec<ProgressUpdate>>>, impl Fn(ProgressUpdate) + Send + 'static)
    {
        let updates = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&updates);
        (updates, move |u| sink.lock().unwrap().push(u))
    }

    #[tokio::test]
    async fn failed_image_is_skipped_and_progress_reaches_100() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_source(dir.path(), "a.png");
        let missing = dir.path().join("missing.png");
        let third = write_source(dir.path(), "c.png");

        let (updates, on_progress) = collect_progress();
        let runner = BatchRunner::new(settings(dir.path()));
        let outputs = runner.run(vec![first, missing, third], on_progress).await;

        // two surviving images, two resolutions each
        assert_eq!(outputs.len(), 4);

        let updates = updates.lock().unwrap();
        let percentages: Vec<_> = updates.iter().map(|u| u.progress_percentage).collect();
        assert!(percentages.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*percentages.last().unwrap(), 100);

        // the failed image still advanced the counter
        let error_update = updates.iter().find(|u| u.status == "error").unwrap();
        assert_eq!(error_update.completed_images, 2);
    }

    #[tokio::test]
    async fn result_order_is_image_then_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_source(dir.path(), "a.png");
        let b = write_source(dir.path(), "b.png");

        let runner = BatchRunner::new(settings(dir.path()));
        let outputs = runner.run(vec![a, b], |_| {}).await;

        let names: Vec<_> = outputs
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "a_pixelated_2x2.png",
                "a_pixelated_4x4.png",
                "b_pixelated_2x2.png",
                "b_pixelated_4x4.png",
            ]
        );
    }

    #[tokio::test]
    async fn cancelled_batch_stops_between_images() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_source(dir.path(), "a.png");
        let b = write_source(dir.path(), "b.png");

        let cancel = CancelToken::new();
        cancel.cancel();

        let (updates, on_progress) = collect_progress();
        let runner = BatchRunner::new(settings(dir.path())).with_cancel_token(cancel);
        let outputs = runner.run(vec![a, b], on_progress).await;

        assert!(outputs.is_empty());
        // start update only; no complete update for a cancelled batch
        assert!(updates.lock().unwrap().iter().all(|u| u.status != "complete"));
    }

    #[tokio::test]
    async fn submission_rejects_invalid_settings_before_running() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_source(dir.path(), "a.png");

        let mut bad = settings(dir.path());
        bad.resolutions.clear();

        let err = pixelate_images(vec![a], bad, |_| {}).await.unwrap_err();
        assert!(matches!(err, PixelError::Validation(_)));
        assert!(!dir.path().join("out").exists());
    }

    #[tokio::test]
    async fn empty_batch_completes_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let (updates, on_progress) = collect_progress();

        let outputs = BatchRunner::new(settings(dir.path()))
            .run(Vec::new(), on_progress)
            .await;

        assert!(outputs.is_empty());
        let updates = updates.lock().unwrap();
        assert_eq!(updates.last().unwrap().status, "complete");
    }
}

//! Concurrent dispatch of the four resize jobs with per-job timing.
//!
//! One comparison run submits exactly one job per algorithm onto a bounded
//! worker pool and delivers each [`ResultReport`] through a callback as the
//! job completes — in whatever order the jobs happen to finish.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Semaphore;

use crate::buffer::PixelBuffer;
use crate::error::ResizeError;
use crate::resample::{self, Algorithm};
use crate::types::{ResizeRequest, ResultReport};

/// One unit of work: an algorithm paired with the shared source and target
/// size. Created per comparison run, destroyed once its report is delivered.
struct ResizeJob {
    algorithm: Algorithm,
    source: Arc<PixelBuffer>,
    request: ResizeRequest,
}

impl ResizeJob {
    /// Run the resize on the current thread.
    ///
    /// Elapsed time is measured on-worker with a monotonic clock, from the
    /// first instruction of the resize to the output being fully
    /// constructed — queue time is not counted.
    fn execute(self) -> ResultReport {
        let started = Instant::now();
        let output = resample::resize(
            self.algorithm,
            &self.source,
            self.request.width,
            self.request.height,
        );
        let elapsed_ms = started.elapsed().as_millis() as u64;
        ResultReport {
            algorithm: self.algorithm,
            output,
            elapsed_ms,
        }
    }
}

/// Dispatches comparison runs onto a bounded worker pool.
pub struct Scheduler {
    parallel: usize,
}

impl Scheduler {
    /// Create a scheduler with an explicit pool width (clamped to at least 1).
    pub fn new(parallel: usize) -> Self {
        Self {
            parallel: parallel.max(1),
        }
    }

    /// Create a scheduler sized to the host's available parallelism.
    pub fn with_host_parallelism() -> Self {
        let parallel = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4);
        Self::new(parallel)
    }

    /// Maximum number of jobs executing at once.
    pub fn parallel(&self) -> usize {
        self.parallel
    }

    /// Run all four algorithms concurrently against one source.
    ///
    /// Validation happens synchronously, before any job exists: a degenerate
    /// source yields [`ResizeError::NoImage`] and an invalid target size
    /// yields [`ResizeError::Validation`] — in both cases zero jobs are
    /// scheduled and the callback is never invoked.
    ///
    /// On valid input, exactly one job per [`Algorithm`] variant is
    /// submitted. Jobs queue FIFO on a semaphore sized to the pool width, so
    /// a pool narrower than four still runs every job eventually. The
    /// semaphore is created per run: repeated runs on one scheduler can
    /// interleave, and a prior run's leftovers can never block a new run
    /// indefinitely. The CPU-bound resize executes under `spawn_blocking`.
    ///
    /// `on_report` is invoked from the worker side as each output is ready;
    /// the caller must not assume any arrival order among the algorithms.
    /// Resolves once all jobs have finished, returning the delivered-report
    /// count.
    pub async fn run_all<F>(
        &self,
        source: Arc<PixelBuffer>,
        request: ResizeRequest,
        on_report: F,
    ) -> Result<usize, ResizeError>
    where
        F: Fn(ResultReport) + Send + Sync + 'static,
    {
        if source.is_empty() {
            return Err(ResizeError::NoImage);
        }
        request.validate()?;

        let semaphore = Arc::new(Semaphore::new(self.parallel));
        let on_report = Arc::new(on_report);
        let mut handles = Vec::with_capacity(Algorithm::ALL.len());

        for algorithm in Algorithm::ALL {
            let permit = match semaphore.clone().acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => {
                    tracing::warn!("Scheduler semaphore closed unexpectedly — stopping run");
                    break;
                }
            };

            let job = ResizeJob {
                algorithm,
                source: source.clone(),
                request,
            };
            let on_report = on_report.clone();

            let handle = tokio::spawn(async move {
                tracing::debug!(
                    "Dispatching {algorithm} for {}x{}",
                    job.request.width,
                    job.request.height
                );
                let result = tokio::task::spawn_blocking(move || job.execute()).await;
                drop(permit); // Release the pool slot before the callback
                match result {
                    Ok(report) => {
                        tracing::debug!(
                            "Completed {} in {}ms",
                            report.algorithm,
                            report.elapsed_ms
                        );
                        on_report(report);
                        true
                    }
                    Err(e) => {
                        tracing::error!("Resize job for {algorithm} panicked: {e}");
                        false
                    }
                }
            });

            handles.push(handle);
        }

        let mut delivered = 0usize;
        for handle in handles {
            match handle.await {
                Ok(true) => delivered += 1,
                Ok(false) => {}
                Err(e) => tracing::error!("Resize task panicked: {e}"),
            }
        }

        Ok(delivered)
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::with_host_parallelism()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;

    fn gradient(width: u32, height: u32) -> Arc<PixelBuffer> {
        let mut samples = Vec::with_capacity(width as usize * height as usize * 3);
        for y in 0..height {
            for x in 0..width {
                samples.push((x * 5 % 256) as u8);
                samples.push((y * 9 % 256) as u8);
                samples.push(((x * y) % 256) as u8);
            }
        }
        Arc::new(PixelBuffer::from_raw(width, height, samples).unwrap())
    }

    /// Collect all reports into a vec via the callback.
    async fn run_collect(
        scheduler: &Scheduler,
        source: Arc<PixelBuffer>,
        request: ResizeRequest,
    ) -> (Vec<ResultReport>, Result<usize, ResizeError>) {
        let reports = Arc::new(Mutex::new(Vec::new()));
        let reports_clone = reports.clone();
        let outcome = scheduler
            .run_all(source, request, move |report| {
                reports_clone.lock().unwrap().push(report);
            })
            .await;
        let reports = Arc::try_unwrap(reports).unwrap().into_inner().unwrap();
        (reports, outcome)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_all_four_reports_delivered() {
        let scheduler = Scheduler::new(4);
        let source = gradient(16, 16);
        let (reports, outcome) =
            run_collect(&scheduler, source, ResizeRequest::new(8, 8)).await;

        assert_eq!(outcome.unwrap(), 4);
        assert_eq!(reports.len(), 4);
        // Arrival order is unspecified; assert set completeness, never sequence.
        let seen: HashSet<Algorithm> = reports.iter().map(|r| r.algorithm).collect();
        assert_eq!(seen, Algorithm::ALL.into_iter().collect());
        for report in &reports {
            assert_eq!(report.output.width(), 8);
            assert_eq!(report.output.height(), 8);
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_validation_error_schedules_no_jobs() {
        let scheduler = Scheduler::new(4);
        let source = gradient(8, 8);
        let (reports, outcome) =
            run_collect(&scheduler, source, ResizeRequest::new(0, 10)).await;

        assert!(matches!(
            outcome,
            Err(ResizeError::Validation(
                crate::error::ValidationError::ZeroDimension { field: "width" }
            ))
        ));
        assert!(reports.is_empty(), "callback ran despite validation failure");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_degenerate_source_rejected_before_scheduling() {
        let scheduler = Scheduler::new(4);
        let source = Arc::new(PixelBuffer::from_raw(0, 0, vec![]).unwrap());
        let (reports, outcome) =
            run_collect(&scheduler, source, ResizeRequest::new(10, 10)).await;

        assert!(matches!(outcome, Err(ResizeError::NoImage)));
        assert!(reports.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_run_leaves_source_intact() {
        let scheduler = Scheduler::new(4);
        let source = gradient(32, 32);
        let before = source.samples().to_vec();

        let (reports, outcome) =
            run_collect(&scheduler, source.clone(), ResizeRequest::new(48, 12)).await;

        assert_eq!(outcome.unwrap(), 4);
        assert_eq!(source.samples(), &before[..], "source corrupted by run");

        // Four independent, non-aliased output buffers.
        let ptrs: HashSet<*const u8> =
            reports.iter().map(|r| r.output.samples().as_ptr()).collect();
        assert_eq!(ptrs.len(), 4);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_single_worker_pool_still_runs_every_job() {
        // Pool narrower than the job count: jobs queue FIFO and all finish.
        let scheduler = Scheduler::new(1);
        let source = gradient(16, 16);
        let (reports, outcome) =
            run_collect(&scheduler, source, ResizeRequest::new(24, 24)).await;

        assert_eq!(outcome.unwrap(), 4);
        assert_eq!(reports.len(), 4);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_repeated_runs_do_not_interfere() {
        let scheduler = Scheduler::new(2);
        let source = gradient(16, 16);

        let (first, outcome) =
            run_collect(&scheduler, source.clone(), ResizeRequest::new(8, 8)).await;
        assert_eq!(outcome.unwrap(), 4);
        assert_eq!(first.len(), 4);

        let (second, outcome) =
            run_collect(&scheduler, source, ResizeRequest::new(12, 4)).await;
        assert_eq!(outcome.unwrap(), 4);
        assert_eq!(second.len(), 4);
        for report in &second {
            assert_eq!(report.output.width(), 12);
            assert_eq!(report.output.height(), 4);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_overlapping_runs_both_complete() {
        // Two runs in flight at once: per-run permits mean neither can
        // starve the other.
        let scheduler = Arc::new(Scheduler::new(2));
        let source = gradient(24, 24);

        let counts = (
            Arc::new(Mutex::new(0usize)),
            Arc::new(Mutex::new(0usize)),
        );
        let (c1, c2) = (counts.0.clone(), counts.1.clone());

        let (a, b) = tokio::join!(
            scheduler.run_all(source.clone(), ResizeRequest::new(30, 30), move |_| {
                *c1.lock().unwrap() += 1;
            }),
            scheduler.run_all(source.clone(), ResizeRequest::new(6, 40), move |_| {
                *c2.lock().unwrap() += 1;
            }),
        );

        assert_eq!(a.unwrap(), 4);
        assert_eq!(b.unwrap(), 4);
        assert_eq!(*counts.0.lock().unwrap(), 4);
        assert_eq!(*counts.1.lock().unwrap(), 4);
    }

    #[test]
    fn test_pool_width_clamped_to_one() {
        assert_eq!(Scheduler::new(0).parallel(), 1);
        assert!(Scheduler::with_host_parallelism().parallel() >= 1);
    }
}

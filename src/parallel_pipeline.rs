// THEORY:
// The `parallel_pipeline` module handles throughput, not latency: analyzing
// many independent photographs concurrently (a batch upload, a folder scan).
// One analysis is already internally parallel, so this layer deliberately
// runs each image on a single band and gets its parallelism from image-level
// fan-out instead: a pool of workers fed by a round-robin dispatcher, each
// task carrying a oneshot channel for its reply. Stacking band-level and
// pool-level parallelism would oversubscribe the CPUs.

use crate::error::{AnalysisError, Result};
use crate::pipeline::{AnalysisReport, PipelineConfig, RipenessPipeline};
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

/// One image waiting to be analyzed, plus the channel its report goes back on.
pub struct ImageTask {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub result_sender: oneshot::Sender<Result<AnalysisReport>>,
}

/// A fixed pool of analysis workers behind a round-robin dispatcher.
pub struct WorkerPool {
    task_sender: mpsc::UnboundedSender<ImageTask>,
    workers: Vec<tokio::task::JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawns `pool_size` workers (defaulting to the CPU count when 0).
    pub fn new(pool_size: usize) -> Self {
        let pool_size = if pool_size == 0 {
            num_cpus::get().max(1)
        } else {
            pool_size
        };

        let (task_sender, mut task_receiver) = mpsc::unbounded_channel::<ImageTask>();
        let mut workers = Vec::new();

        // Create a single dispatcher that distributes tasks to workers.
        let (worker_senders, worker_receivers): (Vec<_>, Vec<_>) = (0..pool_size)
            .map(|_| mpsc::unbounded_channel::<ImageTask>())
            .unzip();

        // Spawn dispatcher.
        let dispatcher_senders = worker_senders;
        tokio::spawn(async move {
            let mut worker_idx = 0;
            while let Some(task) = task_receiver.recv().await {
                let _ = dispatcher_senders[worker_idx].send(task);
                worker_idx = (worker_idx + 1) % pool_size;
            }
        });

        // Spawn workers. Each owns a single-band pipeline; concurrency comes
        // from the pool width, not from within one analysis. The CPU-bound
        // analysis runs on the blocking thread pool, which works on every
        // runtime flavor, current-thread included.
        for mut worker_receiver in worker_receivers {
            let worker = tokio::spawn(async move {
                let pipeline =
                    Arc::new(RipenessPipeline::new(PipelineConfig { worker_count: 1 }));

                while let Some(task) = worker_receiver.recv().await {
                    let ImageTask {
                        pixels,
                        width,
                        height,
                        result_sender,
                    } = task;
                    let pipeline = Arc::clone(&pipeline);
                    let outcome =
                        tokio::task::spawn_blocking(move || pipeline.analyze(&pixels, width, height))
                            .await
                            // Join failures mean the blocking task panicked or
                            // the runtime is shutting down; surface both as an
                            // unavailable pool rather than killing the worker.
                            .unwrap_or(Err(AnalysisError::PoolUnavailable));
                    let _ = result_sender.send(outcome);
                }
            });

            workers.push(worker);
        }

        Self {
            task_sender,
            workers,
        }
    }

    /// Submits one image and awaits its report.
    pub async fn analyze(
        &self,
        pixels: Vec<u8>,
        width: u32,
        height: u32,
    ) -> Result<AnalysisReport> {
        let (result_sender, result_receiver) = oneshot::channel();

        let task = ImageTask {
            pixels,
            width,
            height,
            result_sender,
        };

        self.task_sender
            .send(task)
            .map_err(|_| AnalysisError::PoolUnavailable)?;

        result_receiver
            .await
            .map_err(|_| AnalysisError::PoolUnavailable)?
    }

    /// Number of workers in the pool.
    pub fn size(&self) -> usize {
        self.workers.len()
    }
}

/// Batch front end over the worker pool: submit a whole set of images and
/// collect the reports in submission order.
pub struct ParallelPipeline {
    worker_pool: WorkerPool,
}

impl ParallelPipeline {
    pub fn new(pool_size: usize) -> Self {
        Self {
            worker_pool: WorkerPool::new(pool_size),
        }
    }

    pub async fn analyze(
        &self,
        pixels: Vec<u8>,
        width: u32,
        height: u32,
    ) -> Result<AnalysisReport> {
        self.worker_pool.analyze(pixels, width, height).await
    }

    /// Analyzes a batch of `(pixels, width, height)` images concurrently.
    /// Results come back in the same order as the input, one per image;
    /// per-image failures do not abort the rest of the batch.
    pub async fn analyze_batch(
        &self,
        images: Vec<(Vec<u8>, u32, u32)>,
    ) -> Vec<Result<AnalysisReport>> {
        let submissions = images
            .into_iter()
            .map(|(pixels, width, height)| self.worker_pool.analyze(pixels, width, height));
        join_all(submissions).await
    }
}

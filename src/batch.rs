//! Offline alignment of many analyses on a pool of worker threads.

extern crate crossbeam_channel;

use std::{num::NonZeroUsize, thread};

use crossbeam_channel::unbounded;
use grammr::{analysis::Analysis, error::AlignError};
use tracing::{debug, trace};

pub type Aligned = Result<Analysis, AlignError>;

/// Aligns every analysis, returning results in input order.
pub fn align_all(analyses: Vec<Analysis>, workers: NonZeroUsize) -> Vec<Aligned> {
    let total = analyses.len();
    let workers = workers.get().min(total.max(1));

    let (job_tx, job_rx) = unbounded::<(usize, Analysis)>();
    let (result_tx, result_rx) = unbounded::<(usize, Aligned)>();

    analyses.into_iter().enumerate().for_each(|job| {
        // Receiver is alive until the scope below ends.
        let _ = job_tx.send(job);
    });
    drop(job_tx);

    thread::scope(|scope| {
        (0..workers).for_each(|worker| {
            let job_rx = job_rx.clone();
            let result_tx = result_tx.clone();

            scope.spawn(move || {
                let mut handled = 0usize;

                while let Ok((index, analysis)) = job_rx.recv() {
                    trace!(worker, index, "aligning analysis");
                    let _ = result_tx.send((index, analysis.into_aligned()));
                    handled += 1;
                }

                debug!(worker, handled, "alignment worker finished");
            });
        });
    });
    drop(result_tx);

    let mut slots = (0..total).map(|_| None).collect::<Vec<Option<Aligned>>>();

    result_rx.iter().for_each(|(index, result)| {
        slots[index] = Some(result);
    });

    slots.into_iter().flatten().collect()
}

use std::io::Write;
use std::time::{Duration, Instant};

use mongodb::bson::DateTime;

use crate::batch::{batch_offsets, generate_batch};
use crate::config::Config;
use crate::error::Result;
use crate::index::{ensure_ttl_index, IndexStatus};
use crate::store::{MongoStore, TokenStore};

pub const DEFAULT_EXPERIMENT: i64 = 2;

/// Cleanup that follows the insert phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Experiment {
    /// Remove every document right away.
    DeleteAll,
    /// Stamp every document as already expired and leave removal to the
    /// TTL monitor.
    ExpireAll,
}

impl Experiment {
    /// `None` for ids that select no experiment.
    pub fn from_id(id: i64) -> Option<Self> {
        match id {
            1 => Some(Experiment::DeleteAll),
            2 => Some(Experiment::ExpireAll),
            _ => None,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            Experiment::DeleteAll => 1,
            Experiment::ExpireAll => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsertSummary {
    pub records: u64,
    pub batches: usize,
    /// Sum of the per-batch insert call latencies.
    pub elapsed: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The experiment id was not recognised; only the index was checked.
    IndexOnly { index: IndexStatus },
    Completed {
        index: IndexStatus,
        inserted: InsertSummary,
        experiment: Experiment,
        /// Wall-clock time the cleanup phase began.
        cleanup_started: DateTime,
        cleanup_elapsed: Duration,
        affected: u64,
    },
}

/// Generate and insert `config.document_count()` tokens, one insert call
/// per batch. Only the insert calls are timed.
pub async fn insert_records<S: TokenStore + ?Sized>(store: &S, config: &Config) -> Result<InsertSummary> {
    config.validate()?;
    let batch_size = config.batch_size();

    let mut summary = InsertSummary {
        records: 0,
        batches: 0,
        elapsed: Duration::ZERO,
    };
    for offset in batch_offsets(config.document_count(), batch_size) {
        let batch = generate_batch(offset, batch_size);

        let start = Instant::now();
        let written = store.insert_batch(offset, &batch).await?;
        let took = start.elapsed();

        tracing::debug!(offset, size = batch.len(), ?took, "batch inserted");
        summary.records += written;
        summary.batches += 1;
        summary.elapsed += took;
    }
    Ok(summary)
}

/// Run one benchmark against an open store, writing the report lines to
/// `out`. Any failed call ends the run with that error.
pub async fn run<S, W>(store: &S, config: &Config, experiment_id: i64, out: &mut W) -> Result<Outcome>
where
    S: TokenStore + ?Sized,
    W: Write,
{
    config.validate()?;

    let index = ensure_ttl_index(store).await?;
    writeln!(out, "{}", index)?;

    let Some(experiment) = Experiment::from_id(experiment_id) else {
        tracing::info!(experiment_id, "no experiment selected, stopping after index check");
        return Ok(Outcome::IndexOnly { index });
    };

    let inserted = insert_records(store, config).await?;
    writeln!(
        out,
        "inserted {} records in {}",
        inserted.records,
        inserted.elapsed.as_secs_f64()
    )?;

    let cleanup_started = DateTime::now();
    let start = Instant::now();
    let affected = match experiment {
        Experiment::DeleteAll => store.delete_all().await?,
        Experiment::ExpireAll => store.expire_all(cleanup_started).await?,
    };
    let cleanup_elapsed = start.elapsed();

    tracing::info!(?experiment, affected, ?cleanup_elapsed, "cleanup finished");
    writeln!(
        out,
        "Deleted exp={}, time taken {}",
        experiment.id(),
        cleanup_elapsed.as_secs_f64()
    )?;

    Ok(Outcome::Completed {
        index,
        inserted,
        experiment,
        cleanup_started,
        cleanup_elapsed,
        affected,
    })
}

/// Connect, run the benchmark, disconnect.
pub async fn execute<W: Write>(config: &Config, experiment_id: i64, out: &mut W) -> Result<Outcome> {
    config.validate()?;

    let store = MongoStore::connect(config).await?;
    let outcome = run(&store, config, experiment_id, out).await?;
    store.close().await?;
    Ok(outcome)
}

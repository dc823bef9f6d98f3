//! Single-writer actor. All mutations run serially on one pooled connection,
//! each inside an immediate transaction, so SQLite never sees competing writers.

use std::any::Any;

use diesel::SqliteConnection;
use log::error;
use tokio::sync::{mpsc, oneshot};

use super::DbPool;
use crate::errors::StorageError;
use fundpulse_core::errors::{DatabaseError, Error, Result};

type Erased = Box<dyn Any + Send + 'static>;
type Job = Box<dyn FnOnce(&mut SqliteConnection) -> Result<Erased> + Send + 'static>;
type Reply = oneshot::Sender<Result<Erased>>;

const QUEUE_DEPTH: usize = 256;

/// Handle for submitting write jobs to the actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(Job, Reply)>,
}

impl WriteHandle {
    /// Runs `job` on the writer connection and waits for its result.
    ///
    /// The job's error rolls the transaction back and is returned unchanged.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let (reply_tx, reply_rx) = oneshot::channel();
        let erased: Job = Box::new(move |conn| job(conn).map(|value| Box::new(value) as Erased));

        self.tx
            .send((erased, reply_tx))
            .await
            .map_err(|_| writer_stopped())?;

        let boxed = reply_rx.await.map_err(|_| writer_stopped())??;
        boxed
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| Error::Unexpected("writer returned an unexpected type".to_string()))
    }
}

fn writer_stopped() -> Error {
    Error::Database(DatabaseError::Internal(
        "database writer is not running".to_string(),
    ))
}

/// Spawns the writer task. It holds one connection from `pool` for its whole
/// lifetime and stops once every `WriteHandle` is dropped.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(Job, Reply)>(QUEUE_DEPTH);

    tokio::spawn(async move {
        let mut conn = match pool.get() {
            Ok(conn) => conn,
            Err(e) => {
                error!("Writer could not acquire a database connection: {}", e);
                return;
            }
        };

        while let Some((job, reply_tx)) = rx.recv().await {
            let result = conn
                .immediate_transaction::<_, StorageError, _>(|c| job(c).map_err(StorageError::from))
                .map_err(Error::from);

            // The caller may have given up waiting.
            let _ = reply_tx.send(result);
        }
    });

    WriteHandle { tx }
}

use super::DbPool;
use crate::errors::StorageError;
use diesel::SqliteConnection;
use std::any::Any;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

use goldbit_core::errors::Result;

// A job executed on the writer's dedicated connection. The return type is
// erased so one channel can carry jobs with different result types.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

type ErasedJob = Job<Box<dyn Any + Send + 'static>>;
type Reply = oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>;

/// Handle for submitting write jobs to the single-writer actor.
///
/// Every job runs inside an immediate transaction on one dedicated
/// connection, so writes are serialized: a settlement's reads and writes see
/// a consistent view and concurrent settlements cannot interleave.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(ErasedJob, Reply)>,
}

impl WriteHandle {
    /// Runs a database job on the writer's connection and awaits its result.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .expect("Writer actor's receiving channel was closed, indicating the actor stopped.");

        ret_rx
            .await
            .expect("Writer actor dropped the reply sender without sending a result.")
            .map(|boxed: Box<dyn Any + Send + 'static>| {
                *boxed
                    .downcast::<T>()
                    .unwrap_or_else(|_| panic!("Failed to downcast writer actor result."))
            })
    }
}

/// Spawns the background task that serializes all database writes.
///
/// The actor takes one connection from the pool and holds it for its whole
/// lifetime, processing jobs strictly in submission order. Each job is
/// wrapped in `immediate_transaction`, which acquires the SQLite write lock
/// up front and rolls the job back on error, so a failed settlement leaves
/// no partial state behind.
pub fn spawn_writer(pool: Arc<DbPool>) -> WriteHandle {
    // Bounded queue; 1024 is an arbitrary size.
    let (tx, mut rx) = mpsc::channel::<(ErasedJob, Reply)>(1024);

    tokio::spawn(async move {
        let mut conn = pool
            .get()
            .expect("Failed to get a connection from the DB pool for the writer actor.");

        while let Some((job, reply_tx)) = rx.recv().await {
            let result: Result<Box<dyn Any + Send + 'static>> = conn
                .immediate_transaction::<_, StorageError, _>(|c| job(c).map_err(StorageError::from))
                .map_err(|e: StorageError| e.into());

            // Ignore error if the requester has gone away.
            let _ = reply_tx.send(result);
        }
        // rx.recv() returned None: all handles dropped, the actor terminates.
    });

    WriteHandle { tx }
}

use super::DbPool;
use crate::errors::StorageError;
use diesel::SqliteConnection;
use goals_core::errors::{DatabaseError, Error, Result};
use log::error;
use std::any::Any;
use tokio::sync::{mpsc, oneshot};

// The job runs against the writer's dedicated connection and reports a core
// Result, since that's what repository callers expect.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

type ErasedReply = Result<Box<dyn Any + Send + 'static>>;

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    // Each job is a boxed closure; the oneshot sender carries the reply.
    // Box<dyn Any + Send> erases the job's return type.
    tx: mpsc::Sender<(Job<Box<dyn Any + Send + 'static>>, oneshot::Sender<ErasedReply>)>,
}

impl WriteHandle {
    /// Executes a database job on the writer actor's dedicated connection.
    ///
    /// The job runs inside an immediate transaction; an `Err` rolls it back.
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
            .map_err(|_| writer_gone("writer actor has stopped"))?;

        let boxed = ret_rx
            .await
            .map_err(|_| writer_gone("writer actor dropped the reply"))??;

        boxed
            .downcast::<T>()
            .map(|v| *v)
            .map_err(|_| Error::Database(DatabaseError::Internal("writer result type mismatch".into())))
    }
}

fn writer_gone(reason: &str) -> Error {
    Error::Database(DatabaseError::Internal(reason.to_string()))
}

/// Spawns a background Tokio task that acts as the single writer to the database.
///
/// The actor holds one pooled connection for its lifetime and processes write
/// jobs serially. It stops once every `WriteHandle` has been dropped.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(
        Job<Box<dyn Any + Send + 'static>>,
        oneshot::Sender<ErasedReply>,
    )>(1024);

    tokio::spawn(async move {
        let mut conn = match pool.get() {
            Ok(conn) => conn,
            Err(e) => {
                error!("Writer actor could not acquire a database connection: {}", e);
                // Keep answering so callers see an error instead of a hang.
                while let Some((_, reply_tx)) = rx.recv().await {
                    let _ = reply_tx.send(Err(Error::Database(DatabaseError::ConnectionFailed(
                        e.to_string(),
                    ))));
                }
                return;
            }
        };

        while let Some((job, reply_tx)) = rx.recv().await {
            // The transaction needs a StorageError; keep the original core
            // error aside so its kind survives the round trip.
            let mut job_error: Option<Error> = None;
            let result: ErasedReply = conn
                .immediate_transaction::<_, StorageError, _>(|c| {
                    job(c).map_err(|e| {
                        let wrapped = StorageError::CoreError(e.to_string());
                        job_error = Some(e);
                        wrapped
                    })
                })
                .map_err(|e: StorageError| job_error.take().unwrap_or_else(|| e.into()));

            // Receiver may be gone if the request was cancelled.
            let _ = reply_tx.send(result);
        }
    });

    WriteHandle { tx }
}

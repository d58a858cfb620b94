//! Transactional unit of work.
//!
//! Repository and service code receives a [`DbSession`] and never branches on
//! whether a transaction is open. A session either runs statements directly
//! against the pool or joins the one transaction owned by the outermost
//! [`DbSession::create_transaction`] call, which also owns commit/rollback and
//! the post-commit effect queue.
//!
//! The session is an explicit parameter by design. Do not hand a transactional
//! session to an independently spawned task: the transaction belongs to the
//! request that opened it, and once the outermost call commits or rolls back,
//! leftover clones can no longer execute statements.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use sqlx::{PgConnection, PgPool, Postgres, Transaction};
use tokio::sync::Mutex;

use crate::error::AppError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A deferred action that runs only after the enclosing transaction commits.
type Effect = Box<dyn FnOnce() -> BoxFuture<'static, anyhow::Result<()>> + Send>;

/// Transaction isolation level, applied as the first statement of a new
/// transaction. Matches what the underlying driver accepts for
/// `SET TRANSACTION ISOLATION LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IsolationLevel {
    #[default]
    ReadCommitted,
    RepeatableRead,
    Serializable,
}

impl IsolationLevel {
    pub fn set_statement(&self) -> &'static str {
        match self {
            IsolationLevel::ReadCommitted => "SET TRANSACTION ISOLATION LEVEL READ COMMITTED",
            IsolationLevel::RepeatableRead => "SET TRANSACTION ISOLATION LEVEL REPEATABLE READ",
            IsolationLevel::Serializable => "SET TRANSACTION ISOLATION LEVEL SERIALIZABLE",
        }
    }
}

/// State shared by every clone of a transactional session: the open
/// transaction handle and the ordered queue of post-commit effects.
///
/// The handle is an `Option` so the outermost `create_transaction` call can
/// take it out for commit/rollback while clones of the session may still be
/// alive.
struct TxContext {
    tx: Mutex<Option<Transaction<'static, Postgres>>>,
    effects: Mutex<Vec<Effect>>,
}

impl TxContext {
    fn new(tx: Transaction<'static, Postgres>) -> Self {
        Self {
            tx: Mutex::new(Some(tx)),
            effects: Mutex::new(Vec::new()),
        }
    }
}

/// Entry point for database access; hands out sessions.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// A fresh, non-transactional session for one request or operation.
    pub fn session(&self) -> DbSession {
        DbSession {
            pool: self.pool.clone(),
            ctx: None,
        }
    }

    /// Connectivity probe for the health endpoint.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Handle to "the right connection to use" for one logical operation.
///
/// Cloning is cheap; clones of a transactional session share the same
/// transaction and effect queue.
#[derive(Clone)]
pub struct DbSession {
    pool: PgPool,
    ctx: Option<Arc<TxContext>>,
}

impl DbSession {
    pub fn in_transaction(&self) -> bool {
        self.ctx.is_some()
    }

    /// Runs `op` with the active transaction's connection, or with a
    /// connection checked out from the pool when no transaction is open.
    /// The absent-transaction path is the expected default, not an error.
    pub async fn use_transaction<T, F>(&self, op: F) -> Result<T, sqlx::Error>
    where
        F: for<'c> FnOnce(&'c mut PgConnection) -> BoxFuture<'c, Result<T, sqlx::Error>>,
    {
        match &self.ctx {
            Some(ctx) => {
                let mut guard = ctx.tx.lock().await;
                let tx = guard.as_mut().ok_or(sqlx::Error::PoolClosed)?;
                op(&mut **tx).await
            }
            None => {
                let mut conn = self.pool.acquire().await?;
                op(&mut *conn).await
            }
        }
    }

    /// Runs `op` as one atomic unit at the default isolation level
    /// (read committed).
    ///
    /// If this session is already transactional, `op` joins the caller's
    /// transaction: no second transaction is begun and the outermost call
    /// keeps ownership of commit, rollback, and the effect queue.
    pub async fn create_transaction<'a, T, F>(&'a self, op: F) -> Result<T, AppError>
    where
        T: Send,
        F: FnOnce(DbSession) -> BoxFuture<'a, Result<T, AppError>> + 'a,
    {
        self.create_transaction_with(IsolationLevel::default(), op)
            .await
    }

    /// Like [`DbSession::create_transaction`] with an explicit isolation
    /// level. The level only applies when this call actually begins the
    /// transaction; nested calls run under the outer transaction's level.
    pub async fn create_transaction_with<'a, T, F>(
        &'a self,
        isolation: IsolationLevel,
        op: F,
    ) -> Result<T, AppError>
    where
        T: Send,
        F: FnOnce(DbSession) -> BoxFuture<'a, Result<T, AppError>> + 'a,
    {
        if self.ctx.is_some() {
            return op(self.clone()).await;
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::InternalServerError(e.into()))?;
        sqlx::query(isolation.set_statement())
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::InternalServerError(e.into()))?;

        let ctx = Arc::new(TxContext::new(tx));
        let session = DbSession {
            pool: self.pool.clone(),
            ctx: Some(Arc::clone(&ctx)),
        };

        let result = op(session).await;

        let tx = ctx
            .tx
            .lock()
            .await
            .take()
            .ok_or_else(|| AppError::InternalServerError(anyhow::anyhow!("transaction handle consumed before the unit of work completed")))?;

        match result {
            Ok(value) => {
                tx.commit()
                    .await
                    .map_err(|e| AppError::InternalServerError(e.into()))?;
                let effects = std::mem::take(&mut *ctx.effects.lock().await);
                run_effects(effects).await;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!(error = %rollback_err, "transaction rollback failed");
                }
                Err(err)
            }
        }
    }

    /// Schedules `effect` to run after the enclosing transaction commits.
    ///
    /// Inside a transaction the effect is queued; it runs exactly once after
    /// the outermost commit and never runs on rollback. Outside any
    /// transaction there is nothing to defer to, so the effect runs
    /// immediately and its error is returned to the caller.
    pub async fn after_commit<F, Fut>(&self, effect: F) -> Result<(), AppError>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        match &self.ctx {
            Some(ctx) => {
                ctx.effects
                    .lock()
                    .await
                    .push(Box::new(move || Box::pin(effect())));
                Ok(())
            }
            None => effect().await.map_err(AppError::InternalServerError),
        }
    }
}

/// Post-commit effects run sequentially in enqueue order. The transaction has
/// already committed, so a failing effect cannot change the operation's
/// outcome: it is logged and the remaining effects still run.
async fn run_effects(effects: Vec<Effect>) {
    for (index, effect) in effects.into_iter().enumerate() {
        if let Err(err) = effect().await {
            tracing::error!(effect = index, error = %err, "post-commit effect failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn lazy_session() -> DbSession {
        let pool = PgPool::connect_lazy("postgres://localhost/laxdb_test")
            .expect("lazy pool from static url");
        Database::new(pool).session()
    }

    #[test]
    fn isolation_levels_render_set_statements() {
        assert_eq!(
            IsolationLevel::default().set_statement(),
            "SET TRANSACTION ISOLATION LEVEL READ COMMITTED"
        );
        assert_eq!(
            IsolationLevel::Serializable.set_statement(),
            "SET TRANSACTION ISOLATION LEVEL SERIALIZABLE"
        );
    }

    #[tokio::test]
    async fn after_commit_without_transaction_runs_immediately() {
        let session = lazy_session();
        let ran = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&ran);

        session
            .after_commit(move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .await
            .expect("immediate effect succeeds");

        assert_eq!(ran.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn after_commit_without_transaction_propagates_effect_error() {
        let session = lazy_session();
        let result = session
            .after_commit(|| async { Err(anyhow::anyhow!("smtp down")) })
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn after_commit_inside_transaction_queues_without_running() {
        let session = lazy_session();
        // A context with no live transaction handle is enough to observe the
        // queueing behavior; nothing here touches the database.
        let ctx = Arc::new(TxContext {
            tx: Mutex::new(None),
            effects: Mutex::new(Vec::new()),
        });
        let tx_session = DbSession {
            pool: session.pool.clone(),
            ctx: Some(Arc::clone(&ctx)),
        };

        let ran = Arc::new(AtomicUsize::new(0));
        for _ in 0..2 {
            let counter = Arc::clone(&ran);
            tx_session
                .after_commit(move || async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                })
                .await
                .expect("queueing succeeds");
        }

        assert_eq!(ran.load(Ordering::SeqCst), 0);
        assert_eq!(ctx.effects.lock().await.len(), 2);
    }

    #[tokio::test]
    async fn queued_effects_run_in_enqueue_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let mut effects: Vec<Effect> = Vec::new();
        for label in ["first", "second", "third"] {
            let order = Arc::clone(&order);
            effects.push(Box::new(move || {
                Box::pin(async move {
                    order.lock().await.push(label);
                    Ok(())
                })
            }));
        }

        run_effects(effects).await;
        assert_eq!(*order.lock().await, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn failing_effect_does_not_stop_later_effects() {
        let ran = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&ran);
        let effects: Vec<Effect> = vec![
            Box::new(|| Box::pin(async { Err(anyhow::anyhow!("boom")) })),
            Box::new(move || {
                Box::pin(async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                })
            }),
        ];

        run_effects(effects).await;
        assert_eq!(ran.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn use_transaction_fails_once_the_handle_is_consumed() {
        let session = lazy_session();
        let ctx = Arc::new(TxContext {
            tx: Mutex::new(None),
            effects: Mutex::new(Vec::new()),
        });
        let stale = DbSession {
            pool: session.pool.clone(),
            ctx: Some(ctx),
        };

        let result = stale
            .use_transaction(|conn| {
                Box::pin(async move { sqlx::query("SELECT 1").execute(&mut *conn).await.map(|_| ()) })
            })
            .await;
        assert!(matches!(result, Err(sqlx::Error::PoolClosed)));
    }
}

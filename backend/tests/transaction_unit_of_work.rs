//! End-to-end behavior of the transactional unit of work: atomicity,
//! nested-call joining, and post-commit effect scheduling.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use laxdb_backend::db::IsolationLevel;
use laxdb_backend::error::AppError;
use laxdb_backend::repositories::FeedbackRepository;

mod support;

#[tokio::test]
async fn callback_error_rolls_back_writes_and_discards_effects() {
    let Some(db) = support::test_database().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    let session = db.session();
    let repo = FeedbackRepository::new();
    let topic = format!("rollback-{}", Uuid::new_v4());
    let entry = support::feedback_entry(&topic);

    let effect_runs = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&effect_runs);

    let result: Result<(), AppError> = session
        .create_transaction(move |tx| {
            Box::pin(async move {
                repo.create(&tx, &entry).await?;
                tx.after_commit(move || async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                })
                .await?;
                Err(AppError::BadRequest("forced failure".into()))
            })
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(support::count_feedback(db.pool(), &topic).await, 0);
    assert_eq!(effect_runs.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn nested_call_joins_the_outer_transaction() {
    let Some(db) = support::test_database().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    let session = db.session();
    let repo = FeedbackRepository::new();
    let topic_a = format!("nested-a-{}", Uuid::new_v4());
    let topic_b = format!("nested-b-{}", Uuid::new_v4());
    let entry_a = support::feedback_entry(&topic_a);
    let entry_b = support::feedback_entry(&topic_b);

    let observer = db.pool().clone();
    let probe_topic = topic_a.clone();

    session
        .create_transaction(move |tx| {
            Box::pin(async move {
                repo.create(&tx, &entry_a).await?;

                // Nested entry point: must reuse the same transaction.
                tx.create_transaction(move |inner| {
                    Box::pin(async move {
                        assert!(inner.in_transaction());
                        repo.create(&inner, &entry_b).await?;
                        Ok(())
                    })
                })
                .await?;

                // Nothing is committed until the outermost call finishes:
                // a separate connection cannot see either row yet.
                let visible =
                    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM feedback WHERE topic = $1")
                        .bind(&probe_topic)
                        .fetch_one(&observer)
                        .await
                        .map_err(AppError::from)?;
                assert_eq!(visible, 0);

                Ok(())
            })
        })
        .await
        .expect("outer transaction commits");

    assert_eq!(support::count_feedback(db.pool(), &topic_a).await, 1);
    assert_eq!(support::count_feedback(db.pool(), &topic_b).await, 1);
}

#[tokio::test]
async fn effects_run_once_in_order_after_commit() {
    let Some(db) = support::test_database().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    let session = db.session();
    let repo = FeedbackRepository::new();
    let topic = format!("effects-{}", Uuid::new_v4());
    let entry = support::feedback_entry(&topic);

    let log: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let observer = db.pool().clone();
    let probe_topic = topic.clone();
    let visibility_log = Arc::clone(&log);
    let second_log = Arc::clone(&log);

    session
        .create_transaction(move |tx| {
            Box::pin(async move {
                repo.create(&tx, &entry).await?;

                // The first effect checks, from a separate connection, that
                // the insert is already durable when effects run.
                tx.after_commit(move || async move {
                    let visible = sqlx::query_scalar::<_, i64>(
                        "SELECT COUNT(*) FROM feedback WHERE topic = $1",
                    )
                    .bind(&probe_topic)
                    .fetch_one(&observer)
                    .await?;
                    visibility_log
                        .lock()
                        .unwrap()
                        .push(format!("notified:visible={}", visible));
                    Ok(())
                })
                .await?;

                tx.after_commit(move || async move {
                    second_log.lock().unwrap().push("second".to_string());
                    Ok(())
                })
                .await?;

                Ok(())
            })
        })
        .await
        .expect("transaction commits");

    let entries = log.lock().unwrap().clone();
    assert_eq!(entries, vec!["notified:visible=1".to_string(), "second".to_string()]);
}

#[tokio::test]
async fn failing_effect_does_not_mask_the_committed_result() {
    let Some(db) = support::test_database().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    let session = db.session();
    let repo = FeedbackRepository::new();
    let topic = format!("effect-failure-{}", Uuid::new_v4());
    let entry = support::feedback_entry(&topic);

    let later_ran = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&later_ran);

    session
        .create_transaction(move |tx| {
            Box::pin(async move {
                repo.create(&tx, &entry).await?;
                tx.after_commit(|| async { Err(anyhow::anyhow!("notification failed")) })
                    .await?;
                tx.after_commit(move || async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                })
                .await?;
                Ok(())
            })
        })
        .await
        .expect("effect failure must not fail the operation");

    assert_eq!(support::count_feedback(db.pool(), &topic).await, 1);
    assert_eq!(later_ran.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn use_transaction_falls_back_to_the_pool() {
    let Some(db) = support::test_database().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    let session = db.session();
    let repo = FeedbackRepository::new();
    let topic = format!("no-tx-{}", Uuid::new_v4());
    let entry = support::feedback_entry(&topic);

    assert!(!session.in_transaction());
    repo.create(&session, &entry)
        .await
        .expect("repository call works without an enclosing transaction");

    assert_eq!(support::count_feedback(db.pool(), &topic).await, 1);
}

#[tokio::test]
async fn explicit_isolation_level_is_accepted() {
    let Some(db) = support::test_database().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    let session = db.session();
    let repo = FeedbackRepository::new();
    let topic = format!("serializable-{}", Uuid::new_v4());
    let entry = support::feedback_entry(&topic);

    session
        .create_transaction_with(IsolationLevel::Serializable, move |tx| {
            Box::pin(async move {
                repo.create(&tx, &entry).await?;
                Ok(())
            })
        })
        .await
        .expect("serializable transaction commits");

    assert_eq!(support::count_feedback(db.pool(), &topic).await, 1);
}

use crate::utils::error::{Result, SeederError};
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Run `tasks` with at most `limit` in flight at once.
///
/// Tasks acquire permits in their original order (the semaphore hands out
/// permits FIFO), so admission order matches input order; completion order
/// does not when `limit > 1`. Every task runs to a terminal state — a
/// failure never cancels admitted or pending siblings. Results come back
/// in input order. A `limit` of 0 is treated as 1.
pub async fn run_bounded<F, T>(tasks: Vec<F>, limit: usize) -> Vec<Result<T>>
where
    F: Future<Output = Result<T>>,
{
    let semaphore = Arc::new(Semaphore::new(limit.max(1)));

    let mut in_flight = FuturesUnordered::new();
    for (index, task) in tasks.into_iter().enumerate() {
        let semaphore = Arc::clone(&semaphore);
        in_flight.push(async move {
            let _permit = match semaphore.acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => {
                    return (
                        index,
                        Err(SeederError::ProcessingError {
                            message: "upload semaphore closed".to_string(),
                        }),
                    )
                }
            };
            (index, task.await)
        });
    }

    let mut indexed: Vec<(usize, Result<T>)> = Vec::with_capacity(in_flight.len());
    while let Some(entry) = in_flight.next().await {
        indexed.push(entry);
    }
    indexed.sort_by_key(|(index, _)| *index);

    indexed.into_iter().map(|(_, result)| result).collect()
}

/// Aggregate form of [`run_bounded`]: waits for every task, then fails
/// with the error of the earliest-admitted failing task, if any.
pub async fn run_bounded_all<F, T>(tasks: Vec<F>, limit: usize) -> Result<Vec<T>>
where
    F: Future<Output = Result<T>>,
{
    let mut values = Vec::new();
    let mut first_error = None;

    for result in run_bounded(tasks, limit).await {
        match result {
            Ok(value) => values.push(value),
            Err(error) => {
                if first_error.is_none() {
                    first_error = Some(error);
                }
            }
        }
    }

    match first_error {
        Some(error) => Err(error),
        None => Ok(values),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    fn fail(message: &str) -> SeederError {
        SeederError::ProcessingError {
            message: message.to_string(),
        }
    }

    #[tokio::test]
    async fn test_never_exceeds_concurrency_bound() {
        for limit in [1usize, 2, 3] {
            let current = Arc::new(AtomicUsize::new(0));
            let peak = Arc::new(AtomicUsize::new(0));

            let tasks: Vec<_> = (0..10)
                .map(|i| {
                    let current = Arc::clone(&current);
                    let peak = Arc::clone(&peak);
                    async move {
                        let now = current.fetch_add(1, Ordering::SeqCst) + 1;
                        peak.fetch_max(now, Ordering::SeqCst);
                        tokio::time::sleep(Duration::from_millis(5)).await;
                        current.fetch_sub(1, Ordering::SeqCst);
                        Ok(i)
                    }
                })
                .collect();

            let results = run_bounded(tasks, limit).await;
            assert_eq!(results.len(), 10);
            assert!(peak.load(Ordering::SeqCst) <= limit);
        }
    }

    #[tokio::test]
    async fn test_single_slot_runs_strictly_in_order() {
        let order = Arc::new(Mutex::new(Vec::new()));

        let tasks: Vec<_> = (0..8)
            .map(|i| {
                let order = Arc::clone(&order);
                async move {
                    tokio::time::sleep(Duration::from_millis(2)).await;
                    order.lock().unwrap().push(i);
                    Ok(i)
                }
            })
            .collect();

        let values = run_bounded_all(tasks, 1).await.unwrap();
        assert_eq!(values, (0..8).collect::<Vec<_>>());
        assert_eq!(*order.lock().unwrap(), (0..8).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_failure_does_not_cancel_siblings() {
        let completed = Arc::new(AtomicUsize::new(0));

        let tasks: Vec<_> = (0..6)
            .map(|i| {
                let completed = Arc::clone(&completed);
                async move {
                    tokio::time::sleep(Duration::from_millis(2)).await;
                    completed.fetch_add(1, Ordering::SeqCst);
                    if i == 2 {
                        Err(fail("batch 2 rejected"))
                    } else {
                        Ok(i)
                    }
                }
            })
            .collect();

        let error = run_bounded_all(tasks, 2).await.unwrap_err();
        assert_eq!(completed.load(Ordering::SeqCst), 6);
        assert!(error.to_string().contains("batch 2 rejected"));
    }

    #[tokio::test]
    async fn test_earliest_admitted_failure_wins() {
        let tasks: Vec<_> = (0..5)
            .map(|i| async move {
                match i {
                    1 => Err(fail("first failure")),
                    3 => Err(fail("second failure")),
                    _ => Ok(i),
                }
            })
            .collect();

        let error = run_bounded_all(tasks, 4).await.unwrap_err();
        assert!(error.to_string().contains("first failure"));
    }

    #[tokio::test]
    async fn test_results_keep_input_order() {
        // Earlier tasks sleep longer, so completion order inverts.
        let tasks: Vec<_> = (0..4)
            .map(|i| async move {
                tokio::time::sleep(Duration::from_millis(20 - i * 5)).await;
                Ok(i)
            })
            .collect();

        let values = run_bounded_all(tasks, 4).await.unwrap();
        assert_eq!(values, vec![0, 1, 2, 3]);
    }

    #[tokio::test]
    async fn test_no_tasks_resolves_empty() {
        let tasks: Vec<std::future::Ready<Result<()>>> = Vec::new();
        let values = run_bounded_all(tasks, 1).await.unwrap();
        assert!(values.is_empty());
    }
}

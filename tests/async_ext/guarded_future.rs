use std::time::Duration;

use error_boundary::prelude_async::*;
use futures_core::future::FusedFuture;

use crate::support::{AppError, Recorder};

fn boundary(recorder: &Recorder) -> Boundary<AppError> {
    Boundary::builder("fallback")
        .on_error(recorder.hook("hook"))
        .message_sink(recorder.sink())
        .build()
}

async fn fetch_rows(fail: bool) -> Result<Vec<u32>, AppError> {
    tokio::time::sleep(Duration::from_millis(1)).await;
    if fail {
        Err(AppError::runtime("connection reset"))
    } else {
        Ok(vec![1, 2, 3])
    }
}

#[tokio::test]
async fn success_resolves_to_some() {
    let recorder = Recorder::new();

    let outcome = fetch_rows(false).within(&boundary(&recorder)).await;

    assert_eq!(outcome, Ok(Some(vec![1, 2, 3])));
    assert!(recorder.entries().is_empty());
}

#[tokio::test]
async fn ordinary_error_is_intercepted_after_pending() {
    let recorder = Recorder::new();

    let outcome = fetch_rows(true).within(&boundary(&recorder)).await;

    assert_eq!(outcome, Ok(None));
    assert_eq!(recorder.entries(), ["hook", "sink:fallback"]);
}

#[tokio::test]
async fn termination_error_passes_through() {
    let recorder = Recorder::new();
    let boundary = boundary(&recorder);

    let outcome = boundary.guard_future(async { Err::<(), _>(AppError::Interrupted) }).await;

    assert_eq!(outcome, Err(AppError::Interrupted));
    assert!(recorder.entries().is_empty());
}

#[tokio::test]
async fn panic_during_poll_is_intercepted() {
    let recorder = Recorder::new();

    let outcome = async {
        tokio::task::yield_now().await;
        let rows: Vec<u32> = Vec::new();
        Ok::<_, AppError>(rows[3])
    }
    .within(&boundary(&recorder))
    .await;

    assert_eq!(outcome, Ok(None));
    assert_eq!(recorder.entries(), ["hook", "sink:fallback"]);
}

#[tokio::test]
async fn guarded_future_is_spawnable() {
    let recorder = Recorder::new();
    let guarded = fetch_rows(true).within(&boundary(&recorder));

    let outcome = tokio::spawn(guarded).await.unwrap();

    assert_eq!(outcome, Ok(None));
    assert_eq!(recorder.entries(), ["hook", "sink:fallback"]);
}

#[tokio::test]
async fn fused_after_completion() {
    struct Ready(Option<Result<u8, AppError>>);

    impl std::future::Future for Ready {
        type Output = Result<u8, AppError>;

        fn poll(
            mut self: std::pin::Pin<&mut Self>,
            _cx: &mut std::task::Context<'_>,
        ) -> std::task::Poll<Self::Output> {
            std::task::Poll::Ready(self.0.take().unwrap())
        }
    }

    impl FusedFuture for Ready {
        fn is_terminated(&self) -> bool {
            self.0.is_none()
        }
    }

    let recorder = Recorder::new();
    let mut guarded = Box::pin(Ready(Some(Ok(5))).within(&boundary(&recorder)));

    assert!(!guarded.is_terminated());
    assert_eq!(guarded.as_mut().await, Ok(Some(5)));
    assert!(guarded.is_terminated());
}

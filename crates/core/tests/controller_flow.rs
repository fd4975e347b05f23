use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;

use async_trait::async_trait;
use callscope_core::{
    AnalysisBackend, AnalysisController, AnalysisState, CallAnalysis, CallscopeError, MockBackend,
    Result, Sentiment,
};

/// Fake service that counts calls and resolves with a fixed analysis.
struct FixedBackend {
    calls: Arc<AtomicUsize>,
    analysis: CallAnalysis,
}

#[async_trait]
impl AnalysisBackend for FixedBackend {
    async fn analyze(&self, _url: &str) -> Result<CallAnalysis> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.analysis.clone())
    }
}

struct FailingBackend;

#[async_trait]
impl AnalysisBackend for FailingBackend {
    async fn analyze(&self, _url: &str) -> Result<CallAnalysis> {
        Err(CallscopeError::AnalysisFailed {
            reason: "analysis service unavailable".to_string(),
        })
    }
}

fn sample_analysis() -> CallAnalysis {
    CallAnalysis {
        talk_time_ratio: 55,
        questions_count: 7,
        longest_monologue_secs: 61,
        sentiment: Sentiment::Neutral,
        insights: vec!["Ask more discovery questions early".to_string()],
        transcript: "Rep: Hello.\nCustomer: Hi.".to_string(),
    }
}

#[tokio::test]
async fn invalid_url_never_reaches_the_backend() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut controller = AnalysisController::new(Arc::new(FixedBackend {
        calls: Arc::clone(&calls),
        analysis: sample_analysis(),
    }));

    controller.analyze("https://vimeo.com/123").await;

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    let AnalysisState::Failed(message) = controller.state() else {
        panic!("expected failed state, got {:?}", controller.state());
    };
    assert!(!message.is_empty());
}

#[tokio::test]
async fn valid_url_runs_one_cycle_to_success() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut controller = AnalysisController::new(Arc::new(FixedBackend {
        calls: Arc::clone(&calls),
        analysis: sample_analysis(),
    }));

    controller
        .analyze("https://www.youtube.com/watch?v=abc123")
        .await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(controller.analysis(), Some(&sample_analysis()));
}

#[tokio::test]
async fn backend_rejection_surfaces_as_failed() {
    let mut controller = AnalysisController::new(Arc::new(FailingBackend));

    controller.analyze("youtu.be/abc123").await;

    let AnalysisState::Failed(message) = controller.state() else {
        panic!("expected failed state");
    };
    assert!(message.contains("analysis service unavailable"));
}

#[tokio::test]
async fn late_resolution_from_superseded_cycle_is_ignored() {
    let mut controller = AnalysisController::new(Arc::new(FailingBackend));

    // first cycle starts, then a second submission supersedes it
    let first = controller.submit("youtu.be/first").unwrap();
    let second = controller.submit("youtu.be/second").unwrap();
    assert_eq!(*controller.state(), AnalysisState::Loading);

    // the first cycle resolves late; its outcome must not become visible
    let stale = CallAnalysis {
        talk_time_ratio: 1,
        ..sample_analysis()
    };
    assert!(!controller.complete(&first, Ok(stale)));
    assert_eq!(*controller.state(), AnalysisState::Loading);

    assert!(controller.complete(&second, Ok(sample_analysis())));
    assert_eq!(controller.analysis(), Some(&sample_analysis()));
}

#[tokio::test(start_paused = true)]
async fn mock_backend_resolves_with_canned_metrics_after_delay() {
    let mut controller =
        AnalysisController::new(Arc::new(MockBackend::new(Duration::from_millis(2500))));

    controller.analyze("youtu.be/dQw4w9WgXcQ").await;

    assert_eq!(controller.analysis(), Some(&MockBackend::canned_analysis()));
}

#[tokio::test]
async fn export_matches_the_displayed_analysis() {
    let mut controller = AnalysisController::new(Arc::new(FixedBackend {
        calls: Arc::new(AtomicUsize::new(0)),
        analysis: sample_analysis(),
    }));

    controller.analyze("youtu.be/abc123").await;

    let transcript = controller
        .export(callscope_core::ExportKind::Transcript)
        .unwrap()
        .unwrap();
    assert_eq!(transcript.bytes, sample_analysis().transcript.as_bytes());

    let structured = controller
        .export(callscope_core::ExportKind::Structured)
        .unwrap()
        .unwrap();
    let decoded: CallAnalysis = serde_json::from_slice(&structured.bytes).unwrap();
    assert_eq!(decoded, sample_analysis());
}

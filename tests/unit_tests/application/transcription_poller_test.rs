use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use lingobot::application::ports::TranscriptionError;
use lingobot::application::services::{PollSettings, TranscriptionPoller};
use lingobot::domain::TranscriptionStatus;
use tokio_util::sync::CancellationToken;

use super::mocks::MockTranscriptionClient;

fn poll_settings() -> PollSettings {
    PollSettings {
        interval: Duration::from_secs(2),
        max_wait: Duration::from_secs(60),
    }
}

#[tokio::test(start_paused = true)]
async fn given_job_completes_on_third_poll_when_transcribing_then_returns_text() {
    let client = Arc::new(MockTranscriptionClient::with_states(vec![
        (TranscriptionStatus::Queued, None, None),
        (TranscriptionStatus::Processing, None, None),
        (TranscriptionStatus::Completed, Some("hello"), None),
    ]));
    let poller = TranscriptionPoller::new(client.clone(), poll_settings());

    let result = poller
        .transcribe(Path::new("audio.wav"), &CancellationToken::new())
        .await;

    assert_eq!(result.unwrap(), "hello");
    assert_eq!(client.fetches(), 3);
}

#[tokio::test(start_paused = true)]
async fn given_job_errors_on_second_poll_when_transcribing_then_returns_job_message() {
    let client = Arc::new(MockTranscriptionClient::with_states(vec![
        (TranscriptionStatus::Queued, None, None),
        (TranscriptionStatus::Error, None, Some("audio too short")),
    ]));
    let poller = TranscriptionPoller::new(client.clone(), poll_settings());

    let result = poller
        .transcribe(Path::new("audio.wav"), &CancellationToken::new())
        .await;

    match result {
        Err(TranscriptionError::JobFailed(message)) => assert_eq!(message, "audio too short"),
        other => panic!("expected job failure, got {:?}", other),
    }
    assert_eq!(client.fetches(), 2);
}

#[tokio::test(start_paused = true)]
async fn given_job_never_finishes_when_transcribing_then_times_out_after_max_wait() {
    let client = Arc::new(MockTranscriptionClient::with_states(vec![(
        TranscriptionStatus::Processing,
        None,
        None,
    )]));
    let settings = PollSettings {
        interval: Duration::from_secs(2),
        max_wait: Duration::from_secs(10),
    };
    let poller = TranscriptionPoller::new(client.clone(), settings);

    let result = poller
        .transcribe(Path::new("audio.wav"), &CancellationToken::new())
        .await;

    assert!(matches!(result, Err(TranscriptionError::TimedOut(_))));
    assert_eq!(client.fetches(), 5);
}

#[tokio::test(start_paused = true)]
async fn given_cancelled_token_when_transcribing_then_stops_before_polling() {
    let client = Arc::new(MockTranscriptionClient::with_states(vec![(
        TranscriptionStatus::Processing,
        None,
        None,
    )]));
    let poller = TranscriptionPoller::new(client.clone(), poll_settings());
    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = poller.transcribe(Path::new("audio.wav"), &cancel).await;

    assert!(matches!(result, Err(TranscriptionError::Cancelled)));
    assert_eq!(client.fetches(), 0);
}

#[tokio::test(start_paused = true)]
async fn given_upload_fails_when_transcribing_then_never_submits() {
    let client = Arc::new(MockTranscriptionClient::failing_upload());
    let poller = TranscriptionPoller::new(client.clone(), poll_settings());

    let result = poller
        .transcribe(Path::new("audio.wav"), &CancellationToken::new())
        .await;

    assert!(matches!(result, Err(TranscriptionError::Status(413))));
    assert_eq!(client.submits.load(Ordering::SeqCst), 0);
    assert_eq!(client.fetches(), 0);
}

#[tokio::test(start_paused = true)]
async fn given_submit_fails_when_transcribing_then_never_polls() {
    let client = Arc::new(MockTranscriptionClient::failing_submit());
    let poller = TranscriptionPoller::new(client.clone(), poll_settings());

    let result = poller
        .transcribe(Path::new("audio.wav"), &CancellationToken::new())
        .await;

    assert!(matches!(result, Err(TranscriptionError::Transport(_))));
    assert_eq!(client.fetches(), 0);
}

#[tokio::test(start_paused = true)]
async fn given_job_completes_after_max_wait_when_transcribing_then_terminal_status_wins() {
    let client = Arc::new(MockTranscriptionClient::with_states(vec![(
        TranscriptionStatus::Completed,
        Some("late but done"),
        None,
    )]));
    let settings = PollSettings {
        interval: Duration::from_secs(5),
        max_wait: Duration::from_secs(1),
    };
    let poller = TranscriptionPoller::new(client.clone(), settings);

    let result = poller
        .transcribe(Path::new("audio.wav"), &CancellationToken::new())
        .await;

    assert_eq!(result.unwrap(), "late but done");
    assert_eq!(client.fetches(), 1);
}

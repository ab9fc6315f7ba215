use lingobot::application::ports::SpeechError;
use lingobot::application::services::MediaFallbackOrchestrator;

use super::mocks::{MockSpeechSynthesizer, MockVoiceSynthesizer};

#[tokio::test]
async fn given_premium_succeeds_when_synthesizing_then_returns_premium_audio_only() {
    let premium = MockVoiceSynthesizer::new(true);
    let baseline = MockSpeechSynthesizer::new(true);
    let orchestrator = MediaFallbackOrchestrator::new(premium.clone(), baseline.clone());

    let audio = orchestrator.synthesize("Hello", 1, true).await.unwrap();

    assert_eq!(audio, b"premium-audio");
    assert_eq!(premium.last_voice().unwrap().name, "Adam");
    assert_eq!(baseline.calls(), 0);
}

#[tokio::test]
async fn given_premium_fails_when_synthesizing_then_falls_back_to_baseline_audio() {
    let premium = MockVoiceSynthesizer::new(false);
    let baseline = MockSpeechSynthesizer::new(true);
    let orchestrator = MediaFallbackOrchestrator::new(premium.clone(), baseline.clone());

    let audio = orchestrator.synthesize("Hello", 0, true).await.unwrap();

    assert_eq!(audio, b"baseline-audio");
    assert_eq!(premium.calls(), 1);
    assert_eq!(baseline.calls(), 1);
}

#[tokio::test]
async fn given_premium_not_requested_when_synthesizing_then_premium_is_never_called() {
    let premium = MockVoiceSynthesizer::new(true);
    let baseline = MockSpeechSynthesizer::new(true);
    let orchestrator = MediaFallbackOrchestrator::new(premium.clone(), baseline.clone());

    let audio = orchestrator.synthesize("Hello", 3, false).await.unwrap();

    assert_eq!(audio, b"baseline-audio");
    assert_eq!(premium.calls(), 0);
}

#[tokio::test]
async fn given_out_of_range_voice_when_synthesizing_then_last_voice_is_used() {
    let premium = MockVoiceSynthesizer::new(true);
    let baseline = MockSpeechSynthesizer::new(true);
    let orchestrator = MediaFallbackOrchestrator::new(premium.clone(), baseline);

    orchestrator.synthesize("Hello", 42, true).await.unwrap();

    assert_eq!(premium.last_voice().unwrap().name, "Bella");
}

#[tokio::test]
async fn given_both_tiers_fail_when_synthesizing_then_returns_baseline_error() {
    let premium = MockVoiceSynthesizer::new(false);
    let baseline = MockSpeechSynthesizer::new(false);
    let orchestrator = MediaFallbackOrchestrator::new(premium, baseline.clone());

    let result = orchestrator.synthesize("Hello", 0, true).await;

    assert!(matches!(result, Err(SpeechError::ProcessFailed(_))));
    assert_eq!(baseline.calls(), 1);
}

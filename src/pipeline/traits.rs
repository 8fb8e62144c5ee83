use crate::alignment::positional::AlignmentOutcome;
use crate::error::RecognitionErrorCode;
use crate::types::{ScoringReport, TokenSequence};

/// Error type returned by external collaborators (synthesizer, scorer).
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync>;

pub trait TranscriptAligner: Send + Sync {
    fn align(
        &self,
        tokens: &TokenSequence,
        reference_words: &[String],
        live_transcript: &str,
    ) -> AlignmentOutcome;
}

/// Streaming speech recognizer. Snapshots, end-of-stream and error events are
/// delivered by the caller through the session's `on_*` entry points.
pub trait RecognitionChannel {
    fn start(&mut self, language: &str) -> Result<(), RecognitionErrorCode>;
    fn stop(&mut self) -> Result<(), RecognitionErrorCode>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    pub text: String,
    pub language: String,
    pub rate: f32,
}

/// Text-to-speech playback owned by one session.
pub trait SpeechSynthesizer {
    /// Replaces whatever is currently playing.
    fn speak(&mut self, request: &SpeechRequest) -> Result<(), CollaboratorError>;
    fn pause(&mut self);
    fn resume(&mut self);
    fn stop(&mut self);
}

pub trait ScoringCollaborator {
    fn score(
        &self,
        reference_text: &str,
        transcript: &str,
    ) -> Result<ScoringReport, CollaboratorError>;
}

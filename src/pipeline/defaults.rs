use crate::alignment::positional::{align_tokens, AlignmentOutcome};
use crate::pipeline::traits::{CollaboratorError, SpeechRequest, SpeechSynthesizer, TranscriptAligner};
use crate::types::TokenSequence;

pub struct PositionalTranscriptAligner;

impl TranscriptAligner for PositionalTranscriptAligner {
    fn align(
        &self,
        tokens: &TokenSequence,
        reference_words: &[String],
        live_transcript: &str,
    ) -> AlignmentOutcome {
        align_tokens(tokens, reference_words, live_transcript)
    }
}

/// Used when a session is built without playback.
pub struct SilentSynthesizer;

impl SpeechSynthesizer for SilentSynthesizer {
    fn speak(&mut self, request: &SpeechRequest) -> Result<(), CollaboratorError> {
        tracing::debug!(chars = request.text.chars().count(), "no synthesizer configured; skipping playback");
        Ok(())
    }

    fn pause(&mut self) {}

    fn resume(&mut self) {}

    fn stop(&mut self) {}
}

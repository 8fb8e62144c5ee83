use crate::alignment::normalization::normalize;
use crate::alignment::positional::AlignmentCursor;
use crate::alignment::tokenization::tokenize;
use crate::config::ReadAlongConfig;
use crate::error::{RecognitionErrorCode, SessionError};
use crate::pipeline::scoring::classify_word_scores;
use crate::pipeline::traits::{
    RecognitionChannel, ScoringCollaborator, SpeechRequest, SpeechSynthesizer, TranscriptAligner,
};
use crate::types::{ReviewMarks, TokenSequence};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Recording,
    Analyzing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

/// How a display token should be emphasized in the speaking view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordMark {
    Correct,
    Incorrect,
    Current,
    Plain,
}

/// Speaking-practice session: owns the recognition channel, the synthesizer
/// and the read-along cursor for one passage.
pub struct SpeakingSession {
    reference_text: String,
    tokens: TokenSequence,
    reference_words: Vec<String>,
    transcript: String,
    cursor: AlignmentCursor,
    state: SessionState,
    playback: PlaybackState,
    restarts_left: u32,
    review: ReviewMarks,
    last_error: Option<SessionError>,
    config: ReadAlongConfig,
    aligner: Box<dyn TranscriptAligner>,
    channel: Box<dyn RecognitionChannel>,
    synthesizer: Box<dyn SpeechSynthesizer>,
    scorer: Option<Box<dyn ScoringCollaborator>>,
}

pub(crate) struct SpeakingSessionParts {
    pub reference_text: String,
    pub config: ReadAlongConfig,
    pub aligner: Box<dyn TranscriptAligner>,
    pub channel: Box<dyn RecognitionChannel>,
    pub synthesizer: Box<dyn SpeechSynthesizer>,
    pub scorer: Option<Box<dyn ScoringCollaborator>>,
}

impl SpeakingSession {
    pub(crate) fn from_parts(parts: SpeakingSessionParts) -> Self {
        let tokens = tokenize(&parts.reference_text);
        let reference_words = normalize(&parts.reference_text);
        Self {
            reference_text: parts.reference_text,
            tokens,
            reference_words,
            transcript: String::new(),
            cursor: AlignmentCursor::default(),
            state: SessionState::Idle,
            playback: PlaybackState::Stopped,
            restarts_left: parts.config.max_channel_restarts,
            review: ReviewMarks::default(),
            last_error: None,
            config: parts.config,
            aligner: parts.aligner,
            channel: parts.channel,
            synthesizer: parts.synthesizer,
            scorer: parts.scorer,
        }
    }

    pub fn reference_text(&self) -> &str {
        &self.reference_text
    }

    pub fn tokens(&self) -> &TokenSequence {
        &self.tokens
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn cursor(&self) -> AlignmentCursor {
        self.cursor
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    pub fn review(&self) -> &ReviewMarks {
        &self.review
    }

    pub fn last_error(&self) -> Option<&SessionError> {
        self.last_error.as_ref()
    }

    pub fn word_mark(&self, token_index: usize) -> WordMark {
        if self.review.correct.contains(&token_index) {
            WordMark::Correct
        } else if self.review.incorrect.contains(&token_index) {
            WordMark::Incorrect
        } else if self.cursor.highlighted_token_index == Some(token_index) {
            WordMark::Current
        } else {
            WordMark::Plain
        }
    }

    /// Idle starts recording; Recording stops, scores and returns to Idle.
    /// Returns the review marks when a recording was finished.
    pub fn toggle_recording(&mut self) -> Result<Option<ReviewMarks>, SessionError> {
        match self.state {
            SessionState::Idle => self.start_recording().map(|()| None),
            SessionState::Recording => self.stop_recording().map(Some),
            SessionState::Analyzing => Ok(None),
        }
    }

    pub fn start_recording(&mut self) -> Result<(), SessionError> {
        if self.state != SessionState::Idle {
            return Ok(());
        }
        self.clear_progress();
        self.restarts_left = self.config.max_channel_restarts;

        if let Err(code) = self.channel.start(&self.config.language) {
            tracing::warn!(%code, "speech recognition channel failed to start");
            return Err(self.fail(SessionError::Recognition { code }));
        }
        self.state = SessionState::Recording;
        tracing::info!(words = self.reference_words.len(), "speaking session recording");
        Ok(())
    }

    /// Closes the channel and silences playback, then hands the transcript to
    /// the scorer if one is configured. The session is Idle afterwards
    /// whatever the outcome.
    pub fn stop_recording(&mut self) -> Result<ReviewMarks, SessionError> {
        if self.state != SessionState::Recording {
            return Ok(self.review.clone());
        }
        self.close_channel();
        self.stop_playback();

        let Some(scorer) = self.scorer.as_ref() else {
            self.state = SessionState::Idle;
            return Ok(self.review.clone());
        };

        self.state = SessionState::Analyzing;
        tracing::info!(chars = self.transcript.chars().count(), "speaking session analyzing");
        let scored = scorer.score(&self.reference_text, &self.transcript);
        self.state = SessionState::Idle;

        match scored {
            Ok(report) => {
                self.review = classify_word_scores(
                    &self.tokens,
                    &report,
                    self.config.word_score_threshold,
                    self.config.pass_accuracy,
                );
                tracing::info!(
                    accuracy = ?self.review.accuracy,
                    incorrect = self.review.incorrect.len(),
                    "speaking session scored"
                );
                Ok(self.review.clone())
            }
            Err(err) => {
                tracing::warn!(error = %err, "pronunciation scoring failed");
                Err(self.fail(SessionError::scoring(err)))
            }
        }
    }

    /// Single entry point for recognizer snapshots. Each snapshot is the full
    /// cumulative transcript and is aligned from scratch.
    pub fn on_transcript(&mut self, snapshot: &str) -> Option<usize> {
        if self.state != SessionState::Recording {
            tracing::debug!(state = ?self.state, "transcript snapshot ignored outside recording");
            return self.cursor.highlighted_token_index;
        }
        self.restarts_left = self.config.max_channel_restarts;
        self.transcript.clear();
        self.transcript.push_str(snapshot);

        let outcome = self
            .aligner
            .align(&self.tokens, &self.reference_words, &self.transcript);
        self.cursor.apply(outcome);
        tracing::debug!(
            matched = self.cursor.matched_word_count,
            highlight = ?self.cursor.highlighted_token_index,
            "read-along position updated"
        );
        self.cursor.highlighted_token_index
    }

    /// The recognizer stopped on its own. Ends after an explicit stop are
    /// expected and ignored.
    pub fn on_channel_end(&mut self) -> Result<(), SessionError> {
        if self.state != SessionState::Recording {
            return Ok(());
        }
        tracing::debug!("speech recognition channel ended unexpectedly");
        self.restart_channel()
    }

    pub fn on_channel_error(&mut self, code: RecognitionErrorCode) -> Result<(), SessionError> {
        if self.state != SessionState::Recording {
            tracing::debug!(%code, "recognition error ignored outside recording");
            return Ok(());
        }
        if code.is_retryable() {
            tracing::debug!(%code, "retryable recognition error");
            return self.restart_channel();
        }
        tracing::warn!(%code, "terminal recognition error");
        self.close_channel();
        self.state = SessionState::Idle;
        Err(self.fail(SessionError::Recognition { code }))
    }

    /// Returns to Idle from any state, silencing recognition and playback and
    /// clearing the transcript, cursor and review marks.
    pub fn reset(&mut self) {
        if self.state == SessionState::Recording {
            self.close_channel();
        }
        self.stop_playback();
        self.clear_progress();
        self.last_error = None;
        self.state = SessionState::Idle;
        tracing::debug!("speaking session reset");
    }

    /// Loads a different passage; every cursor starts over.
    pub fn set_reference_text(&mut self, reference_text: impl Into<String>) {
        self.reset();
        self.reference_text = reference_text.into();
        self.tokens = tokenize(&self.reference_text);
        self.reference_words = normalize(&self.reference_text);
    }

    /// Play, pause and resume the whole passage.
    pub fn toggle_playback(&mut self) -> Result<PlaybackState, SessionError> {
        match self.playback {
            PlaybackState::Stopped => {
                let text = self.reference_text.clone();
                self.speak(text)?;
                self.playback = PlaybackState::Playing;
            }
            PlaybackState::Playing => {
                self.synthesizer.pause();
                self.playback = PlaybackState::Paused;
            }
            PlaybackState::Paused => {
                self.synthesizer.resume();
                self.playback = PlaybackState::Playing;
            }
        }
        Ok(self.playback)
    }

    /// Speaks one word, interrupting passage playback.
    pub fn speak_word(&mut self, word: &str) -> Result<(), SessionError> {
        self.playback = PlaybackState::Stopped;
        self.speak(word.trim().to_string())
    }

    pub fn on_playback_finished(&mut self) {
        self.playback = PlaybackState::Stopped;
    }

    pub fn stop_playback(&mut self) {
        self.synthesizer.stop();
        self.playback = PlaybackState::Stopped;
    }

    fn speak(&mut self, text: String) -> Result<(), SessionError> {
        if text.trim().is_empty() {
            return Ok(());
        }
        let request = SpeechRequest {
            text,
            language: self.config.language.clone(),
            rate: self.config.speech_rate,
        };
        self.synthesizer.speak(&request).map_err(|err| {
            tracing::warn!(error = %err, "speech playback failed");
            self.playback = PlaybackState::Stopped;
            SessionError::playback(err)
        })
    }

    fn restart_channel(&mut self) -> Result<(), SessionError> {
        if self.restarts_left == 0 {
            tracing::warn!("speech recognition restarts exhausted");
            self.close_channel();
            self.state = SessionState::Idle;
            return Err(self.fail(SessionError::ChannelRestartsExhausted));
        }
        self.restarts_left -= 1;
        match self.channel.start(&self.config.language) {
            Ok(()) => {
                tracing::info!(restarts_left = self.restarts_left, "speech recognition restarted");
                Ok(())
            }
            Err(code) => {
                tracing::warn!(%code, "speech recognition restart failed");
                self.state = SessionState::Idle;
                Err(self.fail(SessionError::Recognition { code }))
            }
        }
    }

    /// Close failures are logged, never propagated.
    fn close_channel(&mut self) {
        if let Err(code) = self.channel.stop() {
            tracing::warn!(%code, "speech recognition channel did not close cleanly");
        }
    }

    fn clear_progress(&mut self) {
        self.transcript.clear();
        self.cursor.reset();
        self.review = ReviewMarks::default();
    }

    fn fail(&mut self, err: SessionError) -> SessionError {
        self.last_error = Some(err.clone());
        err
    }
}

use crate::config::ReadAlongConfig;
use crate::error::ReadAlongError;
use crate::pipeline::defaults::{PositionalTranscriptAligner, SilentSynthesizer};
use crate::pipeline::runtime::{SpeakingSession, SpeakingSessionParts};
use crate::pipeline::traits::{
    RecognitionChannel, ScoringCollaborator, SpeechSynthesizer, TranscriptAligner,
};

pub struct SpeakingSessionBuilder {
    reference_text: String,
    config: ReadAlongConfig,
    aligner: Option<Box<dyn TranscriptAligner>>,
    channel: Option<Box<dyn RecognitionChannel>>,
    synthesizer: Option<Box<dyn SpeechSynthesizer>>,
    scorer: Option<Box<dyn ScoringCollaborator>>,
}

impl SpeakingSessionBuilder {
    pub fn new(reference_text: impl Into<String>) -> Self {
        Self {
            reference_text: reference_text.into(),
            config: ReadAlongConfig::default(),
            aligner: None,
            channel: None,
            synthesizer: None,
            scorer: None,
        }
    }

    pub fn with_config(mut self, config: ReadAlongConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_aligner(mut self, aligner: Box<dyn TranscriptAligner>) -> Self {
        self.aligner = Some(aligner);
        self
    }

    pub fn with_channel(mut self, channel: Box<dyn RecognitionChannel>) -> Self {
        self.channel = Some(channel);
        self
    }

    pub fn with_synthesizer(mut self, synthesizer: Box<dyn SpeechSynthesizer>) -> Self {
        self.synthesizer = Some(synthesizer);
        self
    }

    pub fn with_scorer(mut self, scorer: Box<dyn ScoringCollaborator>) -> Self {
        self.scorer = Some(scorer);
        self
    }

    pub fn build(self) -> Result<SpeakingSession, ReadAlongError> {
        self.config.validate()?;
        let channel = self.channel.ok_or_else(|| {
            ReadAlongError::invalid_input("a speaking session needs a recognition channel")
        })?;

        Ok(SpeakingSession::from_parts(SpeakingSessionParts {
            reference_text: self.reference_text,
            config: self.config,
            aligner: self
                .aligner
                .unwrap_or_else(|| Box::new(PositionalTranscriptAligner)),
            channel,
            synthesizer: self
                .synthesizer
                .unwrap_or_else(|| Box::new(SilentSynthesizer)),
            scorer: self.scorer,
        }))
    }
}

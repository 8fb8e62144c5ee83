use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadAlongError {
    #[error("I/O error while {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON parse error while {context}: {source}")]
    Json {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl ReadAlongError {
    pub(crate) fn io(context: &'static str, source: std::io::Error) -> Self {
        Self::Io { context, source }
    }

    pub(crate) fn json(context: &'static str, source: serde_json::Error) -> Self {
        Self::Json { context, source }
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

/// Error codes reported by the upstream speech-recognition channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecognitionErrorCode {
    NoSpeech,
    PermissionDenied,
    Aborted,
    Network,
    Other,
}

impl RecognitionErrorCode {
    /// Maps the recognizer's string code. Browser recognizers report a
    /// denied microphone as `not-allowed`, so both spellings are accepted.
    pub fn parse(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "no-speech" => Self::NoSpeech,
            "permission-denied" | "not-allowed" | "service-not-allowed" => {
                Self::PermissionDenied
            }
            "aborted" => Self::Aborted,
            "network" => Self::Network,
            _ => Self::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoSpeech => "no-speech",
            Self::PermissionDenied => "permission-denied",
            Self::Aborted => "aborted",
            Self::Network => "network",
            Self::Other => "other",
        }
    }

    pub fn is_retryable(self) -> bool {
        matches!(self, Self::NoSpeech | Self::Network)
    }
}

impl std::fmt::Display for RecognitionErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failures surfaced by a speaking session. Presentation and localization
/// belong to the caller; these carry only structured codes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("speech recognition failed: {code}")]
    Recognition { code: RecognitionErrorCode },
    #[error("speech recognition channel kept ending unexpectedly")]
    ChannelRestartsExhausted,
    #[error("pronunciation scoring failed: {message}")]
    Scoring { message: String },
    #[error("speech playback failed: {message}")]
    Playback { message: String },
}

impl SessionError {
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Recognition { code } => code.is_retryable(),
            Self::ChannelRestartsExhausted | Self::Scoring { .. } | Self::Playback { .. } => true,
        }
    }

    pub(crate) fn scoring(err: impl std::fmt::Display) -> Self {
        Self::Scoring {
            message: err.to_string(),
        }
    }

    pub(crate) fn playback(err: impl std::fmt::Display) -> Self {
        Self::Playback {
            message: err.to_string(),
        }
    }
}

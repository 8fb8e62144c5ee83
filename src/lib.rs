pub mod alignment;
pub mod config;
pub mod error;
pub mod focus;
pub mod pipeline;
pub mod types;

pub use alignment::normalization::{normalize, normalize_to_string};
pub use alignment::positional::{align, AlignmentCursor, AlignmentOutcome};
pub use alignment::report::{build_report, Report, SnapshotReport};
pub use alignment::tokenization::tokenize;
pub use config::ReadAlongConfig;
pub use error::{ReadAlongError, RecognitionErrorCode, SessionError};
pub use focus::navigator::{opacity_for, CursorChanged, CursorObserver, NavigationCursor};
pub use focus::segmentation::segment;
pub use focus::session::{InputEvent, NavKey, ReadingSession};
pub use focus::throttle::WheelThrottle;
pub use pipeline::builder::SpeakingSessionBuilder;
pub use pipeline::runtime::{PlaybackState, SessionState, SpeakingSession, WordMark};
pub use pipeline::traits::{
    CollaboratorError, RecognitionChannel, ScoringCollaborator, SpeechRequest, SpeechSynthesizer,
    TranscriptAligner,
};
pub use types::{Line, ReviewMarks, ScoringReport, Token, TokenKind, TokenSequence, WordScore};

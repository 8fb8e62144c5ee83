use std::cell::RefCell;
use std::rc::Rc;

use readalong_rs::{
    CollaboratorError, CursorChanged, InputEvent, NavKey, PlaybackState, ReadAlongConfig,
    ReadingSession, RecognitionChannel, RecognitionErrorCode, ScoringCollaborator, ScoringReport,
    SessionError, SessionState, SpeakingSessionBuilder, SpeechRequest, SpeechSynthesizer,
    WheelThrottle, WordMark, WordScore,
};

const STORY: &str = "Con bướm bay. Nó đẹp quá! Bạn thấy không?";

#[derive(Default)]
struct Recorder {
    starts: usize,
    stops: usize,
    spoken: Vec<String>,
}

struct ScriptedChannel(Rc<RefCell<Recorder>>);

impl RecognitionChannel for ScriptedChannel {
    fn start(&mut self, _language: &str) -> Result<(), RecognitionErrorCode> {
        self.0.borrow_mut().starts += 1;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), RecognitionErrorCode> {
        self.0.borrow_mut().stops += 1;
        Ok(())
    }
}

struct RecordingSynth(Rc<RefCell<Recorder>>);

impl SpeechSynthesizer for RecordingSynth {
    fn speak(&mut self, request: &SpeechRequest) -> Result<(), CollaboratorError> {
        self.0.borrow_mut().spoken.push(request.text.clone());
        Ok(())
    }

    fn pause(&mut self) {}

    fn resume(&mut self) {}

    fn stop(&mut self) {}
}

struct FixedScorer;

impl ScoringCollaborator for FixedScorer {
    fn score(&self, _reference: &str, _transcript: &str) -> Result<ScoringReport, CollaboratorError> {
        let scores = [("con", 92.0), ("bướm", 61.0), ("bay", 88.0), ("nó", 90.0)];
        Ok(ScoringReport {
            accuracy: Some(83.0),
            word_scores: scores
                .iter()
                .map(|(word, score)| WordScore {
                    word: word.to_string(),
                    pronunciation_score: *score,
                })
                .collect(),
        })
    }
}

#[test]
fn clicking_a_line_in_focus_mode_dims_the_rest() {
    let mut session = ReadingSession::new(STORY, &ReadAlongConfig::default());
    assert_eq!(session.lines().len(), 3);

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    session.subscribe(Box::new(move |event: CursorChanged| sink.borrow_mut().push(event)));

    session.set_focus_mode(true);
    let moved = session.handle(InputEvent::LineClick { line: 2 });

    assert_eq!(
        moved,
        Some(CursorChanged {
            previous: 0,
            current: 2,
            center: true,
        })
    );
    assert_eq!(session.line_opacities(), vec![0.12, 0.25, 1.0]);
    assert_eq!(session.current_line().text, " Bạn thấy không?");
    assert_eq!(seen.borrow().last().copied(), moved);
}

#[test]
fn keyboard_walks_lines_and_escape_leaves_focus() {
    let mut session = ReadingSession::new(STORY, &ReadAlongConfig::default());

    assert_eq!(session.handle(InputEvent::Key(NavKey::ArrowDown)), None);
    session.set_focus_mode(true);
    session.handle(InputEvent::Key(NavKey::ArrowRight));
    session.handle(InputEvent::Key(NavKey::ArrowDown));
    session.handle(InputEvent::Key(NavKey::ArrowDown));
    assert_eq!(session.cursor().current_line_index(), 2);

    session.handle(InputEvent::Key(NavKey::ArrowLeft));
    assert_eq!(session.cursor().current_line_index(), 1);

    session.handle(InputEvent::Key(NavKey::Escape));
    assert!(!session.focus_mode_active());
    assert_eq!(session.line_opacities(), vec![1.0, 1.0, 1.0]);
    assert_eq!(session.cursor().current_line_index(), 1);
}

#[test]
fn wheel_burst_is_throttled_to_one_step_per_window() {
    let mut throttle = WheelThrottle::from_millis(400);
    let accepted: Vec<u64> = (0..=2000)
        .step_by(100)
        .filter(|&at| throttle.try_accept(at))
        .collect();
    assert_eq!(accepted, vec![0, 400, 800, 1200, 1600, 2000]);

    let passage = "Một. Hai. Ba. Bốn. Năm. Sáu. Bảy. Tám.";
    let mut session = ReadingSession::new(passage, &ReadAlongConfig::default());
    session.set_focus_mode(true);
    let moves = (0..=2000)
        .step_by(100)
        .filter_map(|at_ms| session.handle(InputEvent::Wheel { delta_y: 1.0, at_ms }))
        .count();
    assert_eq!(moves, 6);
    assert_eq!(session.cursor().current_line_index(), 6);
}

#[test]
fn full_speaking_round_scores_words() {
    let log = Rc::new(RefCell::new(Recorder::default()));
    let mut session = SpeakingSessionBuilder::new("Con bướm bay. Nó")
        .with_channel(Box::new(ScriptedChannel(Rc::clone(&log))))
        .with_synthesizer(Box::new(RecordingSynth(Rc::clone(&log))))
        .with_scorer(Box::new(FixedScorer))
        .build()
        .expect("session builds");

    assert_eq!(session.toggle_recording(), Ok(None));
    assert_eq!(session.state(), SessionState::Recording);

    assert_eq!(session.on_transcript("con"), Some(0));
    assert_eq!(session.word_mark(0), WordMark::Current);
    assert_eq!(session.on_transcript("con bướm bay"), Some(4));
    assert_eq!(session.on_transcript("con bướm bay nó"), Some(6));

    let marks = session
        .toggle_recording()
        .expect("scoring succeeds")
        .expect("recording finished");
    assert_eq!(session.state(), SessionState::Idle);
    assert_eq!(marks.incorrect, vec![2]);
    assert_eq!(marks.correct, vec![0, 4, 6]);
    assert_eq!(marks.passed, Some(true));
    assert_eq!(session.word_mark(2), WordMark::Incorrect);
    assert_eq!(session.word_mark(6), WordMark::Correct);
    assert_eq!(log.borrow().stops, 1);

    session.speak_word("bướm").expect("speaks");
    assert_eq!(log.borrow().spoken, vec!["bướm".to_string()]);
}

#[test]
fn dropped_channel_recovers_once_then_gives_up() {
    let log = Rc::new(RefCell::new(Recorder::default()));
    let mut session = SpeakingSessionBuilder::new(STORY)
        .with_channel(Box::new(ScriptedChannel(Rc::clone(&log))))
        .build()
        .expect("session builds");

    session.start_recording().expect("starts");
    session.on_transcript("con bướm");
    assert_eq!(session.on_channel_error(RecognitionErrorCode::NoSpeech), Ok(()));
    assert_eq!(log.borrow().starts, 2);

    let err = session.on_channel_end().expect_err("budget spent");
    assert_eq!(err, SessionError::ChannelRestartsExhausted);
    assert!(err.is_retryable());
    assert_eq!(session.state(), SessionState::Idle);
    assert_eq!(session.transcript(), "con bướm");
    assert_eq!(session.cursor().highlighted_token_index, Some(2));
}

#[test]
fn reset_clears_progress_and_playback() {
    let log = Rc::new(RefCell::new(Recorder::default()));
    let mut session = SpeakingSessionBuilder::new(STORY)
        .with_channel(Box::new(ScriptedChannel(Rc::clone(&log))))
        .with_synthesizer(Box::new(RecordingSynth(Rc::clone(&log))))
        .build()
        .expect("session builds");

    assert_eq!(session.toggle_playback(), Ok(PlaybackState::Playing));
    session.start_recording().expect("starts");
    session.on_transcript("con bướm bay");
    session.reset();

    assert_eq!(session.state(), SessionState::Idle);
    assert_eq!(session.playback(), PlaybackState::Stopped);
    assert_eq!(session.transcript(), "");
    assert_eq!(session.cursor().highlight_or_sentinel(), -1);
    assert_eq!(log.borrow().stops, 1);
}

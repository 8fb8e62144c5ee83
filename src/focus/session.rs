use crate::config::ReadAlongConfig;
use crate::focus::mirror::{mark_mirror_letters, MirrorSpan};
use crate::focus::navigator::{opacity_for, CursorChanged, CursorObserver, NavigationCursor};
use crate::focus::segmentation::segment;
use crate::focus::throttle::WheelThrottle;
use crate::types::Line;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key(NavKey),
    /// Positive `delta_y` scrolls down (next line).
    Wheel { delta_y: f64, at_ms: u64 },
    LineClick { line: usize },
    /// Toolbar buttons.
    NextLine,
    PreviousLine,
}

/// Reading view state: the passage, its lines and the Focus Mode cursor.
pub struct ReadingSession {
    reference_text: String,
    lines: Vec<Line>,
    cursor: NavigationCursor,
    focus_mode: bool,
    mirror_letters: bool,
    throttle: WheelThrottle,
    observers: Vec<Box<dyn CursorObserver>>,
}

impl ReadingSession {
    pub fn new(reference_text: impl Into<String>, config: &ReadAlongConfig) -> Self {
        let reference_text = reference_text.into();
        let lines = segment(&reference_text);
        Self {
            cursor: NavigationCursor::new(lines.len()),
            lines,
            reference_text,
            focus_mode: false,
            mirror_letters: false,
            throttle: WheelThrottle::from_millis(config.wheel_throttle_ms),
            observers: Vec::new(),
        }
    }

    pub fn reference_text(&self) -> &str {
        &self.reference_text
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn cursor(&self) -> NavigationCursor {
        self.cursor
    }

    pub fn current_line(&self) -> &Line {
        &self.lines[self.cursor.current_line_index()]
    }

    pub fn focus_mode_active(&self) -> bool {
        self.focus_mode
    }

    pub fn subscribe(&mut self, observer: Box<dyn CursorObserver>) {
        self.observers.push(observer);
    }

    /// Switching Focus Mode on re-announces the current line so the caller
    /// can center it.
    pub fn set_focus_mode(&mut self, active: bool) {
        if self.focus_mode == active {
            return;
        }
        self.focus_mode = active;
        tracing::debug!(active, line = self.cursor.current_line_index(), "focus mode toggled");
        if active {
            let line = self.cursor.current_line_index();
            self.notify(CursorChanged {
                previous: line,
                current: line,
                center: true,
            });
        }
    }

    pub fn set_mirror_letters(&mut self, enabled: bool) {
        self.mirror_letters = enabled;
    }

    /// Confusable letters within a line, or nothing when marking is off.
    pub fn mirror_spans(&self, line_index: usize) -> Vec<MirrorSpan> {
        match self.lines.get(line_index) {
            Some(line) if self.mirror_letters => mark_mirror_letters(&line.text),
            _ => Vec::new(),
        }
    }

    /// Loads a different passage; every cursor starts over.
    pub fn set_reference_text(&mut self, reference_text: impl Into<String>) {
        self.reference_text = reference_text.into();
        self.lines = segment(&self.reference_text);
        let previous = self.cursor.current_line_index();
        self.cursor = NavigationCursor::new(self.lines.len());
        self.throttle.reset();
        tracing::debug!(line_count = self.lines.len(), "reading passage replaced");
        if previous != 0 {
            self.notify(CursorChanged {
                previous,
                current: 0,
                center: self.focus_mode,
            });
        }
    }

    pub fn opacity(&self, line_index: usize) -> f32 {
        opacity_for(line_index, &self.cursor, self.focus_mode)
    }

    pub fn line_opacities(&self) -> Vec<f32> {
        (0..self.lines.len()).map(|i| self.opacity(i)).collect()
    }

    pub fn next_line(&mut self) -> Option<CursorChanged> {
        self.move_to(self.cursor.next())
    }

    pub fn previous_line(&mut self) -> Option<CursorChanged> {
        self.move_to(self.cursor.previous())
    }

    pub fn jump_to_line(&mut self, line_index: usize) -> Option<CursorChanged> {
        self.move_to(self.cursor.jump_to(line_index))
    }

    /// Keyboard and wheel only navigate while Focus Mode is on; clicks and
    /// toolbar buttons always do. Wheel events are throttled.
    pub fn handle(&mut self, event: InputEvent) -> Option<CursorChanged> {
        match event {
            InputEvent::LineClick { line } => self.jump_to_line(line),
            InputEvent::NextLine => self.next_line(),
            InputEvent::PreviousLine => self.previous_line(),
            InputEvent::Key(_) | InputEvent::Wheel { .. } if !self.focus_mode => None,
            InputEvent::Key(NavKey::Escape) => {
                self.set_focus_mode(false);
                None
            }
            InputEvent::Key(NavKey::ArrowUp | NavKey::ArrowLeft) => self.previous_line(),
            InputEvent::Key(NavKey::ArrowDown | NavKey::ArrowRight) => self.next_line(),
            InputEvent::Wheel { delta_y, at_ms } => {
                if !self.throttle.try_accept(at_ms) {
                    return None;
                }
                if delta_y > 0.0 {
                    self.next_line()
                } else if delta_y < 0.0 {
                    self.previous_line()
                } else {
                    None
                }
            }
        }
    }

    fn move_to(&mut self, target: NavigationCursor) -> Option<CursorChanged> {
        let previous = self.cursor.current_line_index();
        self.cursor = target;
        let current = target.current_line_index();
        if previous == current {
            return None;
        }
        let event = CursorChanged {
            previous,
            current,
            center: self.focus_mode,
        };
        tracing::debug!(previous, current, "reading cursor moved");
        self.notify(event);
        Some(event)
    }

    fn notify(&mut self, event: CursorChanged) {
        for observer in &mut self.observers {
            observer.cursor_changed(event);
        }
    }
}

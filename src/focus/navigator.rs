/// Current-line cursor over a fixed number of lines. Always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationCursor {
    current_line_index: usize,
    line_count: usize,
}

impl NavigationCursor {
    /// A passage always has at least one line, so `line_count` is raised to 1.
    pub fn new(line_count: usize) -> Self {
        Self {
            current_line_index: 0,
            line_count: line_count.max(1),
        }
    }

    pub fn current_line_index(&self) -> usize {
        self.current_line_index
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn last_index(&self) -> usize {
        self.line_count - 1
    }

    /// Saturates at the last line.
    #[must_use]
    pub fn next(self) -> Self {
        self.with_index(self.current_line_index.saturating_add(1))
    }

    /// Saturates at the first line.
    #[must_use]
    pub fn previous(self) -> Self {
        self.with_index(self.current_line_index.saturating_sub(1))
    }

    /// Out-of-range targets are clamped, not rejected.
    #[must_use]
    pub fn jump_to(self, target_index: usize) -> Self {
        self.with_index(target_index)
    }

    fn with_index(self, index: usize) -> Self {
        Self {
            current_line_index: index.min(self.last_index()),
            ..self
        }
    }
}

const OPACITY_CURRENT: f32 = 1.0;
const OPACITY_ADJACENT: f32 = 0.25;
const OPACITY_NEAR: f32 = 0.12;
const OPACITY_FAR: f32 = 0.08;

/// Focus Mode dimming: a fixed step function of distance from the cursor.
pub fn opacity_for(line_index: usize, cursor: &NavigationCursor, focus_mode_active: bool) -> f32 {
    if !focus_mode_active {
        return OPACITY_CURRENT;
    }
    match line_index.abs_diff(cursor.current_line_index()) {
        0 => OPACITY_CURRENT,
        1 => OPACITY_ADJACENT,
        2 => OPACITY_NEAR,
        _ => OPACITY_FAR,
    }
}

/// Emitted whenever the current line changes, or Focus Mode is switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorChanged {
    pub previous: usize,
    pub current: usize,
    /// The caller should scroll the current line to the vertical center.
    pub center: bool,
}

pub trait CursorObserver {
    fn cursor_changed(&mut self, event: CursorChanged);
}

impl<F> CursorObserver for F
where
    F: FnMut(CursorChanged),
{
    fn cursor_changed(&mut self, event: CursorChanged) {
        self(event)
    }
}

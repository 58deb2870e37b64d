//! TUI App State
//!
//! Manages the top-level application state for the Ratatui terminal UI.

use caderno_core::ExtractionOutcome;

/// Which input field has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    ImagePath,
    Prompt,
}

/// What the status line shows.
#[derive(Debug, Clone)]
pub enum Status {
    Idle,
    Processing,
    /// Document written; rendered green.
    Saved(String),
    /// Soft outcome (no text found, content blocked); rendered yellow.
    Soft(String),
    /// Hard failure; rendered red.
    Hard(String),
}

pub struct AppState {
    pub image_path: String,
    pub prompt: String,
    pub focus: Focus,
    pub status: Status,
    /// One extraction in flight at a time.
    pub busy: bool,
    /// Set after a hard failure; cleared when the image path is edited.
    pub generate_locked: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(default_prompt: &str) -> Self {
        Self {
            image_path: String::new(),
            prompt: default_prompt.to_string(),
            focus: Focus::ImagePath,
            status: Status::Idle,
            busy: false,
            generate_locked: false,
            should_quit: false,
        }
    }

    /// Whether the generate trigger currently does anything.
    pub fn can_generate(&self) -> bool {
        !self.busy && !self.generate_locked && !self.image_path.trim().is_empty()
    }

    pub fn push_to_focused(&mut self, c: char) {
        match self.focus {
            Focus::ImagePath => {
                self.image_path.push(c);
                // A new image selection re-arms the trigger.
                self.generate_locked = false;
            }
            Focus::Prompt => self.prompt.push(c),
        }
    }

    pub fn backspace_focused(&mut self) {
        match self.focus {
            Focus::ImagePath => {
                self.image_path.pop();
                self.generate_locked = false;
            }
            Focus::Prompt => {
                self.prompt.pop();
            }
        }
    }

    /// Fold a finished extraction back into the UI state.
    pub fn apply_outcome(&mut self, outcome: ExtractionOutcome) {
        self.busy = false;
        match outcome {
            ExtractionOutcome::Saved {
                destination,
                paragraph_count,
            } => {
                self.status = Status::Saved(format!(
                    "Document saved: {} ({paragraph_count} paragraphs)",
                    destination.display()
                ));
            }
            ExtractionOutcome::NothingToSave => {
                self.status =
                    Status::Soft("No text found in the image; nothing to save.".to_string());
            }
            ExtractionOutcome::Failed(e) if e.is_soft() => {
                self.status = Status::Soft(e.to_string());
            }
            ExtractionOutcome::Failed(e) => {
                self.generate_locked = true;
                self.status = Status::Hard(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caderno_core::CadernoError;
    use std::path::PathBuf;

    fn state_with_image() -> AppState {
        let mut s = AppState::new("prompt");
        s.image_path = "page.jpg".to_string();
        s
    }

    #[test]
    fn saved_outcome_goes_green_and_unblocks() {
        let mut s = state_with_image();
        s.busy = true;
        s.apply_outcome(ExtractionOutcome::Saved {
            destination: PathBuf::from("/tmp/out.docx"),
            paragraph_count: 2,
        });
        assert!(!s.busy);
        assert!(matches!(s.status, Status::Saved(_)));
        assert!(s.can_generate());
    }

    #[test]
    fn nothing_to_save_is_soft() {
        let mut s = state_with_image();
        s.apply_outcome(ExtractionOutcome::NothingToSave);
        assert!(matches!(s.status, Status::Soft(_)));
        assert!(s.can_generate());
    }

    #[test]
    fn blocked_is_soft_not_locking() {
        let mut s = state_with_image();
        s.apply_outcome(ExtractionOutcome::Failed(CadernoError::ContentBlocked(
            "SAFETY".to_string(),
        )));
        assert!(matches!(s.status, Status::Soft(_)));
        assert!(!s.generate_locked);
    }

    #[test]
    fn hard_failure_locks_until_image_path_edited() {
        let mut s = state_with_image();
        s.apply_outcome(ExtractionOutcome::Failed(CadernoError::RemoteApi(
            "timeout".to_string(),
        )));
        assert!(matches!(s.status, Status::Hard(_)));
        assert!(!s.can_generate());

        s.focus = Focus::ImagePath;
        s.push_to_focused('2');
        assert!(s.can_generate());
    }

    #[test]
    fn busy_state_disables_the_trigger() {
        let mut s = state_with_image();
        s.busy = true;
        assert!(!s.can_generate());
    }

    #[test]
    fn empty_image_path_disables_the_trigger() {
        let s = AppState::new("prompt");
        assert!(!s.can_generate());
    }
}

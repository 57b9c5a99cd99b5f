//! Pop-up form for adding a body
//!
//! The form edits a `BodyDraft` in place, so the viewer can preview the
//! draft on every frame whether or not it parses yet.

use crossterm::event::{KeyCode, KeyEvent};
use log::warn;
use orbitsim_core::presets::TAG_NEW;
use orbitsim_core::{Body, BodyDraft};

pub const LABELS: [&str; 7] = [
    "Name:   ",
    "Mass:   ",
    "X pos:  ",
    "Y pos:  ",
    "X vel:  ",
    "Y vel:  ",
    "Radius: ",
];

/// What the viewer should do after a key press in the form
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    Continue,
    Save(Body),
    Cancel,
}

#[derive(Debug, Clone)]
pub struct BodyForm {
    draft: BodyDraft,
    current: usize,
    // Value before editing began, restored if the edit ends empty
    editing: Option<String>,
    error: Option<String>,
}

impl BodyForm {
    pub fn new() -> Self {
        Self {
            draft: BodyDraft {
                tag: TAG_NEW,
                ..BodyDraft::default()
            },
            current: 0,
            editing: None,
            error: None,
        }
    }

    pub fn draft(&self) -> &BodyDraft {
        &self.draft
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn value(&self, idx: usize) -> &str {
        match idx {
            0 => &self.draft.name,
            1 => &self.draft.mass,
            2 => &self.draft.x,
            3 => &self.draft.y,
            4 => &self.draft.vx,
            5 => &self.draft.vy,
            _ => &self.draft.radius,
        }
    }

    fn value_mut(&mut self, idx: usize) -> &mut String {
        match idx {
            0 => &mut self.draft.name,
            1 => &mut self.draft.mass,
            2 => &mut self.draft.x,
            3 => &mut self.draft.y,
            4 => &mut self.draft.vx,
            5 => &mut self.draft.vy,
            _ => &mut self.draft.radius,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        if self.editing.is_some() {
            self.handle_edit_key(key);
            return FormAction::Continue;
        }

        match key.code {
            KeyCode::Up => {
                self.current = (self.current + LABELS.len() - 1) % LABELS.len();
            }
            KeyCode::Down => {
                self.current = (self.current + 1) % LABELS.len();
            }
            KeyCode::Enter => {
                let current = self.current;
                let old = std::mem::take(self.value_mut(current));
                self.editing = Some(old);
                self.error = None;
            }
            KeyCode::Char('s') => match self.draft.parse() {
                Ok(body) => return FormAction::Save(body),
                Err(e) => {
                    warn!("rejected new body: {}", e);
                    self.error = Some(e.to_string());
                }
            },
            KeyCode::Char('q') | KeyCode::Esc => return FormAction::Cancel,
            _ => {}
        }
        FormAction::Continue
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        let current = self.current;
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                let old = self.editing.take().unwrap_or_default();
                let value = self.value_mut(current);
                if value.trim().is_empty() {
                    *value = old;
                }
            }
            KeyCode::Backspace => {
                self.value_mut(current).pop();
            }
            KeyCode::Char(c) => {
                self.value_mut(current).push(c);
            }
            _ => {}
        }
    }
}

impl Default for BodyForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(form: &mut BodyForm, code: KeyCode) -> FormAction {
        form.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(form: &mut BodyForm, text: &str) {
        for c in text.chars() {
            press(form, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_navigation_wraps() {
        let mut form = BodyForm::new();
        press(&mut form, KeyCode::Up);
        assert_eq!(form.current(), LABELS.len() - 1);
        press(&mut form, KeyCode::Down);
        assert_eq!(form.current(), 0);
    }

    #[test]
    fn test_edit_replaces_value() {
        let mut form = BodyForm::new();
        press(&mut form, KeyCode::Down); // mass
        press(&mut form, KeyCode::Enter);
        assert!(form.is_editing());
        assert_eq!(form.value(1), "");

        type_text(&mut form, "42x");
        press(&mut form, KeyCode::Backspace);
        press(&mut form, KeyCode::Enter);

        assert!(!form.is_editing());
        assert_eq!(form.draft().mass, "42");
    }

    #[test]
    fn test_empty_edit_keeps_old_value() {
        let mut form = BodyForm::new();
        press(&mut form, KeyCode::Enter);
        press(&mut form, KeyCode::Enter);
        assert_eq!(form.draft().name, "NewPlanet");
    }

    #[test]
    fn test_keys_are_text_while_editing() {
        let mut form = BodyForm::new();
        press(&mut form, KeyCode::Enter);
        // 's' and 'q' are plain characters here
        assert_eq!(press(&mut form, KeyCode::Char('s')), FormAction::Continue);
        assert_eq!(press(&mut form, KeyCode::Char('q')), FormAction::Continue);
        press(&mut form, KeyCode::Enter);
        assert_eq!(form.draft().name, "sq");
    }

    #[test]
    fn test_save_returns_body() {
        let mut form = BodyForm::new();
        match press(&mut form, KeyCode::Char('s')) {
            FormAction::Save(body) => {
                assert_eq!(body.name, "NewPlanet");
                assert_eq!(body.tag, TAG_NEW);
            }
            other => panic!("expected save, got {:?}", other),
        }
    }

    #[test]
    fn test_save_rejects_bad_number() {
        let mut form = BodyForm::new();
        press(&mut form, KeyCode::Down);
        press(&mut form, KeyCode::Enter);
        type_text(&mut form, "heavy");
        press(&mut form, KeyCode::Enter);

        assert_eq!(press(&mut form, KeyCode::Char('s')), FormAction::Continue);
        assert!(form.error().unwrap().contains("mass"));
    }

    #[test]
    fn test_cancel() {
        let mut form = BodyForm::new();
        assert_eq!(press(&mut form, KeyCode::Esc), FormAction::Cancel);
        assert_eq!(press(&mut form, KeyCode::Char('q')), FormAction::Cancel);
    }
}

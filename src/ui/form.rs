//! Sidebar input form.
//!
//! Number fields clamp to their bounds on commit (focus change, Enter or a
//! step), text fields edit in place with a character-offset cursor.

use crate::consts::cli_consts::form::{DAY_MAX, DAY_MIN, MONTH_MAX, MONTH_MIN, YEAR_MIN};
use crate::numerology::InputSet;
use chrono::Datelike;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Upper bound of the year field.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Focusable controls in tab order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldId {
    Day,
    Month,
    Year,
    FirstName,
    LastName,
    Calculate,
}

const FOCUS_ORDER: [FieldId; 6] = [
    FieldId::Day,
    FieldId::Month,
    FieldId::Year,
    FieldId::FirstName,
    FieldId::LastName,
    FieldId::Calculate,
];

/// Bounded integer input.
#[derive(Debug, Clone)]
pub struct NumberField {
    pub label: &'static str,
    value: i32,
    min: i32,
    max: i32,
    /// Digits typed since the last commit.
    buffer: Option<String>,
}

impl NumberField {
    pub fn new(label: &'static str, value: i32, min: i32, max: i32) -> Self {
        Self {
            label,
            value: value.clamp(min, max),
            min,
            max,
            buffer: None,
        }
    }

    /// Last committed value, always within bounds.
    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn bounds(&self) -> (i32, i32) {
        (self.min, self.max)
    }

    pub fn is_editing(&self) -> bool {
        self.buffer.is_some()
    }

    /// Text shown in the widget.
    pub fn display(&self) -> String {
        match &self.buffer {
            Some(buffer) => buffer.clone(),
            None => self.value.to_string(),
        }
    }

    pub fn push_digit(&mut self, ch: char) {
        if !ch.is_ascii_digit() {
            return;
        }
        let max_len = self.max.to_string().len();
        let buffer = self.buffer.get_or_insert_with(String::new);
        if buffer.len() < max_len {
            buffer.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        let buffer = self.buffer.get_or_insert_with(|| self.value.to_string());
        buffer.pop();
    }

    /// Apply typed digits. Returns whether the committed value changed.
    pub fn commit(&mut self) -> bool {
        let Some(buffer) = self.buffer.take() else {
            return false;
        };
        let Ok(parsed) = buffer.parse::<i32>() else {
            return false;
        };
        let previous = self.value;
        self.value = parsed.clamp(self.min, self.max);
        self.value != previous
    }

    /// Commit, then move by `delta` within bounds. Returns whether the value changed.
    pub fn step(&mut self, delta: i32) -> bool {
        let committed = self.commit();
        let previous = self.value;
        self.value = self.value.saturating_add(delta).clamp(self.min, self.max);
        committed || self.value != previous
    }
}

/// Single-line text input with cursor.
#[derive(Debug, Clone)]
pub struct TextField {
    pub label: &'static str,
    content: String,
    /// Cursor position as a character offset (0 = before first char).
    cursor: usize,
}

impl TextField {
    pub fn new(label: &'static str, content: &str) -> Self {
        Self {
            label,
            content: content.to_string(),
            cursor: content.chars().count(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn insert_char(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        let byte_offset = self.byte_offset();
        self.content.insert(byte_offset, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor. Returns whether anything changed.
    pub fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.remove_at_cursor()
    }

    /// Delete the character at the cursor. Returns whether anything changed.
    pub fn delete_forward(&mut self) -> bool {
        self.remove_at_cursor()
    }

    fn remove_at_cursor(&mut self) -> bool {
        let byte_offset = self.byte_offset();
        match self.content[byte_offset..].chars().next() {
            Some(ch) => {
                self.content
                    .replace_range(byte_offset..byte_offset + ch.len_utf8(), "");
                true
            }
            None => false,
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.content.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.content.chars().count();
    }

    fn byte_offset(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }
}

/// What a key press did to the form.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// Nothing that affects the inputs.
    None,
    /// A committed input value changed.
    Edited,
    /// The calculate trigger fired.
    Submit,
}

/// The five inputs and the trigger control.
#[derive(Debug, Clone)]
pub struct InputForm {
    pub day: NumberField,
    pub month: NumberField,
    pub year: NumberField,
    pub first_name: TextField,
    pub last_name: TextField,
    focus: FieldId,
}

impl InputForm {
    pub fn new(defaults: &InputSet, max_year: i32) -> Self {
        Self {
            day: NumberField::new("יום (DD):", defaults.day as i32, DAY_MIN, DAY_MAX),
            month: NumberField::new("חודש (MM):", defaults.month as i32, MONTH_MIN, MONTH_MAX),
            year: NumberField::new("שנה (YYYY):", defaults.year, YEAR_MIN, max_year),
            first_name: TextField::new("שם פרטי:", &defaults.first_name),
            last_name: TextField::new("שם משפחה:", &defaults.last_name),
            focus: FieldId::Day,
        }
    }

    pub fn focus(&self) -> FieldId {
        self.focus
    }

    /// Committed inputs. Uncommitted digits are not included.
    pub fn input_set(&self) -> InputSet {
        InputSet {
            day: self.day.value() as u32,
            month: self.month.value() as u32,
            year: self.year.value(),
            first_name: self.first_name.content().to_string(),
            last_name: self.last_name.content().to_string(),
        }
    }

    fn focused_number(&mut self) -> Option<&mut NumberField> {
        match self.focus {
            FieldId::Day => Some(&mut self.day),
            FieldId::Month => Some(&mut self.month),
            FieldId::Year => Some(&mut self.year),
            _ => None,
        }
    }

    fn focused_text(&mut self) -> Option<&mut TextField> {
        match self.focus {
            FieldId::FirstName => Some(&mut self.first_name),
            FieldId::LastName => Some(&mut self.last_name),
            _ => None,
        }
    }

    fn move_focus(&mut self, forward: bool) -> bool {
        let changed = self.focused_number().is_some_and(|field| field.commit());
        let index = FOCUS_ORDER
            .iter()
            .position(|id| *id == self.focus)
            .unwrap_or(0);
        let len = FOCUS_ORDER.len();
        let next = if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        };
        self.focus = FOCUS_ORDER[next];
        changed
    }

    fn edited(changed: bool) -> FormAction {
        if changed {
            FormAction::Edited
        } else {
            FormAction::None
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        match key.code {
            KeyCode::Enter => {
                if let Some(field) = self.focused_number() {
                    field.commit();
                }
                FormAction::Submit
            }
            KeyCode::Tab => Self::edited(self.move_focus(true)),
            KeyCode::BackTab => Self::edited(self.move_focus(false)),
            KeyCode::Up | KeyCode::Down => {
                let delta = if key.code == KeyCode::Up { 1 } else { -1 };
                match self.focused_number() {
                    Some(field) => Self::edited(field.step(delta)),
                    None => Self::edited(self.move_focus(key.code == KeyCode::Down)),
                }
            }
            KeyCode::Char(' ') if self.focus == FieldId::Calculate => FormAction::Submit,
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = self.focused_number() {
                    field.push_digit(ch);
                    FormAction::None
                } else if let Some(field) = self.focused_text() {
                    field.insert_char(ch);
                    FormAction::Edited
                } else {
                    FormAction::None
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.focused_number() {
                    field.backspace();
                    FormAction::None
                } else if let Some(field) = self.focused_text() {
                    Self::edited(field.delete_back())
                } else {
                    FormAction::None
                }
            }
            KeyCode::Delete => match self.focused_text() {
                Some(field) => Self::edited(field.delete_forward()),
                None => FormAction::None,
            },
            KeyCode::Left | KeyCode::Right | KeyCode::Home | KeyCode::End => {
                if let Some(field) = self.focused_text() {
                    match key.code {
                        KeyCode::Left => field.move_left(),
                        KeyCode::Right => field.move_right(),
                        KeyCode::Home => field.move_home(),
                        _ => field.move_end(),
                    }
                }
                FormAction::None
            }
            _ => FormAction::None,
        }
    }
}

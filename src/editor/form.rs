// src/editor/form.rs

use crate::document::LevelDraft;

/// Focusable widgets of the level form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Type,
    Biome,
    Ok,
    Cancel,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name:",
            FormField::Type => "Type:",
            FormField::Biome => "Biome:",
            FormField::Ok => "OK",
            FormField::Cancel => "Cancel",
        }
    }

    pub fn all() -> &'static [FormField] {
        &[
            FormField::Name,
            FormField::Type,
            FormField::Biome,
            FormField::Ok,
            FormField::Cancel,
        ]
    }

    pub fn text_fields() -> &'static [FormField] {
        &[FormField::Name, FormField::Type, FormField::Biome]
    }

    pub fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn previous(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

/// Contents of the edit screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelForm {
    pub draft: LevelDraft,
    pub focus: FormField,
}

impl LevelForm {
    pub fn new(draft: LevelDraft) -> Self {
        LevelForm {
            draft,
            focus: FormField::Name,
        }
    }

    pub fn value(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Name => Some(&self.draft.name),
            FormField::Type => Some(&self.draft.level_type),
            FormField::Biome => Some(&self.draft.biome),
            FormField::Ok | FormField::Cancel => None,
        }
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Name => Some(&mut self.draft.name),
            FormField::Type => Some(&mut self.draft.level_type),
            FormField::Biome => Some(&mut self.draft.biome),
            FormField::Ok | FormField::Cancel => None,
        }
    }

    /// Appends to the focused text field. Ignored on buttons and for control
    /// characters.
    pub fn input(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        if let Some(text) = self.focused_text_mut() {
            text.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.focused_text_mut() {
            text.pop();
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }
}

impl Default for LevelForm {
    fn default() -> Self {
        Self::new(LevelDraft::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_wraps() {
        assert_eq!(FormField::Cancel.next(), FormField::Name);
        assert_eq!(FormField::Name.previous(), FormField::Cancel);
        assert_eq!(FormField::Type.next(), FormField::Biome);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = LevelForm::default();
        form.input('A');
        form.input('x');
        form.focus_next();
        for ch in "cavern".chars() {
            form.input(ch);
        }
        form.focus_next();
        form.input('\u{7}');
        form.input('s');
        form.backspace();
        form.input('t');
        assert_eq!(form.draft, LevelDraft::new("Ax", "cavern", "t"));
    }

    #[test]
    fn test_buttons_ignore_text() {
        let mut form = LevelForm::new(LevelDraft::new("keep", "", ""));
        form.focus = FormField::Ok;
        form.input('z');
        form.backspace();
        assert_eq!(form.draft.name, "keep");
        assert_eq!(form.value(FormField::Ok), None);
    }
}

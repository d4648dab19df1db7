use std::fmt;
use std::sync::Arc;
use tuirealm::event::{Key, KeyModifiers};
use validators::patterns::{NumberFormat, NumberValidator};
use validators::{ValidationError, Validator};

/// Character predicate deciding which typed characters an input accepts
pub type Restrict = Arc<dyn Fn(char) -> bool + Send + Sync>;

/// What kind of value an input field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Integer,
    Number,
}

impl InputKind {
    /// Whether `candidate` can still grow into a value of this kind.
    /// Used to reject keystrokes, so partial values such as `-` or `1e` pass.
    pub fn accepts_prefix(self, candidate: &str) -> bool {
        match self {
            InputKind::Text => true,
            InputKind::Integer => {
                let digits = candidate
                    .strip_prefix(['-', '+'])
                    .unwrap_or(candidate);
                digits.chars().all(|c| c.is_ascii_digit())
            }
            InputKind::Number => is_number_prefix(candidate),
        }
    }

    /// Check a complete value
    pub fn validate(self, value: &str) -> Result<(), ValidationError> {
        let format = match self {
            InputKind::Text => return Ok(()),
            InputKind::Integer => NumberFormat::Integer,
            InputKind::Number => NumberFormat::Decimal,
        };
        NumberValidator::new("Value", format)
            .validate(value)
            .map_err(ValidationError::from)
    }
}

// sign? digits* ('.' digits*)? ([eE] sign? digits*)?
fn is_number_prefix(candidate: &str) -> bool {
    let mut chars = candidate.chars().peekable();
    if matches!(chars.peek(), Some('-' | '+')) {
        chars.next();
    }

    let mut seen_dot = false;
    let mut seen_digit = false;
    while let Some(&c) = chars.peek() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        chars.next();
    }

    match chars.next() {
        None => true,
        Some('e' | 'E') if seen_digit => {
            if matches!(chars.peek(), Some('-' | '+')) {
                chars.next();
            }
            chars.all(|c| c.is_ascii_digit())
        }
        Some(_) => false,
    }
}

/// Moments at which an input's validators run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidateOn {
    /// After every edit
    Changed,
    /// When focus leaves the field
    Blur,
    /// When the value is submitted
    Submitted,
}

impl ValidateOn {
    pub const ALL: [ValidateOn; 3] = [ValidateOn::Changed, ValidateOn::Blur, ValidateOn::Submitted];
}

/// Result of feeding a key to an [`InputField`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputChange {
    /// The value changed
    Edited,
    /// Only the cursor moved
    Moved,
    /// The key was not handled or was rejected
    Ignored,
}

/// Single-line editable text with a cursor.
///
/// The cursor is a character index, so multibyte input edits correctly.
#[derive(Clone, Default)]
pub struct InputField {
    value: Vec<char>,
    cursor: usize,
    kind: InputKind,
    max_length: usize,
    restrict: Option<Restrict>,
    password: bool,
}

impl fmt::Debug for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputField")
            .field("value", &self.value())
            .field("cursor", &self.cursor)
            .field("kind", &self.kind)
            .field("max_length", &self.max_length)
            .field("restrict", &self.restrict.is_some())
            .field("password", &self.password)
            .finish()
    }
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    /// Maximum number of characters, 0 for unlimited
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_restrict(mut self, restrict: Option<Restrict>) -> Self {
        self.restrict = restrict;
        self
    }

    pub fn with_password(mut self, password: bool) -> Self {
        self.password = password;
        self
    }

    /// Set the initial value, cursor at the end. The value is taken as given,
    /// without the per-keystroke checks.
    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.chars().collect();
        self.cursor = self.value.len();
        self
    }

    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    /// Text to draw: the value, or one `*` per character for passwords
    pub fn display_text(&self) -> String {
        if self.password {
            "*".repeat(self.value.len())
        } else {
            self.value()
        }
    }

    /// Insert `c` at the cursor if the length limit, the restriction and the
    /// input kind all allow it
    pub fn insert(&mut self, c: char) -> bool {
        if c.is_control() {
            return false;
        }
        if self.max_length > 0 && self.value.len() >= self.max_length {
            return false;
        }
        if let Some(restrict) = &self.restrict {
            if !restrict(c) {
                return false;
            }
        }

        let mut candidate = self.value.clone();
        candidate.insert(self.cursor, c);
        let candidate_text: String = candidate.iter().collect();
        if !self.kind.accepts_prefix(&candidate_text) {
            return false;
        }

        self.value = candidate;
        self.cursor += 1;
        true
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.value.remove(self.cursor);
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.value.len() {
            return false;
        }
        self.value.remove(self.cursor);
        true
    }

    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn move_right(&mut self) -> bool {
        if self.cursor >= self.value.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn home(&mut self) -> bool {
        let moved = self.cursor != 0;
        self.cursor = 0;
        moved
    }

    pub fn end(&mut self) -> bool {
        let moved = self.cursor != self.value.len();
        self.cursor = self.value.len();
        moved
    }

    /// Apply an editing key. Characters typed with Ctrl or Alt held are
    /// shortcuts, not text.
    pub fn handle_key(&mut self, key: Key, modifiers: KeyModifiers) -> InputChange {
        let (changed, edit) = match key {
            Key::Char(_) if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                (false, false)
            }
            Key::Char(c) => (self.insert(c), true),
            Key::Backspace => (self.backspace(), true),
            Key::Delete => (self.delete(), true),
            Key::Left => (self.move_left(), false),
            Key::Right => (self.move_right(), false),
            Key::Home => (self.home(), false),
            Key::End => (self.end(), false),
            _ => (false, false),
        };

        match (changed, edit) {
            (true, true) => InputChange::Edited,
            (true, false) => InputChange::Moved,
            _ => InputChange::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;

    fn type_str(field: &mut InputField, text: &str) {
        for c in text.chars() {
            field.insert(c);
        }
    }

    #[test]
    fn test_editing_at_cursor() {
        let mut field = InputField::new().with_value("hllo");
        field.home();
        assert_eq!(field.handle_key(Key::Right, KeyModifiers::NONE), InputChange::Moved);
        assert_eq!(field.handle_key(Key::Char('e'), KeyModifiers::NONE), InputChange::Edited);
        assert_eq!(field.value(), "hello");

        field.end();
        assert_eq!(field.handle_key(Key::Backspace, KeyModifiers::NONE), InputChange::Edited);
        assert_eq!(field.handle_key(Key::Delete, KeyModifiers::NONE), InputChange::Ignored);
        assert_eq!(field.value(), "hell");
        assert_eq!(field.cursor(), 4);
    }

    #[test]
    fn test_max_length_counts_characters() {
        let mut field = InputField::new().with_max_length(3);
        type_str(&mut field, "äöüß");
        assert_eq!(field.value(), "äöü");
    }

    #[test]
    fn test_restrict_and_password() {
        let restrict: Restrict = Arc::new(|c: char| c.is_ascii_lowercase());
        let mut field = InputField::new()
            .with_restrict(Some(restrict))
            .with_password(true);
        type_str(&mut field, "abC1d");
        assert_eq!(field.value(), "abd");
        assert_eq!(field.display_text(), "***");
    }

    #[test]
    fn test_integer_kind_rejects_non_digits() {
        let mut field = InputField::new().with_kind(InputKind::Integer);
        type_str(&mut field, "-1a2.3");
        assert_eq!(field.value(), "-123");
        assert_ok!(InputKind::Integer.validate("-123"));
        assert_err!(InputKind::Integer.validate("-"));
    }

    #[test]
    fn test_number_prefixes() {
        for prefix in ["", "-", "+1", "1.", ".5", "1.5e", "1e-", "2E+10"] {
            assert!(InputKind::Number.accepts_prefix(prefix), "{prefix}");
        }
        for prefix in ["1.2.3", "e5", "1e5.0", "--1", "1x"] {
            assert!(!InputKind::Number.accepts_prefix(prefix), "{prefix}");
        }
        assert_ok!(InputKind::Number.validate("1.5e3"));
        let error = assert_err!(InputKind::Number.validate(""));
        assert!(!error.to_string().is_empty());
    }

    #[test]
    fn test_control_chords_are_not_typed() {
        let mut field = InputField::new().with_value("ab");
        assert_eq!(
            field.handle_key(Key::Char('a'), KeyModifiers::CONTROL),
            InputChange::Ignored
        );
        assert_eq!(field.handle_key(Key::Char('x'), KeyModifiers::ALT), InputChange::Ignored);
        assert_eq!(field.value(), "ab");

        assert_eq!(field.handle_key(Key::Char('C'), KeyModifiers::SHIFT), InputChange::Edited);
        assert_eq!(field.value(), "abC");
    }
}

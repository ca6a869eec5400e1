use crate::SessionError;

/// Maximum number of characters the keypad buffer holds.
pub const MAX_KEYPAD_DIGITS: usize = 10;

/// Digit buffer behind the on-screen keypad.
///
/// Keys append to the buffer until it holds [`MAX_KEYPAD_DIGITS`]
/// characters; further keys are ignored. The buffer is only parsed when the
/// answer is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeypadBuffer {
    input: String,
}

impl KeypadBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a digit. Returns `false` when the buffer was already full.
    pub fn push(&mut self, digit: u8) -> Result<bool, SessionError> {
        if digit > 9 {
            return Err(SessionError::InvalidFormat {
                input: digit.to_string(),
            });
        }
        if self.input.len() >= MAX_KEYPAD_DIGITS {
            return Ok(false);
        }
        self.input.push(char::from(b'0' + digit));
        Ok(true)
    }

    /// Remove the last character, if any.
    pub fn pop(&mut self) -> Option<char> {
        self.input.pop()
    }

    pub fn clear(&mut self) {
        self.input.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.input
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    pub fn len(&self) -> usize {
        self.input.len()
    }

    /// Text for the keypad display; an empty buffer shows `0`.
    pub fn display(&self) -> &str {
        if self.input.is_empty() {
            "0"
        } else {
            &self.input
        }
    }

    /// Parse the buffer as a base-10 integer.
    pub fn parse(&self) -> Result<i64, SessionError> {
        self.input
            .parse::<i64>()
            .map_err(|_| SessionError::InvalidFormat {
                input: self.input.clone(),
            })
    }
}

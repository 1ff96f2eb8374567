use serde::{Deserialize, Serialize};

/// Completion flag for a task being marked done.
///
/// The host runs whatever choreography it likes (strikethrough, fly-away)
/// while the task is `Pending`, then calls [`Completion::commit`] once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Completion {
    #[default]
    Pending,
    Committed,
}

impl Completion {
    /// Pending → committed. Returns true if this call made the transition.
    pub fn commit(&mut self) -> bool {
        match self {
            Completion::Pending => {
                *self = Completion::Committed;
                true
            }
            Completion::Committed => false,
        }
    }

    pub fn is_committed(self) -> bool {
        self == Completion::Committed
    }

    /// The character used inside the checkbox `[ ]`
    pub fn checkbox_char(self) -> char {
        match self {
            Completion::Pending => ' ',
            Completion::Committed => 'x',
        }
    }

    /// Parse a checkbox character into a completion state
    pub fn from_checkbox_char(c: char) -> Option<Completion> {
        match c {
            ' ' => Some(Completion::Pending),
            'x' => Some(Completion::Committed),
            _ => None,
        }
    }
}

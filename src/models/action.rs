use serde::Serialize;
use std::fmt;

/// Activity label as written in the `Action` column.
///
/// `Slept` / `Woke Up` are matched case-insensitively since they drive the
/// sleep pairing; the other known labels are matched exactly, anything else
/// is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub enum Action {
    Slept,
    WokeUp,
    Fed,
    SolidFood,
    DiaperChange,
    Potty,
    Water,
    Custom(String),
}

impl Action {
    pub fn from_label(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        match s.to_lowercase().as_str() {
            "slept" => return Some(Self::Slept),
            "woke up" => return Some(Self::WokeUp),
            _ => {}
        }

        Some(match s {
            "Fed" => Self::Fed,
            "Solid Food" => Self::SolidFood,
            "Diaper Change" => Self::DiaperChange,
            "Potty" => Self::Potty,
            "Water" => Self::Water,
            other => Self::Custom(other.to_string()),
        })
    }

    pub fn label(&self) -> &str {
        match self {
            Action::Slept => "Slept",
            Action::WokeUp => "Woke Up",
            Action::Fed => "Fed",
            Action::SolidFood => "Solid Food",
            Action::DiaperChange => "Diaper Change",
            Action::Potty => "Potty",
            Action::Water => "Water",
            Action::Custom(s) => s,
        }
    }

    pub fn is_slept(&self) -> bool {
        matches!(self, Action::Slept)
    }

    pub fn is_woke_up(&self) -> bool {
        matches!(self, Action::WokeUp)
    }

    /// True for the two labels that open/close a sleep interval.
    pub fn is_sleep_marker(&self) -> bool {
        self.is_slept() || self.is_woke_up()
    }

    /// Opposite sleep marker (`Slept` ⇄ `Woke Up`), None for other actions.
    pub fn opposite(&self) -> Option<Self> {
        match self {
            Action::Slept => Some(Action::WokeUp),
            Action::WokeUp => Some(Action::Slept),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Action> for String {
    fn from(a: Action) -> Self {
        a.label().to_string()
    }
}

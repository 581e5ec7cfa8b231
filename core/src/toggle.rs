use std::fmt;
use std::str::FromStr;

pub const LABEL_AFFIRMATIVE: &str = "Oui";
pub const LABEL_NEGATIVE: &str = "Non";

/// How the toggle button reacts to hover and click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TogglePolicy {
    /// The first click only commits the affirmative label; the next one
    /// triggers. Hover counts for precision pointers only.
    #[default]
    Strict,
    /// Every click triggers, whatever label is showing. Touch start/end
    /// behave like hover.
    Lenient,
}

impl TogglePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            TogglePolicy::Strict => "strict",
            TogglePolicy::Lenient => "lenient",
        }
    }
}

impl fmt::Display for TogglePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TogglePolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("strict") || value.eq_ignore_ascii_case("b") {
            Ok(TogglePolicy::Strict)
        } else if value.eq_ignore_ascii_case("lenient") || value.eq_ignore_ascii_case("a") {
            Ok(TogglePolicy::Lenient)
        } else {
            Err(format!("unknown toggle policy '{value}'"))
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Pen,
    Touch,
    Unknown,
}

impl PointerKind {
    /// Maps a DOM `pointerType` string.
    pub fn from_pointer_type(raw: &str) -> Self {
        match raw {
            "mouse" => PointerKind::Mouse,
            "pen" => PointerKind::Pen,
            "touch" => PointerKind::Touch,
            _ => PointerKind::Unknown,
        }
    }

    pub fn is_precise(self) -> bool {
        matches!(self, PointerKind::Mouse | PointerKind::Pen)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    Committed,
    Triggered,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToggleState {
    pub policy: TogglePolicy,
    pub hovered: bool,
    pub committed: bool,
}

impl ToggleState {
    pub fn new(policy: TogglePolicy) -> Self {
        Self {
            policy,
            hovered: false,
            committed: false,
        }
    }

    pub fn showing_affirmative(&self) -> bool {
        self.hovered || self.committed
    }

    pub fn label(&self) -> &'static str {
        if self.showing_affirmative() {
            LABEL_AFFIRMATIVE
        } else {
            LABEL_NEGATIVE
        }
    }

    pub fn pointer_enter(&mut self, kind: PointerKind) {
        if self.accepts_hover(kind) {
            self.hovered = true;
        }
    }

    pub fn pointer_leave(&mut self, kind: PointerKind) {
        if self.accepts_hover(kind) {
            self.hovered = false;
        }
    }

    pub fn touch_start(&mut self) {
        if self.policy == TogglePolicy::Lenient {
            self.hovered = true;
        }
    }

    pub fn touch_end(&mut self) {
        if self.policy == TogglePolicy::Lenient {
            self.hovered = false;
        }
    }

    pub fn click(&mut self) -> ToggleOutcome {
        match self.policy {
            TogglePolicy::Strict => {
                if self.showing_affirmative() {
                    ToggleOutcome::Triggered
                } else {
                    self.committed = true;
                    ToggleOutcome::Committed
                }
            }
            TogglePolicy::Lenient => {
                self.committed = true;
                ToggleOutcome::Triggered
            }
        }
    }

    fn accepts_hover(&self, kind: PointerKind) -> bool {
        match self.policy {
            TogglePolicy::Strict => kind.is_precise(),
            TogglePolicy::Lenient => true,
        }
    }
}

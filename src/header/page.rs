//! Page keys supplied by the hosting router.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageKey {
    Home,
    Saved,
    Thread,
    MyQuestions,
    Profile,
    Notifications,
    Ask,
    Answer,
    Other(String),
}

impl PageKey {
    pub fn parse(key: &str) -> Self {
        match key {
            "home" => Self::Home,
            "saved" => Self::Saved,
            "thread" => Self::Thread,
            "myquestions" => Self::MyQuestions,
            "profile" => Self::Profile,
            "notifications" => Self::Notifications,
            "ask" => Self::Ask,
            "answer" => Self::Answer,
            other => Self::Other(other.to_string()),
        }
    }

    /// Route segment for this page.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Home => "home",
            Self::Saved => "saved",
            Self::Thread => "thread",
            Self::MyQuestions => "myquestions",
            Self::Profile => "profile",
            Self::Notifications => "notifications",
            Self::Ask => "ask",
            Self::Answer => "answer",
            Self::Other(key) => key,
        }
    }

    /// Title shown in the header. Compact layouts get shorter labels for
    /// the two editor pages; unknown pages have none.
    pub fn label(&self, compact: bool) -> Option<&'static str> {
        let label = match self {
            Self::Home => "Home",
            Self::Saved => "Saved Questions",
            Self::Thread => "Question Thread",
            Self::MyQuestions => "My Questions",
            Self::Profile => "My Profile",
            Self::Notifications => "Notifications",
            Self::Ask if compact => "Ask",
            Self::Ask => "Ask Question",
            Self::Answer if compact => "Answer",
            Self::Answer => "Write Answer",
            Self::Other(_) => return None,
        };
        Some(label)
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the header is shown and where the back button leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    pub current: PageKey,
    pub origin: PageKey,
}

impl PageContext {
    pub fn new(current: &str, origin: &str) -> Self {
        Self {
            current: PageKey::parse(current),
            origin: PageKey::parse(origin),
        }
    }

    /// `/` when coming from home, `/<origin>` otherwise.
    pub fn back_route(&self) -> String {
        match self.origin {
            PageKey::Home => "/".to_string(),
            ref origin => format!("/{}", origin),
        }
    }
}

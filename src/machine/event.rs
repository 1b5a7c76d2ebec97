//! Events delivered to the pagination machine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An event, tagged by `type` on the wire.
///
/// `MORE` and `DONE` carry the newly loaded items as `newData`. Hosts may
/// send any of these directly; payloads are not validated.
///
/// ```rust
/// use pageflow::machine::PageEvent;
///
/// let event: PageEvent = serde_json::from_str(r#"{"type":"MORE","newData":["1","2"]}"#).unwrap();
/// assert_eq!(event, PageEvent::more(["1", "2"]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PageEvent {
    Fetch,
    More {
        #[serde(rename = "newData", default)]
        new_data: Vec<String>,
    },
    Done {
        #[serde(rename = "newData", default)]
        new_data: Vec<String>,
    },
    Fail {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
    Reset,
}

impl PageEvent {
    pub fn more<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::More {
            new_data: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn done<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::Done {
            new_data: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn fail(reason: impl Into<String>) -> Self {
        Self::Fail {
            reason: Some(reason.into()),
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Self::Fetch => EventKind::Fetch,
            Self::More { .. } => EventKind::More,
            Self::Done { .. } => EventKind::Done,
            Self::Fail { .. } => EventKind::Fail,
            Self::Reset => EventKind::Reset,
        }
    }

    /// Items carried by `MORE` and `DONE`; empty for every other kind.
    pub fn payload(&self) -> &[String] {
        match self {
            Self::More { new_data } | Self::Done { new_data } => new_data,
            _ => &[],
        }
    }

    pub fn into_payload(self) -> Vec<String> {
        match self {
            Self::More { new_data } | Self::Done { new_data } => new_data,
            _ => Vec::new(),
        }
    }
}

/// Payload-free discriminant of [`PageEvent`], used as the table key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    Fetch,
    More,
    Done,
    Fail,
    Reset,
}

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        EventKind::Fetch,
        EventKind::More,
        EventKind::Done,
        EventKind::Fail,
        EventKind::Reset,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fetch => "FETCH",
            Self::More => "MORE",
            Self::Done => "DONE",
            Self::Fail => "FAIL",
            Self::Reset => "RESET",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

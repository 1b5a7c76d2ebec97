//! The `State` trait implemented by every machine state enum.
//!
//! A state is a plain value. Inspecting it never has side effects, which is
//! what lets hosts branch on it freely while rendering.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// States must be cheap to clone and comparable, since the machine hands
/// copies to hosts and records them in its history. Serde bounds let
/// snapshots travel across process or FFI boundaries as JSON.
///
/// # Example
///
/// ```rust
/// use pageflow::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum FeedState {
///     Waiting,
///     Loading,
///     Exhausted,
///     Broken,
/// }
///
/// impl State for FeedState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Waiting => "waiting",
///             Self::Loading => "loading",
///             Self::Exhausted => "exhausted",
///             Self::Broken => "broken",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Exhausted | Self::Broken)
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Broken)
///     }
/// }
///
/// assert!(FeedState::Broken.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Tag used in logs and by hosts matching on the state.
    fn name(&self) -> &str;

    /// Terminal states accept no further events.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Error states are usually terminal as well, but that is left to the
    /// transition table to decide.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

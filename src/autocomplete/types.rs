//! Messages the autocomplete field sends back into the application's update
//! loop.

use bubbletea_rs::{Cmd, Msg};

/// A suggestion was chosen from the dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowTappedMsg {
    /// The chosen suggestion.
    pub text: String,
    /// Its position in the dropdown.
    pub index: usize,
}

/// The field lost focus and its suggestion session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissedMsg;

impl From<RowTappedMsg> for Msg {
    fn from(msg: RowTappedMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<DismissedMsg> for Msg {
    fn from(msg: DismissedMsg) -> Self {
        Box::new(msg) as Msg
    }
}

/// Wraps a message in a command that resolves immediately.
pub(crate) fn emit<M: Into<Msg>>(msg: M) -> Cmd {
    let msg: Msg = msg.into();
    Box::pin(async move { Some(msg) })
}

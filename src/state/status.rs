#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use crate::net::types::StatusSnapshot;

/// Status panel state: the latest snapshot and the health of the paths that
/// deliver it.
#[derive(Clone, Debug, Default)]
pub struct StatusState {
    pub snapshot: Option<StatusSnapshot>,
    pub link: LinkHealth,
}

/// Health of the status feed, from the panel's point of view.
///
/// `FetchFailed` (the one-shot `GET /status` failed) and `Lost` (the event
/// stream dropped) render differently, so they are distinct variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkHealth {
    #[default]
    Loading,
    Live,
    FetchFailed,
    Lost,
}

impl StatusState {
    /// Replace the snapshot wholesale and mark the feed live.
    pub fn apply_snapshot(&mut self, snapshot: StatusSnapshot) {
        self.snapshot = Some(snapshot);
        self.link = LinkHealth::Live;
    }

    /// The one-shot status fetch failed: every field renders the failure glyph.
    pub fn mark_fetch_failed(&mut self) {
        self.snapshot = None;
        self.link = LinkHealth::FetchFailed;
    }

    /// The event stream dropped: every field renders the connection-lost glyph.
    pub fn mark_lost(&mut self) {
        self.snapshot = None;
        self.link = LinkHealth::Lost;
    }

    /// A reconnect attempt is underway; a lost panel goes back to loading
    /// until the refetched snapshot arrives.
    pub fn reconnecting(&mut self) {
        if self.link == LinkHealth::Lost {
            self.link = LinkHealth::Loading;
        }
    }
}

//! Lifecycle of an asynchronous request as tracked by a store slice.

/// Fetch status of one resource.
///
/// A slice starts in [`FetchStatus::Initial`]; pages only trigger a fetch from that
/// state, so a request already in flight is never duplicated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Initial,
    Loading,
    Success,
    Error,
}

impl FetchStatus {
    pub fn is_initial(self) -> bool {
        self == FetchStatus::Initial
    }

    pub fn is_loading(self) -> bool {
        self == FetchStatus::Loading
    }
}

/// True while any of the tracked statuses is loading.
pub fn is_loading(statuses: &[FetchStatus]) -> bool {
    statuses.iter().any(|status| status.is_loading())
}

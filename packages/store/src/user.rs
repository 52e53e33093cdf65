//! User slice: who is signed in and what they may do.

use crate::api::ServicesApi;
use crate::dispatch::{Dispatch, Reducer};
use crate::models::{Role, UserId, UserInfo};
use crate::status::FetchStatus;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserInfo>,
    pub is_authorized: bool,
    pub get_user_status: FetchStatus,
    ticket: u64,
}

impl UserState {
    /// Role of the current user; anonymous when nobody is known.
    pub fn role(&self) -> Role {
        match &self.user {
            Some(user) => user.role(),
            None => Role::Anonymous,
        }
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user.as_ref().map(|u| u.id)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum UserAction {
    GetUserPending,
    GetUserFulfilled { ticket: u64, user: Option<UserInfo> },
    GetUserRejected { ticket: u64 },
    LoggedOut,
}

impl Reducer for UserState {
    type Action = UserAction;

    fn reduce(&mut self, action: UserAction) {
        match action {
            UserAction::GetUserPending => {
                self.ticket += 1;
                self.get_user_status = FetchStatus::Loading;
            }
            UserAction::GetUserFulfilled { ticket, user } => {
                if ticket != self.ticket {
                    return;
                }
                self.is_authorized = user.is_some();
                self.user = user;
                self.get_user_status = FetchStatus::Success;
            }
            UserAction::GetUserRejected { ticket } => {
                if ticket != self.ticket {
                    return;
                }
                self.user = None;
                self.is_authorized = false;
                self.get_user_status = FetchStatus::Error;
            }
            UserAction::LoggedOut => {
                self.ticket += 1;
                self.user = None;
                self.is_authorized = false;
                self.get_user_status = FetchStatus::Success;
            }
        }
    }
}

/// Ask the backend who owns the current session.
pub async fn get_current_user_action<D, A>(store: &mut D, api: &A)
where
    D: Dispatch<UserState>,
    A: ServicesApi,
{
    store.dispatch(UserAction::GetUserPending);
    let ticket = store.select(|s| s.ticket);

    match api.get_current_user().await {
        Ok(user) => {
            match &user {
                Some(u) => tracing::info!(user_id = u.id, role = ?u.role(), "session restored"),
                None => tracing::info!("anonymous session"),
            }
            store.dispatch(UserAction::GetUserFulfilled { ticket, user });
        }
        Err(e) => {
            tracing::warn!("Failed to fetch current user: {}", e);
            store.dispatch(UserAction::GetUserRejected { ticket });
        }
    }
}

pub async fn ensure_current_user<D, A>(store: &mut D, api: &A)
where
    D: Dispatch<UserState>,
    A: ServicesApi,
{
    if store.select(|s| s.get_user_status.is_initial()) {
        get_current_user_action(store, api).await;
    }
}

/// End the session. Local state is cleared even when the backend call fails.
pub async fn logout_action<D, A>(store: &mut D, api: &A)
where
    D: Dispatch<UserState>,
    A: ServicesApi,
{
    if let Err(e) = api.logout().await {
        tracing::warn!("Logout request failed: {}", e);
    }
    store.dispatch(UserAction::LoggedOut);
}

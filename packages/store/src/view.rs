//! Role-dependent view of the listing grid.

use crate::models::{Role, ServiceListing, UserId};
use crate::user::UserState;

/// Which half of the grid a worker is looking at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListingMode {
    /// Services offered by others ("Доступные услуги").
    #[default]
    Available,
    /// The worker's own services ("Мои услуги").
    Mine,
}

/// Listings split by owner. Order within each half follows the input.
#[derive(Debug, Default, PartialEq)]
pub struct Partition<'a> {
    pub mine: Vec<&'a ServiceListing>,
    pub others: Vec<&'a ServiceListing>,
}

pub fn partition_services(services: &[ServiceListing], user_id: Option<UserId>) -> Partition<'_> {
    let (mine, others) = services
        .iter()
        .partition(|service| Some(service.user) == user_id);
    Partition { mine, others }
}

/// The "create listing" link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CreateLink {
    pub disabled: bool,
}

/// Everything the main page needs to render the grid.
#[derive(Debug, PartialEq)]
pub struct MainPageView<'a> {
    pub show_toggle: bool,
    pub create_link: Option<CreateLink>,
    pub cards: Vec<&'a ServiceListing>,
    pub can_edit: bool,
}

impl<'a> MainPageView<'a> {
    pub fn derive(services: &'a [ServiceListing], user: &UserState, mode: ListingMode) -> Self {
        let create = CreateLink {
            disabled: !user.is_authorized,
        };
        match user.role() {
            Role::Anonymous | Role::Client => Self {
                show_toggle: false,
                create_link: None,
                cards: services.iter().collect(),
                can_edit: false,
            },
            Role::Staff => Self {
                show_toggle: false,
                create_link: Some(create),
                cards: services.iter().collect(),
                can_edit: true,
            },
            Role::Worker { staff } => {
                let partition = partition_services(services, user.user_id());
                let (cards, own) = match mode {
                    ListingMode::Mine => (partition.mine, true),
                    ListingMode::Available => (partition.others, false),
                };
                let can_edit = own || staff;
                Self {
                    show_toggle: true,
                    create_link: can_edit.then_some(create),
                    cards,
                    can_edit,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::Reducer;
    use crate::models::UserInfo;
    use crate::user::UserAction;

    fn listing(id: u64, user: UserId) -> ServiceListing {
        ServiceListing {
            id,
            user,
            title: format!("Услуга {id}"),
            price: 1000,
            description: None,
            image: None,
        }
    }

    fn grid() -> Vec<ServiceListing> {
        vec![listing(1, 7), listing(2, 3), listing(3, 7), listing(4, 3)]
    }

    fn signed_in(id: UserId, is_worker: bool, is_staff: bool) -> UserState {
        let mut state = UserState::default();
        state.reduce(UserAction::GetUserPending);
        // First request of a fresh slice carries ticket 1
        state.reduce(UserAction::GetUserFulfilled {
            ticket: 1,
            user: Some(UserInfo {
                id,
                username: format!("user{id}"),
                email: None,
                is_staff,
                is_worker,
            }),
        });
        state
    }

    fn ids(cards: &[&ServiceListing]) -> Vec<u64> {
        cards.iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_partition_is_disjoint_cover() {
        let services = grid();
        for user_id in [None, Some(3), Some(7), Some(42)] {
            let p = partition_services(&services, user_id);
            assert_eq!(p.mine.len() + p.others.len(), services.len());
            assert!(p.mine.iter().all(|s| Some(s.user) == user_id));
            assert!(p.others.iter().all(|s| Some(s.user) != user_id));
        }
        let p = partition_services(&services, Some(7));
        assert_eq!(ids(&p.mine), vec![1, 3]);
        assert_eq!(ids(&p.others), vec![2, 4]);
    }

    #[test]
    fn test_anonymous_sees_everything_without_controls() {
        let services = grid();
        let view = MainPageView::derive(&services, &UserState::default(), ListingMode::Mine);
        assert!(!view.show_toggle);
        assert!(view.create_link.is_none());
        assert!(!view.can_edit);
        assert_eq!(view.cards.len(), 4);
    }

    #[test]
    fn test_client_sees_everything_without_controls() {
        let services = grid();
        let view = MainPageView::derive(&services, &signed_in(3, false, false), ListingMode::Mine);
        assert!(!view.show_toggle);
        assert!(view.create_link.is_none());
        assert_eq!(view.cards.len(), 4);
    }

    #[test]
    fn test_worker_toggles_between_halves() {
        let services = grid();
        let user = signed_in(7, true, false);

        let mine = MainPageView::derive(&services, &user, ListingMode::Mine);
        assert!(mine.show_toggle);
        assert_eq!(ids(&mine.cards), vec![1, 3]);
        assert_eq!(mine.create_link, Some(CreateLink { disabled: false }));
        assert!(mine.can_edit);

        let others = MainPageView::derive(&services, &user, ListingMode::Available);
        assert!(others.show_toggle);
        assert_eq!(ids(&others.cards), vec![2, 4]);
        assert!(others.create_link.is_none());
        assert!(!others.can_edit);
    }

    #[test]
    fn test_staff_always_gets_create_link() {
        let services = grid();
        let user = signed_in(1, false, true);
        for mode in [ListingMode::Available, ListingMode::Mine] {
            let view = MainPageView::derive(&services, &user, mode);
            assert!(!view.show_toggle);
            assert_eq!(view.create_link, Some(CreateLink { disabled: false }));
            assert_eq!(view.cards.len(), 4);
        }
    }

    #[test]
    fn test_staff_worker_keeps_toggle_and_create_link() {
        let services = grid();
        let user = signed_in(7, true, true);

        let others = MainPageView::derive(&services, &user, ListingMode::Available);
        assert!(others.show_toggle);
        assert_eq!(ids(&others.cards), vec![2, 4]);
        assert_eq!(others.create_link, Some(CreateLink { disabled: false }));
        assert!(others.can_edit);

        let mine = MainPageView::derive(&services, &user, ListingMode::Mine);
        assert!(mine.show_toggle);
        assert_eq!(ids(&mine.cards), vec![1, 3]);
        assert!(mine.create_link.is_some());
        assert!(mine.can_edit);
    }

    #[test]
    fn test_create_link_disabled_without_authorization() {
        let services = grid();
        let mut user = signed_in(1, false, true);
        user.is_authorized = false;
        let view = MainPageView::derive(&services, &user, ListingMode::Available);
        assert_eq!(view.create_link, Some(CreateLink { disabled: true }));
    }
}

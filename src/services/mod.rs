//! Typed service handles, one per snippet category.
//!
//! Each handle mirrors one generated REST interface: a thin struct over the
//! shared transport whose methods build a [`GraphRequest`](crate::graph::GraphRequest)
//! and forward it. Handles apply no success gating of their own; a non-2xx
//! response comes back as a plain `ApiResponse` and the dispatch layer
//! decides what to do with it.

mod drives;
mod events;
mod groups;
mod mail;
mod me;
mod users;

pub use drives::DrivesService;
pub use events::EventsService;
pub use groups::GroupsService;
pub use mail::MailService;
pub use me::MeService;
pub use users::UsersService;

use std::sync::Arc;

use crate::graph::GraphTransport;

/// Identifier of a resource created by an earlier step, extracted from its
/// response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemId(pub String);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The full set of service handles, one per category.
///
/// Constructed once at startup from a single shared transport and passed
/// explicitly to every snippet execution. Accessors return references that
/// stay stable for the life of the set.
pub struct Services {
    mail: MailService,
    events: EventsService,
    drives: DrivesService,
    users: UsersService,
    groups: GroupsService,
    me: MeService,
}

impl Services {
    pub fn new(transport: Arc<dyn GraphTransport>) -> Self {
        Self {
            mail: MailService::new(transport.clone()),
            events: EventsService::new(transport.clone()),
            drives: DrivesService::new(transport.clone()),
            users: UsersService::new(transport.clone()),
            groups: GroupsService::new(transport.clone()),
            me: MeService::new(transport),
        }
    }

    pub fn mail(&self) -> &MailService {
        &self.mail
    }

    pub fn events(&self) -> &EventsService {
        &self.events
    }

    pub fn drives(&self) -> &DrivesService {
        &self.drives
    }

    pub fn users(&self) -> &UsersService {
        &self.users
    }

    pub fn groups(&self) -> &GroupsService {
        &self.groups
    }

    pub fn me(&self) -> &MeService {
        &self.me
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::MockGraphTransport;

    #[test]
    fn handles_are_reference_stable() {
        let services = Services::new(Arc::new(MockGraphTransport::new()));
        assert!(std::ptr::eq(services.mail(), services.mail()));
        assert!(std::ptr::eq(services.drives(), services.drives()));
        assert!(std::ptr::eq(services.me(), services.me()));
    }

    #[test]
    fn item_id_displays_raw_value() {
        let id = ItemId("abc123".to_string());
        assert_eq!(id.to_string(), "abc123");
    }
}

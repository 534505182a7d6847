//! Coarse allow-list of which roles may attempt which operation.
//!
//! Passing this table is necessary but never sufficient: target-level checks in
//! `ownership` and list scoping in `scope` still apply afterwards.

use entity::sea_orm_active_enums::Role;

/// Kind of resource an operation acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Account,
    Team,
    Event,
    CallUp,
    Availability,
    Statistic,
    Due,
}

impl Resource {
    /// Human readable name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Account => "Account",
            Self::Team => "Team",
            Self::Event => "Event",
            Self::CallUp => "Call-up",
            Self::Availability => "Availability",
            Self::Statistic => "Statistic",
            Self::Due => "Due",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    List,
    Read,
    Create,
    Update,
    Delete,
}

impl OperationKind {
    /// Whether the operation only observes state.
    pub fn is_read(&self) -> bool {
        matches!(self, Self::List | Self::Read)
    }
}

/// A named operation: one kind of action on one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operation {
    pub resource: Resource,
    pub kind: OperationKind,
}

impl Operation {
    pub const fn new(resource: Resource, kind: OperationKind) -> Self {
        Self { resource, kind }
    }
}

const EVERYONE: &[Role] = &[Role::Member, Role::Manager, Role::Administrator];
const STAFF: &[Role] = &[Role::Manager, Role::Administrator];
const ADMINISTRATORS: &[Role] = &[Role::Administrator];

use OperationKind::*;
use Resource::*;

/// Every operation the API exposes with the roles allowed to attempt it.
///
/// An operation missing from this table is denied to everyone.
pub const ACCESS_TABLE: &[(Operation, &[Role])] = &[
    (Operation::new(Account, List), STAFF),
    (Operation::new(Account, Read), EVERYONE),
    (Operation::new(Account, Create), STAFF),
    (Operation::new(Account, Update), EVERYONE),
    (Operation::new(Account, Delete), STAFF),
    (Operation::new(Team, List), EVERYONE),
    (Operation::new(Team, Read), EVERYONE),
    (Operation::new(Team, Create), STAFF),
    (Operation::new(Team, Update), STAFF),
    (Operation::new(Team, Delete), ADMINISTRATORS),
    (Operation::new(Event, List), EVERYONE),
    (Operation::new(Event, Read), EVERYONE),
    (Operation::new(Event, Create), STAFF),
    (Operation::new(Event, Update), STAFF),
    (Operation::new(Event, Delete), STAFF),
    (Operation::new(CallUp, List), EVERYONE),
    (Operation::new(CallUp, Read), EVERYONE),
    (Operation::new(CallUp, Create), STAFF),
    (Operation::new(CallUp, Update), STAFF),
    (Operation::new(CallUp, Delete), STAFF),
    (Operation::new(Availability, List), EVERYONE),
    (Operation::new(Availability, Read), EVERYONE),
    (Operation::new(Availability, Create), EVERYONE),
    (Operation::new(Availability, Update), EVERYONE),
    (Operation::new(Availability, Delete), STAFF),
    (Operation::new(Statistic, List), EVERYONE),
    (Operation::new(Statistic, Read), EVERYONE),
    (Operation::new(Statistic, Create), STAFF),
    (Operation::new(Statistic, Update), STAFF),
    (Operation::new(Statistic, Delete), STAFF),
    (Operation::new(Due, List), EVERYONE),
    (Operation::new(Due, Read), EVERYONE),
    (Operation::new(Due, Create), STAFF),
    (Operation::new(Due, Update), STAFF),
    (Operation::new(Due, Delete), STAFF),
];

/// Roles allowed to attempt `operation`. Empty when the operation is unlisted.
pub fn allowed_roles(operation: Operation) -> &'static [Role] {
    ACCESS_TABLE
        .iter()
        .find(|(entry, _)| *entry == operation)
        .map(|(_, roles)| *roles)
        .unwrap_or(&[])
}

/// Whether `role` may attempt `operation` at all.
pub fn permits(operation: Operation, role: Role) -> bool {
    allowed_roles(operation).contains(&role)
}

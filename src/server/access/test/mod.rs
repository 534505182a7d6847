use chrono::{NaiveDate, NaiveTime};
use entity::sea_orm_active_enums::{EventType, Role, TeamCategory};

use crate::server::{
    access::{
        ownership::{check_access, Target},
        scope::{scope_query, EffectiveScope, RequestedScope},
        table::{OperationKind, Resource},
        Access,
    },
    error::{auth::AuthError, AppError},
    model::{account::Account, event::Event, team::Team},
};

mod authorize_read;
mod scenarios;
mod scope_query;

fn account(id: i32, role: Role, team_id: Option<i32>) -> Account {
    Account {
        id,
        first_name: "Test".to_string(),
        last_name: format!("Account {}", id),
        email: format!("account{}@club.test", id),
        password_hash: String::new(),
        role,
        position: None,
        phone: None,
        photo_url: None,
        team_id,
    }
}

fn member(id: i32, team_id: Option<i32>) -> Account {
    account(id, Role::Member, team_id)
}

fn manager(id: i32, team_id: Option<i32>) -> Account {
    account(id, Role::Manager, team_id)
}

fn administrator(id: i32) -> Account {
    account(id, Role::Administrator, None)
}

fn team(id: i32) -> Team {
    Team {
        id,
        name: format!("Team {}", id),
        category: TeamCategory::Senior,
        manager_id: None,
    }
}

fn event(id: i32, team_id: i32) -> Event {
    Event {
        id,
        team_id,
        event_type: EventType::Training,
        date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
        time: NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
        location: None,
        description: None,
    }
}

fn assert_forbidden<T: std::fmt::Debug>(result: Result<T, AuthError>, reason: &str) {
    match result {
        Err(AuthError::Forbidden(actual)) => assert_eq!(actual, reason),
        other => panic!("Expected Forbidden({}), got: {:?}", reason, other),
    }
}

const ALL_KINDS: [OperationKind; 5] = [
    OperationKind::List,
    OperationKind::Read,
    OperationKind::Create,
    OperationKind::Update,
    OperationKind::Delete,
];

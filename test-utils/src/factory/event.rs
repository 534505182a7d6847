//! Event factory for creating test event entities.

use chrono::{NaiveDate, NaiveTime};
use entity::sea_orm_active_enums::EventType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events belonging to a team.
///
/// # Example
///
/// ```rust,ignore
/// let event = EventFactory::new(&db, team.id)
///     .event_type(EventType::Match)
///     .location("Main pitch")
///     .build()
///     .await?;
/// ```
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    team_id: i32,
    event_type: EventType,
    date: NaiveDate,
    time: NaiveTime,
    location: Option<String>,
    description: Option<String>,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - event_type: `Training`
    /// - date: 2026-03-14, time: 18:30
    /// - no location or description
    pub fn new(db: &'a DatabaseConnection, team_id: i32) -> Self {
        Self {
            db,
            team_id,
            event_type: EventType::Training,
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap_or_default(),
            time: NaiveTime::from_hms_opt(18, 30, 0).unwrap_or_default(),
            location: None,
            description: None,
        }
    }

    pub fn event_type(mut self, event_type: EventType) -> Self {
        self.event_type = event_type;
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn time(mut self, time: NaiveTime) -> Self {
        self.time = time;
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds and inserts the event entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::event::Model)` - Created event entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            team_id: ActiveValue::Set(self.team_id),
            event_type: ActiveValue::Set(self.event_type),
            date: ActiveValue::Set(self.date),
            time: ActiveValue::Set(self.time),
            location: ActiveValue::Set(self.location),
            description: ActiveValue::Set(self.description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a training event for the team with default values.
pub async fn create_event(
    db: &DatabaseConnection,
    team_id: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, team_id).build().await
}

pub use super::account::Entity as Account;
pub use super::availability::Entity as Availability;
pub use super::call_up::Entity as CallUp;
pub use super::due::Entity as Due;
pub use super::event::Entity as Event;
pub use super::statistic::Entity as Statistic;
pub use super::team::Entity as Team;

mod account;
mod call_up;
mod due;
mod event;
mod statistic;
mod team;

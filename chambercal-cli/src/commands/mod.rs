pub mod add_event;
pub mod calendar;
pub mod chambers;
pub mod events;
pub mod export;
pub mod refresh;
pub mod reset;

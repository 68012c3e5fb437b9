pub mod calendar;
pub mod config;
pub mod coverage;
pub mod data_storage;
pub mod export;
pub mod formatter;
pub mod interval;
pub mod messages;
pub mod month;
pub mod shift;
pub mod splitter;
pub mod tooltip;
pub mod view;

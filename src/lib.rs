//! Memora — a small desktop memory assistant.
//!
//! Four record categories (reminders, notes, contacts, journal) stored as
//! CSV files, a themed egui window, and optional spoken confirmations.

pub mod app;
pub mod config;
pub mod forms;
pub mod nav;
pub mod records;
pub mod speech;
pub mod theme;

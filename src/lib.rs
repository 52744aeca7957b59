//! Intake Bot - Medical help request form over Telegram
//!
//! This crate walks a person through a fixed questionnaire about an injured
//! person and forwards the collected answers to a doctors' chat.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

//! Invoice Assistant - Conversational Invoice Builder
//!
//! This crate assembles structured invoices incrementally from free-text
//! chat utterances, validates drafts against a required-field profile, and
//! finalizes complete drafts into rendered, persisted invoices.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

//! Core logic for the portfolio application.
//!
//! Everything in this crate is pure and UI-free: the keyword dispatcher
//! behind the chat assistant, the command interpreter behind the terminal
//! playground, the shared transcript models, and the contact-form submit
//! state machine. The root crate renders these; this crate decides.

pub mod contact;
pub mod dispatch;
pub mod models;
pub mod terminal;

//! Email delivery provider module
//!
//! This module talks to the transactional email HTTP API (Resend-style
//! `POST /emails`) using reqwest. It returns the provider reply as-is;
//! mapping it to a `DispatchResult` is done by `domains::mail`.

mod service;
mod types;

pub use service::{EmailService, MailProvider};
pub use types::{
  EmailError, EmailMessage, MailConfig, SendEmailResponse, SentEmail, DEFAULT_MAIL_BASE_URL, DEFAULT_MAIL_FROM,
};

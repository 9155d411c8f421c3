//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `relay` delivers contact-form messages to the third-party email relay.
//! It is the only outbound call the site makes.

pub mod relay;

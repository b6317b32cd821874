//! Skycast proxy endpoint library.
//!
//! Keeps the upstream API credential on the server: browsers and terminal
//! clients talk to `/api/weather` and never see the key.

pub mod http;

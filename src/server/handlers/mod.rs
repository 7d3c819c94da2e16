//! HTTP handlers.

mod dns;
mod info;

pub use dns::dns_handler;
pub use info::info_handler;

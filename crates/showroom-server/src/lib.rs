//! Live server for the MH ENTERPRISES site.
//!
//! Serves the rendered pages, relays the contact form to the inquiry backend,
//! and in development mode reloads browsers when watched files change.

pub mod contact;
pub mod reload;
pub mod server;
pub mod watcher;

pub use contact::{relay_status, RelayReply, RelayStatus};
pub use reload::{reload_client_script, ReloadHub, ReloadMessage};
pub use server::{ServerConfig, ServerError, SiteServer};
pub use watcher::{FileWatcher, WatchEvent};

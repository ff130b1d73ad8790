mod host_addr;

pub use host_addr::{resolve_host, FALLBACK_HOST};

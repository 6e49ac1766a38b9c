//! Child process plumbing for llama-server: ports, health, shutdown.

mod health;
mod ports;
mod shutdown;

pub use health::{DEFAULT_STARTUP_TIMEOUT, HEALTH_POLL_INTERVAL, wait_for_http_health};
pub use ports::{allocate_port, is_port_available};
pub use shutdown::{SHUTDOWN_GRACE, shutdown_child};

//! Port allocation for spawned servers.

use std::io;
use std::net::TcpListener;
use tracing::debug;

/// Ask the OS for a free loopback port.
///
/// The listener is dropped before returning, so the port is only likely
/// to be free when the server binds it.
pub fn allocate_port() -> io::Result<u16> {
    let listener = TcpListener::bind(("127.0.0.1", 0))?;
    let port = listener.local_addr()?.port();
    debug!(port = %port, "Allocated available port");
    Ok(port)
}

/// Check if a port is available by attempting to bind to it.
pub fn is_port_available(port: u16) -> bool {
    TcpListener::bind(("127.0.0.1", port)).is_ok_and(|listener| listener.local_addr().is_ok())
}

//! HTTP server configuration object.

use std::net::SocketAddr;

use backend::domain::ports::StoragePorts;

/// Everything `create_server` needs: where to listen and which storage to
/// hand to the handlers.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) ports: StoragePorts,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, ports: StoragePorts) -> Self {
        Self { bind_addr, ports }
    }

    /// Socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

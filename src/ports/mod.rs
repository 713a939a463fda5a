/// Ports module defining interfaces for hexagonal architecture
///
/// This module contains the outbound ports (driven ports) the crawl
/// pipeline uses to reach the network, the filesystem and external tools.
pub mod outbound;

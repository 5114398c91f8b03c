// Domain configuration clients.
//
// One client per configuration domain, each holding a shared `Transport`
// (composition, not inheritance -- no client talks to the network
// directly). Every setter is codec -> transport.request -> raw response,
// except the two verified relay setters in `periphery`.

pub mod network;
pub mod periphery;
pub mod rfid;
pub mod system;
pub mod tagidentity;

pub use network::NetworkConfig;
pub use periphery::PeripheryConfig;
pub use rfid::RfidConfig;
pub use system::SystemCommands;
pub use tagidentity::TagIdentity;

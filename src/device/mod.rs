//! Device-level collaborators and the supervisor that ties them together.
//!
//! The network link and the buttons sit behind small traits so the
//! supervisor runs unchanged against host stand-ins.

pub mod buttons;
pub mod supervisor;
pub mod wifi;

pub use buttons::{Button, ButtonInput, ConsoleButtons};
pub use supervisor::Supervisor;
pub use wifi::{ConnectError, HostWifi, WifiConnector};

//! Line-oriented text driver for playing a local game with gambit.

pub mod command;
pub mod driver;
pub mod error;

pub use command::{Command, MoveText, Setting};
pub use driver::{Driver, DriverConfig};
pub use error::CliError;

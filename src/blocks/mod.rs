pub mod command;
pub mod device;
pub mod event;
pub mod property;

pub use command::*;
pub use device::*;
pub use event::*;
pub use property::*;

/// Shared hue of the device block family in the editor palette.
pub(crate) const BLOCK_COLOUR: u16 = 290;

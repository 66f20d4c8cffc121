//! Solver for Pete's Pike: totems on a grid pull each other along rows and
//! columns until Pete stands on the target cell.

pub mod error;
pub mod game;
pub mod loader;
pub mod observer;
pub mod solution;
pub mod totem;

pub use error::LoadError;
pub use game::{Breadcrumb, Game};
pub use loader::{load_game, GameDescription};
pub use observer::{LogObserver, SearchObserver};
pub use totem::{Direction, Position, Role, Totem};

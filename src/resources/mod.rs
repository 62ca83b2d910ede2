pub mod cli;
pub mod net_entity_map;
pub mod prediction;
pub mod session;
pub mod settings;

pub use cli::*;
pub use net_entity_map::*;
pub use prediction::*;
pub use session::*;
pub use settings::*;

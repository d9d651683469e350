use std::sync::Arc;

use rocksdb::DB;

use crate::errors::ChatError;

pub mod api;
pub mod config;
mod data;
pub mod errors;
pub mod suggest;

// Exports for external use
pub use data::{Account, open_db};
pub use suggest::{PopulationSnapshot, UserProfile, load_population, recommend};

pub fn initialize(db: &Arc<DB>) -> Result<(), ChatError> {
    data::initialize(db)?;

    Ok(())
}

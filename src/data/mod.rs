use std::sync::Arc;

use rocksdb::DB;
use tracing::info;

use crate::errors::ChatError;

pub mod account;
mod db;
pub mod session;

pub use account::Account;
pub use db::open_db;

pub fn initialize(db: &Arc<DB>) -> Result<(), ChatError> {
    let count = account::count_accounts(db)?;
    info!("Account store opened with {} registered accounts", count);

    Ok(())
}

use rocksdb::{DB, Options};
use std::path::Path;
use std::sync::Arc;

use crate::errors::ChatError;

// Configure RocksDB options
fn rocksdb_options() -> Options {
    let mut opts = Options::default();
    opts.create_if_missing(true);
    opts
}

/// Open the account database at the given directory, wrapped in Arc
pub fn open_db(path: impl AsRef<Path>) -> Result<Arc<DB>, ChatError> {
    let db = DB::open(&rocksdb_options(), path)?;
    Ok(Arc::new(db))
}

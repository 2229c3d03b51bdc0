use std::{fs, path::Path};

use arca_triple_store::TripleStoreClient;

use crate::error::AppError;

pub(crate) fn run(client: &TripleStoreClient, output: Option<&Path>) -> Result<(), AppError> {
    let dump = client.dump()?;

    match output {
        Some(path) => {
            fs::write(path, &dump)?;
            tracing::info!(
                path = %path.display(),
                bytes = dump.len(),
                "Store dump written"
            );
        }
        None => print!("{dump}"),
    }

    Ok(())
}

use std::{fs, path::Path};

use arca_triple_store::TripleStoreClient;

use crate::error::AppError;

pub(crate) fn run(client: &TripleStoreClient, file: &Path) -> Result<(), AppError> {
    let text = fs::read_to_string(file)?;

    match client.run(&text)? {
        Some(rows) => {
            for row in &rows {
                println!("{}", serde_json::to_string(row)?);
            }
            tracing::info!(rows = rows.len(), "Query finished");
        }
        None => tracing::info!("Statement acknowledged with no result rows"),
    }

    Ok(())
}

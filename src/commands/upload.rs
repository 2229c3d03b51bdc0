use std::{fs, path::Path};

use arca_triple_store::{LogProgress, TripleStoreClient};

use crate::error::AppError;

pub(crate) fn run(
    client: &TripleStoreClient,
    file: &Path,
    graph: Option<&str>,
) -> Result<(), AppError> {
    let content = fs::read_to_string(file)?;
    let extension = file
        .extension()
        .and_then(|extension| extension.to_str())
        .unwrap_or_default();

    match extension {
        "nq" | "nquads" => {
            if graph.is_some() {
                return Err(AppError::InvalidArguments(
                    "N-Quads embed their graph per quad; --graph is not accepted".to_string(),
                ));
            }
            client.load_nquads(&content, &mut LogProgress::new())?;
        }
        "ttl" | "turtle" => {
            let graph = graph.ok_or_else(|| {
                AppError::InvalidArguments("--graph is required for Turtle uploads".to_string())
            })?;
            client.load_turtle(&content, graph, &mut LogProgress::new())?;
        }
        other => {
            return Err(AppError::InvalidArguments(format!(
                "Unsupported file format: .{other} (expected .nq or .ttl)"
            )));
        }
    }

    Ok(())
}

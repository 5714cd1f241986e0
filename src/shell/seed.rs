use anyhow::Context;
use std::path::Path;

use crate::modules::fulfillment::use_cases::import_orders::command::ImportOrder;
use crate::shell::state::AppState;

pub async fn read_seed_file(path: &Path) -> anyhow::Result<Vec<ImportOrder>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading seed file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing seed file {}", path.display()))
}

/// Imports every order in the file. A rejected batch aborts boot.
pub async fn seed_from_file(state: &AppState, path: &Path) -> anyhow::Result<usize> {
    let batch = read_seed_file(path).await?;
    let imported = state
        .import_orders
        .handle(batch)
        .await
        .with_context(|| format!("importing seed file {}", path.display()))?;
    Ok(imported)
}

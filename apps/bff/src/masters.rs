use tracing::debug;

use crate::backend::{BackendApi, BackendError};
use crate::models::master::MasterData;

/// Fetches the OS, tool and language lists concurrently.
/// Any one failing fails the whole load; there is no partial result.
pub async fn load_master_data(api: &dyn BackendApi) -> Result<MasterData, BackendError> {
    let (os, tools, languages) =
        tokio::try_join!(api.list_os(), api.list_tools(), api.list_languages())?;

    debug!(
        "Loaded master data: {} os, {} tools, {} languages",
        os.len(),
        tools.len(),
        languages.len()
    );

    Ok(MasterData {
        os,
        tools,
        languages,
    })
}

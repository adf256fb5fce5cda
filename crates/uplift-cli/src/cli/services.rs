use crate::opt::{ContentArgs, StoreArgs};
use anyhow::{Context, Error};
use std::sync::Arc;
use uplift::{Config, HttpCompletionStore, TokenClient};
use uplift_config::ContentCatalog;
use uplift_core::QuestService;
use uplift_core::store::{CompletionStore, LoaderCompletionStore};
use uplift_http::{ClientSettings, HttpClient};
use uplift_utils::loader::Loader;

pub(crate) async fn load_catalog(args: &ContentArgs) -> Result<Arc<ContentCatalog>, Error> {
    let loader = Loader::from_location(&args.content)?;
    let catalog = uplift_config::catalog::load(&loader)
        .await
        .with_context(|| format!("failed to load content from {}", args.content))?;
    Ok(Arc::new(catalog))
}

pub(crate) fn completion_store(args: &StoreArgs) -> Result<Arc<dyn CompletionStore>, Error> {
    if let Some(api_url) = &args.api_url {
        let client = TokenClient::new(
            Config::new(api_url.clone()),
            HttpClient::new(&ClientSettings::default())?,
            args.api_token.clone(),
        );
        tracing::debug!(%api_url, "using remote completion store");
        return Ok(Arc::new(HttpCompletionStore::new(client)));
    }
    let loader = Loader::from_location(&args.store)?;
    tracing::debug!(location = args.store, "using local completion store");
    Ok(Arc::new(LoaderCompletionStore::new(loader)))
}

pub(crate) async fn quest_service(
    content: &ContentArgs,
    store: &StoreArgs,
) -> Result<(Arc<ContentCatalog>, QuestService), Error> {
    let catalog = load_catalog(content).await?;
    let service = QuestService::new(Arc::new(Arc::clone(&catalog)), completion_store(store)?);
    Ok((catalog, service))
}

use crate::cli::services::quest_service;
use crate::opt::Progress;
use anyhow::{Error, bail};

pub(crate) async fn progress(opt: Progress) -> Result<(), Error> {
    let (catalog, service) = quest_service(&opt.content, &opt.store).await?;
    if catalog.get_quest(&opt.quest).is_none() {
        bail!("Unknown quest {}", opt.quest);
    }
    let progress = service.get_progress(&opt.quest).await?;
    if progress.degraded {
        eprintln!("Completions could not be loaded, showing default progress");
    }
    println!("{}", serde_json::to_string_pretty(&progress)?);
    Ok(())
}

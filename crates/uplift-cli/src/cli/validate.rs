use crate::opt::Validate;
use anyhow::{Error, Result, anyhow};
use std::path::Path;
use uplift_config::ContentCatalog;
use uplift_utils::loader::Loader;
use uplift_utils::loader::file_system::FileSystemLoader;

async fn check(path: &Path) -> Result<usize, Error> {
    if path.is_dir() {
        let loader = Loader::FileSystem(FileSystemLoader::new(path.to_path_buf()));
        let catalog = uplift_config::catalog::load(&loader).await?;
        return Ok(catalog.quests().len());
    }
    let quest = uplift_config::quest::parse(&tokio::fs::read(path).await?)?;
    ContentCatalog::new(vec![quest])?;
    Ok(1)
}

pub(crate) async fn validate(opt: Validate) -> Result<(), Error> {
    let mut failed = vec![];
    for path in &opt.paths {
        match check(path).await {
            Ok(quests) => println!("{} is ok 👌 ({quests} quests)", path.display()),
            Err(error) => {
                eprintln!("{}: {error:#}", path.display());
                failed.push(path.display().to_string());
            }
        }
    }
    if !failed.is_empty() {
        return Err(anyhow!("Invalid content in {failed:?}"));
    }
    Ok(())
}

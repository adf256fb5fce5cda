pub(crate) mod opt;
mod progress;
mod run;
mod schema;
mod services;
mod validate;

use crate::opt::Commands;
use anyhow::Error;
use progress::progress;
use run::run;
use schema::schema;
use validate::validate;

pub(crate) async fn exec(command: Commands) -> Result<(), Error> {
    match command {
        Commands::Run(o) => run(o).await,
        Commands::Validate(o) => validate(o).await,
        Commands::Schema => schema(),
        Commands::Progress(o) => progress(o).await,
    }
}

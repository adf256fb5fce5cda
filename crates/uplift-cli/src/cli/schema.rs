use anyhow::Error;

pub(crate) fn schema() -> Result<(), Error> {
    println!("{}", serde_json::to_string_pretty(&uplift_config::quest::json_schema())?);
    Ok(())
}

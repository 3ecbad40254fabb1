use utoipa::OpenApi;
use series_api::openapi::ApiDoc;

fn main() -> anyhow::Result<()> {
    let yaml = ApiDoc::openapi().to_yaml()?;
    println!("{}", yaml);
    Ok(())
}

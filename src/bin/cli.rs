use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    coursecat::cli::run().await
}

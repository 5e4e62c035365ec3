#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tech_match_backend::run().await
}

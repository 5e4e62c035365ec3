#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tech_match_client::run().await
}

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    giftbot::run().await
}

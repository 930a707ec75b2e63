#[actix_rt::main]
async fn main() -> anyhow::Result<()> {
    articles::run().await
}

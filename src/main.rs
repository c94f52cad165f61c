#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    spravka_bot::run().await
}

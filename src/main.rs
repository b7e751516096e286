#[actix_web::main]
async fn main() -> std::io::Result<()> {
    orcamento_server::run().await
}

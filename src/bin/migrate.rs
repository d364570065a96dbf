use sea_orm_migration::cli;
use starwars_api::migration::Migrator;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    cli::run_cli(Migrator).await;
}

#[tokio::main]
async fn main() {
    if let Err(e) = multisig_deploy::cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

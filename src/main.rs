use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = tapoctl::cli::Cli::parse();
    let exit_code = tapoctl::run(cli).await;
    std::process::exit(exit_code);
}

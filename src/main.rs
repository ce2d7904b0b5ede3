use privacy_transit::panels::shell::run_shell;

#[tokio::main]
async fn main() {
    env_logger::init();
    run_shell().await;
}

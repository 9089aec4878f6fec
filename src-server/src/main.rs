#[tokio::main]
async fn main() {
    if let Err(e) = beer_proxy_lib::start_server().await {
        eprintln!("beer-proxy: {e}");
        std::process::exit(1);
    }
}

use fox_bridge::prelude::*;

#[tokio::main]
async fn main() {
    let code = fox_bridge::run(Options::new()).await;
    std::process::exit(code);
}

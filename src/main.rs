use sentigrade::{RemoteClassifier, ServiceConfig};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sentigrade=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServiceConfig::from_env();
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        addr = %config.bind_addr,
        classifier = %config.classifier_url,
        "starting sentigrade"
    );

    let classifier = match RemoteClassifier::new(
        config.classifier_url.clone(),
        config.classifier_timeout,
    ) {
        Ok(c) => Arc::new(c),
        Err(e) => {
            eprintln!("Error: failed to construct classifier client: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = sentigrade::server::serve(config, classifier).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

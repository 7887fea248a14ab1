use std::io;
use tracing_appender::rolling;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub fn configure_logging() {
    // Stdout log configuration
    let stdout_log = fmt::layer().with_writer(io::stdout).with_filter(
        EnvFilter::new("info,web_request=info,slack_request=info,hyper=warn"),
    );

    // File log configuration; raw feed bodies only show up here
    let file_appender = rolling::daily("logs", "herald.log");
    let file_log = fmt::layer()
        .with_writer(file_appender)
        .with_filter(EnvFilter::new(
            "debug,web_request=debug,slack_request=debug,hyper=info,reqwest=info",
        ));

    tracing_subscriber::Registry::default()
        .with(stdout_log)
        .with(file_log)
        .init();
}

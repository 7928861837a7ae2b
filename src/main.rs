use std::process::ExitCode;

use supersearch_mcp_gateway::{cli, infra};

#[tokio::main]
async fn main() -> ExitCode {
    infra::logging::init();

    // Any argument means admin CLI; bare invocation serves.
    if std::env::args().len() > 1 {
        return cli::run().await;
    }

    match infra::boot::run_server().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "server exited with error");
            ExitCode::FAILURE
        }
    }
}

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match rl_cli::run().await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("relink: {err:#}");
            ExitCode::from(2)
        }
    }
}

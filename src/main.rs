use clap::Parser;

/// Clap exits with 2 on usage errors; the pipeline expects 1.
const EXIT_USAGE: i32 = 1;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = zigbee_light::cli::normalize_args(std::env::args_os());
    let cli = match zigbee_light::cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(if err.use_stderr() { EXIT_USAGE } else { 0 });
        }
    };
    let exit_code = zigbee_light::run(cli).await;
    std::process::exit(exit_code);
}

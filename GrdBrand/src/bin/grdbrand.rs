//! grdbrand command-line entry point

fn main() -> anyhow::Result<()> {
    grdbrand::cli::run_cli()
}

//! `compare-lsx` binary entry point

fn main() -> anyhow::Result<()> {
    lsxcompare::cli::run_cli()
}

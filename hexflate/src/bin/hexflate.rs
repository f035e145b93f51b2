fn main() -> anyhow::Result<()> {
    hexflate::cli::run_cli()
}

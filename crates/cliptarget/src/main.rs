use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cliptarget::cli::Cli::parse();
    cliptarget::init(cli.verbose);
    cliptarget::cli::run(cli)
}

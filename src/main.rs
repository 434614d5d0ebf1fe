use catalog_table::cli::Cli;
use catalog_table::{logging, print, ui};
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.load_config()?;
    logging::init_tracing(&config.logging)?;
    tracing::info!(
        url = %config.catalog.url,
        page_size = config.table.page_size,
        "Configuration loaded"
    );

    if cli.print {
        print::run_print(&config, &cli.print_options())
    } else {
        ui::runtime::run(config)
    }
}

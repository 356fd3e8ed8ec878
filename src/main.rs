use anyhow::Result;
use clap::Parser;
use dqscope::cli::{Cli, Commands};
use dqscope::commands::{dashboard, report};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Dashboard {
            input,
            config,
            delay_ms,
            levels,
        } => dashboard::run_dashboard(dashboard::DashboardOptions {
            input,
            config,
            delay_ms,
            levels,
        }),
        Commands::Report {
            format,
            output,
            source,
        } => report::write_report(report::ReportConfig {
            format,
            output,
            source,
        }),
        Commands::Init { force } => dqscope::commands::init_config(force),
    }
}

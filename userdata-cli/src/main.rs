use std::io;
use std::process::ExitCode;

use clap::Parser;
use userdata_cli::commands;
use userdata_cli::session::{Session, SessionEnd};
use userdata_cli::{Cli, CliError, Command, Outcome, logging};
use userdata_lib::form::Form;

fn run(cli: Cli) -> Result<bool, CliError> {
    let config = cli.form.config()?;
    let stdout = io::stdout();

    match cli.command {
        Command::Validate(args) => {
            let snapshot = commands::read_snapshot(&args.input, io::stdin())?;
            Ok(commands::validate(&snapshot, &config, stdout.lock())? == Outcome::Valid)
        }
        Command::Submit(args) => {
            let snapshot = commands::read_snapshot(&args.input, io::stdin())?;
            Ok(commands::submit(snapshot, config, stdout.lock())? == Outcome::Valid)
        }
        Command::Fill => {
            let mut session = Session::new(Form::new(config), io::stdin().lock(), stdout.lock());
            let end = session.run()?;
            Ok(end == SessionEnd::Accepted)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.log_file.clone(), cli.log_level) {
        eprintln!("Warning: {}", e);
    }

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

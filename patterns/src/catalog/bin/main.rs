use std::io;
use std::process::ExitCode;
use tracing::error;
use oop_patterns::catalog::controller::Console;
use oop_patterns::catalog::factory::create_library_manager;
use oop_patterns::core::domain::Configuration;
use oop_patterns::gateway::factory::create_publisher;
use oop_patterns::gateway::logs::setup_tracing;

fn main() -> ExitCode {
    let config = match Configuration::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };
    setup_tracing(&config);

    let events = create_publisher();
    let manager = create_library_manager(events.clone());

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), config.prompts);
    match console.run(&manager, events.as_ref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("library session terminated: {}", err);
            ExitCode::FAILURE
        }
    }
}

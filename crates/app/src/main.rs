mod agent_mode;
mod cli;
mod menu;
mod session;

use bevy::log::Level;

use simulation::game_actions::ActionSource;

use cli::Mode;
use session::Session;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let env_seed = std::env::var("GARAGE_SEED").ok();

    let options = match cli::parse_args(&args, env_seed.as_deref()) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("parking_garage: {message}\n\n{}", cli::USAGE);
            std::process::exit(2);
        }
    };
    if options.help {
        println!("{}", cli::USAGE);
        return;
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let result = match options.mode {
        Mode::Agent => {
            let session = Session::new(options.config, ActionSource::Agent, Level::INFO);
            agent_mode::run_agent_mode(session, stdin.lock(), stdout.lock())
        }
        Mode::Menu => {
            let session = Session::new(options.config, ActionSource::Player, Level::WARN);
            menu::run_menu(session, stdin.lock(), stdout.lock())
        }
    };

    if let Err(e) = result {
        eprintln!("parking_garage: I/O error: {e}");
        std::process::exit(1);
    }
}

//! Command-line flags and environment overrides for `GarageConfig`.

use simulation::config::GarageConfig;

pub const USAGE: &str = "\
usage: parking_garage [--agent] [--rows N] [--cols N] [--balance N] [--seed N] [--occupants N]

  --agent         read JSON commands on stdin, write JSON responses on stdout
  --rows N        grid rows (default 5)
  --cols N        grid columns (default 5)
  --balance N     starting account balance (default 50)
  --seed N        RNG seed; also read from GARAGE_SEED (default 42)
  --occupants N   stochastic occupants at opening (default 8)
  --help          print this message";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Menu,
    Agent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    pub mode: Mode,
    pub config: GarageConfig,
    pub help: bool,
}

/// Parse flags on top of defaults. `env_seed` is the raw `GARAGE_SEED`
/// value, if set; an explicit `--seed` wins over it.
pub fn parse_args(args: &[String], env_seed: Option<&str>) -> Result<CliOptions, String> {
    let mut config = GarageConfig::default();
    if let Some(raw) = env_seed {
        config.seed = parse_number("GARAGE_SEED", raw)?;
    }

    let mut mode = Mode::Menu;
    let mut help = false;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--agent" => mode = Mode::Agent,
            "--help" | "-h" => help = true,
            "--rows" => config.rows = parse_number("--rows", next_value(&mut iter, "--rows")?)?,
            "--cols" => config.cols = parse_number("--cols", next_value(&mut iter, "--cols")?)?,
            "--balance" => {
                config.starting_balance =
                    parse_number("--balance", next_value(&mut iter, "--balance")?)?
            }
            "--seed" => config.seed = parse_number("--seed", next_value(&mut iter, "--seed")?)?,
            "--occupants" => {
                config.initial_occupants =
                    parse_number("--occupants", next_value(&mut iter, "--occupants")?)?
            }
            other => return Err(format!("unknown argument '{other}'")),
        }
    }

    config.validate()?;
    Ok(CliOptions { mode, config, help })
}

fn next_value<'a>(
    iter: &mut impl Iterator<Item = &'a String>,
    flag: &str,
) -> Result<&'a str, String> {
    iter.next()
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} needs a value"))
}

fn parse_number<T: std::str::FromStr>(flag: &str, raw: &str) -> Result<T, String> {
    raw.trim()
        .parse()
        .map_err(|_| format!("{flag}: '{raw}' is not a valid number"))
}

use bevy::prelude::*;

/// Number of ships the demo scene spawns when `--ships` is not given.
pub const DEFAULT_SHIP_COUNT: usize = 5;

/// Command-line arguments parsed at startup.
#[derive(Resource, Debug)]
pub struct CliArgs {
    /// Overrides the default flash length in seconds.
    /// Usage: `cargo run -- --flash-length 0.6`
    pub flash_length: Option<f32>,

    /// Disables flashes for this run regardless of saved settings.
    /// Usage: `cargo run -- --no-flash`
    pub no_flash: bool,

    /// Ships in the demo scene.
    /// Usage: `cargo run -- --ships 8`
    pub ships: usize,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            flash_length: None,
            no_flash: false,
            ships: DEFAULT_SHIP_COUNT,
        }
    }
}

impl CliArgs {
    /// Parse the process arguments.
    pub fn parse() -> Self {
        Self::parse_from(std::env::args().skip(1))
    }

    /// Parse arguments, excluding the program name.
    /// Supports:
    /// - `--flash-length <secs>`: Override the default flash length
    /// - `--no-flash`: Disable flashes
    /// - `--ships <n>`: Number of demo ships
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let mut cli = CliArgs::default();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--flash-length" => {
                    match args.get(i + 1).map(|value| value.parse::<f32>()) {
                        Some(Ok(seconds)) if seconds.is_finite() && seconds >= 0.0 => {
                            cli.flash_length = Some(seconds);
                            info!("CLI: Flash length set to {}s", seconds);
                            i += 2;
                        }
                        Some(_) => {
                            warn!("CLI: --flash-length expects a non-negative number of seconds");
                            i += 2;
                        }
                        None => {
                            warn!("CLI: --flash-length requires a value");
                            i += 1;
                        }
                    }
                }
                "--no-flash" => {
                    cli.no_flash = true;
                    info!("CLI: Flashes disabled");
                    i += 1;
                }
                "--ships" => {
                    match args.get(i + 1).map(|value| value.parse::<usize>()) {
                        Some(Ok(count)) => {
                            cli.ships = count;
                            i += 2;
                        }
                        Some(Err(_)) => {
                            warn!("CLI: --ships expects a whole number");
                            i += 2;
                        }
                        None => {
                            warn!("CLI: --ships requires a value");
                            i += 1;
                        }
                    }
                }
                arg => {
                    if arg.starts_with('-') {
                        warn!("CLI: Unknown argument '{}'", arg);
                    }
                    i += 1;
                }
            }
        }

        cli
    }
}

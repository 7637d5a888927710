// This is my main entry point for the ledger ack helper
// The real work lives in the library; here I only wire the CLI to it
use clap::{ArgMatches, CommandFactory, FromArgMatches};
use factom_ack::cli::{collect_ordered, EXTID_ARGS, NAME_ARGS};
use factom_ack::{
    derive_chain_id, factoshi_str_to_factoid, hex_encode, AckPoller, Command, Config,
    FileStatusService, Opt, StatusKind, GLOBAL_CONFIG,
};
use log::{debug, error, info, LevelFilter};
use std::process;

fn main() {
    // I parse the command line with clap, but keep the raw matches around
    // because I need the flag positions to keep name components in order
    let matches = Opt::command().get_matches();
    let opt = match Opt::from_arg_matches(&matches) {
        Ok(opt) => opt,
        Err(e) => e.exit(),
    };

    // I load the config before logging starts since it decides the log level,
    // and hold on to any error until there is a logger to report it
    let config_path = opt.config.clone().unwrap_or_else(Config::default_file_path);
    let loaded = GLOBAL_CONFIG.load(&config_path);
    let level = GLOBAL_CONFIG.get_log_level().unwrap_or(LevelFilter::Info);

    // I initialize logging at the configured level; RUST_LOG still overrides it
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();

    match loaded.and_then(|from_file| GLOBAL_CONFIG.get_log_level().map(|_| from_file)) {
        Ok(true) => debug!("Loaded configuration from {}", config_path.display()),
        Ok(false) => debug!("No config file at {}, using defaults", config_path.display()),
        Err(e) => {
            error!("Error: {e}");
            process::exit(1);
        }
    }

    // I run the actual command; if something goes wrong I log it and exit with code 1
    let sub_matches = match matches.subcommand() {
        Some((_, sub)) => sub,
        None => &matches,
    };
    if let Err(e) = run_command(opt.command, sub_matches) {
        error!("Error: {e}");
        process::exit(1);
    }
}

// This is where I handle the different CLI commands
fn run_command(
    command: Command,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        // When I want to know the ID a chain with these name components will get
        Command::Chainid { .. } => {
            // I merge -n and -N back into the order they were typed in,
            // because the chain ID changes if the components are reordered
            let names = collect_ordered(matches, NAME_ARGS)?;
            debug!("Chain name components: {:?}", names.inputs());
            println!("{}", derive_chain_id(names.items()));
        }
        // When I want to check how my external IDs will look on the ledger
        Command::Extids { .. } => {
            let extids = collect_ordered(matches, EXTID_ARGS)?;
            debug!("External IDs: {:?}", extids.inputs());
            // I print each one as hex, in the same order as the flags
            for extid in extids.items() {
                println!("{}", hex_encode(extid));
            }
        }
        // When I want to block until the ledger acknowledges a submission
        Command::Ack {
            txid,
            kind,
            status_dir,
        } => {
            // A --status-dir flag wins over the config file and the environment
            if let Some(dir) = status_dir {
                GLOBAL_CONFIG.set_status_dir(dir);
            }
            let service = FileStatusService::new(GLOBAL_CONFIG.get_status_dir());
            let kind = StatusKind::from(kind);
            let poller = AckPoller::new(&service);
            info!(
                "Waiting up to {}s for {kind} ack of {txid} in {}",
                poller.policy().ceiling().as_secs(),
                service.dir().display()
            );
            // I print the status exactly as the ledger reported it
            let status = poller.wait_for_ack(&txid, kind)?;
            println!("{status}");
        }
        // When I want to turn a raw factoshi amount into factoids
        Command::Factoids { factoshis } => {
            let factoids = factoshi_str_to_factoid(&factoshis);
            if factoids.is_empty() {
                return Err(format!("Invalid amount: {factoshis}").into());
            }
            println!("{factoids}");
        }
    }
    Ok(())
}

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chaincode_peer::{logging, JsonFileStore, Peer, PeerConfig};
use chaincode_shim::types::{MAX_KEY_LEN, MAX_VALUE_LEN};
use chaincode_shim::{MemStore, StateStore, StubConfig};
use chaincode_start::SimpleChaincode;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "chaincode-peer",
    version,
    about = "Run the hello-world chaincode against a local ledger"
)]
struct Cli {
    /// JSON state file. Without it, state lives only for this run.
    #[arg(long)]
    state: Option<PathBuf>,

    #[arg(long, default_value_t = MAX_KEY_LEN)]
    max_key_len: usize,

    #[arg(long, default_value_t = MAX_VALUE_LEN)]
    max_value_len: usize,

    /// Emit logs as JSON lines.
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Call the chaincode's init entry point.
    Init(Call),
    /// Call the chaincode's invoke entry point and commit on success.
    Invoke(Call),
    /// Call the chaincode's query entry point.
    Query(Call),
}

/// Peer flags go before the subcommand. Everything after the function name
/// is passed to the chaincode verbatim, including values that start with `-`.
#[derive(Args)]
struct Call {
    function: String,
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

impl Cli {
    fn peer_config(&self) -> PeerConfig {
        PeerConfig {
            stub: StubConfig {
                max_key_len: self.max_key_len,
                max_value_len: self.max_value_len,
                ..StubConfig::default()
            },
            ..PeerConfig::default()
        }
    }

    fn open_store(&self) -> Result<Box<dyn StateStore>> {
        Ok(match &self.state {
            Some(path) => Box::new(
                JsonFileStore::open(path)
                    .with_context(|| format!("failed to open state file {}", path.display()))?,
            ),
            None => Box::new(MemStore::new()),
        })
    }
}

/// Run one transaction and return the chaincode's payload.
fn run(cli: &Cli) -> Result<Vec<u8>> {
    let mut peer = Peer::new(SimpleChaincode::new(), cli.open_store()?, cli.peer_config());
    let payload = match &cli.command {
        Command::Init(call) => peer.init(&call.function, &call.args),
        Command::Invoke(call) => peer.invoke(&call.function, &call.args),
        Command::Query(call) => peer.query(&call.function, &call.args),
    }
    .context("error running chaincode")?;
    Ok(payload)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.json_logs)
        .map_err(|e| anyhow!(e))
        .context("failed to install log subscriber")?;

    let payload = run(&cli)?;
    if !payload.is_empty() {
        println!("{}", String::from_utf8_lossy(&payload));
    }
    Ok(())
}

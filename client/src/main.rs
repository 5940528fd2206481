use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kitties_client::{
    config::DEFAULT_ENDPOINT, ClientConfig, KeyScheme, PalletIndices, PlannedCall, PlannedTx,
    Session, TransactionPlan, TxStatus, WaitFor,
};

#[derive(Parser, Debug)]
#[command(name = "kitties-client")]
#[command(about = "Submit kitties transactions signed by development accounts", long_about = None)]
struct Args {
    /// WebSocket RPC endpoint of the node
    #[arg(short, long, default_value = DEFAULT_ENDPOINT, env = "KITTIES_RPC_URL", global = true)]
    endpoint: String,

    /// Key scheme of the keyring (sr25519 or ed25519)
    #[arg(long, default_value = "sr25519", env = "KITTIES_KEY_SCHEME", global = true)]
    scheme: String,

    /// Additional secret URIs to load into the keyring (e.g. //Charlie)
    #[arg(long = "uri", global = true)]
    uris: Vec<String>,

    /// Index of the kitties pallet in the runtime
    #[arg(
        long,
        default_value_t = PalletIndices::default().kitties,
        env = "KITTIES_PALLET_INDEX",
        global = true
    )]
    kitties_index: u8,

    /// Index of the template pallet in the runtime
    #[arg(
        long,
        default_value_t = PalletIndices::default().template,
        env = "TEMPLATE_PALLET_INDEX",
        global = true
    )]
    template_index: u8,

    /// Runtime uses the CheckMetadataHash signed extension
    #[arg(long, global = true)]
    metadata_hash_check: bool,

    /// Tip added to every transaction
    #[arg(long, default_value_t = 0, global = true)]
    tip: u128,

    /// How long to follow each transaction
    #[arg(long, value_enum, default_value_t = WaitFor::Pool, global = true)]
    wait: WaitFor,

    /// RPC request timeout in seconds
    #[arg(long, default_value_t = 60, global = true)]
    timeout: u64,

    /// Stop at the first failing transaction
    #[arg(long, global = true)]
    fail_fast: bool,

    /// Sign transactions and print them without submitting
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the keyring accounts
    Accounts,
    /// Execute a transaction plan (the built-in Alice/Bob plan by default)
    Run {
        /// JSON plan file
        #[arg(long)]
        plan: Option<PathBuf>,
    },
    /// Create a kitty
    CreateKitty {
        #[arg(long, default_value = "alice")]
        signer: String,
        /// DNA as 0x-hex or text
        #[arg(long)]
        dna: String,
        #[arg(long)]
        price: u32,
    },
    /// Transfer a kitty to another account
    TransferKitty {
        #[arg(long, default_value = "alice")]
        signer: String,
        /// Keyring name or SS58 address of the recipient
        #[arg(long)]
        to: String,
        #[arg(long)]
        dna: String,
    },
    /// Change the price of a kitty
    SetPrice {
        #[arg(long, default_value = "alice")]
        signer: String,
        #[arg(long)]
        dna: String,
        #[arg(long)]
        price: u32,
    },
}

impl Args {
    fn client_config(&self) -> Result<ClientConfig> {
        let scheme: KeyScheme = self.scheme.parse()?;
        Ok(ClientConfig {
            endpoint: self.endpoint.clone(),
            request_timeout: Duration::from_secs(self.timeout),
            scheme,
            extra_uris: self.uris.clone(),
            pallets: PalletIndices { kitties: self.kitties_index, template: self.template_index },
            metadata_hash_check: self.metadata_hash_check,
            tip: self.tip,
            wait: self.wait,
            fail_fast: self.fail_fast,
            dry_run: self.dry_run,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,kitties_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = args.client_config()?;

    let plan = match &args.command {
        Command::Accounts => {
            let keyring = Session::build_keyring(&config)?;
            for (name, address) in keyring.list() {
                println!("{:<16} {}", name, address);
            }
            return Ok(());
        }
        Command::Run { plan: Some(path) } => TransactionPlan::load(path)
            .with_context(|| format!("Failed to load plan {}", path.display()))?,
        Command::Run { plan: None } => TransactionPlan::default_plan(),
        Command::CreateKitty { signer, dna, price } => {
            single(signer, PlannedCall::CreateKitty { dna: dna.clone(), price: *price })
        }
        Command::TransferKitty { signer, to, dna } => {
            single(signer, PlannedCall::TransferKitty { to: to.clone(), dna: dna.clone() })
        }
        Command::SetPrice { signer, dna, price } => {
            single(signer, PlannedCall::SetPrice { dna: dna.clone(), price: *price })
        }
    };

    if plan.is_empty() {
        bail!("Transaction plan is empty");
    }

    let session = Session::connect(config)
        .await
        .with_context(|| format!("Failed to connect to {}", args.endpoint))?;

    for pair in session.keyring().pairs() {
        tracing::info!("Using {} ({})", pair.name(), pair.address());
    }

    let outcomes = session.execute(&plan).await.context("Failed to execute plan")?;

    let mut failures = 0;
    for outcome in &outcomes {
        let nonce = outcome.nonce.map(|n| n.to_string()).unwrap_or_else(|| "-".into());
        let prefix = format!("#{} {} [{}]", outcome.index, outcome.call, outcome.signer);
        match &outcome.status {
            TxStatus::DryRun { hash, hex } => {
                println!("{} nonce {} {:?}\n  {}", prefix, nonce, hash, hex)
            }
            TxStatus::Submitted { hash } => {
                println!("{} nonce {} submitted {:?}", prefix, nonce, hash)
            }
            TxStatus::Included { hash, block } => {
                println!("{} nonce {} {:?} included in block {:?}", prefix, nonce, hash, block)
            }
            TxStatus::Failed { reason } => {
                failures += 1;
                println!("{} FAILED: {}", prefix, reason)
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} transactions failed", failures, plan.len());
    }
    Ok(())
}

fn single(signer: &str, call: PlannedCall) -> TransactionPlan {
    TransactionPlan {
        transactions: vec![PlannedTx { signer: signer.to_string(), call }],
    }
}

//! LBRY CLI - Command-line interface for the LBRY daemon

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use lbry_sdk::{
    ClaimCategory, ClientConfig, DaemonSettings, FileListOptions, GetOptions, LbryClient,
    LbryError, SettingsUpdate, DEFAULT_API_URL,
};
use serde_json::Value;
use tabled::{Table, Tabled};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "lbry")]
#[command(about = "LBRY daemon CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Daemon API URL
    #[arg(long, env = "LBRY_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Transport timeout in seconds (default: none)
    #[arg(long, env = "LBRY_API_TIMEOUT_SECS")]
    timeout: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show daemon status
    Status {
        /// Include session status
        #[arg(long)]
        session: bool,
    },

    /// Show wallet balance
    Balance {
        /// Only this address
        #[arg(short, long)]
        address: Option<String>,

        /// Include unconfirmed funds (with --address)
        #[arg(long)]
        unconfirmed: bool,
    },

    /// Resolve an LBRY URI
    Resolve {
        /// URI, e.g. lbry://what
        uri: String,
    },

    /// List my channels
    Channels,

    /// Create a channel
    ChannelNew {
        /// Channel name ('@' is added if missing)
        name: String,

        /// Amount of credits to claim the name with
        amount: String,
    },

    /// List claims for a name
    Claims {
        name: String,
    },

    /// List my claims
    MyClaims,

    /// Support a claim
    Support {
        name: String,
        claim_id: String,
        amount: String,
    },

    /// Abandon a claim
    Abandon {
        claim_id: String,
    },

    /// List managed files
    Files {
        /// Filter by claim name
        #[arg(long)]
        name: Option<String>,

        /// Populate size and status message
        #[arg(long)]
        full: bool,
    },

    /// Download a stream
    Get {
        uri: String,

        /// Download timeout in seconds (enforced by the daemon)
        #[arg(long)]
        timeout: Option<u64>,

        /// Directory to save into
        #[arg(long)]
        dir: Option<String>,
    },

    /// Send credits to an address
    Send {
        amount: String,
        address: String,
    },

    /// Generate a new wallet address
    NewAddress,

    /// List wallet transactions
    Transactions,

    /// Show daemon settings, or update them when any flag is given
    Settings {
        /// Where downloads are saved
        #[arg(long)]
        download_directory: Option<String>,

        /// Data rate in LBC per MB
        #[arg(long)]
        data_rate: Option<f64>,

        /// Maximum key fee in LBC
        #[arg(long)]
        max_key_fee: Option<f64>,

        /// Download timeout in seconds
        #[arg(long)]
        download_timeout: Option<u64>,
    },

    /// Call any daemon method
    Call {
        /// Method name, e.g. blob_list
        method: String,

        /// Params as a JSON object
        #[arg(default_value = "{}")]
        params: String,
    },
}

#[derive(Tabled)]
struct ChannelRow {
    name: String,
    claim_id: String,
    amount: String,
}

#[derive(Tabled)]
struct OwnedClaimRow {
    name: String,
    claim_id: String,
    category: String,
    amount: f64,
    height: i64,
    expired: bool,
}

#[derive(Tabled)]
struct NameClaimRow {
    claim_id: String,
    amount: f64,
    effective_amount: f64,
    height: i64,
    supports: usize,
}

#[derive(Tabled)]
struct FileRow {
    file_name: String,
    claim: String,
    status: String,
    sd_hash: String,
}

#[derive(Tabled)]
struct TransactionRow {
    txid: String,
    value: String,
    fee: String,
    confirmations: String,
}

#[derive(Tabled)]
struct SettingRow {
    setting: String,
    value: String,
}

fn init_logging() {
    let log_format = std::env::var("LBRY_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lbry=warn"));

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn parse_params(raw: &str) -> Result<Value> {
    let params: Value = serde_json::from_str(raw).context("Invalid JSON params")?;
    if !params.is_object() {
        anyhow::bail!("Params must be a JSON object");
    }
    Ok(params)
}

fn short(hash: &str, len: usize) -> String {
    if hash.chars().count() <= len {
        hash.to_string()
    } else {
        let head: String = hash.chars().take(len).collect();
        format!("{}…", head)
    }
}

fn category_label(category: ClaimCategory) -> String {
    match category {
        ClaimCategory::Claim => "claim",
        ClaimCategory::Update => "update",
        ClaimCategory::Support => "support",
        ClaimCategory::Other => "other",
    }
    .to_string()
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn setting_rows(settings: DaemonSettings) -> Vec<SettingRow> {
    let mut rows = vec![
        SettingRow {
            setting: "download_directory".into(),
            value: opt(settings.download_directory),
        },
        SettingRow {
            setting: "data_rate".into(),
            value: opt(settings.data_rate),
        },
        SettingRow {
            setting: "max_key_fee".into(),
            value: opt(settings.max_key_fee),
        },
        SettingRow {
            setting: "disable_max_key_fee".into(),
            value: opt(settings.disable_max_key_fee),
        },
        SettingRow {
            setting: "peer_port".into(),
            value: opt(settings.peer_port),
        },
        SettingRow {
            setting: "download_timeout".into(),
            value: opt(settings.download_timeout),
        },
        SettingRow {
            setting: "search_timeout".into(),
            value: opt(settings.search_timeout),
        },
        SettingRow {
            setting: "cache_time".into(),
            value: opt(settings.cache_time),
        },
    ];
    rows.extend(settings.extra.into_iter().map(|(setting, value)| SettingRow {
        setting,
        value: value.to_string(),
    }));

    rows
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// True if the error stopped the request before it reached the daemon
fn rejected_locally(err: &anyhow::Error) -> bool {
    err.downcast_ref::<LbryError>().is_some_and(LbryError::is_local)
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        if rejected_locally(&e) {
            eprintln!("{}", "Nothing was sent to the daemon".yellow());
        }
        return Err(e);
    }

    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = ClientConfig::new(&cli.api_url);
    if let Some(secs) = cli.timeout.filter(|s| *s > 0) {
        config = config.with_timeout(std::time::Duration::from_secs(secs));
    }
    let client = LbryClient::with_config(&config).context("Invalid daemon configuration")?;
    tracing::debug!(api_url = %client.endpoint(), "Using daemon");

    match cli.command {
        Commands::Status { session } => {
            println!("{}", "Daemon Status".cyan().bold());
            println!();

            match client.status(session).await {
                Ok(status) => {
                    println!("  {} {}", "API URL:".bold(), cli.api_url);
                    println!("  {} {}", "Status:".bold(), "ONLINE".green());
                    println!("  {} {}", "LBRY ID:".bold(), opt(status.lbry_id.as_deref()));
                    println!("  {} {}", "Running:".bold(), opt(status.is_running));
                    if let Some(blockchain) = status.blockchain_status {
                        println!("  {} {}", "Blockchain:".bold(), blockchain);
                    }
                    if let Some(session) = status.session_status {
                        println!("  {} {}", "Session:".bold(), session);
                    }
                }
                Err(e) => {
                    println!("  {} {}", "Status:".bold(), "ERROR".red());
                    println!("  {} {}", "Error:".bold(), e);
                }
            }
        }

        Commands::Balance {
            address,
            unconfirmed,
        } => {
            let include_unconfirmed = unconfirmed.then_some(true);
            let balance = client.wallet_balance(address, include_unconfirmed).await?;
            println!("{} {}", format!("{}", balance).green().bold(), "LBC");
        }

        Commands::Resolve { uri } => match client.resolve(&uri).await? {
            Some(resolved) => {
                if let Some(certificate) = &resolved.certificate {
                    println!(
                        "{} {} ({})",
                        "Channel:".bold(),
                        certificate.name,
                        certificate.claim_id
                    );
                }
                if let Some(claim) = &resolved.claim {
                    println!("{} {} ({})", "Claim:".bold(), claim.name, claim.claim_id);
                    println!("  {} {}", "Amount:".bold(), claim.amount);
                    println!("  {} {}", "Height:".bold(), claim.height);
                    println!("  {} {}", "Value:".bold(), claim.value);
                }
                if let Some(claims) = &resolved.claims_in_channel {
                    println!("{} {}", "Claims in channel:".bold(), claims.len());
                    for claim in claims {
                        println!("  - {} ({})", claim.name, claim.claim_id);
                    }
                }
            }
            None => println!("{}", format!("Nothing resolves at {}", uri).yellow()),
        },

        Commands::Channels => {
            let rows: Vec<ChannelRow> = client
                .channel_list_mine()
                .await?
                .into_iter()
                .map(|c| ChannelRow {
                    name: c.name,
                    claim_id: c.claim_id,
                    amount: opt(c.amount),
                })
                .collect();

            if rows.is_empty() {
                println!("{}", "No channels".yellow());
            } else {
                println!("{}", Table::new(rows));
            }
        }

        Commands::ChannelNew { name, amount } => {
            let claim_id = client.channel_new(name, amount).await?;
            println!("{}", "✓ Channel created".green().bold());
            println!("  {} {}", "Claim ID:".bold(), claim_id);
        }

        Commands::Claims { name } => {
            let claims = client.claim_list(&name).await?;
            let rows: Vec<NameClaimRow> = claims
                .claims
                .into_iter()
                .map(|c| NameClaimRow {
                    claim_id: c.claim_id,
                    amount: c.amount,
                    effective_amount: c.effective_amount,
                    height: c.height,
                    supports: c.supports.len(),
                })
                .collect();

            println!(
                "{} {}",
                format!("Claims for '{}'", name).cyan().bold(),
                format!("(last takeover at {})", claims.last_takeover_height).dimmed()
            );
            if rows.is_empty() {
                println!("{}", "No claims".yellow());
            } else {
                println!("{}", Table::new(rows));
            }
        }

        Commands::MyClaims => {
            let rows: Vec<OwnedClaimRow> = client
                .claim_list_mine()
                .await?
                .into_iter()
                .map(|c| OwnedClaimRow {
                    name: c.name,
                    claim_id: c.claim_id,
                    category: category_label(c.category),
                    amount: c.amount,
                    height: c.height,
                    expired: c.expired,
                })
                .collect();

            if rows.is_empty() {
                println!("{}", "No claims".yellow());
            } else {
                println!("{}", Table::new(rows));
            }
        }

        Commands::Support {
            name,
            claim_id,
            amount,
        } => {
            let support = client.claim_new_support(name, claim_id, amount).await?;
            println!("{}", "✓ Support added".green().bold());
            println!("  {} {}:{}", "Outpoint:".bold(), support.txid, support.nout);
            println!("  {} {}", "Fee:".bold(), support.fee);
        }

        Commands::Abandon { claim_id } => {
            let result = client.claim_abandon(&claim_id).await?;
            println!("{}", format!("✓ Claim {} abandoned", claim_id).green().bold());
            println!("  {} {}", "Txid:".bold(), result.txid);
            println!("  {} {}", "Fee:".bold(), result.fee);
        }

        Commands::Files { name, full } => {
            let mut options = name.map(FileListOptions::by_name).unwrap_or_default();
            if full {
                options = options.full_status(true);
            }
            let rows: Vec<FileRow> = client
                .file_list(options)
                .await?
                .into_iter()
                .map(|f| FileRow {
                    status: if f.completed {
                        "completed".to_string()
                    } else if f.stopped {
                        "stopped".to_string()
                    } else {
                        f.message.unwrap_or_else(|| "downloading".to_string())
                    },
                    file_name: f.file_name,
                    claim: opt(f.name),
                    sd_hash: short(&f.sd_hash, 12),
                })
                .collect();

            if rows.is_empty() {
                println!("{}", "No files".yellow());
            } else {
                println!("{}", Table::new(rows));
            }
        }

        Commands::Get { uri, timeout, dir } => {
            let options = GetOptions {
                timeout,
                download_directory: dir,
                ..Default::default()
            };
            let file = client.get(&uri, options).await?;
            println!("{}", format!("✓ Fetching {}", uri).green().bold());
            println!("  {} {}", "Path:".bold(), file.download_path);
            println!("  {} {}", "Completed:".bold(), file.completed);
        }

        Commands::Send { amount, address } => {
            if client.send_amount_to_address(amount, &address).await? {
                println!("{}", format!("✓ Payment to {} scheduled", address).green().bold());
            } else {
                println!("{}", "Payment was not scheduled".yellow());
            }
        }

        Commands::NewAddress => {
            println!("{}", client.wallet_new_address().await?);
        }

        Commands::Transactions => {
            let rows: Vec<TransactionRow> = client
                .transaction_list()
                .await?
                .into_iter()
                .map(|t| TransactionRow {
                    txid: short(&t.txid, 16),
                    value: opt(t.value),
                    fee: opt(t.fee),
                    confirmations: opt(t.confirmations),
                })
                .collect();

            if rows.is_empty() {
                println!("{}", "No transactions".yellow());
            } else {
                println!("{}", Table::new(rows));
            }
        }

        Commands::Settings {
            download_directory,
            data_rate,
            max_key_fee,
            download_timeout,
        } => {
            let update = SettingsUpdate {
                download_directory,
                data_rate,
                max_key_fee,
                download_timeout,
                ..Default::default()
            };

            let settings = if update.is_empty() {
                client.settings_get().await?
            } else {
                let settings = client.settings_set(update).await?;
                println!("{}", "✓ Settings updated".green().bold());
                settings
            };

            println!("{}", Table::new(setting_rows(settings)));
        }

        Commands::Call { method, params } => {
            let params = parse_params(&params)?;
            let result = client.call_raw(&method, params).await?;
            print_json(&result)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_params_requires_object() {
        assert!(parse_params(r#"{"needed": true}"#).is_ok());
        assert!(parse_params("[1, 2]").is_err());
        assert!(parse_params("not json").is_err());
    }

    #[test]
    fn test_short_hash() {
        assert_eq!(short("abcdef", 12), "abcdef");
        assert_eq!(short("abcdefghijklmnop", 4), "abcd…");
    }

    #[test]
    fn test_cli_parses_call() {
        let cli = Cli::try_parse_from(["lbry", "call", "blob_list"]).unwrap();
        match cli.command {
            Commands::Call { method, params } => {
                assert_eq!(method, "blob_list");
                assert_eq!(params, "{}");
            }
            _ => panic!("expected call"),
        }
    }

    #[test]
    fn test_settings_without_flags_is_a_read() {
        let cli = Cli::try_parse_from(["lbry", "settings"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Settings {
                download_directory: None,
                data_rate: None,
                max_key_fee: None,
                download_timeout: None,
            }
        ));
        assert!(SettingsUpdate::default().is_empty());

        let cli = Cli::try_parse_from(["lbry", "settings", "--download-timeout", "30"]).unwrap();
        match cli.command {
            Commands::Settings {
                download_timeout, ..
            } => {
                let update = SettingsUpdate {
                    download_timeout,
                    ..Default::default()
                };
                assert!(!update.is_empty());
            }
            _ => panic!("expected settings"),
        }
    }

    #[test]
    fn test_rejected_locally() {
        let local = anyhow::Error::from(LbryError::Validation("bad amount".into()));
        assert!(rejected_locally(&local));

        let wrapped = anyhow::Error::from(LbryError::InvalidUrl("ftp://x".into()))
            .context("Invalid daemon configuration");
        assert!(rejected_locally(&wrapped));

        let remote = anyhow::Error::from(LbryError::Rpc {
            code: -32500,
            message: "boom".into(),
        });
        assert!(!rejected_locally(&remote));
    }
}

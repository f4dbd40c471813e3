//! Shrike CLI
//!
//! Social profile OSINT triage: fetch, extract, score, report.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{warn, Level};
use tracing_subscriber::FmtSubscriber;

use shrike_core::{analyze, AnalysisResult, ScoringPolicy};
use shrike_net::{
    check_proxy_connection, probe_username_footprint, FetchError, InstagramSource, NetConfig,
    ProfileSource, PROBE_TIMEOUT_SECS,
};

/// Timeout for the profile fetch; more generous than the per-probe bound
const FETCH_TIMEOUT_SECS: u64 = 20;

#[derive(Parser)]
#[command(name = "shrike")]
#[command(author, version, about = "Shrike: social profile OSINT triage", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (0-3)
    #[arg(short, long, default_value = "1")]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a full triage scan on a username
    Scan {
        /// Target username
        #[arg(short, long)]
        username: String,

        /// SOCKS5 proxy address (e.g. socks5h://127.0.0.1:9050)
        #[arg(long)]
        proxy: Option<String>,

        /// Scam scoring policy
        #[arg(long, value_enum, default_value_t = PolicyArg::Shape)]
        policy: PolicyArg,

        /// Also probe the username footprint across known platforms
        #[arg(long)]
        footprint: bool,

        /// Directory report files are written to
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Skip writing report files (console output only)
        #[arg(long)]
        no_export: bool,
    },

    /// Probe the username footprint only, no profile fetch
    Footprint {
        /// Target username
        #[arg(short, long)]
        username: String,

        /// SOCKS5 proxy address
        #[arg(long)]
        proxy: Option<String>,
    },

    /// Check proxy connectivity
    Status {
        /// SOCKS5 proxy address
        #[arg(long, default_value = "socks5h://127.0.0.1:9050")]
        proxy: String,
    },
}

/// Scam scoring variants; see DESIGN.md for why these stay separate
#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// +1 when the profile has no picture
    Shape,
    /// Seed the score from the username pattern instead
    Username,
}

impl From<PolicyArg> for ScoringPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Shape => ScoringPolicy::ProfileShape,
            PolicyArg::Username => ScoringPolicy::UsernamePattern,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = match cli.verbose {
        0 => Level::ERROR,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    match cli.command {
        Commands::Scan {
            username,
            proxy,
            policy,
            footprint,
            out_dir,
            no_export,
        } => {
            run_scan(&username, proxy, policy.into(), footprint, &out_dir, no_export).await?;
        }
        Commands::Footprint { username, proxy } => {
            run_footprint(&username, proxy).await?;
        }
        Commands::Status { proxy } => {
            check_status(&proxy).await;
        }
    }

    Ok(())
}

async fn run_scan(
    username: &str,
    proxy: Option<String>,
    policy: ScoringPolicy,
    footprint: bool,
    out_dir: &Path,
    no_export: bool,
) -> Result<()> {
    println!("Shrike - social profile OSINT triage\n");

    let fetch_config = NetConfig {
        proxy_addr: proxy.clone(),
        timeout_secs: FETCH_TIMEOUT_SECS,
    };
    let source = InstagramSource::new(&fetch_config)?;

    let fetched = match source.fetch(username).await {
        Ok(fetched) => fetched,
        Err(FetchError::NotFound(name)) => {
            println!("[!] Profile not found: {name}");
            return Ok(());
        }
        // Any other fetch failure aborts the scan: no partial result, no files.
        Err(e) => return Err(e.into()),
    };

    if fetched.snapshot.is_private {
        println!("[!] Private account - triage limited, skipping analysis");
        return Ok(());
    }

    let footprint_hits = if footprint {
        println!("[*] Probing username footprint...");
        let probe_config = NetConfig {
            proxy_addr: proxy,
            timeout_secs: PROBE_TIMEOUT_SECS,
        };
        probe_username_footprint(username, &probe_config)
            .await?
            .hits
    } else {
        BTreeMap::new()
    };

    let result = analyze(fetched.snapshot, fetched.posts, footprint_hits, policy);

    print!("{}", shrike_report::console::render(&result));

    if !no_export {
        println!();
        export_all(&result, out_dir);
    }

    Ok(())
}

/// Write every report format. Best-effort: one format failing is logged and
/// the rest still run.
fn export_all(result: &AnalysisResult, out_dir: &Path) {
    let username = &result.snapshot.username;

    let csv_path = out_dir.join(shrike_report::posts_csv_name(username));
    match shrike_report::csv::emit(result, &csv_path) {
        Ok(()) => println!("[+] CSV saved: {}", csv_path.display()),
        Err(e) => warn!("CSV export failed: {}", e),
    }

    let xlsx_path = out_dir.join(shrike_report::posts_xlsx_name(username));
    match shrike_report::sheet::emit(result, &xlsx_path) {
        Ok(()) => println!("[+] Spreadsheet saved: {}", xlsx_path.display()),
        Err(e) => warn!("Spreadsheet export failed: {}", e),
    }

    let pdf_path = out_dir.join(shrike_report::report_pdf_name(username));
    match shrike_report::pdf::emit(result, &pdf_path) {
        Ok(()) => println!("[+] PDF saved: {}", pdf_path.display()),
        Err(e) => warn!("PDF export failed: {}", e),
    }

    let txt_path = out_dir.join(shrike_report::report_txt_name(username));
    match shrike_report::text::emit(result, &txt_path) {
        Ok(()) => println!("[+] TXT report saved: {}", txt_path.display()),
        Err(e) => warn!("TXT export failed: {}", e),
    }
}

async fn run_footprint(username: &str, proxy: Option<String>) -> Result<()> {
    let config = NetConfig {
        proxy_addr: proxy,
        timeout_secs: PROBE_TIMEOUT_SECS,
    };

    println!("[*] Probing footprint for: {username}\n");
    let report = probe_username_footprint(username, &config).await?;

    if report.hits.is_empty() {
        println!("No platforms answered for this username.");
    } else {
        for (platform, url) in &report.hits {
            println!("{:<10} {}", platform, url);
        }
    }

    Ok(())
}

async fn check_status(proxy: &str) {
    println!("Checking proxy connectivity...\n");

    let config = NetConfig::default().with_proxy(proxy);

    match check_proxy_connection(&config).await {
        Ok(()) => {
            println!("Proxy is reachable");
            println!("  Address: {proxy}");
        }
        Err(e) => {
            println!("Proxy check failed: {e}");
            println!("  Expected a SOCKS5 proxy at: {proxy}");
        }
    }
}

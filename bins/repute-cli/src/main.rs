//! repute-cli — Command-line front end for Repute.
//!
//! Synthesizes reputation profiles, scores raw signals, classifies
//! verification status, and runs fee-gated lookups and feedback
//! submissions against a simulated wallet and ledger.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use repute_core::{
    classify_verification, compute_trust_score, format_date, score_label, score_tier,
    synthesize_profile_with, FeedbackCategory, ScoreFactors, WalletReputationProfile,
};
use repute_gateway::payment::format_xlm;
use repute_gateway::{
    record_feedback, FeedbackSubmission, LookupOutcome, LookupService, SimulatedGateway,
};

mod config;

use config::Config;

/// Repute command-line interface.
#[derive(Parser)]
#[command(name = "repute-cli")]
#[command(version, about = "Deterministic wallet reputation profiles.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize the reputation profile of an address.
    Profile(ProfileArgs),
    /// Compute a trust score from raw signals.
    Score(ScoreArgs),
    /// Show the verification status of an address.
    Verify(VerifyArgs),
    /// Pay the lookup fee and view one or more profiles.
    Lookup(LookupArgs),
    /// Record feedback about an address.
    Feedback(FeedbackArgs),
}

#[derive(Args)]
struct ProfileArgs {
    /// Address to profile.
    address: String,

    /// Seed for comment selection, making the output fully reproducible.
    #[arg(long)]
    seed: Option<u64>,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ScoreArgs {
    /// Average review rating (1-5).
    #[arg(long)]
    average: f64,

    /// Number of reviews.
    #[arg(long, default_value = "0")]
    count: u32,

    /// Share of leases returned successfully (0-1).
    #[arg(long, default_value = "0.5")]
    success_rate: f64,

    /// Disputes per lease.
    #[arg(long, default_value = "0")]
    dispute_rate: f64,
}

#[derive(Args)]
struct VerifyArgs {
    /// Address to classify.
    address: String,
}

#[derive(Args)]
struct LookupArgs {
    /// Paying account.
    #[arg(long)]
    viewer: String,

    /// Addresses to look up, in order.
    #[arg(required = true)]
    targets: Vec<String>,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct FeedbackArgs {
    /// Submitting account.
    #[arg(long)]
    from: String,

    /// Account the feedback is about.
    #[arg(long)]
    to: String,

    /// general, leasing, return or communication.
    #[arg(long, default_value = "general")]
    category: String,

    /// Star rating (1-5).
    #[arg(long)]
    rating: u8,

    /// Feedback text (3-200 characters).
    #[arg(long)]
    comment: String,
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    if json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(config.log_json);

    let cli = Cli::parse();

    match cli.command {
        Commands::Profile(args) => profile(args),
        Commands::Score(args) => score(args),
        Commands::Verify(args) => verify(args),
        Commands::Lookup(args) => lookup(&config, args).await,
        Commands::Feedback(args) => feedback(&config, args).await,
    }
}

fn build_gateway(config: &Config) -> SimulatedGateway {
    let gateway = SimulatedGateway::new(config.network).with_latency(config.latency);
    for account in &config.funded_accounts {
        gateway.fund(account, config.starting_balance_stroops);
    }
    gateway
}

fn print_profile(profile: &WalletReputationProfile) {
    println!("Address:            {}", profile.address);
    println!(
        "Trust score:        {} ({}, {})",
        profile.trust_score,
        score_label(profile.trust_score),
        score_tier(profile.trust_score)
    );
    println!("Total leases:       {}", profile.total_leases);
    println!("Successful returns: {}", profile.successful_returns);
    println!("Failed returns:     {}", profile.failed_returns);
    println!("Disputes raised:    {}", profile.disputes_raised);
    println!("Verification:       {}", classify_verification(&profile.address));
    println!("Reviews:            {}", profile.reviews.len());
    for review in &profile.reviews {
        println!(
            "  [{}] {}/5 {:<13} {}{}",
            format_date(review.timestamp),
            review.rating,
            review.category,
            review.comment,
            if review.verified { "" } else { " (unverified)" }
        );
        println!("      from {}", review.from_address);
    }
}

fn profile(args: ProfileArgs) -> Result<()> {
    let now = chrono::Utc::now();
    let profile = match args.seed {
        Some(seed) => synthesize_profile_with(&args.address, now, &mut StdRng::seed_from_u64(seed)),
        None => synthesize_profile_with(&args.address, now, &mut rand::thread_rng()),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        print_profile(&profile);
    }
    Ok(())
}

fn score(args: ScoreArgs) -> Result<()> {
    let factors = ScoreFactors {
        review_average: args.average,
        review_count: args.count,
        success_rate: args.success_rate,
        dispute_rate: args.dispute_rate,
    };
    let score = compute_trust_score(&factors);
    println!("{score} ({})", score_label(score));
    Ok(())
}

fn verify(args: VerifyArgs) -> Result<()> {
    println!("{}", classify_verification(&args.address));
    Ok(())
}

async fn lookup(config: &Config, args: LookupArgs) -> Result<()> {
    let gateway = build_gateway(config);
    if config.auto_fund_viewer {
        gateway.fund(&args.viewer, config.starting_balance_stroops);
    }
    let service = LookupService::new(gateway);

    let mut outcomes: Vec<LookupOutcome> = Vec::with_capacity(args.targets.len());
    for target in &args.targets {
        let outcome = service
            .lookup(&args.viewer, target)
            .await
            .with_context(|| format!("Lookup of {target} failed"))?;
        if let Some(receipt) = &outcome.receipt {
            info!(
                address = %target,
                tx = receipt.short_hash(),
                "{} XLM paid for lookup",
                format_xlm(receipt.amount_stroops)
            );
        }
        outcomes.push(outcome);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
        return Ok(());
    }

    for outcome in &outcomes {
        match &outcome.receipt {
            Some(r) => println!(
                "Paid {} XLM (tx {}...)",
                format_xlm(r.amount_stroops),
                r.short_hash()
            ),
            None => println!("Already paid for this address"),
        }
        print_profile(&outcome.profile);
        println!();
    }

    if let Some(balance) = service.gateway().balance(&args.viewer) {
        println!("Viewer balance: {} XLM", format_xlm(balance));
    }
    println!("Recent searches: {}", service.recent_searches().join(", "));
    Ok(())
}

async fn feedback(config: &Config, args: FeedbackArgs) -> Result<()> {
    let category: FeedbackCategory = args.category.parse()?;
    let submission = FeedbackSubmission {
        address: args.to,
        category,
        rating: args.rating,
        comment: args.comment,
    };

    let gateway = build_gateway(config);
    let record = record_feedback(&gateway, &args.from, submission)
        .await
        .context("Failed to record feedback")?;

    println!("Feedback recorded.");
    println!("  To:       {}", record.submission.address);
    println!("  Rating:   {}/5", record.submission.rating);
    println!("  Category: {}", record.submission.category);
    println!("  Tx hash:  {}", record.tx_hash);
    Ok(())
}

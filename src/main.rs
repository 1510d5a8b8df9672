use azure_test_helpers::{resources, CloudEnvironment, Scope};
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::process::ExitCode;

/// Check Azure resources the same way the test helpers do.
#[derive(Parser, Debug)]
#[command(name = "azure-test-helpers", version, about)]
struct Cli {
    /// Subscription id, defaults to $ARM_SUBSCRIPTION_ID
    #[arg(short, long, global = true, default_value = "")]
    subscription: String,

    /// Resource group, defaults to $AZURE_RES_GROUP_NAME
    #[arg(short, long, global = true, default_value = "")]
    resource_group: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the resolved subscription, resource group and cloud
    Context,
    /// Compare an AKS cluster's Kubernetes version with the expected one
    ClusterVersion {
        #[arg(long)]
        name: String,
        #[arg(long)]
        expect: String,
    },
    /// Show existence, kind, SKU tier and DNS name of a storage account
    StorageAccount {
        #[arg(long)]
        name: String,
        /// Fail unless the account kind matches
        #[arg(long)]
        kind: Option<String>,
        /// Fail unless the SKU tier matches
        #[arg(long)]
        sku_tier: Option<String>,
    },
    /// Show existence and public access of a blob container
    Container {
        #[arg(long)]
        account: String,
        #[arg(long)]
        name: String,
        /// Fail unless public access matches
        #[arg(long)]
        public: Option<bool>,
    },
    /// Show existence and frontend configs of a load balancer
    LoadBalancer {
        #[arg(long)]
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    init_logging()?;
    log::info!("#Start main()");

    let cli = Cli::parse();
    let passed = run(&cli).await?;

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_logging() -> Result<(), Box<dyn Error>> {
    if log4rs::init_file("log4rs.yml", Default::default()).is_ok() {
        return Ok(());
    }
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l:5})} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}

async fn run(cli: &Cli) -> Result<bool, Box<dyn Error>> {
    let rg = cli.resource_group.as_str();
    let sub = cli.subscription.as_str();

    let passed = match &cli.command {
        Command::Context => {
            let scope = Scope::resolve(rg, sub)?;
            println!("subscription:   {}", scope.subscription_id);
            println!("resource group: {}", scope.resource_group);
            println!("cloud:          {}", CloudEnvironment::from_env()?);
            true
        }
        Command::ClusterVersion { name, expect } => {
            let matched = resources::managed_cluster_version_match(expect, rg, name, sub).await?;
            report(matched, &format!("cluster {name} version {expect}"))
        }
        Command::StorageAccount {
            name,
            kind,
            sku_tier,
        } => {
            if !resources::storage_account_exists(name, rg, sub).await? {
                return Ok(report(false, &format!("storage account {name} does not exist")));
            }
            let actual_kind = resources::get_storage_account_kind(name, rg, sub).await?;
            let actual_tier = resources::get_storage_account_sku_tier(name, rg, sub).await?;
            let dns = resources::get_storage_dns_string(name, rg, sub).await?;
            println!("dns:  {dns}");

            let kind_ok = expect_eq("kind", kind.as_deref(), &actual_kind);
            let tier_ok = expect_eq("sku tier", sku_tier.as_deref(), &actual_tier);
            report(kind_ok && tier_ok, &format!("storage account {name}"))
        }
        Command::Container {
            account,
            name,
            public,
        } => {
            if !resources::storage_blob_container_exists(name, account, rg, sub).await? {
                return Ok(report(false, &format!("container {account}/{name} does not exist")));
            }
            let is_public =
                resources::get_storage_blob_container_public_access(name, account, rg, sub)
                    .await?;
            let ok = public.map_or(true, |want| want == is_public);
            report(ok, &format!("container {account}/{name} public={is_public}"))
        }
        Command::LoadBalancer { name } => {
            if !resources::load_balancer_exists(name, rg, sub).await? {
                return Ok(report(false, &format!("load balancer {name} does not exist")));
            }
            let frontends =
                resources::get_load_balancer_frontend_config_names(name, rg, sub).await?;
            report(
                true,
                &format!("load balancer {name} frontends=[{}]", frontends.join(", ")),
            )
        }
    };
    Ok(passed)
}

fn expect_eq(label: &str, expected: Option<&str>, actual: &str) -> bool {
    println!("{label}: {actual}");
    match expected {
        Some(want) if want != actual => {
            println!("  {} {label} expected {want}", "mismatch".red());
            false
        }
        _ => true,
    }
}

fn report(passed: bool, message: &str) -> bool {
    if passed {
        println!("{} {message}", "PASS".on_green());
    } else {
        println!("{} {message}", "FAIL".on_red());
    }
    passed
}

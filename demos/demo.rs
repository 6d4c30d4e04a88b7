//! Command-line demo.
//!
//! ```text
//! PROXYCHECK_API_KEY=... cargo run --example demo -- ip 185.220.101.1 vpn,asn,risk_history
//! printf '1.1.1.1\n8.8.8.8\n' | cargo run --example demo -- batch vpn
//! cargo run --example demo -- email someone@mailinator.com
//! ```

use proxycheck_client::{
    CheckResult, Client, QueryOptions, ResponseModel, Target, policy_label, split_batch_input,
};
use std::io::Read;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let mode = args.next().unwrap_or_else(|| "ip".to_string());
    let target_arg = args.next();
    let flags = args.next().unwrap_or_default();

    let client = Client::new(std::env::var("PROXYCHECK_API_KEY").unwrap_or_default())?;
    let options = QueryOptions::build(flags.split(','), std::env::var("PROXYCHECK_TAG").ok().as_deref());

    let target = match mode.as_str() {
        "batch" => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Target::Ips(split_batch_input(&input))
        }
        "email" => Target::Email(target_arg.unwrap_or_default()),
        _ => Target::Ip(target_arg.unwrap_or_else(|| "1.1.1.1".to_string())),
    };

    match client.check(target, &options).await? {
        CheckResult::SingleIp(model) => print_ip(&model),
        CheckResult::BatchIp(batch) => {
            for model in &batch {
                println!("== {}", model.ip());
                print_ip(model);
            }
        }
        CheckResult::Email(model) => {
            println!("Email: {}", model.email());
            println!(
                "Status: {}",
                if model.is_disposable() { "disposable" } else { "not disposable" }
            );
        }
    }

    Ok(())
}

fn print_ip(model: &ResponseModel) {
    if !model.has_data() {
        println!("No data returned");
        return;
    }
    println!(
        "Proxy/VPN: {}",
        if model.is_proxy() { "detected" } else { "not detected" }
    );
    if let Some(kind) = model.proxy_type() {
        println!("Type: {kind}");
    }
    if let Some(operator) = model.operator() {
        println!("Operator: {}", operator.name.as_deref().unwrap_or("unknown"));
        for (policy, on) in &operator.policies {
            println!("  {}: {}", policy_label(policy), if *on { "yes" } else { "no" });
        }
    }
    if let (Some(score), Some(level)) = (model.risk_score(), model.risk_level()) {
        println!("Risk: {score} ({level:?})");
    }
    if let Some(history) = model.attack_history() {
        for (kind, count) in history.iter() {
            println!("  {kind}: {count}");
        }
    }
    if let Some(country) = model.country() {
        println!(
            "Country: {} ({}){}",
            country.name.as_deref().unwrap_or("-"),
            country.code.as_deref().unwrap_or("-"),
            if country.is_eu { " EU" } else { "" }
        );
    }
    if let Some(coordinates) = model.coordinates() {
        println!("Map: {}", coordinates.map_url());
    }
    if let Some(currency) = model.currency() {
        println!("Currency: {currency}");
    }
}

use clap::{Parser, Subcommand};
use serde_json::{json, Map, Value};

#[derive(Parser)]
#[command(name = "ai-cli")]
#[command(about = "Command-line client for the AI inference service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Liveness probe
    Health,
    /// Service status and active backend
    Status,
    /// List the models behind each endpoint
    Models,
    /// Score biomarker readings
    Risk {
        /// Biomarker reading as name=value (repeatable)
        #[arg(short, long = "marker", value_parser = parse_reading)]
        markers: Vec<(String, f64)>,
    },
    /// Rank genes by expression difference between two samples
    Expression {
        /// Sample A reading as gene=value (repeatable)
        #[arg(long = "a", value_parser = parse_reading)]
        sample_a: Vec<(String, f64)>,
        /// Sample B reading as gene=value (repeatable)
        #[arg(long = "b", value_parser = parse_reading)]
        sample_b: Vec<(String, f64)>,
    },
    /// Run the mission simulation
    Mission {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        days: u64,
        /// Environment entry as key=json (repeatable)
        #[arg(short, long = "env", value_parser = parse_env)]
        environment: Vec<(String, Value)>,
    },
}

fn split_pair(s: &str) -> Result<(&str, &str), String> {
    match s.split_once('=') {
        Some((k, v)) if !k.is_empty() => Ok((k, v)),
        _ => Err(format!("expected key=value, got '{s}'")),
    }
}

fn parse_reading(s: &str) -> Result<(String, f64), String> {
    let (key, value) = split_pair(s)?;
    let value: f64 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    Ok((key.to_string(), value))
}

fn parse_env(s: &str) -> Result<(String, Value), String> {
    let (key, value) = split_pair(s)?;
    // Bare words are taken as strings.
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

fn readings(pairs: Vec<(String, f64)>) -> Value {
    Value::Object(pairs.into_iter().map(|(k, v)| (k, json!(v))).collect())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let request = match cli.command {
        Commands::Health => client.get(format!("{base}/healthz")),
        Commands::Status => client.get(format!("{base}/api/v1/ai/status")),
        Commands::Models => client.get(format!("{base}/api/v1/ai/models")),
        Commands::Risk { markers } => client
            .post(format!("{base}/api/v1/ai/predict/health-risk"))
            .json(&json!({ "biomarkers": readings(markers) })),
        Commands::Expression { sample_a, sample_b } => client
            .post(format!("{base}/api/v1/ai/analyze/gene-expression"))
            .json(&json!({ "sample_a": readings(sample_a), "sample_b": readings(sample_b) })),
        Commands::Mission {
            name,
            days,
            environment,
        } => {
            let environment: Map<String, Value> = environment.into_iter().collect();
            client
                .post(format!("{base}/api/v1/ai/simulate/mission"))
                .json(&json!({ "mission": name, "duration_days": days, "environment": environment }))
        }
    };

    print_response(request.send().await?).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;
    let rendered = match serde_json::from_str::<Value>(&text) {
        Ok(json) => serde_json::to_string_pretty(&json)?,
        Err(_) => text,
    };

    if !status.is_success() {
        eprintln!("Error: service returned status {status}");
        eprintln!("{rendered}");
        std::process::exit(1);
    }

    println!("{rendered}");
    Ok(())
}

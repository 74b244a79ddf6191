use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

mod datasets;
mod ollama;
mod report;
mod tokens;

use crate::ollama::{ChatReply, OllamaClient};
use crate::tokens::{Resolution, TokenCountService};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DelimArg {
    Comma,
    Tab,
    Pipe,
}

impl DelimArg {
    fn as_char(self) -> char {
        match self {
            DelimArg::Comma => ',',
            DelimArg::Tab => '\t',
            DelimArg::Pipe => '|',
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "toonpack-cli",
    about = "JSON to TOON conversion, size comparisons, and LLM benchmarks",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode JSON from a file or stdin to TOON
    Encode {
        /// Delimiter for array headers, table rows, and inline lists
        #[arg(long, value_enum, default_value_t = DelimArg::Comma)]
        delimiter: DelimArg,

        /// Spaces per indentation level
        #[arg(long, default_value_t = 2)]
        indent: usize,

        /// Marker printed before every array length, e.g. "#" for [#3]
        #[arg(long, default_value = "")]
        length_marker: String,

        /// Nesting depth accepted before encoding fails
        #[arg(long, default_value_t = 128)]
        max_depth: usize,

        /// Input file (defaults to stdin)
        input: Option<PathBuf>,
    },
    /// Compare JSON and TOON renderings of bundled datasets
    Compare {
        /// Tokenizer model the token counts are attributed to
        #[arg(long, default_value = "gpt-4o")]
        model: String,

        /// Compare this JSON file instead of the bundled datasets
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Send the same data as JSON and as TOON to a local Ollama server
    LlmBench {
        /// Base URL of the Ollama HTTP API
        #[arg(long, default_value = "http://localhost:11434")]
        host: String,

        /// Model to use (defaults to the first preferred model installed)
        #[arg(long)]
        model: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Encode {
            delimiter,
            indent,
            length_marker,
            max_depth,
            input,
        } => run_encode(delimiter, indent, length_marker, max_depth, input),
        Commands::Compare { model, file } => run_compare(&model, file.as_deref()),
        Commands::LlmBench { host, model } => run_llm_bench(&host, model.as_deref()),
    }
}

fn run_encode(
    delimiter: DelimArg,
    indent: usize,
    length_marker: String,
    max_depth: usize,
    input: Option<PathBuf>,
) -> Result<()> {
    let mut buf = String::new();
    match &input {
        Some(path) => {
            let mut f = File::open(path)?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    let value: serde_json::Value = serde_json::from_str(&buf)?;
    let options = toonpack::EncodeOptions {
        indent,
        delimiter: delimiter.as_char(),
        length_marker,
        max_depth,
    };
    let out = toonpack::encode(&value, &options)?;
    println!("{}", out);

    Ok(())
}

fn run_compare(model: &str, file: Option<&std::path::Path>) -> Result<()> {
    let service = TokenCountService::new();

    println!("JSON vs TOON comparison");
    match service.resolution(model) {
        Resolution::Exact => println!("Token counts come from the registered {model} counter"),
        Resolution::Estimate => println!(
            "No token counter registered for {model}; counts are estimated at four characters per token"
        ),
    }

    let corpora: Vec<(String, serde_json::Value)> = match file {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            vec![(path.display().to_string(), serde_json::from_str(&text)?)]
        }
        None => vec![
            ("Small user dataset (5 users)".to_string(), datasets::small_users()),
            (
                "Medium product dataset (10 products)".to_string(),
                datasets::product_catalog(),
            ),
            ("Large order dataset (20 orders)".to_string(), datasets::order_log(20)),
        ],
    };

    let mut summary = Vec::new();
    for (name, data) in &corpora {
        println!();
        println!("{}", "=".repeat(80));
        println!("Dataset: {name}");
        println!("{}", "=".repeat(80));

        let results = report::measure_formats(data, &service, model)?;
        report::print_table(&results);

        let baseline = results.iter().find(|stats| stats.name == "JSON (Pretty)");
        let best = report::best_toon(&results);
        if let (Some(json), Some(toon)) = (baseline, best) {
            let reduction = report::reduction_percent(json.tokens, toon.tokens);
            println!();
            println!("Best TOON format: {}", toon.name);
            println!(
                "Token reduction: {reduction:.1}% ({} -> {} tokens)",
                json.tokens, toon.tokens
            );

            println!();
            println!("--- JSON (Pretty) ---");
            println!("{}", report::excerpt(&json.text, report::SAMPLE_LIMIT));
            println!();
            println!("--- {} ---", toon.name);
            println!("{}", report::excerpt(&toon.text, report::SAMPLE_LIMIT));

            summary.push((name.as_str(), toon.name));
        }
    }

    println!();
    println!("{}", "=".repeat(80));
    println!("Summary");
    println!("{}", "=".repeat(80));
    for (dataset, best) in &summary {
        println!("{dataset}: best format {best}");
    }

    Ok(())
}

fn run_llm_bench(host: &str, model_override: Option<&str>) -> Result<()> {
    println!("LLM format benchmark: JSON vs TOON via Ollama");

    let client = OllamaClient::new(host);
    let Some(available) = client.list_models() else {
        println!();
        println!("Ollama is not reachable at {host}.");
        println!("To get started:");
        println!("  1. Install Ollama from https://ollama.com");
        println!("  2. Pull a model: ollama pull llama3.1");
        println!("  3. Start the server: ollama serve");
        return Ok(());
    };

    println!("Ollama is running, available models: {}", available.join(", "));

    let model = match model_override {
        Some(model) => model.to_string(),
        None => match ollama::find_preferred_model(&available) {
            Some(found) => found.to_string(),
            None => match available.first() {
                Some(first) => {
                    println!("No preferred model installed, falling back to {first}");
                    first.clone()
                }
                None => {
                    println!("No models installed. Pull one first: ollama pull llama3.1");
                    return Ok(());
                }
            },
        },
    };

    println!("Using model {model}");
    if !client.warmup(&model) {
        println!("Model {model} did not answer the warmup prompt, stopping");
        return Ok(());
    }

    let data = datasets::bench_products();
    let json_text = serde_json::to_string_pretty(&data)?;
    let toon_options = toonpack::EncodeOptions {
        delimiter: '\t',
        ..Default::default()
    };
    let toon_text = toonpack::encode(&data, &toon_options)?;

    let json_prompt = format!(
        "{}\n\nProduct data in JSON format:\n```json\n{}\n```",
        datasets::ANALYSIS_PROMPT,
        json_text
    );
    let toon_prompt = format!(
        "{}\n\nProduct data in TOON format:\n```toon\n{}\n```",
        datasets::ANALYSIS_PROMPT,
        toon_text
    );

    let json_run = send_format(&client, &model, "JSON", &json_text, &json_prompt);
    let toon_run = send_format(&client, &model, "TOON", &toon_text, &toon_prompt);

    let (Some(json_run), Some(toon_run)) = (json_run, toon_run) else {
        println!();
        println!("Benchmark incomplete, at least one request failed");
        return Ok(());
    };

    println!();
    println!("{}", "=".repeat(80));
    println!("Comparison");
    println!("{}", "=".repeat(80));

    let char_reduction =
        report::reduction_percent(json_text.chars().count(), toon_text.chars().count());
    let byte_reduction = report::reduction_percent(json_text.len(), toon_text.len());
    println!();
    println!("Input size, data only:");
    println!("  JSON: {} chars, {} bytes", json_text.chars().count(), json_text.len());
    println!("  TOON: {} chars, {} bytes", toon_text.chars().count(), toon_text.len());
    println!("  Reduction: {char_reduction:.1}% chars, {byte_reduction:.1}% bytes");

    let prompt_reduction =
        report::reduction_percent(json_prompt.chars().count(), toon_prompt.chars().count());
    println!();
    println!("Full prompt size:");
    println!("  JSON prompt: {} chars", json_prompt.chars().count());
    println!("  TOON prompt: {} chars", toon_prompt.chars().count());
    println!("  Reduction: {prompt_reduction:.1}%");

    println!();
    println!("Response time:");
    println!("  JSON: {} ms", json_run.elapsed.as_millis());
    println!("  TOON: {} ms", toon_run.elapsed.as_millis());
    if toon_run.elapsed < json_run.elapsed {
        println!("  TOON came back faster");
    } else {
        println!("  JSON came back faster, timings vary between runs");
    }

    Ok(())
}

/// Prints one format's data and prompt metrics, sends the prompt, and prints
/// the reply metrics. `None` means the request failed and was already logged.
fn send_format(
    client: &OllamaClient,
    model: &str,
    label: &str,
    data_text: &str,
    prompt: &str,
) -> Option<ChatReply> {
    println!();
    println!("{}", "-".repeat(80));
    println!("{label} format");
    println!("{}", "-".repeat(80));
    println!("{data_text}");
    println!();
    println!(
        "Data size: {} chars, {} bytes",
        data_text.chars().count(),
        data_text.len()
    );
    println!("Estimated prompt tokens: {}", tokens::estimate_tokens(prompt));

    let reply = client.chat(model, Some(datasets::SYSTEM_PROMPT), prompt)?;
    println!("Response time: {} ms", reply.elapsed.as_millis());
    println!("Response length: {} chars", reply.text.chars().count());
    match reply.eval_tokens {
        Some(count) => println!("Tokens generated: {count}"),
        None => println!("Tokens generated: not reported"),
    }
    println!();
    println!("{}", report::excerpt(&reply.text, report::EXCERPT_LIMIT));

    Some(reply)
}

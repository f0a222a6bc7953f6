//! Enhancer CLI - interactive terminal form
//!
//! Settings come from the command line, Role/Context/Task are read one
//! round at a time and the enhanced prompt is printed in all three views.

use clap::{Parser, ValueEnum};
use prompt_enhancer::{Enhancement, Enhancer, EnhancerConfig, Model, OutputFormat, PromptFields};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const RULE: &str = "─────────────────────────────────────────────────────────────";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliModel {
    #[value(name = "gpt-4o-mini")]
    Gpt4oMini,
    #[value(name = "gpt-4o")]
    Gpt4o,
}

impl From<CliModel> for Model {
    fn from(m: CliModel) -> Self {
        match m {
            CliModel::Gpt4oMini => Model::Gpt4oMini,
            CliModel::Gpt4o => Model::Gpt4o,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliFormat {
    Plain,
    Xml,
    Json,
}

impl From<CliFormat> for OutputFormat {
    fn from(f: CliFormat) -> Self {
        match f {
            CliFormat::Plain => OutputFormat::Plain,
            CliFormat::Xml => OutputFormat::Xml,
            CliFormat::Json => OutputFormat::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "enhancer_cli")]
#[command(about = "Turn Role, Context and Task into a more elaborate, professional prompt")]
struct Args {
    /// Model to use
    #[arg(short, long, value_enum, default_value = "gpt-4o-mini")]
    model: CliModel,

    /// Creativity (temperature), 0.0 to 1.2
    #[arg(short, long, default_value = "0.5")]
    temperature: f32,

    /// Max characters for the improved prompt, 400 to 10000
    #[arg(short = 'n', long, default_value = "2000")]
    max_chars: usize,

    /// Backend API URL (for OpenAI-compatible endpoints)
    #[arg(short = 'u', long)]
    backend_url: Option<String>,

    /// OpenAI API key (falls back to OPENAI_API_KEY)
    #[arg(short = 'k', long)]
    backend_key: Option<String>,

    /// Print only one view instead of all three
    #[arg(short, long, value_enum)]
    format: Option<CliFormat>,
}

/// Read one round of inputs; `None` once the user quits
fn read_fields(rl: &mut DefaultEditor) -> Result<Option<PromptFields>, ReadlineError> {
    let mut values = Vec::with_capacity(3);
    for label in ["Role", "Context", "Task"] {
        match rl.readline(&format!("{label}: ")) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                values.push(line);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(None),
            Err(e) => return Err(e),
        }
    }
    let task = values.pop().unwrap_or_default();
    let context = values.pop().unwrap_or_default();
    let role = values.pop().unwrap_or_default();
    Ok(Some(PromptFields::new(role, context, task)))
}

/// Render the enhancement for the terminal
fn format_enhancement(enhancement: &Enhancement, only: Option<OutputFormat>) -> String {
    let mut out = String::new();

    match only {
        Some(format) => {
            out.push_str(enhancement.outputs.get(format));
            out.push('\n');
        }
        None => {
            out.push_str("✨ Enhanced prompt generated!\n");
            for format in OutputFormat::ALL {
                out.push('\n');
                out.push_str(&format!("── {} ", format.label()));
                out.push_str(RULE);
                out.push('\n');
                out.push_str(enhancement.outputs.get(format));
                out.push('\n');
            }
            out.push_str(RULE);
            out.push('\n');
            out.push_str(&format!(
                "({}, {} tokens, {:?})\n",
                enhancement.model, enhancement.usage.total_tokens, enhancement.execution_time
            ));
        }
    }

    out
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    // Resolve API key from args or environment; it is never written anywhere
    let api_key = args
        .backend_key
        .clone()
        .or_else(|| std::env::var("OPENAI_API_KEY").ok());

    let mut config = EnhancerConfig::new(args.model.into())
        .with_temperature(args.temperature)
        .with_max_output_chars(args.max_chars);
    if let Some(key) = api_key {
        config = config.with_api_key(key);
    }
    if let Some(url) = &args.backend_url {
        config = config.with_base_url(url);
    }

    let enhancer = match Enhancer::new(config) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Pass --backend-key or set OPENAI_API_KEY, and check the settings.");
            std::process::exit(1);
        }
    };
    tracing::debug!(config = ?enhancer.config(), "enhancer ready");

    let runtime = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to start runtime: {}", e);
            std::process::exit(1);
        }
    };

    let mut rl = match DefaultEditor::new() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Failed to initialize readline: {}", e);
            std::process::exit(1);
        }
    };

    println!("✨ Prompt Enhancer");
    println!("Turn Role • Context • Task into a more elaborate, professional prompt");
    println!();
    println!("Model:       {}", enhancer.config().model);
    println!("Temperature: {}", enhancer.config().temperature);
    println!("Max chars:   {}", enhancer.config().max_output_chars);
    println!();
    println!("This only generates an improved prompt. It does not execute the prompt.");
    println!("Leave a field blank to skip it. Use Ctrl+C or Ctrl+D to exit.");
    println!();

    loop {
        let fields = match read_fields(&mut rl) {
            Ok(Some(fields)) => fields,
            Ok(None) => {
                println!("\nGoodbye!");
                break;
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                break;
            }
        };

        println!("Calling OpenAI to enhance your prompt...");
        match runtime.block_on(enhancer.enhance(&fields)) {
            Ok(enhancement) => {
                println!();
                print!("{}", format_enhancement(&enhancement, args.format.map(Into::into)));
            }
            Err(e) => eprintln!("\nError: {}", e),
        }
        println!();
    }
}

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use rayon::prelude::*;

use prose_guard::annotator::{Annotator, HttpAnnotator, is_http_url};
use prose_guard::checker::RuleChecker;
use prose_guard::cli::{CheckArgs, Cli, ColorChoice, Commands, ConfigAction};
use prose_guard::config::{Config, ConfigLoader, FileConfigLoader};
use prose_guard::oracle::GeminiOracle;
use prose_guard::output::{
    CheckProgress, ColorMode, DocumentReport, JsonFormatter, MarkdownFormatter, OutputFormat,
    OutputFormatter, TextFormatter,
};
use prose_guard::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS_FOUND};

/// Display name used for documents read from standard input.
const STDIN_SOURCE: &str = "<stdin>";

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args),
    };

    std::process::exit(exit_code);
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> prose_guard::Result<i32> {
    // 1. Load configuration
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, args);

    // 3. Read input documents (stdin when no paths are given)
    let documents = read_documents(&args.paths)?;

    // 4. Connect to the annotation service; an unreachable service is fatal
    let annotator: Arc<dyn Annotator> = Arc::new(HttpAnnotator::connect(
        &config.annotator.endpoint,
        config.annotator.timeout_secs,
    )?);

    // 5. Build the rule checker; the oracle is attached only when a key resolves
    let checker = build_checker(annotator, &config, args.no_oracle)?;

    // 6. Check each document (parallel with rayon)
    let progress = CheckProgress::new(documents.len() as u64, cli.quiet);
    let reports: Vec<DocumentReport> = documents
        .par_iter()
        .map(|(source, text)| {
            let results = checker.check(text)?;
            progress.inc();
            Ok(DocumentReport::new(source.clone(), results))
        })
        .collect::<prose_guard::Result<_>>()?;
    progress.finish();

    // 7. Format output
    let color_mode = color_choice_to_mode(cli.color);
    let output = format_output(args.format, &reports, color_mode, cli.verbose)?;

    // 8. Write output
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 9. Determine exit code
    if args.warn_only {
        return Ok(EXIT_SUCCESS);
    }

    let has_violations = reports.iter().any(|report| !report.is_clean());
    if has_violations {
        Ok(EXIT_VIOLATIONS_FOUND)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> prose_guard::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(endpoint) = &args.endpoint {
        config.annotator.endpoint.clone_from(endpoint);
    }

    if let Some(max_words) = args.max_words {
        config.rules.max_words = max_words;
    }
}

fn read_documents(paths: &[PathBuf]) -> prose_guard::Result<Vec<(String, String)>> {
    if paths.is_empty() {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(vec![(STDIN_SOURCE.to_string(), text)]);
    }

    paths
        .iter()
        .map(|path| {
            let text =
                fs::read_to_string(path).map_err(|source| prose_guard::ProseGuardError::FileRead {
                    path: path.clone(),
                    source,
                })?;
            Ok((path.display().to_string(), text))
        })
        .collect()
}

fn build_checker(
    annotator: Arc<dyn Annotator>,
    config: &Config,
    no_oracle: bool,
) -> prose_guard::Result<RuleChecker> {
    let checker = RuleChecker::new(annotator).with_max_words(config.rules.max_words);

    if no_oracle {
        return Ok(checker);
    }

    let Some(api_key) = config.oracle.resolve_api_key() else {
        log::info!(
            "no API key in config or ${}; skipping the single-instruction check",
            config.oracle.api_key_env
        );
        return Ok(checker);
    };

    let mut oracle = GeminiOracle::new(
        config.oracle.model.clone(),
        api_key,
        config.oracle.timeout_secs,
    )?;
    if let Some(api_base) = &config.oracle.api_base {
        oracle = oracle.with_api_base(api_base);
    }

    Ok(checker.with_oracle(Box::new(oracle)))
}

fn format_output(
    format: OutputFormat,
    reports: &[DocumentReport],
    color_mode: ColorMode,
    verbose: u8,
) -> prose_guard::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(reports),
        OutputFormat::Json => JsonFormatter.format(reports),
        OutputFormat::Markdown => MarkdownFormatter.format(reports),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> prose_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

fn run_init(args: &prose_guard::cli::InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &prose_guard::cli::InitArgs) -> prose_guard::Result<()> {
    let output_path = &args.output;

    // Check if file already exists
    if output_path.exists() && !args.force {
        return Err(prose_guard::ProseGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    // Generate template config
    let template = generate_config_template();

    // Write to file
    fs::write(output_path, template)?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

fn generate_config_template() -> String {
    r#"# prose-guard configuration file

[annotator]
# Base URL of the annotation service (default: http://127.0.0.1:8765)
endpoint = "http://127.0.0.1:8765"

# Request timeout in seconds
timeout_secs = 30

[oracle]
# Gemini model used for the single-instruction check
model = "gemini-1.5-flash-latest"

# Environment variable consulted for the API key
api_key_env = "GEMINI_API_KEY"

# Inline API key (takes precedence over api_key_env)
# api_key = "..."

# Alternative API base URL, for proxies or a local stand-in
# api_base = "http://127.0.0.1:9090"

# Request timeout in seconds
timeout_secs = 10

[rules]
# Word limit for the sentence-length rule
max_words = 20
"#
    .to_string()
}

fn run_config(args: &prose_guard::cli::ConfigArgs) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), format),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Configuration error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_config_validate_impl(config_path: &Path) -> prose_guard::Result<()> {
    // 1. Check if file exists
    if !config_path.exists() {
        return Err(prose_guard::ProseGuardError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    // 2. Read and parse TOML
    let content = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&content)?;

    // 3. Validate semantic correctness
    validate_config_semantics(&config)?;

    Ok(())
}

fn validate_config_semantics(config: &Config) -> prose_guard::Result<()> {
    if !is_http_url(&config.annotator.endpoint) {
        return Err(prose_guard::ProseGuardError::Config(format!(
            "annotator.endpoint must be an http:// or https:// URL, got {:?}",
            config.annotator.endpoint
        )));
    }

    if config.annotator.timeout_secs == 0 {
        return Err(prose_guard::ProseGuardError::Config(
            "annotator.timeout_secs must be at least 1".to_string(),
        ));
    }

    if config.oracle.timeout_secs == 0 {
        return Err(prose_guard::ProseGuardError::Config(
            "oracle.timeout_secs must be at least 1".to_string(),
        ));
    }

    if let Some(api_base) = config
        .oracle
        .api_base
        .as_deref()
        .filter(|base| !is_http_url(base))
    {
        return Err(prose_guard::ProseGuardError::Config(format!(
            "oracle.api_base must be an http:// or https:// URL, got {api_base:?}"
        )));
    }

    if config.rules.max_words == 0 {
        return Err(prose_guard::ProseGuardError::Config(
            "rules.max_words must be at least 1".to_string(),
        ));
    }

    Ok(())
}

fn run_config_show(config_path: Option<&Path>, format: &str) -> i32 {
    match run_config_show_impl(config_path, format) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_config_show_impl(config_path: Option<&Path>, format: &str) -> prose_guard::Result<String> {
    // Load configuration (from file or defaults)
    let config = load_config(config_path, false)?;

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        _ => Ok(format_config_text(&config)),
    }
}

fn format_config_text(config: &Config) -> String {
    use std::fmt::Write;

    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");

    output.push_str("[annotator]\n");
    let _ = writeln!(output, "  endpoint = \"{}\"", config.annotator.endpoint);
    let _ = writeln!(output, "  timeout_secs = {}", config.annotator.timeout_secs);

    output.push_str("\n[oracle]\n");
    let _ = writeln!(output, "  model = \"{}\"", config.oracle.model);
    let _ = writeln!(output, "  api_key_env = \"{}\"", config.oracle.api_key_env);
    if config.oracle.api_key.is_some() {
        output.push_str("  api_key = (set)\n");
    }
    if let Some(api_base) = &config.oracle.api_base {
        let _ = writeln!(output, "  api_base = \"{api_base}\"");
    }
    let _ = writeln!(output, "  timeout_secs = {}", config.oracle.timeout_secs);

    output.push_str("\n[rules]\n");
    let _ = writeln!(output, "  max_words = {}", config.rules.max_words);

    output
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

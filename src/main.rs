#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(
    name = "types2jsonschema",
    about = "Convert type descriptions to a JSON Schema"
)]
struct Cli {
    /// JSON file with an array of type descriptions, or a directory of one-type files
    #[arg(value_name = "TYPES")]
    input: std::path::PathBuf,

    /// Path to the JSON Schema output file
    #[arg(value_name = "SCHEMA")]
    output: std::path::PathBuf,

    /// Primary type names, in the order they appear in the top-level `anyOf`
    #[arg(long = "primary", value_name = "NAME", required = true)]
    primary_types: Vec<String>,

    /// Primary type whose instances may omit the discriminator
    #[arg(long)]
    default_primary: Option<String>,

    /// Name of the discriminator property
    #[arg(long, default_value = typed_jsonschema::converter::DEFAULT_DISCRIMINATOR)]
    discriminator: String,

    /// Only emit `ImplementationsOf.*` for bases that a property references
    #[arg(long, default_value_t = false)]
    only_referenced_implementations: bool,
}

#[cfg(feature = "cli")]
fn main() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut options = typed_jsonschema::converter::TransformOptions::new()
        .with_discriminator(cli.discriminator)
        .with_emit_all_implementations(!cli.only_referenced_implementations);
    if let Some(default) = cli.default_primary {
        options = options.with_default_primary_type(default);
    }

    if let Err(e) = typed_jsonschema::converter::convert_types_to_jsonschema(
        &cli.input,
        &cli.output,
        cli.primary_types.as_slice(),
        &options,
    ) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This binary is only available with the `cli` feature enabled.");
    std::process::exit(1);
}

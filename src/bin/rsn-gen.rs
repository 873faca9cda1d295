//! rsn-gen CLI
//!
//! Command-line interface for generating, checking, and resolving
//! resource name bindings.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rsn_gen::{
    check, discover_resources, generate_module, generated_file_name, load_schema_file,
    FileStatus, GenerateError, ResourceMatcher, Severity,
};

#[derive(Parser)]
#[command(name = "rsn-gen")]
#[command(about = "Generate strongly-typed resource name bindings from schema annotations")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate resource name bindings from schema files
    Generate {
        /// Schema files to generate from
        #[arg(required = true)]
        schemas: Vec<PathBuf>,

        /// Directory for emitted files (default: alongside each input)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Print generated code to stdout instead of writing files
        #[arg(long)]
        stdout: bool,
    },

    /// Check schema files for problems generation would skip over
    Check {
        /// File or directory to check
        path: PathBuf,

        /// Output format: text (default) or json
        #[arg(long, default_value = "text")]
        format: String,

        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,

        /// Suppress progress output, only show errors
        #[arg(long, short)]
        quiet: bool,
    },

    /// Parse a resource name against a declared resource type
    Resolve {
        /// Schema file declaring the resource
        schema: PathBuf,

        /// Resource type to resolve against (service/Type, or bare Type)
        #[arg(long = "type", short = 't')]
        type_name: String,

        /// Resource name to parse
        name: String,

        /// Parse as a parent name instead of a full name
        #[arg(long)]
        parent: bool,

        /// Output the parsed record as JSON (for automation)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            schemas,
            out_dir,
            stdout,
        } => run_generate(&schemas, out_dir.as_deref(), stdout),

        Commands::Check {
            path,
            format,
            strict,
            quiet,
        } => run_check(&path, &format, strict, quiet),

        Commands::Resolve {
            schema,
            type_name,
            name,
            parent,
            json,
        } => run_resolve(&schema, &type_name, &name, parent, json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

fn run_generate(schemas: &[PathBuf], out_dir: Option<&Path>, stdout: bool) -> Result<(), u8> {
    if let Some(dir) = out_dir {
        std::fs::create_dir_all(dir)
            .map_err(|source| GenerateError::Write {
                path: dir.to_path_buf(),
                source,
            })
            .map_err(|e| {
                eprintln!("Error: {}", e);
                e.exit_code() as u8
            })?;
    }

    for schema_path in schemas {
        let schema = load_schema_file(schema_path).map_err(|e| {
            eprintln!("Error: {}: {}", schema_path.display(), e);
            e.exit_code() as u8
        })?;

        let discovery = discover_resources(&schema);
        for rejection in &discovery.rejections {
            eprintln!(
                "warning: {}: {}: skipped: {}",
                schema_path.display(),
                rejection.location,
                rejection.error
            );
        }

        // A file that declares nothing emits nothing.
        let source = schema_path.display().to_string();
        let Some(module) = generate_module(&discovery.resources, &source, &schema.package) else {
            continue;
        };

        if stdout {
            print!("{}", module);
            continue;
        }

        let file_name = generated_file_name(schema_path);
        let target = match out_dir {
            Some(dir) => dir.join(&file_name),
            None => schema_path.with_file_name(&file_name),
        };
        std::fs::write(&target, &module)
            .map_err(|source| GenerateError::Write {
                path: target.clone(),
                source,
            })
            .map_err(|e| {
                eprintln!("Error: {}", e);
                e.exit_code() as u8
            })?;
        println!("{} -> {}", schema_path.display(), target.display());
    }

    Ok(())
}

fn run_check(path: &Path, format: &str, strict: bool, quiet: bool) -> Result<(), u8> {
    if !path.exists() {
        eprintln!("Error: path not found: {}", path.display());
        return Err(2);
    }

    let result = check(path, strict);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&result).unwrap());
    } else {
        // Text output
        if !quiet {
            println!("Checking {} ...\n", path.display());
        }

        for file_result in &result.results {
            let status_icon = match file_result.status {
                FileStatus::Ok => "\x1b[32m✓\x1b[0m",
                FileStatus::Warning => "\x1b[33m⚠\x1b[0m",
                FileStatus::Error => "\x1b[31m✗\x1b[0m",
            };

            if !quiet || file_result.status != FileStatus::Ok {
                println!("  {} {}", status_icon, file_result.file.display());
            }

            for diag in &file_result.diagnostics {
                let color = match diag.severity {
                    Severity::Error => "\x1b[31m",
                    Severity::Warning => "\x1b[33m",
                };
                if !quiet || diag.severity == Severity::Error {
                    println!(
                        "    {}{}[{}]\x1b[0m: {} - {}",
                        color,
                        match diag.severity {
                            Severity::Error => "error",
                            Severity::Warning => "warning",
                        },
                        diag.code,
                        diag.path,
                        diag.message
                    );
                }
            }
        }

        println!();
        if result.is_ok() && (!strict || result.warnings == 0) {
            println!(
                "\x1b[32m✓ {} files checked, all passed\x1b[0m",
                result.files_checked
            );
        } else {
            println!(
                "\x1b[31m✗ {} files checked: {} passed, {} failed ({} errors, {} warnings)\x1b[0m",
                result.files_checked, result.passed, result.failed, result.errors, result.warnings
            );
        }
    }

    if result.is_ok() && (!strict || result.warnings == 0) {
        Ok(())
    } else {
        Err(1)
    }
}

fn run_resolve(
    schema_path: &Path,
    type_name: &str,
    name: &str,
    parent: bool,
    json: bool,
) -> Result<(), u8> {
    let schema = load_schema_file(schema_path).map_err(|e| {
        eprintln!("Error: {}: {}", schema_path.display(), e);
        e.exit_code() as u8
    })?;

    let discovery = discover_resources(&schema);
    let Some(resource) = discovery
        .resources
        .iter()
        .find(|r| r.full_type() == type_name || r.type_name() == type_name)
    else {
        eprintln!(
            "Error: resource type '{}' is not declared in {}",
            type_name,
            schema_path.display()
        );
        return Err(2);
    };

    let matcher = ResourceMatcher::new(resource.clone()).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    if parent {
        match matcher.parse_parent(name) {
            Ok(record) => {
                let const_name = matcher
                    .parent_type_const_for_value(&record.parent_type)
                    .unwrap_or_default();
                if json {
                    let output = serde_json::json!({
                        "type": matcher.resource().full_type(),
                        "parentTypeConst": const_name,
                        "record": record,
                    });
                    println!("{}", serde_json::to_string_pretty(&output).unwrap());
                } else {
                    println!("matched: {const_name}");
                    for (field, value) in &record.fields {
                        println!("  {field}: {value}");
                    }
                }
                Ok(())
            }
            Err(e) => {
                report_no_match(json, &e.to_string());
                Err(1)
            }
        }
    } else {
        match matcher.parse(name) {
            Ok(record) => {
                let const_name = matcher
                    .parent_type_const_for_value(&record.parent.parent_type)
                    .unwrap_or_default();
                if json {
                    let output = serde_json::json!({
                        "type": matcher.resource().full_type(),
                        "parentTypeConst": const_name,
                        "record": record,
                    });
                    println!("{}", serde_json::to_string_pretty(&output).unwrap());
                } else {
                    println!("matched: {const_name}");
                    for (field, value) in &record.parent.fields {
                        println!("  {field}: {value}");
                    }
                    for (field, value) in &record.fields {
                        println!("  {field}: {value}");
                    }
                }
                Ok(())
            }
            Err(e) => {
                report_no_match(json, &e.to_string());
                Err(1)
            }
        }
    }
}

/// Output a no-match result in plain text or JSON format.
fn report_no_match(json_output: bool, msg: &str) {
    if json_output {
        println!(r#"{{"matched":false,"error":"{}"}}"#, msg);
    } else {
        eprintln!("Error: {}", msg);
    }
}

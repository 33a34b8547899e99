//! Command-line harness for the conversion engine
//!
//! Reads HTML from a file argument or standard input, prints the Markdown
//! to standard output, and reports diagnostics on standard error. With
//! `--json` the output is a single JSON object in the shape web callers
//! use: `{"markdown": ..., "errors": [...]}`.

use std::env;
use std::fs;
use std::io::Read;
use std::process::ExitCode;

use log::info;
use serde_json::json;

use html_markdown_converter::MarkdownConverter;

const USAGE: &str = "Usage: htmlmd [--json] [FILE]\n\n\
Convert HTML to Markdown. Reads FILE, or standard input when no file is\n\
given. Diagnostics go to standard error, or into the \"errors\" field\n\
with --json.";

struct CliArgs {
    input_path: Option<String>,
    json_output: bool,
    show_help: bool,
}

fn parse_args() -> Result<CliArgs, String> {
    let mut input_path = None;
    let mut json_output = false;
    let mut show_help = false;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => json_output = true,
            "--help" | "-h" => show_help = true,
            other if other.starts_with('-') => {
                return Err(format!("Unknown option: {}", other));
            }
            other => {
                if input_path.replace(other.to_string()).is_some() {
                    return Err("Only one input file may be given".to_string());
                }
            }
        }
    }

    Ok(CliArgs {
        input_path,
        json_output,
        show_help,
    })
}

fn read_input(path: Option<&str>) -> std::io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };
    if args.show_help {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    let html = match read_input(args.input_path.as_deref()) {
        Ok(html) => html,
        Err(err) => {
            eprintln!(
                "Failed to read {}: {}",
                args.input_path.as_deref().unwrap_or("standard input"),
                err
            );
            return ExitCode::FAILURE;
        }
    };

    let converter = MarkdownConverter::new();
    let result = converter.convert(&html);
    info!(
        "converted {} bytes of HTML into {} bytes of Markdown ({} diagnostics)",
        html.len(),
        result.markdown.len(),
        result.diagnostics.len()
    );

    if args.json_output {
        let body = json!({
            "markdown": result.markdown,
            "errors": result
                .diagnostics
                .iter()
                .map(|d| d.message.as_str())
                .collect::<Vec<_>>(),
        });
        println!("{}", body);
    } else {
        print!("{}", result.markdown);
        if !result.markdown.ends_with('\n') && !result.markdown.is_empty() {
            println!();
        }
        for diagnostic in &result.diagnostics {
            eprintln!("{}", diagnostic);
        }
    }

    // Diagnostics are advisory; only I/O failures change the exit code
    ExitCode::SUCCESS
}

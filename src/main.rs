//! Command-line front end for the tinct rendering engine.
//!
//! Paths are always explicit flags: the engine itself knows nothing
//! about where a tool keeps its palettes, mappings or theme output.

use std::env;
use std::path::Path;
use std::process::ExitCode;

use tinct::{RenderError, lookup, render_all, tool_names, validate_all};
use tinct_palette::load_palette;

fn usage() {
    eprintln!("Render and validate Modus theme ports for terminal tools.");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  tinct list [--themes-dir DIR]");
    eprintln!("  tinct render --tool TOOL --palettes-dir DIR --mapping FILE --out-dir DIR [--theme NAME]");
    eprintln!("  tinct validate --tool TOOL --themes-dir DIR [--theme NAME]");
    eprintln!("  tinct contrast --palette FILE [--bg-key KEY]");
    eprintln!();
    eprintln!("Tools: {}", tool_names().join(", "));
}

/// Value of `--flag` in `args`, if present.
fn flag<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .position(|arg| arg == name)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn required<'a>(args: &'a [String], name: &str) -> Result<&'a str, String> {
    flag(args, name).ok_or_else(|| format!("{name} is required"))
}

fn cmd_list(args: &[String]) -> Result<ExitCode, Box<dyn std::error::Error>> {
    println!("Tools:");
    for tool in tool_names() {
        println!("- {tool}");
    }
    if let Some(dir) = flag(args, "--themes-dir") {
        println!();
        println!("Themes:");
        let themes = tinct::list_themes(Path::new(dir), "");
        if themes.is_empty() {
            println!("(none found)");
        } else {
            for name in themes {
                println!("- {name}");
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_render(args: &[String]) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let tool = required(args, "--tool")?;
    let spec = lookup(tool).ok_or_else(|| RenderError::UnknownTool(tool.to_string()))?;
    let written = render_all(
        Path::new(required(args, "--palettes-dir")?),
        Path::new(required(args, "--mapping")?),
        Path::new(required(args, "--out-dir")?),
        spec,
        flag(args, "--theme"),
    )?;
    for path in written {
        println!("Wrote {}", path.display());
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_validate(args: &[String]) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let tool = required(args, "--tool")?;
    let spec = lookup(tool).ok_or_else(|| RenderError::UnknownTool(tool.to_string()))?;
    let themes_dir = required(args, "--themes-dir")?;
    let (validated, errors) = validate_all(Path::new(themes_dir), spec, flag(args, "--theme"))?;

    for (path, issues) in &errors {
        println!("Invalid theme: {}", path.display());
        for issue in issues {
            println!("  {issue}");
        }
    }
    if !errors.is_empty() {
        eprintln!("Validation failed for {} theme(s).", errors.len());
        return Ok(ExitCode::FAILURE);
    }
    println!("Validated {validated} theme(s).");
    Ok(ExitCode::SUCCESS)
}

fn cmd_contrast(args: &[String]) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let path = required(args, "--palette")?;
    let bg_key = flag(args, "--bg-key").unwrap_or("bg-main");
    let (theme_name, palette) = load_palette(Path::new(path))?;
    let warnings = tinct::validate_palette_contrast(&palette, bg_key, None);
    if warnings.is_empty() {
        println!("{theme_name}: all checked colors meet WCAG AAA against {bg_key}.");
    } else {
        println!("{theme_name}:");
        for warning in warnings {
            println!("  {warning}");
        }
    }
    // Contrast checking is advisory, not a gate.
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = args.first().map(String::as_str) else {
        usage();
        return ExitCode::FAILURE;
    };
    let rest = &args[1..];

    let result = match command {
        "list" => cmd_list(rest),
        "render" => cmd_render(rest),
        "validate" => cmd_validate(rest),
        "contrast" => cmd_contrast(rest),
        "--help" | "-h" | "help" => {
            usage();
            return ExitCode::SUCCESS;
        }
        other => {
            eprintln!("Error: unknown command: {other}");
            usage();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

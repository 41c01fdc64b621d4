pub mod container;
pub mod padding;
pub mod rule;
pub mod screen;
pub mod theme;
pub mod variant;

use container::ContainerConfig;
use std::env;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Build {
        out: Option<String>,
        config: Option<String>,
        minify: bool,
        classes: Vec<String>,
    },
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    pub message: String,
}

pub fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Build {
            out,
            config,
            minify,
            classes,
        } => run_build(out, config, minify, classes),
        Command::Help => {
            print_help();
            Ok(())
        }
    }
}

pub fn run_from_env() -> Result<(), CliError> {
    let command = parse_args(env::args().skip(1))?;
    run(command)
}

pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut iter = args.into_iter();
    let Some(cmd) = iter.next() else {
        return Ok(Command::Help);
    };

    match cmd.as_str() {
        "build" => parse_build_args(iter.collect()),
        "-h" | "--help" | "help" => Ok(Command::Help),
        _ => Err(CliError {
            message: format!("unknown command: {}", cmd),
        }),
    }
}

fn parse_build_args(args: Vec<String>) -> Result<Command, CliError> {
    let mut out = None;
    let mut config = None;
    let mut minify = false;
    let mut classes = Vec::new();
    let mut idx = 0;

    while idx < args.len() {
        match args[idx].as_str() {
            "--out" | "--output" | "-o" => {
                idx += 1;
                if idx >= args.len() {
                    return Err(CliError {
                        message: "build requires a value for --output".to_string(),
                    });
                }
                out = Some(args[idx].clone());
            }
            "--config" | "-c" => {
                idx += 1;
                if idx >= args.len() {
                    return Err(CliError {
                        message: "build requires a value for --config".to_string(),
                    });
                }
                config = Some(args[idx].clone());
            }
            "--minify" => {
                minify = true;
            }
            value => {
                classes.push(value.to_string());
            }
        }
        idx += 1;
    }

    Ok(Command::Build {
        out,
        config,
        minify,
        classes,
    })
}

fn run_build(
    out: Option<String>,
    config_path: Option<String>,
    minify: bool,
    classes: Vec<String>,
) -> Result<(), CliError> {
    let config = match config_path {
        Some(path) => theme::load(Path::new(&path)).map_err(|err| CliError {
            message: err.message,
        })?,
        None => theme::Config::default(),
    };

    let container_config = ContainerConfig::from_theme(&config.theme);
    let base = container_config.build();
    // Responsive variants resolve against the theme-wide screens, never the
    // container-specific ones.
    let screens = screen::normalize(config.theme.screens.as_ref(), None);

    let requested = if classes.is_empty() {
        vec!["container".to_string()]
    } else {
        classes
    };

    let mut blocks = Vec::with_capacity(requested.len());
    for class in &requested {
        let rendered = if format!(".{}", class) == base.selector {
            base.render(minify)
        } else {
            let wrapped = variant::wrap_class(&base, class, &screens).ok_or_else(|| CliError {
                message: format!("unknown container class: {}", class),
            })?;
            wrapped.render(minify)
        };
        blocks.push(String::from(rendered));
    }

    let mut css = if minify {
        blocks.concat()
    } else {
        blocks.join("\n")
    };
    if !minify && !css.is_empty() {
        css.push('\n');
    }

    if let Some(out_path) = out {
        fs::write(&out_path, css).map_err(|err| CliError {
            message: format!("failed to write output {}: {}", out_path, err),
        })?;
    } else {
        print!("{}", css);
    }

    eprintln!(
        "generated {} container rule tree{}",
        requested.len(),
        if requested.len() == 1 { "" } else { "s" }
    );

    Ok(())
}

fn print_help() {
    println!("railframe");
    println!();
    println!("USAGE:");
    println!("  railframe build [--output <path>] [--minify] [--config <path>] [<class>...]");
    println!();
    println!("Classes default to `container`; variant-qualified classes such as");
    println!("`lg:hover:container` emit the container tree wrapped for that variant.");
    println!();
    println!("EXAMPLES:");
    println!("  railframe build");
    println!("  railframe build -c railframe.toml -o dist/container.css");
    println!("  railframe build --minify container lg:hover:container");
}

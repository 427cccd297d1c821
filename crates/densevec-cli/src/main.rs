use anyhow::{anyhow, Result};
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use densevec::GenerateConfig;
use densevec_cli::commands;
use densevec_cli::config::load_generate_config;

fn input_arg(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .help(help)
        .required(true)
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn output_arg(required: bool) -> Arg {
    Arg::new("output_file")
        .short('o')
        .long("output")
        .help("Path the resulting vector is written to. Printed to stdout when omitted.")
        .required(required)
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn cli() -> Command {
    Command::new("densevec")
        .version(clap::crate_version!())
        .author("Justin Sing <justincsing@gmail.com>")
        .about("Dense vector arithmetic on plain-text vector files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("generate")
                .about("Create a vector filled with a constant or seeded uniform values")
                .arg(
                    Arg::new("len")
                        .help("Number of elements")
                        .required(true)
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(output_arg(true))
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help("JSON generation config. Flags below override its values.")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("value")
                        .long("value")
                        .help("Fill every element with this value")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .help("Seed for uniform values")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("min")
                        .long("min")
                        .help("Inclusive lower bound for uniform values")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("max")
                        .long("max")
                        .help("Exclusive upper bound for uniform values")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64)),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("Print a vector as (a , b , c)")
                .arg(input_arg("input", "Vector file")),
        )
        .subcommand(
            Command::new("norm")
                .about("Print the L2 norm of a vector")
                .arg(input_arg("input", "Vector file")),
        )
        .subcommand(
            Command::new("dot")
                .about("Print the inner product of two vectors")
                .arg(input_arg("lhs", "First vector file"))
                .arg(input_arg("rhs", "Second vector file")),
        )
        .subcommand(
            Command::new("add")
                .about("Elementwise sum of two vectors")
                .arg(input_arg("lhs", "First vector file"))
                .arg(input_arg("rhs", "Second vector file"))
                .arg(output_arg(false)),
        )
        .subcommand(
            Command::new("sub")
                .about("Elementwise difference lhs - rhs")
                .arg(input_arg("lhs", "First vector file"))
                .arg(input_arg("rhs", "Second vector file"))
                .arg(output_arg(false)),
        )
        .subcommand(
            Command::new("scale")
                .about("Multiply every element by a factor")
                .arg(input_arg("input", "Vector file"))
                .arg(
                    Arg::new("factor")
                        .help("Scale factor")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(output_arg(false)),
        )
        .subcommand(
            Command::new("neg")
                .about("Flip the sign of every element")
                .arg(input_arg("input", "Vector file"))
                .arg(output_arg(false)),
        )
        .subcommand(
            Command::new("normalize")
                .about("Rescale a vector to unit L2 norm")
                .arg(input_arg("input", "Vector file"))
                .arg(output_arg(false)),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Written by {author-with-newline}Version {version}\n\n\
             {all-args}{after-help}",
        )
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("DENSEVEC_LOG", "error,densevec=info"))
        .init();

    let matches = cli().get_matches();
    let Some((name, sub_m)) = matches.subcommand() else {
        unreachable!("Subcommand is required by CLI configuration")
    };

    match run(name, sub_m) {
        Ok(()) => Ok(()),
        Err(e) => {
            log::error!("{} failed: {:#}", name, e);
            std::process::exit(1)
        }
    }
}

fn required<'a, T>(matches: &'a ArgMatches, id: &str) -> Result<&'a T>
where
    T: Clone + Send + Sync + 'static,
{
    matches
        .get_one::<T>(id)
        .ok_or_else(|| anyhow!("Missing required argument '{}'", id))
}

fn run(name: &str, matches: &ArgMatches) -> Result<()> {
    let output = matches
        .try_get_one::<PathBuf>("output_file")
        .ok()
        .flatten()
        .map(PathBuf::as_path);

    match name {
        "generate" => {
            let len: usize = *required(matches, "len")?;
            let output: &PathBuf = required(matches, "output_file")?;
            let config = generate_config(matches)?;
            log::info!("[densevec] Generating {} values", len);
            commands::generate(len, &config, output)?;
        }
        "show" => {
            println!("{}", commands::show(required::<PathBuf>(matches, "input")?)?);
        }
        "norm" => {
            println!("{}", commands::norm(required::<PathBuf>(matches, "input")?)?);
        }
        "dot" => {
            let lhs: &PathBuf = required(matches, "lhs")?;
            let rhs: &PathBuf = required(matches, "rhs")?;
            println!("{}", commands::dot(lhs, rhs)?);
        }
        "add" | "sub" => {
            let lhs: &PathBuf = required(matches, "lhs")?;
            let rhs: &PathBuf = required(matches, "rhs")?;
            let result = if name == "add" {
                commands::add(lhs, rhs)?
            } else {
                commands::sub(lhs, rhs)?
            };
            commands::emit(&result, output)?;
        }
        "scale" => {
            let input: &PathBuf = required(matches, "input")?;
            let factor: f64 = *required(matches, "factor")?;
            commands::emit(&commands::scale(input, factor)?, output)?;
        }
        "neg" => {
            let input: &PathBuf = required(matches, "input")?;
            commands::emit(&commands::neg(input)?, output)?;
        }
        "normalize" => {
            let input: &PathBuf = required(matches, "input")?;
            commands::emit(&commands::normalize(input)?, output)?;
        }
        _ => unreachable!(),
    }
    Ok(())
}

fn generate_config(matches: &ArgMatches) -> Result<GenerateConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            log::info!("[densevec] Using config: {:?}", path);
            load_generate_config(path)?
        }
        None => GenerateConfig::default(),
    };

    if let Some(value) = matches.get_one::<f64>("value") {
        config.fill = Some(*value);
    }
    if let Some(seed) = matches.get_one::<u64>("seed") {
        config.seed = *seed;
    }
    if let Some(min) = matches.get_one::<f64>("min") {
        config.min = *min;
    }
    if let Some(max) = matches.get_one::<f64>("max") {
        config.max = *max;
    }
    Ok(config)
}

use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};
use transpose_words::logging::{self, LogLevel, Logger};
use transpose_words::{Config, Transposer};

const USAGE: &str = "usage: transpose-words [--config PATH] [--log-level LEVEL] [--cursor] --position N [TEXT]";

#[derive(Debug, Default, PartialEq)]
struct CliOptions {
    config_path: Option<String>,
    log_level: Option<LogLevel>,
    show_cursor: bool,
    position: Option<usize>,
    text: Option<String>,
    help: bool,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_args(&args)?;
    if options.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let config =
        Config::load(options.config_path.as_deref()).context("failed to load configuration")?;

    let mut logger = Logger::new(options.log_level.unwrap_or(config.log_level));
    if let Some(path) = &config.log_file {
        logger = logger.with_file_output(path);
    }
    logging::init(logger);

    let position = options
        .position
        .with_context(|| format!("--position is required\n{}", USAGE))?;
    let transposer = Transposer::from_config(&config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match &options.text {
        Some(text) => write_line(&mut out, &transposer, text, position, options.show_cursor)?,
        None => {
            for line in std::io::stdin().lock().lines() {
                let line = line.context("failed to read stdin")?;
                write_line(&mut out, &transposer, &line, position, options.show_cursor)?;
            }
        }
    }

    Ok(())
}

fn write_line(
    out: &mut impl Write,
    transposer: &Transposer,
    line: &str,
    position: usize,
    show_cursor: bool,
) -> Result<()> {
    let (text, cursor) = match transposer.try_transpose(line, position) {
        Ok(transposition) => (transposition.text, transposition.cursor),
        Err(error) => {
            log::info!("line left unchanged: {}", error);
            (line.to_string(), position)
        }
    };

    if show_cursor {
        writeln!(out, "{}\t{}", text, cursor)?;
    } else {
        writeln!(out, "{}", text)?;
    }
    Ok(())
}

fn parse_args(args: &[String]) -> Result<CliOptions> {
    let mut options = CliOptions::default();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => options.help = true,
            "--cursor" => options.show_cursor = true,
            "--config" => {
                let path = iter.next().context("--config requires a path")?;
                options.config_path = Some(path.clone());
            }
            "--log-level" => {
                let level = iter.next().context("--log-level requires a level")?;
                options.log_level = Some(
                    level
                        .parse()
                        .map_err(|_| anyhow::anyhow!("invalid log level: {}", level))?,
                );
            }
            "-p" | "--position" => {
                let value = iter.next().context("--position requires a number")?;
                options.position = Some(
                    value
                        .parse()
                        .with_context(|| format!("invalid position: {}", value))?,
                );
            }
            other if other.starts_with('-') && other.len() > 1 => {
                bail!("unknown option: {}\n{}", other, USAGE);
            }
            text => {
                if options.text.is_some() {
                    bail!("only one TEXT argument is accepted\n{}", USAGE);
                }
                options.text = Some(text.to_string());
            }
        }
    }

    Ok(options)
}

use clap::{Parser, Subcommand};
use gotify_push::{Configuration, Error, PushArgs, default_locations, push, read_config, read_stdin};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LOG_TARGET: &str = "gotify";

#[derive(Parser, Debug)]
#[clap(name = "gotify", author, version, about = "Gotify command line client", long_about = None)]
struct CliArgs {
    /// Path to a configuration file, replaces the default locations
    #[clap(short, long, value_parser, global = true)]
    config: Option<PathBuf>,
    /// Set the logging level [default: Warn]
    #[clap(short, long, value_parser, global = true)]
    log_level: Option<LevelFilter>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pushes a message
    ///
    /// the message can also provided in stdin f.ex:
    ///    echo my text | gotify push
    #[clap(visible_alias = "p")]
    Push(PushCommand),
}

#[derive(Parser, Debug)]
struct PushCommand {
    /// Message text, words are joined with a space
    #[clap(value_name = "MESSAGE-TEXT")]
    message: Vec<String>,
    /// Set the priority
    #[clap(short, long, allow_negative_numbers = true)]
    priority: Option<i64>,
    /// Set the title (empty for app name)
    #[clap(short, long, default_value = "")]
    title: String,
    /// Override the app token
    #[clap(long, default_value = "")]
    token: String,
    /// Override the Gotify URL
    #[clap(long, default_value = "")]
    url: String,
    /// Do not output anything (on success)
    #[clap(short, long)]
    quiet: bool,
    /// The content type of the message. See https://gotify.net/docs/msgextras#client-display
    #[clap(long = "contentType", default_value = "")]
    content_type: String,
    /// An URL to open upon clicking the notification. See https://gotify.net/docs/msgextras#client-notification
    #[clap(long = "clickUrl", default_value = "")]
    click_url: String,
    /// Disable evaluating \n and \t (if set, \n and \t will be seen as a string)
    #[clap(long)]
    disable_unescape_backslash: bool,
}

impl From<PushCommand> for PushArgs {
    fn from(value: PushCommand) -> Self {
        PushArgs {
            args: value.message,
            title: value.title,
            priority: value.priority,
            token: value.token,
            url: value.url,
            quiet: value.quiet,
            content_type: value.content_type,
            click_url: value.click_url,
            disable_unescape: value.disable_unescape_backslash,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = CliArgs::parse();
    let module_log_level = cli.log_level.unwrap_or(LevelFilter::WARN);
    let filter = EnvFilter::builder().with_default_directive(module_log_level.into()).from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            debug!(target: LOG_TARGET, "Push failed: {:?}", error);
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: CliArgs) -> Result<(), Error> {
    let locations = match args.config {
        Some(path) => vec![path],
        None => default_locations(),
    };
    let config: Result<Configuration, Error> = read_config(&locations);
    if let Err(error) = config.as_ref() {
        debug!(target: LOG_TARGET, "No configuration loaded: {}", error);
    }

    match args.command {
        Command::Push(command) => {
            let request = PushArgs::from(command).resolve(&read_stdin()?, &config)?;
            push(&request).await?;
            report_created(request.quiet, &mut std::io::stdout())
        }
    }
}

fn report_created<W: Write>(quiet: bool, out: &mut W) -> Result<(), Error> {
    if !quiet {
        writeln!(out, "message created")?;
    }
    Ok(())
}

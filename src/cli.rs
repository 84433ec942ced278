use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "glassbot")]
#[command(about = "Slack event handler that announces glassware sightings", version)]
#[command(after_help = "EXAMPLES:
    glassbot handle --file event.json      Process one invocation payload
    cat event.json | glassbot handle       Read the payload from stdin
    glassbot sign -t 1531420618 -f body    Sign a raw request body
    glassbot init                          Write the config file")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Show the full error chain on failure
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Handle one Events API invocation and print the response
    #[command(after_help = "EXAMPLES:
    glassbot handle --file gateway-event.json
    glassbot handle --now 1531420618 < event.json
    glassbot handle --json --file event.json")]
    Handle(HandleArgs),
    /// Compute the v0 signature Slack would send for a raw body
    #[command(after_help = "EXAMPLES:
    glassbot sign --timestamp 1531420618 --file body.json
    printf '%s' '{\"challenge\":\"abc\"}' | glassbot sign")]
    Sign(SignArgs),
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    glassbot completions bash > ~/.bash_completion.d/glassbot
    glassbot completions zsh > ~/.zfunc/_glassbot")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    #[command(after_help = "EXAMPLES:
    glassbot init")]
    Init,
}

#[derive(Args)]
pub struct HandleArgs {
    /// Invocation JSON file (reads stdin when omitted)
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    /// Receipt time in seconds since the epoch (defaults to the current time)
    #[arg(long)]
    pub now: Option<i64>,
}

#[derive(Args)]
pub struct SignArgs {
    /// Request timestamp in seconds since the epoch (defaults to the current time)
    #[arg(long, short)]
    pub timestamp: Option<i64>,

    /// Raw body file, used byte for byte (reads stdin when omitted)
    #[arg(long, short)]
    pub file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_flag_parsed() {
        let cli = Cli::try_parse_from(["glassbot", "-v", "handle"]).unwrap();
        assert!(cli.verbose);

        let cli = Cli::try_parse_from(["glassbot", "handle", "--verbose"]).unwrap();
        assert!(cli.verbose);

        let cli = Cli::try_parse_from(["glassbot", "handle"]).unwrap();
        assert!(!cli.verbose);
    }

    #[test]
    fn test_handle_args() {
        let cli =
            Cli::try_parse_from(["glassbot", "--json", "handle", "-f", "event.json", "--now", "42"])
                .unwrap();
        assert!(cli.json);
        let Commands::Handle(args) = cli.command else {
            panic!("expected handle command");
        };
        assert_eq!(args.file, Some(PathBuf::from("event.json")));
        assert_eq!(args.now, Some(42));
    }
}

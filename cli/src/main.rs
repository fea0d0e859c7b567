mod render;
mod transport;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use task_client_core::{ClientConfig, Outcome, TaskClient, TaskList};
use tracing_subscriber::EnvFilter;

use crate::transport::UreqTransport;

#[derive(Parser, Debug)]
#[command(name = "tasks", about = "Manage the shared to-do list")]
struct Cli {
    /// API base URL. Overrides TASKS_API_URL.
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Health check URL. Overrides TASKS_HEALTH_URL.
    #[arg(long, global = true)]
    health_url: Option<String>,

    /// Give up on a request after this many seconds.
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show every task
    List,
    /// Create a task
    Add {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        completed: bool,
    },
    /// Flip a task between pending and done
    Toggle { id: String },
    /// Delete a task
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Query the server health endpoint
    Health,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env().context("reading configuration from environment")?;
    if let Some(url) = &cli.base_url {
        config = config.with_base_url(url)?;
    }
    if let Some(url) = &cli.health_url {
        config = config.with_health_url(url)?;
    }
    tracing::debug!(?config, "resolved configuration");

    let transport = UreqTransport::new(cli.timeout.map(Duration::from_secs));
    let mut list = TaskList::new(TaskClient::new(&config), transport);

    if let Command::Health = cli.command {
        let health = list.check_health().context("health check failed")?;
        println!("{}", serde_json::to_string_pretty(&health)?);
        return Ok(ExitCode::SUCCESS);
    }

    if list.load() == Outcome::Failed {
        return Ok(report(&list));
    }

    let outcome = match cli.command {
        Command::List | Command::Health => Outcome::Applied,
        Command::Add {
            title,
            description,
            completed,
        } => {
            list.set_draft_title(title);
            list.set_draft_description(description);
            list.set_draft_completed(completed);
            list.create()
        }
        Command::Toggle { id } => {
            let found = list
                .tasks()
                .iter()
                .find(|t| t.id.as_deref() == Some(id.as_str()))
                .cloned();
            let Some(task) = found else {
                eprintln!("No existe una tarea con id {id}");
                return Ok(ExitCode::FAILURE);
            };
            list.toggle_complete(&task)
        }
        Command::Delete { id, yes } => {
            if yes {
                list.delete(&id, &mut |_: &str| true)
            } else {
                list.delete(&id, &mut prompt_stdin)
            }
        }
    };

    match outcome {
        Outcome::Failed => Ok(report(&list)),
        Outcome::Skipped if !list.last_error().is_empty() => Ok(report(&list)),
        Outcome::Skipped => {
            println!("Cancelado.");
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Applied => {
            println!("{}", render::task_table(list.tasks()));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn report<T>(list: &TaskList<T>) -> ExitCode {
    eprintln!("{}", list.last_error());
    ExitCode::FAILURE
}

/// Ask on stderr, read the answer from stdin. Anything but yes declines,
/// including a prompt that could not be shown.
fn prompt_stdin(prompt: &str) -> bool {
    ask(prompt, &mut io::stderr(), &mut io::stdin().lock())
}

fn ask(prompt: &str, out: &mut impl Write, input: &mut impl BufRead) -> bool {
    if write!(out, "{prompt} [s/N] ").and_then(|()| out.flush()).is_err() {
        tracing::warn!("could not show the confirmation prompt");
        return false;
    }
    let mut answer = String::new();
    if input.read_line(&mut answer).is_err() {
        return false;
    }
    is_affirmative(&answer)
}

fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "si" | "sí" | "y" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affirmative_answers() {
        for answer in ["s\n", "Sí", " yes ", "Y"] {
            assert!(is_affirmative(answer), "{answer:?}");
        }
        for answer in ["", "\n", "n", "no", "maybe"] {
            assert!(!is_affirmative(answer), "{answer:?}");
        }
    }

    /// Sink whose flush always fails, like a closed stderr.
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn ask_reads_the_answer_after_the_prompt() {
        let mut out = Vec::new();
        assert!(ask("Delete?", &mut out, &mut "s\n".as_bytes()));
        assert_eq!(String::from_utf8(out).unwrap(), "Delete? [s/N] ");

        assert!(!ask("Delete?", &mut Vec::new(), &mut "n\n".as_bytes()));
    }

    #[test]
    fn failed_prompt_flush_declines() {
        assert!(!ask("Delete?", &mut Broken, &mut "s\n".as_bytes()));
    }

    #[test]
    fn parses_delete_with_yes() {
        let cli = Cli::try_parse_from(["tasks", "delete", "abc", "--yes"]).unwrap();
        match cli.command {
            Command::Delete { id, yes } => {
                assert_eq!(id, "abc");
                assert!(yes);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_add_with_global_flags() {
        let cli = Cli::try_parse_from([
            "tasks",
            "add",
            "--title",
            "Buy milk",
            "--base-url",
            "http://127.0.0.1:3000/api",
        ])
        .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://127.0.0.1:3000/api"));
        match cli.command {
            Command::Add {
                title,
                description,
                completed,
            } => {
                assert_eq!(title, "Buy milk");
                assert_eq!(description, "");
                assert!(!completed);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn add_requires_title() {
        assert!(Cli::try_parse_from(["tasks", "add"]).is_err());
    }
}

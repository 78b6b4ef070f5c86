//! `prereq` - check course prerequisites from the command line

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use prereq_core::{CompletedCourses, ConditionTable, CourseCode, Handbook};

/// Parse a course code, accepting any case
fn parse_course(s: &str) -> Result<CourseCode, String> {
    s.parse().map_err(|e| format!("{e}"))
}

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON file mapping course codes to prerequisite rules
    #[arg(short, long, default_value = "conditions.json", global = true)]
    conditions: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check whether a course is unlocked by a set of completed courses
    Check {
        /// Course to check
        #[arg(value_parser = parse_course)]
        target: CourseCode,

        /// Courses already completed
        #[arg(value_parser = parse_course)]
        completed: Vec<CourseCode>,
    },

    /// Print the parsed prerequisite rule of a course
    Tree {
        #[arg(value_parser = parse_course)]
        target: CourseCode,
    },
}

impl Cli {
    fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let table = ConditionTable::from_path(&self.conditions)
            .with_context(|| format!("failed to load {}", self.conditions.display()))?;
        let handbook = Handbook::new(table);

        match self.command {
            Command::Check { target, completed } => {
                let completed: CompletedCourses = completed.into_iter().collect();
                let unlocked = handbook
                    .is_unlocked(&completed, &target)
                    .with_context(|| format!("cannot evaluate prerequisites of {target}"))?;
                println!("{}", if unlocked { "unlocked" } else { "locked" });
            }
            Command::Tree { target } => {
                let tree = handbook
                    .tree(&target, &CompletedCourses::new())
                    .with_context(|| format!("cannot parse prerequisites of {target}"))?;
                match tree {
                    Some(tree) => println!("{tree}"),
                    None => println!("(no prerequisites)"),
                }
            }
        }

        Ok(())
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    Cli::parse().run()
}

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "A terminal kanban board over a REST task service", long_about = None)]
#[command(version, arg_required_else_help = false)]
pub struct Cli {
    /// Base URL of the task service (or set TASKBOARD_API_URL)
    #[arg(long, env = "TASKBOARD_API_URL")]
    pub api_url: Option<String>,

    /// Board to open (or set TASKBOARD_BOARD)
    #[arg(long, env = "TASKBOARD_BOARD")]
    pub board: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the board's columns and their tasks
    Columns,
    /// Add a task to the To Do column
    Add {
        /// Task title
        title: String,
        /// Pre-fill the description via the generation service
        #[arg(long)]
        describe: bool,
    },
    /// Move a task to another column
    Move {
        /// Task id
        task_id: String,
        /// Destination column id
        column_id: String,
    },
    /// List archived tasks grouped by day
    Archive,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_move_arguments() {
        let cli = Cli::parse_from(["taskboard", "move", "t-1", "col-wip"]);
        match cli.command {
            Some(Commands::Move { task_id, column_id }) => {
                assert_eq!(task_id, "t-1");
                assert_eq!(column_id, "col-wip");
            }
            _ => panic!("expected move command"),
        }
    }

    #[test]
    fn test_add_with_describe_flag() {
        let cli = Cli::parse_from(["taskboard", "add", "Write spec", "--describe"]);
        match cli.command {
            Some(Commands::Add { title, describe }) => {
                assert_eq!(title, "Write spec");
                assert!(describe);
            }
            _ => panic!("expected add command"),
        }
    }

    #[test]
    fn test_no_subcommand_launches_tui() {
        let cli = Cli::parse_from(["taskboard", "--board", "team-42"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.board.as_deref(), Some("team-42"));
    }
}

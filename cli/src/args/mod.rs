use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(
    name = "todo",
    version,
    about,
    long_about = "Simple to-do list kept in a plain text file. Run without a command for the interactive menu."
)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Debug, Args, Serialize)]
pub struct ConfigArgs {
    /// Path to profile configuration file
    #[arg(long, short, global = true, env = "TODO_PROFILE")]
    pub profile_path: Option<String>,

    /// Path to the notes file
    #[arg(long, short, global = true, env = "TODO_FILE")]
    pub file: Option<String>,
}

#[derive(Debug, Subcommand, Serialize, PartialEq)]
pub enum Command {
    /// Prints out current configuration
    Config,
    /// Prints a shell completion script.
    Completions(CompletionsArgs),
    #[command(flatten)]
    Note(NoteCommand),
}

#[derive(Debug, Subcommand, Serialize, PartialEq)]
pub enum NoteCommand {
    /// Adds a note.
    Add(NoteAddArgs),
    /// Lists all notes.
    List(NoteListArgs),
    /// Finds notes containing a term (case-insensitive).
    Find(NoteFindArgs),
    /// Removes the note at a position.
    Remove(NoteRemoveArgs),
    /// Removes all notes.
    Clear,
}

#[derive(Debug, Args, Serialize, PartialEq)]
pub struct NoteAddArgs {
    /// Note content
    #[arg(trailing_var_arg = true)]
    pub content: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Serialize, Deserialize, Default)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Plain,
    Json,
}

#[derive(Debug, Args, PartialEq, Serialize, Deserialize)]
pub struct NoteListArgs {
    /// Output format (pretty, plain, or json)
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub output: OutputFormat,
}

#[derive(Debug, Args, PartialEq, Serialize, Deserialize)]
pub struct NoteFindArgs {
    /// Search term
    pub term: String,

    /// Output format (pretty, plain, or json)
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub output: OutputFormat,
}

#[derive(Debug, Args, Serialize, PartialEq)]
pub struct NoteRemoveArgs {
    /// Position of the note as shown by `list`
    #[arg(allow_negative_numbers = true)]
    pub position: i64,
}

#[derive(Debug, Args, Serialize, PartialEq)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[serde(skip)]
    pub shell: Shell,
}

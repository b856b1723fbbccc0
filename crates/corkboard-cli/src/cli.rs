use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "corkboard")]
#[command(about = "A document-oriented kanban board editor", long_about = None)]
#[command(version, arg_required_else_help = true)]
pub struct Cli {
    /// Workspace root directory (or set CORKBOARD_ROOT env var)
    #[arg(long, value_name = "DIR", env = "CORKBOARD_ROOT")]
    pub root: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Working board operations
    Board(BoardCommand),
    /// Column operations
    Column(ColumnCommand),
    /// Task operations
    Task(TaskCommand),
    /// Apply a drag gesture to the working board
    Move(MoveArgs),
    /// Named workspace documents
    Workspace(WorkspaceCommand),
    /// AI template generation
    Template(TemplateCommand),
    /// Replace the working board with a pasted JSON document
    Import(ImportArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct BoardCommand {
    #[command(subcommand)]
    pub action: BoardAction,
}

#[derive(Subcommand)]
pub enum BoardAction {
    /// Print the working board
    Show,
    /// Reset the working board to the default template
    Init,
}

#[derive(Args)]
pub struct ColumnCommand {
    #[command(subcommand)]
    pub action: ColumnAction,
}

#[derive(Subcommand)]
pub enum ColumnAction {
    /// Append a new column
    Add {
        #[arg(long, default_value = "Untitled")]
        title: String,
    },
    /// Remove a column by id
    Remove {
        #[arg(long)]
        id: String,
    },
    /// Rename a column
    Rename {
        #[arg(long)]
        id: String,
        #[arg(long)]
        title: String,
    },
    /// Change a column's background
    Recolor {
        #[arg(long)]
        id: String,
        #[arg(long)]
        bg: String,
        /// Color-wheel state, all four required together
        #[arg(long, requires_all = ["s", "v", "a"])]
        h: Option<f64>,
        #[arg(long)]
        s: Option<f64>,
        #[arg(long)]
        v: Option<f64>,
        #[arg(long)]
        a: Option<f64>,
    },
}

#[derive(Args)]
pub struct TaskCommand {
    #[command(subcommand)]
    pub action: TaskAction,
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Append a blank editable task to a column
    Add {
        #[arg(long)]
        column: String,
    },
    /// Delete tasks from a column by id
    Delete {
        #[arg(long)]
        column: String,
        #[arg(long = "id", required = true)]
        ids: Vec<String>,
    },
    /// Rename a task
    Rename {
        #[arg(long)]
        column: String,
        #[arg(long)]
        id: String,
        #[arg(long)]
        title: String,
    },
    /// Change a task's background
    Recolor {
        #[arg(long)]
        column: String,
        #[arg(long)]
        id: String,
        #[arg(long)]
        bg: String,
    },
}

#[derive(Args)]
pub struct MoveArgs {
    /// Composite id of the dragged item (column id or <column>-<task>)
    pub active: String,
    /// Composite id of the drop target; omit for a release outside any target
    #[arg(long)]
    pub onto: Option<String>,
    /// Pointer vertical position at release, for the last-task tie-break
    #[arg(long, requires_all = ["rect_top", "rect_height"])]
    pub pointer_y: Option<f64>,
    /// Top of the hovered task's bounding rect
    #[arg(long)]
    pub rect_top: Option<f64>,
    /// Height of the hovered task's bounding rect
    #[arg(long)]
    pub rect_height: Option<f64>,
}

#[derive(Args)]
pub struct WorkspaceCommand {
    #[command(subcommand)]
    pub action: WorkspaceAction,
}

#[derive(Subcommand)]
pub enum WorkspaceAction {
    /// Save the working board as a named document
    Save {
        #[arg(long, default_value = "default")]
        name: String,
    },
    /// Load a named document into the working board
    Load {
        #[arg(long, default_value = "default")]
        name: String,
    },
    /// List saved document names
    List,
    /// Delete a named document
    Delete {
        #[arg(long)]
        name: String,
    },
}

#[derive(Args)]
pub struct TemplateCommand {
    #[command(subcommand)]
    pub action: TemplateAction,
}

#[derive(Subcommand)]
pub enum TemplateAction {
    /// Generate a board template from a natural-language instruction
    Generate {
        #[arg(long)]
        instruction: String,
        /// Generator endpoint; overrides the config file
        #[arg(long, env = "CORKBOARD_TEMPLATE_ENDPOINT")]
        endpoint: Option<String>,
    },
}

#[derive(Args)]
pub struct ImportArgs {
    /// JSON array of columns
    #[arg(long)]
    pub json: String,
}

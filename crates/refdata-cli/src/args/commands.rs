use super::enums::parse_kind;
use clap::{Args, Subcommand};
use refdata_types::CatalogKind;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Create the data directory, config.toml and empty dataset files")]
    Init {
        #[arg(long, help = "Seed the department dataset with a small example hierarchy")]
        sample: bool,
    },

    #[command(about = "Show the department hierarchy")]
    Tree {
        #[command(flatten)]
        expansion: ExpansionArgs,

        #[arg(long, help = "Only fetch departments whose code or name contains this text")]
        keyword: Option<String>,
    },

    #[command(about = "List one page of a dataset")]
    List {
        #[arg(value_parser = parse_kind)]
        kind: CatalogKind,

        #[command(flatten)]
        paging: PagingArgs,
    },

    #[command(about = "Show a single record")]
    Show {
        #[arg(value_parser = parse_kind)]
        kind: CatalogKind,

        id: String,
    },

    #[command(about = "Create a record")]
    Create {
        #[arg(value_parser = parse_kind)]
        kind: CatalogKind,

        #[arg(long)]
        code: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        description: Option<String>,

        #[arg(long, help = "Parent record id (department only)")]
        parent: Option<String>,
    },

    #[command(about = "Edit a record; unspecified fields keep their value")]
    Edit {
        #[arg(value_parser = parse_kind)]
        kind: CatalogKind,

        id: String,

        #[arg(long)]
        code: Option<String>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long, help = "New parent record id (department only)")]
        parent: Option<String>,

        #[arg(long, conflicts_with = "parent", help = "Make the record a root")]
        clear_parent: bool,
    },

    #[command(about = "Delete a record (children are not deleted)")]
    Delete {
        #[arg(value_parser = parse_kind)]
        kind: CatalogKind,

        id: String,
    },

    #[command(about = "Show the parent candidates offered when editing a department")]
    Candidates {
        #[arg(long, help = "Department being edited (left out of the candidates)")]
        exclude: Option<String>,

        #[command(flatten)]
        paging: PagingArgs,

        #[command(flatten)]
        expansion: ExpansionArgs,
    },

    #[command(about = "Interactive department hierarchy browser")]
    Browse,
}

#[derive(Debug, Clone, Default, Args)]
pub struct PagingArgs {
    #[arg(long, default_value = "1", help = "Page number, starting at 1")]
    pub page: usize,

    #[arg(long, help = "Records per page (default from config.toml)")]
    pub page_size: Option<usize>,

    #[arg(long)]
    pub keyword: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ExpansionArgs {
    #[arg(long = "expand", value_name = "ID", help = "Expand this record (repeatable)")]
    pub expand: Vec<String>,

    #[arg(long, help = "Expand every record")]
    pub expand_all: bool,
}

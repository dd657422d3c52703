use clap::Parser;

/// Manage files in a github repository storage folder.
///
/// All flags use the GNU-style double-dash spelling (`--upload`);
/// single-dash spellings are rejected.
#[derive(Debug, Parser)]
#[command(name = "repofile", version)]
pub struct Cli {
    /// Upload a file to the repository
    #[arg(long)]
    pub upload: bool,

    /// Retrieve a file, or list the storage folder when no dst is given
    #[arg(long)]
    pub retrieve: bool,

    /// Delete a file in the repository
    #[arg(long)]
    pub delete: bool,

    /// Update a file in the repository
    #[arg(long)]
    pub update: bool,

    /// Git commit message
    #[arg(long, default_value = "")]
    pub message: String,

    /// The local filepath to be uploaded
    #[arg(long, default_value = "")]
    pub src: String,

    /// The dest filepath in the repository
    #[arg(long, default_value = "")]
    pub dst: String,
}

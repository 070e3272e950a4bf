use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// List configured webhooks
    List,
    /// Rebuild and print the context-menu entries
    Menus,
    /// Check the configuration and stored webhooks
    Validate,
    /// Dispatch a webhook as if its menu entry was clicked
    Send {
        name: String,
        #[clap(short, long)]
        selection: Option<String>,
        #[clap(short, long)]
        link: Option<String>,
        #[clap(long)]
        src: Option<String>,
    },
    /// Add a webhook and save it
    Add {
        name: String,
        url: String,
        #[clap(short, long, default_value = "POST")]
        method: String,
        /// JSON payload template; {{content}}, {{isoDateTime}} and {{localDateTime}} are substituted
        #[clap(short, long)]
        payload: Option<String>,
        /// Request header as `Name: value`
        #[clap(short = 'H', long = "header")]
        headers: Vec<String>,
        #[clap(short, long = "document-pattern")]
        document_patterns: Vec<String>,
        #[clap(short, long = "target-pattern")]
        target_patterns: Vec<String>,
    },
    /// Remove a webhook by name
    Remove {
        name: String,
    },
    /// Run the background bridge for the browser shim
    Serve {
        #[clap(short, long)]
        port: Option<u16>,
    },
    /// Ask a running bridge to change the icon indicator
    Icon {
        status: String,
        #[clap(short, long)]
        title: Option<String>,
    },
}

use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile name
    /// Optional. Profile section to read from the profile file. Default is 'default'.
    /// If the profile is not configured, built-in defaults are used.
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    /// Server base URL
    /// Optional. Overrides the profile's `server`. `/health` is appended.
    #[clap(short = 's', long, help = "server base URL")]
    server: Option<String>,

    /// Timeout in seconds
    /// Optional. Overrides the profile's `timeout`.
    #[clap(short = 't', long, help = "request timeout in seconds")]
    timeout: Option<u64>,

    #[clap(short = 'k', long, help = "Accept invalid TLS certificates")]
    insecure: bool,

    /// Verbose mode
    /// Optional. Print request line and elapsed time.
    #[clap(
        short = 'v',
        long,
        help = "Print verbose message",
        default_value = "false"
    )]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    server: Option<String>,
    timeout: Option<u64>,
    insecure: bool,
    verbose: bool,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            profile: args.profile,
            server: args.server,
            timeout: args.timeout,
            insecure: args.insecure,
            verbose: args.verbose,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn profile(&self) -> &String {
        &self.profile
    }

    pub fn server(&self) -> Option<&String> {
        self.server.as_ref()
    }

    pub fn timeout(&self) -> Option<u64> {
        self.timeout
    }

    pub fn insecure(&self) -> bool {
        self.insecure
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

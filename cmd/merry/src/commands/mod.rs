use clap::Parser;

pub mod completion;
pub mod faucet;
pub mod global;
pub mod version;

pub const ABOUT: &str = "Work with merry's local blockchain simulators";

pub const LONG_ABOUT: &str = "

merry runs throwaway Bitcoin regtest and EVM localnet simulators for
developer testing, and funds addresses on them on demand.";

pub const HEADING_GLOBAL: &str = "Options (Global)";

#[derive(Parser, Debug)]
#[command(
    name = "merry",
    about = ABOUT,
    version = version::short(),
    long_version = version::long(),
    long_about = ABOUT.to_string() + LONG_ABOUT,
    disable_help_subcommand = true,
)]
pub struct Root {
    #[clap(flatten)]
    pub global_args: global::Args,

    #[command(subcommand)]
    pub cmd: Cmd,
}

impl Root {
    pub fn new() -> Result<Self, Error> {
        Self::try_parse().map_err(Error::Clap)
    }

    pub async fn run(&self) -> Result<(), Error> {
        match &self.cmd {
            Cmd::Faucet(faucet) => faucet.run(&self.global_args).await?,
            Cmd::Version(version) => version.run(),
            Cmd::Completion(completion) => completion.run(),
        }
        Ok(())
    }
}

#[derive(Parser, Debug)]
pub enum Cmd {
    /// Fund an address on the local simulators
    Faucet(faucet::Cmd),
    /// Print version information
    Version(version::Cmd),
    /// Print shell completion code for the specified shell
    #[command(long_about = completion::LONG_ABOUT)]
    Completion(completion::Cmd),
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Faucet(#[from] faucet::Error),
    #[error(transparent)]
    Clap(#[from] clap::Error),
}

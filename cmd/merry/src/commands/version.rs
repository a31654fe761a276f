use clap::Parser;

const GIT_REVISION: &str = env!("GIT_REVISION");

#[derive(Parser, Debug, Clone)]
#[group(skip)]
pub struct Cmd;

impl Cmd {
    #[allow(clippy::unused_self)]
    pub fn run(&self) {
        println!("merry {}", long());
    }
}

pub fn pkg_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub fn short() -> String {
    format!("{} ({GIT_REVISION})", pkg_version())
}

pub fn long() -> String {
    short()
}

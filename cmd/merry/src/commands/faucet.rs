use crate::{
    address::{self, FundingTarget},
    btc,
    commands::global,
    config::state::{self, State},
    evm,
    print::Print,
};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("merry is not running")]
    NotRunning,
    #[error(transparent)]
    Address(#[from] address::Error),
    #[error(transparent)]
    Btc(#[from] btc::Error),
    #[error(transparent)]
    Evm(#[from] evm::Error),
    #[error(transparent)]
    State(#[from] state::Error),
}

#[derive(Debug, clap::Parser, Clone)]
#[group(skip)]
pub struct Cmd {
    /// Address to fund on the local simulators
    #[arg(long)]
    pub to: String,
}

impl Cmd {
    pub async fn run(&self, global_args: &global::Args) -> Result<(), Error> {
        let print = Print::new(global_args.quiet);
        let state = State::load()?;
        let wallet = evm::LocalnetWallet::new();
        let faucet = btc::FaucetClient::new();
        dispatch(&print, state.running, &self.to, &wallet, &faucet).await
    }
}

/// Route the funding request to exactly one of the two paths. `running` is
/// checked before anything else; no classification or network call happens
/// on a stopped harness.
pub async fn dispatch(
    print: &Print,
    running: bool,
    to: &str,
    wallet: &impl evm::Wallet,
    faucet: &btc::FaucetClient,
) -> Result<(), Error> {
    if !running {
        return Err(Error::NotRunning);
    }
    match address::classify(to)? {
        FundingTarget::Bitcoin(_) => {
            let tx_id = faucet.fund(to).await?;
            print.checkln(format!(
                "Successfully submitted at {}",
                btc::explorer_tx_url(&tx_id)
            ));
        }
        FundingTarget::Evm(addr) => evm::fund_address(wallet, print, addr).await?,
    }
    Ok(())
}

use alloy::{
    network::EthereumWallet,
    primitives::{address, Address, TxHash, U256},
    providers::{PendingTransactionError, Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
    sol,
    transports::TransportError,
};
use async_trait::async_trait;

use crate::print::Print;

sol! {
    #[sol(rpc)]
    interface IERC20 {
        function transfer(address to, uint256 amount) external returns (bool);
    }
}

pub const ETH_RPC_URL: &str = "http://localhost:8545";
pub const ARBITRUM_RPC_URL: &str = "http://localhost:8546";

/// Account #0 of the dev mnemonic both localnet images are seeded with.
const DEV_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// WBTC lands at the dev account's first deployment on a fresh localnet.
const WBTC_ADDRESS: Address = address!("5FbDB2315678afecb367f032d93F642f64180aa3");

/// One ETH, in wei.
const ETH_AMOUNT: u128 = 1_000_000_000_000_000_000;
/// One WBTC, in sats.
const WBTC_AMOUNT: u128 = 100_000_000;

/// The four transfers a faucet request performs, in order.
pub const FUNDING_LEGS: [Asset; 4] = [
    Asset::Eth,
    Asset::Wbtc,
    Asset::ArbitrumEth,
    Asset::ArbitrumWbtc,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Asset {
    Eth,
    Wbtc,
    ArbitrumEth,
    ArbitrumWbtc,
}

impl Asset {
    pub fn rpc_url(&self) -> &'static str {
        match self {
            Asset::Eth | Asset::Wbtc => ETH_RPC_URL,
            Asset::ArbitrumEth | Asset::ArbitrumWbtc => ARBITRUM_RPC_URL,
        }
    }

    pub fn network(&self) -> &'static str {
        match self {
            Asset::Eth | Asset::Wbtc => "Ethereum Localnet",
            Asset::ArbitrumEth | Asset::ArbitrumWbtc => "Arbitrum Localnet",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Asset::Eth | Asset::ArbitrumEth => "ETH",
            Asset::Wbtc | Asset::ArbitrumWbtc => "WBTC",
        }
    }

    /// ERC-20 contract for token assets, `None` for the native currency.
    pub fn token(&self) -> Option<Address> {
        match self {
            Asset::Eth | Asset::ArbitrumEth => None,
            Asset::Wbtc | Asset::ArbitrumWbtc => Some(WBTC_ADDRESS),
        }
    }

    /// Amount dispensed per request, in the asset's smallest unit.
    pub fn faucet_amount(&self) -> U256 {
        match self {
            Asset::Eth | Asset::ArbitrumEth => U256::from(ETH_AMOUNT),
            Asset::Wbtc | Asset::ArbitrumWbtc => U256::from(WBTC_AMOUNT),
        }
    }
}

impl std::fmt::Display for Asset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} on {}", self.symbol(), self.network())
    }
}

/// Failure of a single transfer, as reported by the wallet.
#[derive(thiserror::Error, Debug)]
pub enum SendError {
    #[error(transparent)]
    Rpc(#[from] TransportError),
    #[error(transparent)]
    Contract(#[from] alloy::contract::Error),
    #[error(transparent)]
    Confirmation(#[from] PendingTransactionError),
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to send {asset}: {source}")]
    Send { asset: Asset, source: SendError },
}

/// The wallet capability the funding procedure drives. One call per
/// network/asset pair; each call blocks until the transfer is mined.
#[async_trait]
pub trait Wallet {
    async fn send(&self, asset: Asset, to: Address, amount: U256) -> Result<TxHash, SendError>;
}

/// Wallet signing with the localnet dev account over JSON-RPC.
pub struct LocalnetWallet {
    signer: PrivateKeySigner,
}

impl Default for LocalnetWallet {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalnetWallet {
    pub fn new() -> Self {
        let signer = DEV_PRIVATE_KEY.parse().expect("dev key is a valid key");
        Self { signer }
    }
}

#[async_trait]
impl Wallet for LocalnetWallet {
    async fn send(&self, asset: Asset, to: Address, amount: U256) -> Result<TxHash, SendError> {
        tracing::debug!(%asset, %to, %amount, url = asset.rpc_url(), "sending transfer");
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(self.signer.clone()))
            .connect(asset.rpc_url())
            .await?;
        let receipt = match asset.token() {
            Some(token) => {
                IERC20::new(token, &provider)
                    .transfer(to, amount)
                    .send()
                    .await?
                    .get_receipt()
                    .await?
            }
            None => {
                provider
                    .send_transaction(TransactionRequest::default().to(to).value(amount))
                    .await?
                    .get_receipt()
                    .await?
            }
        };
        Ok(receipt.transaction_hash)
    }
}

/// Run the four funding transfers strictly in order, aborting on the first
/// failure. Later legs are never attempted after a failure.
pub async fn fund_address(
    wallet: &impl Wallet,
    print: &Print,
    to: Address,
) -> Result<(), Error> {
    for asset in FUNDING_LEGS {
        let amount = asset.faucet_amount();
        let tx_hash = wallet
            .send(asset, to, amount)
            .await
            .map_err(|source| Error::Send { asset, source })?;
        print.checkln(format!(
            "Successfully sent {amount} {} on {} at: {tx_hash}",
            asset.symbol(),
            asset.network(),
        ));
    }
    Ok(())
}

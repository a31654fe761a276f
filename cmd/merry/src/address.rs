use alloy::primitives::Address as EvmAddress;
use bitcoin::{address::NetworkUnchecked, Address as BtcAddress, Network};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("to is not an ethereum or a bitcoin regtest address: {0}")]
    UnsupportedAddress(String),
}

/// Destination of a funding request, as sniffed from the raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FundingTarget {
    /// A Bitcoin regtest address (base58 or bech32).
    Bitcoin(BtcAddress),
    /// An EVM account, valid on every EVM localnet.
    Evm(EvmAddress),
}

/// Classify `to` as a Bitcoin regtest or an EVM address.
///
/// Anything that is not a regtest address is treated as a candidate EVM
/// address: a 42-byte input has its first two bytes dropped unconditionally
/// (the usual `0x` prefix, but deliberately unvalidated) and whatever
/// 40-byte string remains must decode as hex.
pub fn classify(to: &str) -> Result<FundingTarget, Error> {
    let regtest = to
        .parse::<BtcAddress<NetworkUnchecked>>()
        .ok()
        .and_then(|addr| addr.require_network(Network::Regtest).ok());
    if let Some(addr) = regtest {
        return Ok(FundingTarget::Bitcoin(addr));
    }

    let hexed = if to.len() == 42 {
        to.get(2..).unwrap_or(to)
    } else {
        to
    };
    if hexed.len() == 40 {
        if let Ok(raw) = hex::decode(hexed) {
            return Ok(FundingTarget::Evm(EvmAddress::from_slice(&raw)));
        }
    }
    Err(Error::UnsupportedAddress(to.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;
    use bitcoin::{key::CompressedPublicKey, PublicKey};

    fn test_pubkey() -> PublicKey {
        "02c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5"
            .parse()
            .unwrap()
    }

    #[test]
    fn regtest_bech32_is_bitcoin() {
        let compressed = CompressedPublicKey::try_from(test_pubkey()).unwrap();
        let addr = BtcAddress::p2wpkh(&compressed, Network::Regtest);
        assert!(matches!(
            classify(&addr.to_string()),
            Ok(FundingTarget::Bitcoin(_))
        ));
    }

    #[test]
    fn regtest_base58_is_bitcoin() {
        let addr = BtcAddress::p2pkh(&test_pubkey(), Network::Regtest);
        assert!(matches!(
            classify(&addr.to_string()),
            Ok(FundingTarget::Bitcoin(_))
        ));
    }

    #[test]
    fn mainnet_bech32_is_rejected() {
        let compressed = CompressedPublicKey::try_from(test_pubkey()).unwrap();
        let addr = BtcAddress::p2wpkh(&compressed, Network::Bitcoin).to_string();
        let err = classify(&addr).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("to is not an ethereum or a bitcoin regtest address: {addr}")
        );
    }

    #[test]
    fn prefixed_hex_is_evm() {
        assert_eq!(
            classify("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045").unwrap(),
            FundingTarget::Evm(address!("d8dA6BF26964aF9D7eEd9e03E53415D37aA96045"))
        );
    }

    #[test]
    fn bare_hex_is_evm() {
        assert_eq!(
            classify("d8dA6BF26964aF9D7eEd9e03E53415D37aA96045").unwrap(),
            FundingTarget::Evm(address!("d8dA6BF26964aF9D7eEd9e03E53415D37aA96045"))
        );
    }

    // The first two bytes of a 42-byte input are dropped whatever they are.
    #[test]
    fn any_42_byte_prefix_is_stripped() {
        assert_eq!(
            classify("zzd8dA6BF26964aF9D7eEd9e03E53415D37aA96045").unwrap(),
            FundingTarget::Evm(address!("d8dA6BF26964aF9D7eEd9e03E53415D37aA96045"))
        );
    }

    #[test]
    fn garbage_is_rejected_with_original_input() {
        let err = classify("nonsense").unwrap_err();
        assert_eq!(
            err.to_string(),
            "to is not an ethereum or a bitcoin regtest address: nonsense"
        );
    }

    #[test]
    fn multibyte_42_byte_input_is_rejected_not_panicking() {
        // 1 + 3 + 38 = 42 bytes, with a char spanning the strip boundary.
        let input = format!("a€{}", "d".repeat(38));
        assert_eq!(input.len(), 42);
        assert!(matches!(
            classify(&input),
            Err(Error::UnsupportedAddress(_))
        ));
    }

    #[test]
    fn short_hex_is_rejected() {
        assert!(classify("d8dA6BF26964aF9D7eEd9e03E534").is_err());
    }
}

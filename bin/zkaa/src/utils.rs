use ethers::{
    types::{Address, U256},
    utils::parse_ether,
};
use std::str::FromStr;
use zkaa_primitives::Network;

/// Parses address from string
pub fn parse_address(s: &str) -> Result<Address, String> {
    Address::from_str(s).map_err(|_| format!("String {s} is not a valid address"))
}

/// Parses value in ether (e.g. `0.01`) into wei
pub fn parse_ether_value(s: &str) -> Result<U256, String> {
    parse_ether(s).map_err(|_| format!("String {s} is not a valid ether value"))
}

/// Parses Network from string
pub fn parse_network(s: &str) -> Result<Network, String> {
    Network::from_str(s).map_err(|_| format!("String {s} is not a valid network"))
}

/// Validates hex encoded private key (with or without `0x` prefix)
pub fn validate_private_key(hex_string: &str) -> Result<String, String> {
    let chars = hex_string.strip_prefix("0x").unwrap_or(hex_string).chars();

    if chars.clone().count() != 64 {
        return Err(format!("{hex_string} is not a valid private key"));
    }

    for c in chars {
        if !c.is_ascii_hexdigit() {
            return Err(format!("{hex_string} is not a valid hexadecimal string"));
        }
    }

    Ok(String::from(hex_string))
}

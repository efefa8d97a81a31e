//! A `Wallet` is a wrapper around an ethers wallet (the signing identity of deployers and
//! account owners)

use crate::{constants::rich_wallets::RICH_WALLETS, Eip712TransactionRequest};
use ethers::{
    prelude::rand,
    signers::{LocalWallet, Signer},
    types::{Address, Bytes, Signature, H256},
    utils::hex,
};

/// Wrapper around ethers wallet
#[derive(Clone, Debug)]
pub struct Wallet {
    /// Signing key of the wallet
    pub signer: LocalWallet,
}

impl Wallet {
    /// Create a new wallet from the hex encoded private key (with or without `0x` prefix)
    ///
    /// # Arguments
    /// * `private_key` - The hex encoded private key
    /// * `chain_id` - The chain id of the network to be used
    ///
    /// # Returns
    /// * `Self` - A new `Wallet` instance
    pub fn from_private_key(private_key: &str, chain_id: u64) -> eyre::Result<Self> {
        let signer = private_key.parse::<LocalWallet>()?;
        Ok(Self { signer: signer.with_chain_id(chain_id) })
    }

    /// Create one of the pre-funded wallets of the local development node
    pub fn rich(index: usize, chain_id: u64) -> eyre::Result<Self> {
        let (_, private_key) = RICH_WALLETS
            .get(index)
            .ok_or_else(|| eyre::eyre!("There is no rich wallet with index {index}"))?;
        Self::from_private_key(private_key, chain_id)
    }

    /// Builds a `Wallet` from a randomly generated key
    pub fn build_random(chain_id: u64) -> Self {
        let mut rng = rand::thread_rng();
        Self { signer: LocalWallet::new(&mut rng).with_chain_id(chain_id) }
    }

    /// Same key with another chain id
    pub fn with_chain_id(&self, chain_id: u64) -> Self {
        Self { signer: self.signer.clone().with_chain_id(chain_id) }
    }

    pub fn address(&self) -> Address {
        self.signer.address()
    }

    pub fn chain_id(&self) -> u64 {
        self.signer.chain_id()
    }

    /// Hex encoded private key
    pub fn private_key(&self) -> String {
        format!("0x{}", hex::encode(self.signer.signer().to_bytes()))
    }

    /// Signs the 32-byte digest as is (no message prefix)
    pub fn sign_digest(&self, digest: H256) -> eyre::Result<Signature> {
        Ok(self.signer.sign_hash(digest)?)
    }

    /// Signs the transaction and attaches the signature as its custom signature
    ///
    /// # Arguments
    /// * `tx` - The [Eip712TransactionRequest](Eip712TransactionRequest) with all fee fields set
    ///
    /// # Returns
    /// * `Eip712TransactionRequest` - The signed transaction, ready to be serialized
    pub fn sign_transaction(
        &self,
        tx: &Eip712TransactionRequest,
    ) -> eyre::Result<Eip712TransactionRequest> {
        let digest = tx.signed_digest()?;
        let signature = self.sign_digest(digest)?;
        Ok(tx.clone().custom_signature(Bytes::from(signature.to_vec())))
    }
}

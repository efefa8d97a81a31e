use super::{Eip712TransactionRequest, TransactionError};
use crate::{
    bytecode::hash_bytecode,
    constants::eip712::{DOMAIN_NAME, DOMAIN_VERSION, EIP712_TX_TYPE, TRANSACTION_TYPE},
    utils::address_to_u256,
};
use ethers::{
    abi::{encode as abi_encode, Token},
    types::{
        transaction::eip712::{EIP712Domain, Eip712},
        Address, U256,
    },
    utils::keccak256,
};

impl Eip712 for Eip712TransactionRequest {
    type Error = TransactionError;

    fn domain(&self) -> Result<EIP712Domain, Self::Error> {
        let chain_id = self.chain_id.ok_or(TransactionError::MissingField("chain_id"))?;
        Ok(EIP712Domain {
            name: Some(DOMAIN_NAME.into()),
            version: Some(DOMAIN_VERSION.into()),
            chain_id: Some(U256::from(chain_id)),
            verifying_contract: None,
            salt: None,
        })
    }

    fn type_hash() -> Result<[u8; 32], Self::Error> {
        Ok(keccak256(TRANSACTION_TYPE))
    }

    fn struct_hash(&self) -> Result<[u8; 32], Self::Error> {
        let from = self.from.ok_or(TransactionError::MissingField("from"))?;

        // factory dependencies are signed by their bytecode hashes
        let mut factory_deps = Vec::with_capacity(self.custom_data.factory_deps.len() * 32);
        for dep in self.custom_data.factory_deps.iter() {
            factory_deps.extend_from_slice(hash_bytecode(dep)?.as_bytes());
        }

        let (paymaster, paymaster_input) = match &self.custom_data.paymaster_params {
            Some(params) => (params.paymaster, params.paymaster_input.to_vec()),
            None => (Address::zero(), vec![]),
        };

        let tokens = [
            Token::FixedBytes(Self::type_hash()?.to_vec()),
            Token::Uint(U256::from(EIP712_TX_TYPE)),
            Token::Uint(address_to_u256(&from)),
            Token::Uint(address_to_u256(&self.to.unwrap_or_default())),
            Token::Uint(self.gas_limit.unwrap_or_default()),
            Token::Uint(self.custom_data.gas_per_pubdata),
            Token::Uint(self.effective_max_fee_per_gas()),
            Token::Uint(self.effective_max_priority_fee_per_gas()),
            Token::Uint(address_to_u256(&paymaster)),
            Token::Uint(self.nonce),
            Token::Uint(self.value),
            Token::FixedBytes(keccak256(&self.data).to_vec()),
            Token::FixedBytes(keccak256(factory_deps).to_vec()),
            Token::FixedBytes(keccak256(paymaster_input).to_vec()),
        ];

        Ok(keccak256(abi_encode(&tokens)))
    }
}

/// Typed data hash (`keccak256(0x1901 | domain separator | struct hash)`)
pub(super) fn encode(tx: &Eip712TransactionRequest) -> Result<[u8; 32], TransactionError> {
    tx.encode_eip712()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{constants::networks::LOCAL_CHAIN_ID, Wallet};
    use ethers::types::{Bytes, H256};

    fn transfer() -> Eip712TransactionRequest {
        Eip712TransactionRequest::new()
            .from("0x3333333333333333333333333333333333333333".parse().unwrap())
            .to("0x4444444444444444444444444444444444444444".parse().unwrap())
            .value(U256::from(50_000_000_000_000_000u64))
            .nonce(7.into())
            .chain_id(LOCAL_CHAIN_ID)
            .gas_limit(1_000_000.into())
            .gas_price(250_000_000.into())
    }

    #[test]
    fn transaction_type_hash() {
        assert_eq!(
            H256::from(Eip712TransactionRequest::type_hash().unwrap()),
            "0x848e1bfa1ac4e3576b728bda6721b215c70a7799a5b4866282a71bab954baac8"
                .parse::<H256>()
                .unwrap()
        );
    }

    #[test]
    fn domain_separator() {
        assert_eq!(
            H256::from(transfer().domain_separator().unwrap()),
            "0x90c05efb083b1455ff9cfdbd3792b42bea87908b3a05f46c28244311c105b5a6"
                .parse::<H256>()
                .unwrap()
        );
    }

    #[test]
    fn signed_digest_transfer() {
        assert_eq!(
            transfer().signed_digest().unwrap(),
            "0x4701a5d8427ac897a53b649b5c3dae98a182375c7588ff8578f2441f7085b436"
                .parse::<H256>()
                .unwrap()
        );
    }

    #[test]
    fn signed_digest_hashes_factory_deps() {
        let bytecode: Bytes = (0..96u8).collect::<Vec<u8>>().into();
        let tx = Eip712TransactionRequest::new()
            .from("0x3333333333333333333333333333333333333333".parse().unwrap())
            .to("0x0000000000000000000000000000000000008006".parse().unwrap())
            .data(vec![0xab, 0xcd].into())
            .chain_id(LOCAL_CHAIN_ID)
            .gas_limit(1_000_000.into())
            .gas_price(250_000_000.into())
            .factory_deps(vec![bytecode]);
        assert_eq!(
            tx.signed_digest().unwrap(),
            "0x14cfc3a4246ea71a0314d1094fa3319d486a2e953356e997a235ed930abb390d"
                .parse::<H256>()
                .unwrap()
        );

        let invalid = tx.factory_deps(vec![vec![0u8; 64].into()]);
        assert!(matches!(invalid.signed_digest(), Err(TransactionError::Bytecode(_))));
    }

    #[test]
    fn signed_digest_requires_sender_and_chain() {
        let mut tx = transfer();
        tx.chain_id = None;
        assert_eq!(tx.signed_digest(), Err(TransactionError::MissingField("chain_id")));

        let mut tx = transfer();
        tx.from = None;
        assert_eq!(tx.signed_digest(), Err(TransactionError::MissingField("from")));
    }

    #[test]
    fn digest_covers_fee_fields() {
        let base = transfer().signed_digest().unwrap();
        assert_ne!(base, transfer().gas_limit(1_000_001.into()).signed_digest().unwrap());
        assert_ne!(base, transfer().gas_price(250_000_001.into()).signed_digest().unwrap());
        assert_ne!(base, transfer().gas_per_pubdata(800.into()).signed_digest().unwrap());
        // the signature itself is not part of the digest
        let signed = transfer().custom_signature(vec![1u8; 65].into());
        assert_eq!(base, signed.signed_digest().unwrap());
    }

    #[test]
    fn signed_transaction_recovers_owner() {
        let owner = Wallet::build_random(LOCAL_CHAIN_ID);
        let tx = transfer();
        let signed = owner.sign_transaction(&tx).unwrap();

        let signature = signed.custom_data.custom_signature.clone().unwrap();
        assert_eq!(signature.len(), 65);
        let signature = ethers::types::Signature::try_from(signature.as_ref()).unwrap();
        assert_eq!(signature.recover(tx.signed_digest().unwrap()).unwrap(), owner.address());
    }
}

use super::{Eip712TransactionRequest, TransactionError};
use crate::constants::eip712::EIP712_TX_TYPE;
use ethers::{types::Bytes, utils::rlp::RlpStream};

const NUM_FIELDS: usize = 16;

/// `0x71 | rlp([nonce, maxPriorityFeePerGas, maxFeePerGas, gasLimit, to, value, data, chainId,
/// "", "", chainId, from, gasPerPubdata, factoryDeps, customSignature, paymasterParams])`
pub(super) fn rlp_encode(tx: &Eip712TransactionRequest) -> Result<Bytes, TransactionError> {
    let from = tx.from.ok_or(TransactionError::MissingField("from"))?;
    let chain_id = tx.chain_id.ok_or(TransactionError::MissingField("chain_id"))?;
    let meta = &tx.custom_data;

    let custom_signature = match &meta.custom_signature {
        Some(signature) if signature.is_empty() => return Err(TransactionError::EmptySignature),
        Some(signature) => signature.to_vec(),
        None => vec![],
    };

    let mut rlp = RlpStream::new_list(NUM_FIELDS);
    rlp.append(&tx.nonce);
    rlp.append(&tx.effective_max_priority_fee_per_gas());
    rlp.append(&tx.effective_max_fee_per_gas());
    rlp.append(&tx.gas_limit.unwrap_or_default());
    if let Some(to) = tx.to {
        rlp.append(&to);
    } else {
        rlp.append_empty_data();
    }
    rlp.append(&tx.value);
    rlp.append(&tx.data.to_vec());

    // no ECDSA signature (v, r, s), the signature travels in the custom signature field
    rlp.append(&chain_id);
    rlp.append_empty_data();
    rlp.append_empty_data();

    rlp.append(&chain_id);
    rlp.append(&from);
    rlp.append(&meta.gas_per_pubdata);

    rlp.begin_list(meta.factory_deps.len());
    for dep in meta.factory_deps.iter() {
        rlp.append(&dep.to_vec());
    }

    rlp.append(&custom_signature);

    if let Some(params) = &meta.paymaster_params {
        rlp.begin_list(2);
        rlp.append(&params.paymaster);
        rlp.append(&params.paymaster_input.to_vec());
    } else {
        rlp.begin_list(0);
    }

    let mut encoded = vec![EIP712_TX_TYPE];
    encoded.extend_from_slice(&rlp.out());
    Ok(encoded.into())
}

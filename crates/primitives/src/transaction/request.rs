use super::Eip712TransactionRequest;
use crate::constants::eip712::EIP712_TX_TYPE;
use ethers::types::{Address, Bytes, U256, U64};
use serde::{Deserialize, Serialize};

/// Transaction in the JSON form of `eth_estimateGas`/`eth_call` (with the `eip712Meta`
/// extension)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Eip712CallRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<U256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<U256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<U256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<U256>,
    pub value: U256,
    pub data: Bytes,
    #[serde(rename = "type")]
    pub transaction_type: U64,
    pub eip712_meta: Eip712MetaRequest,
}

/// Rollup specific fields, bytecodes are sent as arrays of bytes
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Eip712MetaRequest {
    pub gas_per_pubdata: U256,
    pub factory_deps: Vec<Vec<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_signature: Option<Bytes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paymaster_params: Option<PaymasterParamsRequest>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymasterParamsRequest {
    pub paymaster: Address,
    pub paymaster_input: Vec<u8>,
}

impl From<&Eip712TransactionRequest> for Eip712CallRequest {
    fn from(tx: &Eip712TransactionRequest) -> Self {
        let meta = &tx.custom_data;
        Self {
            from: tx.from,
            to: tx.to,
            gas: tx.gas_limit,
            gas_price: tx.gas_price,
            max_fee_per_gas: tx.max_fee_per_gas,
            max_priority_fee_per_gas: tx.max_priority_fee_per_gas,
            value: tx.value,
            data: tx.data.clone(),
            transaction_type: U64::from(EIP712_TX_TYPE),
            eip712_meta: Eip712MetaRequest {
                gas_per_pubdata: meta.gas_per_pubdata,
                factory_deps: meta.factory_deps.iter().map(|dep| dep.to_vec()).collect(),
                custom_signature: meta.custom_signature.clone(),
                paymaster_params: meta.paymaster_params.as_ref().map(|params| {
                    PaymasterParamsRequest {
                        paymaster: params.paymaster,
                        paymaster_input: params.paymaster_input.to_vec(),
                    }
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PaymasterParams;
    use serde_json::json;

    #[test]
    fn call_request_json() {
        let tx = Eip712TransactionRequest::new()
            .from("0x3333333333333333333333333333333333333333".parse().unwrap())
            .to("0x4444444444444444444444444444444444444444".parse().unwrap())
            .value(1.into())
            .gas_price(250_000_000.into())
            .factory_deps(vec![vec![1u8, 2, 3].into()]);

        let value = serde_json::to_value(tx.call_request()).unwrap();
        assert_eq!(value["type"], json!("0x71"));
        assert_eq!(value["value"], json!("0x1"));
        assert_eq!(value["gasPrice"], json!("0xee6b280"));
        assert_eq!(value["from"], json!("0x3333333333333333333333333333333333333333"));
        assert_eq!(value["eip712Meta"]["gasPerPubdata"], json!("0xc350"));
        assert_eq!(value["eip712Meta"]["factoryDeps"], json!([[1, 2, 3]]));
        assert!(value.get("gas").is_none());
        assert!(value["eip712Meta"].get("customSignature").is_none());
        assert!(value["eip712Meta"].get("paymasterParams").is_none());
    }

    #[test]
    fn call_request_paymaster() {
        let tx = Eip712TransactionRequest::new().paymaster_params(PaymasterParams {
            paymaster: "0x5555555555555555555555555555555555555555".parse().unwrap(),
            paymaster_input: vec![9u8].into(),
        });

        let value = serde_json::to_value(tx.call_request()).unwrap();
        assert_eq!(
            value["eip712Meta"]["paymasterParams"],
            json!({
                "paymaster": "0x5555555555555555555555555555555555555555",
                "paymasterInput": [9]
            })
        );
    }
}

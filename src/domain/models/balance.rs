//! Balance Records
//!
//! Plain data carried between the HTTP layer, the balance-data provider and
//! the response sent back to the client.

use serde::{Deserialize, Deserializer, Serialize};

/// Decode a missing or `null` provider field as the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Incoming balance lookup request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceRequest {
    pub address: String,
    pub chain: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub timestamp: String,
}

/// ERC20 token balance as reported by the balance-data provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBalance {
    #[serde(default, deserialize_with = "null_as_default")]
    pub token_address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub symbol: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub decimals: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub balance: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub possible_spam: bool,
}

/// Native balance as reported by the balance-data provider, in the smallest unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeBalance {
    #[serde(default, deserialize_with = "null_as_default")]
    pub balance: String,
}

/// Balance lookup response sent to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceResponse {
    #[serde(rename = "account_address")]
    pub address: String,
    pub chain: String,
    pub block_number: u64,
    #[serde(rename = "native_asset")]
    pub asset: String,
    #[serde(rename = "native_asset_name")]
    pub asset_name: String,
    pub native_checker_url: String,
    #[serde(rename = "native_balance")]
    pub balance: f64,
    pub erc20_tokens: Vec<Erc20TokenResponse>,
}

/// Single ERC20 entry of a [`BalanceResponse`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Erc20TokenResponse {
    #[serde(rename = "erc20_token_name")]
    pub name: String,
    #[serde(rename = "erc20_token_symbol")]
    pub symbol: String,
    #[serde(rename = "erc20_token_contract_address")]
    pub contract_address: String,
    #[serde(rename = "erc20_token_balance")]
    pub balance: String,
    #[serde(rename = "erc20_token_checker_url")]
    pub checker_url: String,
    #[serde(rename = "erc20_possible_spam")]
    pub possible_spam: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_date_fields_are_optional() {
        let request: BalanceRequest =
            serde_json::from_str(r#"{"address":"0xabc","chain":"eth"}"#).unwrap();
        assert_eq!(request.chain, "eth");
        assert!(request.date.is_empty());
        assert!(request.timestamp.is_empty());
    }

    #[test]
    fn test_token_balance_from_provider_json() {
        let json = r#"{
            "token_address": "0xdac17f958d2ee523a2206206994597c13d831ec7",
            "name": "Tether USD",
            "symbol": "USDT",
            "logo": null,
            "thumbnail": null,
            "decimals": 6,
            "balance": "1500000",
            "possible_spam": false
        }"#;
        let token: TokenBalance = serde_json::from_str(json).unwrap();
        assert_eq!(token.symbol, "USDT");
        assert_eq!(token.decimals, 6);
        assert!(token.logo.is_none());
    }

    #[test]
    fn test_token_response_field_names() {
        let token = Erc20TokenResponse {
            name: "Tether USD".to_string(),
            symbol: "USDT".to_string(),
            contract_address: "0xdac17f958d2ee523a2206206994597c13d831ec7".to_string(),
            balance: "1500000".to_string(),
            checker_url: "https://etherscan.io/tokencheck-tool".to_string(),
            possible_spam: true,
        };
        let value = serde_json::to_value(&token).unwrap();
        assert_eq!(value["erc20_token_name"], "Tether USD");
        assert_eq!(value["erc20_token_contract_address"], "0xdac17f958d2ee523a2206206994597c13d831ec7");
        assert_eq!(value["erc20_possible_spam"], true);
    }

    #[test]
    fn test_token_balance_null_fields_decode_as_empty() {
        let json = r#"{
            "token_address": "0x0000000000000000000000000000000000000001",
            "name": null,
            "symbol": null,
            "logo": null,
            "thumbnail": null,
            "decimals": null,
            "balance": null,
            "possible_spam": null
        }"#;
        let token: TokenBalance = serde_json::from_str(json).unwrap();
        assert_eq!(token.token_address, "0x0000000000000000000000000000000000000001");
        assert!(token.name.is_empty());
        assert!(token.symbol.is_empty());
        assert!(token.balance.is_empty());
        assert_eq!(token.decimals, 0);
        assert!(!token.possible_spam);
    }

    #[test]
    fn test_token_balance_missing_fields_decode_as_empty() {
        let token: TokenBalance = serde_json::from_str(r#"{"symbol":"WETH"}"#).unwrap();
        assert_eq!(token.symbol, "WETH");
        assert!(token.name.is_empty());
        assert!(token.token_address.is_empty());
    }

    #[test]
    fn test_native_balance_null_is_empty() {
        let native: NativeBalance = serde_json::from_str(r#"{"balance":null}"#).unwrap();
        assert!(native.balance.is_empty());
    }
}

//! Payloads for the framework token module (`0x3::token`)
//!
//! Collections and tokens must exist before they can back a loan.

use types::{AccountAddress, EntryFunctionId, EntryFunctionPayload, ModuleId, MoveValue};

/// A token to mint with `create_token_script`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewToken {
    pub collection: String,
    pub name: String,
    pub description: String,
    pub balance: u64,
    pub maximum: u64,
    pub uri: String,
    pub royalty_payee: AccountAddress,
    pub royalty_points_denominator: u64,
    pub royalty_points_numerator: u64,
    pub mutate_setting: Vec<bool>,
    pub property_keys: Vec<String>,
    pub property_values: Vec<Vec<u8>>,
    pub property_types: Vec<String>,
}

/// Builds `0x3::token` payloads
#[derive(Debug, Clone)]
pub struct TokenPayloads {
    module: ModuleId,
}

impl TokenPayloads {
    pub fn new() -> Self {
        Self {
            module: ModuleId {
                address: AccountAddress::THREE,
                name: "token".to_string(),
            },
        }
    }

    /// `create_collection_script(name, description, uri, maximum, mutate_setting)`
    pub fn create_collection(
        &self,
        name: &str,
        description: &str,
        uri: &str,
        maximum: u64,
        mutate_setting: [bool; 3],
    ) -> EntryFunctionPayload {
        EntryFunctionPayload::new(
            self.function("create_collection_script"),
            vec![
                name.into(),
                description.into(),
                uri.into(),
                maximum.into(),
                mutate_setting.to_vec().into(),
            ],
        )
    }

    /// `create_token_script(...)` with arguments in declaration order
    pub fn create_token(&self, token: &NewToken) -> EntryFunctionPayload {
        let property_values = token
            .property_values
            .iter()
            .cloned()
            .map(MoveValue::Bytes)
            .collect();

        EntryFunctionPayload::new(
            self.function("create_token_script"),
            vec![
                token.collection.as_str().into(),
                token.name.as_str().into(),
                token.description.as_str().into(),
                token.balance.into(),
                token.maximum.into(),
                token.uri.as_str().into(),
                token.royalty_payee.into(),
                token.royalty_points_denominator.into(),
                token.royalty_points_numerator.into(),
                token.mutate_setting.clone().into(),
                token.property_keys.clone().into(),
                MoveValue::Vector(property_values),
                token.property_types.clone().into(),
            ],
        )
    }

    fn function(&self, name: &str) -> EntryFunctionId {
        EntryFunctionId {
            module: self.module.clone(),
            function: name.to_string(),
        }
    }
}

impl Default for TokenPayloads {
    fn default() -> Self {
        Self::new()
    }
}

// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Verified contract endpoints

use alloy_primitives::Address;

use crate::{
    fields::{Action, ApiModule, Field, Query},
    render_address,
};

/// ABI of a verified contract
pub fn get_contract_abi(address: &Address) -> String {
    Query::new(ApiModule::Contract, Action::GetAbi)
        .field(Field::Address, render_address(address))
        .finish()
}

/// Source code and compiler settings of a verified contract
pub fn get_contract_source_code(address: &Address) -> String {
    Query::new(ApiModule::Contract, Action::GetSourceCode)
        .field(Field::Address, render_address(address))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_fragments() {
        let address = Address::repeat_byte(0x42);
        let rendered = address.to_checksum(None);
        assert_eq!(
            get_contract_abi(&address),
            format!("module=contract&action=getabi&address={rendered}")
        );
        assert_eq!(
            get_contract_source_code(&address),
            format!("module=contract&action=getsourcecode&address={rendered}")
        );
    }
}

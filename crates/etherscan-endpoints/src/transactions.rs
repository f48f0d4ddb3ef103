// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Transaction status endpoints

use alloy_primitives::TxHash;

use crate::{
    fields::{Action, ApiModule, Field, Query},
    render_hash,
};

/// Execution error status of a contract call
pub fn get_contract_execution_status(txhash: &TxHash) -> String {
    Query::new(ApiModule::Transaction, Action::GetStatus)
        .field(Field::TxHash, render_hash(txhash))
        .finish()
}

/// Receipt status of a post-Byzantium transaction
pub fn get_tx_receipt_status(txhash: &TxHash) -> String {
    Query::new(ApiModule::Transaction, Action::GetTxReceiptStatus)
        .field(Field::TxHash, render_hash(txhash))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_fragments() {
        let hash = TxHash::repeat_byte(0x15);
        let rendered = format!("0x{}", "15".repeat(32));
        assert_eq!(
            get_contract_execution_status(&hash),
            format!("module=transaction&action=getstatus&txhash={rendered}")
        );
        assert_eq!(
            get_tx_receipt_status(&hash),
            format!("module=transaction&action=gettxreceiptstatus&txhash={rendered}")
        );
    }
}

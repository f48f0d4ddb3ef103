// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Gas tracker endpoints

use crate::fields::{Action, ApiModule, Field, Query};

/// Estimated confirmation time, in seconds, for a gas price given in wei
pub fn get_est_confirmation_time(gas_price: u128) -> String {
    Query::new(ApiModule::GasTracker, Action::GasEstimate)
        .field(Field::GasPriceWei, gas_price)
        .finish()
}

/// Current safe, proposed and fast gas prices
pub fn get_gas_oracle() -> String {
    Query::new(ApiModule::GasTracker, Action::GasOracle).finish()
}

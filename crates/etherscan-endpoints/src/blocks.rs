// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Block endpoints

use crate::{
    fields::{Action, ApiModule, Field, Query},
    params::Closest,
};

/// Block and uncle rewards of a block
pub fn get_block_reward_by_block_number(block_no: u64) -> String {
    Query::new(ApiModule::Block, Action::GetBlockReward)
        .field(Field::BlockNo, block_no)
        .finish()
}

/// Estimated time remaining until a future block is mined
pub fn get_est_block_countdown_time_by_block_number(block_no: u64) -> String {
    Query::new(ApiModule::Block, Action::GetBlockCountdown)
        .field(Field::BlockNo, block_no)
        .finish()
}

/// Block number mined closest to a unix timestamp
pub fn get_block_number_by_timestamp(timestamp: u64, closest: Closest) -> String {
    Query::new(ApiModule::Block, Action::GetBlockNoByTime)
        .field(Field::Timestamp, timestamp)
        .field(Field::Closest, closest)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_fragments() {
        assert_eq!(
            get_block_reward_by_block_number(2_165_403),
            "module=block&action=getblockreward&blockno=2165403"
        );
        assert_eq!(
            get_est_block_countdown_time_by_block_number(16_701_588),
            "module=block&action=getblockcountdown&blockno=16701588"
        );
        assert_eq!(
            get_block_number_by_timestamp(1_578_638_524, Closest::Before),
            "module=block&action=getblocknobytime&timestamp=1578638524&closest=before"
        );
    }
}

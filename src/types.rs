multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Freeze Status — snapshot returned by getFreezeStatus
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct FreezeStatus {
    /// Block timestamp at which the current lock lapses (0 if no lock is pending)
    pub locked_until: u64,
    /// True while the block timestamp is strictly before `locked_until`
    pub frozen: bool,
    /// Seconds left until automatic unfreeze (0 when not frozen)
    pub remaining: u64,
    /// Active freeze votes in the current round
    pub votes_count: u32,
}

impl FreezeStatus {
    pub fn at(now: u64, locked_until: u64, votes_count: u32) -> Self {
        let frozen = now < locked_until;
        FreezeStatus {
            locked_until,
            frozen,
            remaining: if frozen { locked_until - now } else { 0 },
            votes_count,
        }
    }
}

// ============================================================
// Error messages surfaced through require! / sc_panic!
// ============================================================

// ── Authorization ──
pub const ERR_NOT_OWNER: &str = "Caller is not the owner";
pub const ERR_NOT_GUARDIAN: &str = "Caller is not a guardian";

// ── Membership ──
pub const ERR_ALREADY_GUARDIAN: &str = "Address is already a guardian";
pub const ERR_NOT_A_GUARDIAN: &str = "Address is not a guardian";

// ── Voting ──
pub const ERR_VOTE_ALREADY_CAST: &str = "Freeze vote already cast";
pub const ERR_VOTE_NOT_FOUND: &str = "No active freeze vote";

// ── Lock state ──
pub const ERR_FREEZE_ACTIVE: &str = "Wallet is frozen";
pub const ERR_NOT_FROZEN: &str = "Wallet is not frozen";

// ── Validation ──
pub const ERR_ZERO_ADDRESS: &str = "Zero address not allowed";
pub const ERR_INVALID_REQUIRED_CONFIRMATIONS: &str = "Invalid required confirmations";

// ── Delegated ──
pub const ERR_TRANSFER_FAILED: &str = "Transfer failed";

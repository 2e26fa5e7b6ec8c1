#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod freeze_wallet_proxy;
pub mod types;

use errors::*;
use types::FreezeStatus;

// ============================================================
// Contract
// ============================================================

/// Custodial wallet whose owner controls the funds, while a set of
/// guardians can vote to freeze every privileged operation for a
/// fixed window.
#[multiversx_sc::contract]
pub trait FreezeWallet {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        required_confirmations: u32,
        freeze_duration: u64,
        guardians: MultiValueEncoded<ManagedAddress>,
    ) {
        let caller = self.blockchain().get_caller();
        self.owner().set(&caller);

        for guardian in guardians {
            self.insert_guardian(&guardian);
        }

        self.require_valid_confirmations(required_confirmations);
        self.required_confirmations().set(required_confirmations);
        self.freeze_duration().set(freeze_duration);
        self.votes_count().set(0u32);
        self.locked_until().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: deposit
    // Anyone can fund the wallet with EGLD or a fungible ESDT.
    // ========================================================

    #[endpoint(deposit)]
    #[payable("*")]
    fn deposit(&self) {
        let caller = self.blockchain().get_caller();
        let (token, amount) = self.call_value().egld_or_single_fungible_esdt();
        self.received_asset_event(&caller, &token, &amount);
    }

    // ========================================================
    // GUARDIAN REGISTRY — owner-managed membership
    // ========================================================

    #[endpoint(addGuardian)]
    fn add_guardian(&self, guardian: ManagedAddress) {
        self.require_owner();
        self.insert_guardian(&guardian);
    }

    /// Refused while it would leave fewer guardians than the threshold;
    /// lower the threshold first.
    #[endpoint(removeGuardian)]
    fn remove_guardian(&self, guardian: ManagedAddress) {
        self.require_owner();
        require!(self.guardians().contains(&guardian), ERR_NOT_A_GUARDIAN);

        // The threshold must stay reachable by the remaining guardians
        let remaining = self.guardian_count() - 1;
        require!(
            remaining >= self.required_confirmations().get(),
            ERR_INVALID_REQUIRED_CONFIRMATIONS
        );

        self.guardians().swap_remove(&guardian);
        self.purge_vote(&guardian);

        self.guardian_removed_event(&guardian);
    }

    fn insert_guardian(&self, guardian: &ManagedAddress) {
        require!(!guardian.is_zero(), ERR_ZERO_ADDRESS);
        require!(self.guardians().insert(guardian.clone()), ERR_ALREADY_GUARDIAN);

        self.guardian_added_event(guardian);
    }

    fn guardian_count(&self) -> u32 {
        self.guardians().len() as u32
    }

    // ========================================================
    // VOTE TALLY — one active freeze vote per guardian
    // ========================================================

    #[endpoint(voteFreeze)]
    fn vote_freeze(&self) {
        let caller = self.blockchain().get_caller();
        require!(self.guardians().contains(&caller), ERR_NOT_GUARDIAN);
        require!(!self.has_voted(&caller).get(), ERR_VOTE_ALREADY_CAST);

        self.has_voted(&caller).set(true);
        let votes = self.votes_count().get() + 1;
        self.votes_count().set(votes);

        self.guardian_voted_event(&caller);

        if votes >= self.required_confirmations().get() {
            self.activate_freeze(votes);
            self.clear_votes();
        }
    }

    /// Revoking only affects the running tally; an active freeze is untouched.
    #[endpoint(revokeFreezeVote)]
    fn revoke_freeze_vote(&self) {
        let caller = self.blockchain().get_caller();
        require!(self.guardians().contains(&caller), ERR_NOT_GUARDIAN);
        require!(self.has_voted(&caller).get(), ERR_VOTE_NOT_FOUND);

        self.drop_vote(&caller);
    }

    /// Called on guardian removal so a stale vote cannot linger in the count.
    fn purge_vote(&self, guardian: &ManagedAddress) {
        if self.has_voted(guardian).get() {
            self.drop_vote(guardian);
        }
    }

    fn drop_vote(&self, guardian: &ManagedAddress) {
        self.has_voted(guardian).clear();
        self.votes_count().update(|votes| *votes = votes.saturating_sub(1));

        self.guardian_vote_revoked_event(guardian);
    }

    /// Starts a fresh voting round. Only current guardians can hold a vote,
    /// since removal purges the removed guardian's flag.
    fn clear_votes(&self) {
        for guardian in self.guardians().iter() {
            self.has_voted(&guardian).clear();
        }
        self.votes_count().set(0u32);
    }

    // ========================================================
    // FREEZE CLOCK — lazy, timestamp-driven lock
    // ========================================================

    fn activate_freeze(&self, votes: u32) {
        let now = self.blockchain().get_block_timestamp();
        let locked_until = now.saturating_add(self.freeze_duration().get());
        self.locked_until().set(locked_until);

        self.frozen_event(locked_until, votes);
    }

    /// Clears an expired lock before reporting the lock state.
    /// Every privileged path goes through here.
    fn is_locked(&self) -> bool {
        let locked_until = self.locked_until().get();
        if locked_until == 0 {
            return false;
        }

        let now = self.blockchain().get_block_timestamp();
        if now >= locked_until {
            self.locked_until().set(0u64);
            // zero address marks an automatic unfreeze
            self.unfrozen_event(&ManagedAddress::zero());
            return false;
        }

        true
    }

    /// Maintenance call: anyone can settle an expired freeze.
    #[endpoint(reconcileFreeze)]
    fn reconcile_freeze(&self) -> bool {
        self.is_locked()
    }

    #[endpoint(unfreeze)]
    fn unfreeze(&self) {
        self.require_owner();
        require!(self.is_locked(), ERR_NOT_FROZEN);

        self.locked_until().set(0u64);

        let caller = self.blockchain().get_caller();
        self.unfrozen_event(&caller);
    }

    // ========================================================
    // GATE — owner-only operations, refused while frozen
    // ========================================================

    #[endpoint(withdrawEgld)]
    fn withdraw_egld(&self, to: ManagedAddress, amount: BigUint) {
        self.require_unfrozen_owner();
        require!(!to.is_zero(), ERR_ZERO_ADDRESS);

        let balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        require!(amount <= balance, ERR_TRANSFER_FAILED);

        self.send().direct_egld(&to, &amount);
        self.asset_withdrawn_event(&to, &amount);
    }

    #[endpoint(withdrawToken)]
    fn withdraw_token(&self, token: TokenIdentifier, to: ManagedAddress, amount: BigUint) {
        self.require_unfrozen_owner();
        require!(!to.is_zero(), ERR_ZERO_ADDRESS);

        let balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(token.clone()), 0);
        require!(amount > 0u64 && amount <= balance, ERR_TRANSFER_FAILED);

        self.send().direct_esdt(&to, &token, 0, &amount);
        self.token_withdrawn_event(&token, &to, &amount);
    }

    /// Synchronous call on the wallet's behalf. A failing callee aborts the
    /// whole transaction with the callee's own error message.
    #[endpoint(execute)]
    fn execute(
        &self,
        target: ManagedAddress,
        value: BigUint,
        function: ManagedBuffer,
        args: MultiValueEncoded<ManagedBuffer>,
    ) -> MultiValueEncoded<ManagedBuffer> {
        self.require_unfrozen_owner();
        require!(!target.is_zero(), ERR_ZERO_ADDRESS);

        let results = self
            .tx()
            .to(&target)
            .egld(&value)
            .raw_call(function.clone())
            .arguments_raw(args.into_vec_of_buffers().into())
            .returns(ReturnsRawResult)
            .sync_call();

        self.action_executed_event(&target, &value, &function);

        results.into()
    }

    fn require_unfrozen_owner(&self) {
        self.require_owner();
        require!(!self.is_locked(), ERR_FREEZE_ACTIVE);
    }

    // ========================================================
    // CONFIGURATION — owner-only
    // ========================================================

    #[endpoint(setFreezeDuration)]
    fn set_freeze_duration(&self, freeze_duration: u64) {
        self.require_owner();

        let old = self.freeze_duration().get();
        self.freeze_duration().set(freeze_duration);

        self.freeze_duration_updated_event(old, freeze_duration);
    }

    /// A lowered threshold is not applied to votes already cast until the
    /// next vote arrives.
    #[endpoint(setRequiredConfirmations)]
    fn set_required_confirmations(&self, required_confirmations: u32) {
        self.require_owner();
        self.require_valid_confirmations(required_confirmations);

        let old = self.required_confirmations().get();
        self.required_confirmations().set(required_confirmations);

        self.required_confirmations_updated_event(old, required_confirmations);
    }

    #[endpoint(changeOwner)]
    fn change_owner(&self, new_owner: ManagedAddress) {
        self.require_owner();
        require!(!new_owner.is_zero(), ERR_ZERO_ADDRESS);

        let old = self.owner().get();
        self.owner().set(&new_owner);

        self.owner_changed_event(&old, &new_owner);
    }

    fn require_owner(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.owner().get(), ERR_NOT_OWNER);
    }

    fn require_valid_confirmations(&self, required_confirmations: u32) {
        require!(
            required_confirmations > 0 && required_confirmations <= self.guardian_count(),
            ERR_INVALID_REQUIRED_CONFIRMATIONS
        );
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getOwner)]
    fn get_owner(&self) -> ManagedAddress {
        self.owner().get()
    }

    #[view(getGuardians)]
    fn get_guardians(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for guardian in self.guardians().iter() {
            result.push(guardian);
        }
        result
    }

    #[view(getGuardianCount)]
    fn get_guardian_count(&self) -> u32 {
        self.guardian_count()
    }

    #[view(isGuardian)]
    fn is_guardian(&self, address: ManagedAddress) -> bool {
        self.guardians().contains(&address)
    }

    #[view(hasGuardianVoted)]
    fn has_guardian_voted(&self, guardian: ManagedAddress) -> bool {
        self.has_voted(&guardian).get()
    }

    #[view(getVotesCount)]
    fn get_votes_count(&self) -> u32 {
        self.votes_count().get()
    }

    /// Recounts active votes by scanning the registry. Must always equal
    /// getVotesCount.
    #[view(countActiveVotes)]
    fn count_active_votes(&self) -> u32 {
        let mut count = 0u32;
        for guardian in self.guardians().iter() {
            if self.has_voted(&guardian).get() {
                count += 1;
            }
        }
        count
    }

    #[view(getRequiredConfirmations)]
    fn get_required_confirmations(&self) -> u32 {
        self.required_confirmations().get()
    }

    #[view(getFreezeDuration)]
    fn get_freeze_duration(&self) -> u64 {
        self.freeze_duration().get()
    }

    #[view(getLockedUntil)]
    fn get_locked_until(&self) -> u64 {
        self.locked_until().get()
    }

    /// Does not settle an expired lock; use reconcileFreeze for that.
    #[view(isFrozen)]
    fn is_frozen(&self) -> bool {
        self.blockchain().get_block_timestamp() < self.locked_until().get()
    }

    #[view(getFreezeStatus)]
    fn get_freeze_status(&self) -> FreezeStatus {
        FreezeStatus::at(
            self.blockchain().get_block_timestamp(),
            self.locked_until().get(),
            self.votes_count().get(),
        )
    }

    #[view(getWalletConfig)]
    fn get_wallet_config(&self) -> MultiValue4<ManagedAddress, u32, u64, u32> {
        let owner = self.owner().get();
        let required = self.required_confirmations().get();
        let duration = self.freeze_duration().get();
        (owner, required, duration, self.guardian_count()).into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("ownerChanged")]
    fn owner_changed_event(
        &self,
        #[indexed] old_owner: &ManagedAddress,
        #[indexed] new_owner: &ManagedAddress,
    );

    #[event("guardianAdded")]
    fn guardian_added_event(&self, #[indexed] guardian: &ManagedAddress);

    #[event("guardianRemoved")]
    fn guardian_removed_event(&self, #[indexed] guardian: &ManagedAddress);

    #[event("guardianVoted")]
    fn guardian_voted_event(&self, #[indexed] guardian: &ManagedAddress);

    #[event("guardianVoteRevoked")]
    fn guardian_vote_revoked_event(&self, #[indexed] guardian: &ManagedAddress);

    #[event("frozen")]
    fn frozen_event(&self, #[indexed] locked_until: u64, #[indexed] votes: u32);

    /// `by` is the zero address when the freeze lapsed on its own.
    #[event("unfrozen")]
    fn unfrozen_event(&self, #[indexed] by: &ManagedAddress);

    #[event("receivedAsset")]
    fn received_asset_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    );

    #[event("assetWithdrawn")]
    fn asset_withdrawn_event(&self, #[indexed] to: &ManagedAddress, amount: &BigUint);

    #[event("tokenWithdrawn")]
    fn token_withdrawn_event(
        &self,
        #[indexed] token: &TokenIdentifier,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("actionExecuted")]
    fn action_executed_event(
        &self,
        #[indexed] target: &ManagedAddress,
        #[indexed] value: &BigUint,
        function: &ManagedBuffer,
    );

    #[event("freezeDurationUpdated")]
    fn freeze_duration_updated_event(&self, #[indexed] old: u64, #[indexed] new: u64);

    #[event("requiredConfirmationsUpdated")]
    fn required_confirmations_updated_event(&self, #[indexed] old: u32, #[indexed] new: u32);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("requiredConfirmations")]
    fn required_confirmations(&self) -> SingleValueMapper<u32>;

    #[storage_mapper("freezeDuration")]
    fn freeze_duration(&self) -> SingleValueMapper<u64>;

    // ── Guardians ──

    #[storage_mapper("guardians")]
    fn guardians(&self) -> UnorderedSetMapper<ManagedAddress>;

    // ── Votes ──

    #[storage_mapper("hasVoted")]
    fn has_voted(&self, guardian: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("votesCount")]
    fn votes_count(&self) -> SingleValueMapper<u32>;

    // ── Freeze ──

    #[storage_mapper("lockedUntil")]
    fn locked_until(&self) -> SingleValueMapper<u64>;
}

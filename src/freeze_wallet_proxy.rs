use multiversx_sc::proxy_imports::*;

use crate::types::FreezeStatus;

pub struct FreezeWalletProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for FreezeWalletProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = FreezeWalletProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        FreezeWalletProxyMethods { wrapped_tx: tx }
    }
}

pub struct FreezeWalletProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> FreezeWalletProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<u32>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>,
    >(
        self,
        required_confirmations: Arg0,
        freeze_duration: Arg1,
        guardians: Arg2,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&required_confirmations)
            .argument(&freeze_duration)
            .argument(&guardians)
            .original_result()
    }
}

impl<Env, From, To, Gas> FreezeWalletProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

impl<Env, From, To, Gas> FreezeWalletProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    // ── Funding ──

    pub fn deposit(self) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("deposit")
            .original_result()
    }

    // ── Guardian registry ──

    pub fn add_guardian<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        guardian: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("addGuardian")
            .argument(&guardian)
            .original_result()
    }

    pub fn remove_guardian<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        guardian: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("removeGuardian")
            .argument(&guardian)
            .original_result()
    }

    // ── Votes ──

    pub fn vote_freeze(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("voteFreeze")
            .original_result()
    }

    pub fn revoke_freeze_vote(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("revokeFreezeVote")
            .original_result()
    }

    // ── Freeze ──

    pub fn reconcile_freeze(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("reconcileFreeze")
            .original_result()
    }

    pub fn unfreeze(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("unfreeze")
            .original_result()
    }

    // ── Gated operations ──

    pub fn withdraw_egld<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        to: Arg0,
        amount: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdrawEgld")
            .argument(&to)
            .argument(&amount)
            .original_result()
    }

    pub fn withdraw_token<
        Arg0: ProxyArg<TokenIdentifier<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        token: Arg0,
        to: Arg1,
        amount: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdrawToken")
            .argument(&token)
            .argument(&to)
            .argument(&amount)
            .original_result()
    }

    pub fn execute<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg3: ProxyArg<MultiValueEncoded<Env::Api, ManagedBuffer<Env::Api>>>,
    >(
        self,
        target: Arg0,
        value: Arg1,
        function: Arg2,
        args: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedBuffer<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("execute")
            .argument(&target)
            .argument(&value)
            .argument(&function)
            .argument(&args)
            .original_result()
    }

    // ── Configuration ──

    pub fn set_freeze_duration<Arg0: ProxyArg<u64>>(
        self,
        freeze_duration: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setFreezeDuration")
            .argument(&freeze_duration)
            .original_result()
    }

    pub fn set_required_confirmations<Arg0: ProxyArg<u32>>(
        self,
        required_confirmations: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setRequiredConfirmations")
            .argument(&required_confirmations)
            .original_result()
    }

    pub fn change_owner<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        new_owner: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("changeOwner")
            .argument(&new_owner)
            .original_result()
    }

    // ── Views ──

    pub fn owner(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getOwner")
            .original_result()
    }

    pub fn guardians(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getGuardians")
            .original_result()
    }

    pub fn guardian_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u32> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getGuardianCount")
            .original_result()
    }

    pub fn is_guardian<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isGuardian")
            .argument(&address)
            .original_result()
    }

    pub fn has_guardian_voted<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        guardian: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("hasGuardianVoted")
            .argument(&guardian)
            .original_result()
    }

    pub fn votes_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u32> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVotesCount")
            .original_result()
    }

    pub fn count_active_votes(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u32> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("countActiveVotes")
            .original_result()
    }

    pub fn required_confirmations(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u32> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRequiredConfirmations")
            .original_result()
    }

    pub fn freeze_duration(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getFreezeDuration")
            .original_result()
    }

    pub fn locked_until(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getLockedUntil")
            .original_result()
    }

    pub fn is_frozen(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isFrozen")
            .original_result()
    }

    pub fn freeze_status(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, FreezeStatus> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getFreezeStatus")
            .original_result()
    }

    pub fn wallet_config(
        self,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValue4<ManagedAddress<Env::Api>, u32, u64, u32>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getWalletConfig")
            .original_result()
    }
}

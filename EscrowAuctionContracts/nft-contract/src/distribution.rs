use crate::{DataKey, NFTContract, NFTContractArgs, NFTContractClient, NftError};
use soroban_sdk::{contractimpl, symbol_short, Address, Env};

#[contractimpl]
impl NFTContract {
    pub fn owner_of(env: Env, token_id: u32) -> Result<Address, NftError> {
        Ok(Self::load(&env, token_id)?.owner)
    }

    /// Grant or revoke `operator` the right to move every token held by `owner`.
    pub fn set_approval_for_all(
        env: Env,
        owner: Address,
        operator: Address,
        approved: bool,
    ) -> Result<(), NftError> {
        owner.require_auth();

        if owner == operator {
            return Err(NftError::Unauthorized);
        }

        env.storage().persistent().set(
            &DataKey::Approval(owner.clone(), operator.clone()),
            &approved,
        );

        env.events()
            .publish((symbol_short!("APPROVAL"), &owner, &operator), approved);

        Ok(())
    }

    pub fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool {
        Self::approved(&env, &owner, &operator)
    }

    /// Move `token_id` from `from` to `to`. The spender must either be the
    /// owner or an operator the owner approved.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u32,
    ) -> Result<(), NftError> {
        spender.require_auth();

        let mut nft = Self::load(&env, token_id)?;

        if nft.owner != from {
            return Err(NftError::NotOwner);
        }

        if spender != from && !Self::approved(&env, &from, &spender) {
            return Err(NftError::NotApproved);
        }

        nft.owner = to.clone();
        Self::store(&env, token_id, &nft);

        env.events()
            .publish((symbol_short!("TRANSFER"), &from, &to), token_id);

        Ok(())
    }
}

use crate::{DataKey, NFTContract, NFTContractArgs, NFTContractClient, NFTDetail, NFTMetadata, NftError};
use soroban_sdk::{contractimpl, symbol_short, Address, Env, String};

#[contractimpl]
impl NFTContract {
    /// Mint a new token to `to`. Only the registry admin may mint.
    pub fn mint(env: Env, to: Address, name: String, description: String) -> Result<u32, NftError> {
        Self::admin(&env)?.require_auth();

        let mut current_id: u32 = env
            .storage()
            .instance()
            .get(&DataKey::Counter)
            .unwrap_or(0);
        current_id += 1;
        env.storage().instance().set(&DataKey::Counter, &current_id);

        let nft = NFTDetail {
            owner: to.clone(),
            metadata: NFTMetadata { name, description },
        };
        Self::store(&env, current_id, &nft);

        env.events()
            .publish((symbol_short!("MINT"), &to), current_id);

        Ok(current_id)
    }

    pub fn get_metadata(env: Env, token_id: u32) -> Result<NFTMetadata, NftError> {
        Ok(Self::load(&env, token_id)?.metadata)
    }
}

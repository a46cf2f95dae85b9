
use crate::gateway::{CollectibleClient, CollectibleInterface};
use crate::{Marketplace, MarketplaceClient};
use soroban_sdk::{
    contract, contractimpl, contracttype,
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, Env, Event, String,
};

pub const START_TIME: u64 = 1_000;
pub const INITIAL_BALANCE: i128 = 1_000;

// ============================================================================
// IN-MEMORY COLLECTIBLE REGISTRY
// ============================================================================

#[contracttype]
#[derive(Clone)]
enum MockKey {
    Minter,
    Counter,
    Owner(u64),
    Approved(u64),
    Operator(Address, Address),
    Uri(u64),
}

/// Minimal unique-item registry with a single minter, one approval slot per
/// item and owner-wide operators.
#[contract]
pub struct MockCollectible;

#[contractimpl]
impl MockCollectible {
    pub fn set_minter(env: Env, minter: Address) {
        env.storage().instance().set(&MockKey::Minter, &minter);
    }

    pub fn approve(env: Env, owner: Address, operator: Address, token_id: u64) {
        owner.require_auth();
        if Self::owner_of(env.clone(), token_id) != owner {
            panic!("not owner");
        }
        env.storage()
            .persistent()
            .set(&MockKey::Approved(token_id), &operator);
    }

    /// Let `operator` move every item `owner` holds, now or later.
    pub fn set_approval_for_all(env: Env, owner: Address, operator: Address, approved: bool) {
        owner.require_auth();
        let key = MockKey::Operator(owner, operator);
        if approved {
            env.storage().persistent().set(&key, &true);
        } else {
            env.storage().persistent().remove(&key);
        }
    }

    pub fn token_uri(env: Env, token_id: u64) -> String {
        env.storage()
            .persistent()
            .get(&MockKey::Uri(token_id))
            .expect("unknown token")
    }
}

#[contractimpl]
impl CollectibleInterface for MockCollectible {
    fn mint(env: Env, minter: Address, to: Address, uri: String) -> u64 {
        minter.require_auth();
        let expected: Address = env
            .storage()
            .instance()
            .get(&MockKey::Minter)
            .expect("minter not set");
        if minter != expected {
            panic!("not minter");
        }

        let token_id = env
            .storage()
            .instance()
            .get::<_, u64>(&MockKey::Counter)
            .unwrap_or(0)
            + 1;
        env.storage().instance().set(&MockKey::Counter, &token_id);
        env.storage().persistent().set(&MockKey::Owner(token_id), &to);
        env.storage().persistent().set(&MockKey::Uri(token_id), &uri);
        token_id
    }

    fn owner_of(env: Env, token_id: u64) -> Address {
        env.storage()
            .persistent()
            .get(&MockKey::Owner(token_id))
            .expect("unknown token")
    }

    fn is_owner_or_approved(env: Env, spender: Address, token_id: u64) -> bool {
        let Some(owner) = env
            .storage()
            .persistent()
            .get::<_, Address>(&MockKey::Owner(token_id))
        else {
            return false;
        };
        let approved: Option<Address> = env.storage().persistent().get(&MockKey::Approved(token_id));
        owner == spender
            || approved == Some(spender.clone())
            || env
                .storage()
                .persistent()
                .has(&MockKey::Operator(owner, spender))
    }

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u64) {
        spender.require_auth();
        if !Self::is_owner_or_approved(env.clone(), spender, token_id) {
            panic!("not owner nor approved");
        }
        if Self::owner_of(env.clone(), token_id) != from {
            panic!("wrong owner");
        }
        env.storage().persistent().remove(&MockKey::Approved(token_id));
        env.storage().persistent().set(&MockKey::Owner(token_id), &to);
    }
}

// ============================================================================
// TEST SETUP HELPERS
// ============================================================================

pub struct TestContext {
    pub env: Env,
    pub client: MarketplaceClient<'static>,
    pub marketplace: Address,
    pub admin: Address,
    pub registry: CollectibleClient<'static>,
    pub collectible: MockCollectibleClient<'static>,
    pub token: token::TokenClient<'static>,
    pub token_admin: token::StellarAssetClient<'static>,
}

impl TestContext {
    /// Mint a fresh item to `owner` through the marketplace.
    pub fn create_item(&self, owner: &Address) -> u64 {
        let uri = String::from_str(&self.env, "https://ipfs.io/ipfs/Qm.....");
        self.client.create_item(&uri, owner)
    }

    /// Grant the escrow transfer rights on `item_id`.
    pub fn approve_escrow(&self, owner: &Address, item_id: u64) {
        self.collectible.approve(owner, &self.marketplace, &item_id);
    }

    /// Create an item, approve the escrow and list it for sale.
    pub fn listed_item(&self, seller: &Address, price: i128) -> u64 {
        let item_id = self.create_item(seller);
        self.approve_escrow(seller, item_id);
        self.client.list_item(seller, &item_id, &price);
        item_id
    }

    /// Create an item, approve the escrow and start an auction on it.
    pub fn auctioned_item(&self, creator: &Address, min_price: i128) -> u64 {
        let item_id = self.create_item(creator);
        self.approve_escrow(creator, item_id);
        self.client
            .list_item_on_auction(creator, &item_id, &min_price);
        item_id
    }

    /// A new participant holding `INITIAL_BALANCE` settlement tokens.
    pub fn funded_account(&self) -> Address {
        let account = Address::generate(&self.env);
        self.token_admin.mint(&account, &INITIAL_BALANCE);
        account
    }

    pub fn escrow_balance(&self) -> i128 {
        self.token.balance(&self.marketplace)
    }

    /// Assert that `event` is the last event the marketplace published during
    /// the most recent invocation. Token transfer events are skipped.
    pub fn assert_last_event(&self, event: &impl Event) {
        let published = self
            .env
            .events()
            .all()
            .iter()
            .filter(|(contract, _, _)| *contract == self.marketplace)
            .last()
            .expect("no marketplace event published");

        assert_eq!(
            vec![&self.env, published],
            vec![
                &self.env,
                (
                    self.marketplace.clone(),
                    event.topics(&self.env),
                    event.data(&self.env),
                )
            ]
        );
    }
}

/// Marketplace initialized but with no ledgers bound.
pub fn setup_bare() -> (Env, MarketplaceClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(START_TIME);

    let contract_id = env.register(Marketplace, ());
    let client = MarketplaceClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin);

    (env, client, admin)
}

pub fn setup_test() -> TestContext {
    let (env, client, admin) = setup_bare();
    let marketplace = client.address.clone();

    let collectible_id = env.register(MockCollectible, ());
    let collectible = MockCollectibleClient::new(&env, &collectible_id);
    let registry = CollectibleClient::new(&env, &collectible_id);
    collectible.set_minter(&marketplace);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin);
    let token_address = token_contract.address();
    let token = token::TokenClient::new(&env, &token_address);
    let token_admin = token::StellarAssetClient::new(&env, &token_address);

    client.set_ledger_addresses(&admin, &collectible_id, &token_address);

    TestContext {
        env,
        client,
        marketplace,
        admin,
        registry,
        collectible,
        token,
        token_admin,
    }
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().set_timestamp(env.ledger().timestamp() + seconds);
}

use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::events::LedgersUpdatedEventData;
use crate::storage;
use crate::types::RegistryConfig;

pub fn load_config(e: &Env) -> Result<RegistryConfig, Error> {
    storage::get_config(e).ok_or(Error::NotInitialized)
}

/// Authenticates `caller` and checks it is the administrator fixed at initialization.
pub fn require_admin(e: &Env, caller: &Address) -> Result<RegistryConfig, Error> {
    caller.require_auth();

    let config = load_config(e)?;
    if *caller != config.administrator {
        return Err(Error::AccessDenied);
    }
    Ok(config)
}

/// Rebinds both ledgers. Idempotent; may be called any number of times.
pub fn set_ledger_addresses(
    e: &Env,
    caller: Address,
    collectible: Address,
    settlement: Address,
) -> Result<(), Error> {
    let mut config = require_admin(e, &caller)?;

    config.collectible_ledger = Some(collectible.clone());
    config.settlement_ledger = Some(settlement.clone());
    config.updated_at = e.ledger().timestamp();
    storage::set_config(e, &config);

    LedgersUpdatedEventData {
        administrator: caller,
        collectible_ledger: collectible,
        settlement_ledger: settlement,
    }
    .publish(e);

    Ok(())
}

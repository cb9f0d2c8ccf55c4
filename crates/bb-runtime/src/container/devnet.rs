//! # Devnet
//!
//! Two chains, each with a token ledger, an event log and a bridge. The
//! whole devnet is snapshotted to a JSON file so that separate CLI
//! invocations see the same chain state.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bb_01_token_ledger::{InMemoryTokenLedger, LedgerSnapshot};
use bb_02_bridge::{BridgeApi, BridgeEvent, BridgeService, BridgeState, InMemoryEventLog};
use bb_03_holder::LocalChainClient;
use serde::{Deserialize, Serialize};
use shared_types::{Address, ChainId};
use thiserror::Error;

/// Bridge service as wired on the devnet.
pub type LocalBridge = BridgeService<Arc<InMemoryTokenLedger>, Arc<InMemoryEventLog>>;

/// Holder-side client for a devnet chain.
pub type LocalClient = LocalChainClient<Arc<InMemoryTokenLedger>, Arc<InMemoryEventLog>>;

/// Devnet loading and lookup errors.
#[derive(Debug, Error)]
pub enum DevnetError {
    /// No network with that name or chain id.
    #[error("unknown network {0:?}")]
    UnknownNetwork(String),

    /// The state file does not exist yet.
    #[error("no devnet state at {0}; run `bridge-cli init` first")]
    NotInitialized(PathBuf),

    /// Reading or writing the state file failed.
    #[error("state file {path}: {source}")]
    Io {
        /// State file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// The state file is not valid JSON for a devnet.
    #[error("malformed devnet state: {0}")]
    Format(#[from] serde_json::Error),

    /// The state parses but describes an impossible devnet.
    #[error("inconsistent devnet state: {0}")]
    Corrupt(String),
}

/// Persisted form of one chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainSnapshot {
    /// Network name.
    pub name: String,
    /// Token balances and supplies.
    pub ledger: LedgerSnapshot,
    /// Bridge configuration, registry and nonces.
    pub bridge: BridgeState,
    /// Emitted events, oldest first.
    #[serde(default)]
    pub events: Vec<BridgeEvent>,
}

/// Persisted form of the devnet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevnetSnapshot {
    /// Deployer of every token and bridge; admin of both bridges.
    pub owner: Address,
    /// The two chains, A then B.
    pub chains: Vec<ChainSnapshot>,
}

/// One running chain.
pub struct Chain {
    name: String,
    ledger: Arc<InMemoryTokenLedger>,
    events: Arc<InMemoryEventLog>,
    bridge: Arc<LocalBridge>,
}

impl Chain {
    /// Start a bridge over `ledger` with the given state.
    pub fn new(
        name: impl Into<String>,
        ledger: Arc<InMemoryTokenLedger>,
        events: Arc<InMemoryEventLog>,
        state: BridgeState,
    ) -> Self {
        let bridge = BridgeService::from_state(state, Arc::clone(&ledger), Arc::clone(&events));
        Self {
            name: name.into(),
            ledger,
            events,
            bridge: Arc::new(bridge),
        }
    }

    /// Rebuild a chain from its snapshot.
    pub fn restore(snapshot: ChainSnapshot) -> Result<Self, DevnetError> {
        if snapshot.ledger.chain_id != snapshot.bridge.config.chain_id {
            return Err(DevnetError::Corrupt(format!(
                "{}: ledger runs on chain {} but bridge on chain {}",
                snapshot.name, snapshot.ledger.chain_id, snapshot.bridge.config.chain_id
            )));
        }
        let ledger = Arc::new(InMemoryTokenLedger::from_snapshot(snapshot.ledger));
        let events = Arc::new(InMemoryEventLog::with_events(snapshot.events));
        Ok(Self::new(snapshot.name, ledger, events, snapshot.bridge))
    }

    /// Capture the chain's state.
    pub fn snapshot(&self) -> ChainSnapshot {
        ChainSnapshot {
            name: self.name.clone(),
            ledger: self.ledger.snapshot(),
            bridge: self.bridge.snapshot(),
            events: self.events.events(),
        }
    }

    /// Network name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Chain id.
    pub fn chain_id(&self) -> ChainId {
        self.bridge.chain_id()
    }

    /// Primary local token of the bridge.
    pub fn token(&self) -> Address {
        self.bridge.token()
    }

    /// Token ledger.
    pub fn ledger(&self) -> &Arc<InMemoryTokenLedger> {
        &self.ledger
    }

    /// Event log.
    pub fn events(&self) -> &Arc<InMemoryEventLog> {
        &self.events
    }

    /// Bridge service.
    pub fn bridge(&self) -> &Arc<LocalBridge> {
        &self.bridge
    }

    /// Holder-side client for this chain.
    pub fn client(&self) -> LocalClient {
        LocalChainClient::new(self.name.clone(), Arc::clone(&self.bridge))
    }

    fn matches(&self, selector: &str) -> bool {
        self.name.eq_ignore_ascii_case(selector) || self.chain_id().to_string() == selector
    }
}

/// The running two-chain devnet.
pub struct Devnet {
    owner: Address,
    chains: [Chain; 2],
}

impl Devnet {
    /// Assemble a devnet from two running chains.
    pub fn new(owner: Address, chains: [Chain; 2]) -> Self {
        Self { owner, chains }
    }

    /// Deployer and bridge admin.
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Both chains, A then B.
    pub fn chains(&self) -> &[Chain; 2] {
        &self.chains
    }

    /// Chain selected by name (case-insensitive) or chain id.
    pub fn chain(&self, selector: &str) -> Result<&Chain, DevnetError> {
        self.position(selector).map(|i| &self.chains[i])
    }

    fn position(&self, selector: &str) -> Result<usize, DevnetError> {
        self.chains
            .iter()
            .position(|chain| chain.matches(selector))
            .ok_or_else(|| DevnetError::UnknownNetwork(selector.to_string()))
    }

    /// Capture the whole devnet.
    pub fn snapshot(&self) -> DevnetSnapshot {
        DevnetSnapshot {
            owner: self.owner,
            chains: self.chains.iter().map(Chain::snapshot).collect(),
        }
    }

    /// Rebuild a devnet from its snapshot.
    pub fn restore(snapshot: DevnetSnapshot) -> Result<Self, DevnetError> {
        let count = snapshot.chains.len();
        let [a, b]: [ChainSnapshot; 2] = snapshot
            .chains
            .try_into()
            .map_err(|_| DevnetError::Corrupt(format!("expected 2 chains, found {}", count)))?;
        if a.bridge.config.chain_id == b.bridge.config.chain_id {
            return Err(DevnetError::Corrupt(format!(
                "both chains use chain id {}",
                a.bridge.config.chain_id
            )));
        }
        Ok(Self::new(snapshot.owner, [Chain::restore(a)?, Chain::restore(b)?]))
    }

    /// Load the devnet from `path`.
    pub fn load(path: &Path) -> Result<Self, DevnetError> {
        let text = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                DevnetError::NotInitialized(path.to_path_buf())
            } else {
                DevnetError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        let snapshot: DevnetSnapshot = serde_json::from_str(&text)?;
        Self::restore(snapshot)
    }

    /// Write the devnet to `path`.
    ///
    /// The file is replaced by rename so a crash never leaves half a state.
    pub fn save(&self, path: &Path) -> Result<(), DevnetError> {
        let text = serde_json::to_string_pretty(&self.snapshot())?;
        let io_error = |source| DevnetError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut staging = path.as_os_str().to_owned();
        staging.push(".tmp");
        let staging = PathBuf::from(staging);

        fs::write(&staging, text).map_err(io_error)?;
        fs::rename(&staging, path).map_err(io_error)?;
        Ok(())
    }
}

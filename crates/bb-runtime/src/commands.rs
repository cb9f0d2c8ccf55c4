//! # Commands
//!
//! The `bridge-cli` subcommands. Each one loads the devnet, acts as the
//! `PRIVATE_KEY` account, saves the devnet if it changed and returns a JSON
//! document for stdout.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use bb_02_bridge::{BridgeApi, RedeemRequest, Redemption, TransferProof};
use bb_03_holder::{bridge_transfer, TransferReceipt, Wallet};
use bb_telemetry::log_event;
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use shared_types::{decode_hex, encode_hex, parse_u256, Address, ChainId, Hash, TypeError, U256};

use crate::container::{Chain, Devnet, RuntimeConfig};
use crate::genesis::{GenesisBuilder, GenesisConfig};

/// Burn/mint bridge devnet operator.
#[derive(Parser, Debug)]
#[command(name = "bridge-cli", version)]
#[command(about = "Operate a two-chain burn/mint bridge devnet")]
pub struct Cli {
    /// Devnet state file (overrides BB_STATE_PATH)
    #[arg(long, global = true)]
    pub state: Option<PathBuf>,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Deploy tokens and bridges on both networks
    Init {
        /// Replace an existing state file
        #[arg(long)]
        force: bool,
    },

    /// Burn tokens on a network and print the transfer hash
    Swap {
        /// Source network (name or chain id)
        #[arg(long)]
        network: String,
        /// Amount to burn
        #[arg(long, value_parser = parse_amount)]
        amount: U256,
        /// Nonce; defaults to one both bridges accept
        #[arg(long, value_parser = parse_amount)]
        nonce: Option<U256>,
        /// Local token; defaults to the bridge's primary token
        #[arg(long)]
        token: Option<Address>,
    },

    /// Sign a transfer hash with the Ethereum message prefix
    Sign {
        /// 32-byte hash, hex
        #[arg(long, value_parser = parse_hash)]
        hash: Hash,
    },

    /// Mint on a network from a signed transfer
    Redeem {
        /// Destination network (name or chain id)
        #[arg(long)]
        network: String,
        /// Amount burned on the source network
        #[arg(long, value_parser = parse_amount)]
        amount: U256,
        /// Nonce used for the swap
        #[arg(long, value_parser = parse_amount)]
        nonce: U256,
        /// Chain id of the source network
        #[arg(long)]
        source_chain: ChainId,
        /// Token to mint on the destination network
        #[arg(long)]
        remote_token: Address,
        /// 65-byte signature, hex
        #[arg(long)]
        signature: String,
    },

    /// Print the next nonce the bridge expects from an account
    Nonce {
        /// Network (name or chain id)
        #[arg(long)]
        network: String,
        /// Account; defaults to the PRIVATE_KEY account
        #[arg(long)]
        address: Option<Address>,
    },

    /// Map a local token to a remote token (admin only)
    AddToken {
        /// Network (name or chain id)
        #[arg(long)]
        network: String,
        /// Token on this network
        #[arg(long)]
        local: Address,
        /// Token on the peer network
        #[arg(long)]
        remote: Address,
    },

    /// Print a token balance and supply
    Balance {
        /// Network (name or chain id)
        #[arg(long)]
        network: String,
        /// Account; defaults to the PRIVATE_KEY account
        #[arg(long)]
        address: Option<Address>,
        /// Token; defaults to the bridge's primary token
        #[arg(long)]
        token: Option<Address>,
    },

    /// Bridge tokens A -> B and back again
    Demo {
        /// Amount to move each way
        #[arg(long, value_parser = parse_amount, default_value = "100")]
        amount: U256,
    },
}

fn parse_amount(text: &str) -> Result<U256, TypeError> {
    parse_u256(text)
}

fn parse_hash(text: &str) -> Result<Hash, TypeError> {
    let bytes = decode_hex(text)?;
    Hash::try_from(bytes.as_slice()).map_err(|_| TypeError::InvalidLength {
        expected: 32,
        actual: bytes.len(),
    })
}

/// Run one command against the devnet described by `config`.
pub async fn run(command: Command, config: &RuntimeConfig) -> Result<Value> {
    config.validate().context("Invalid configuration")?;
    let wallet = Wallet::from_private_key(config.private_key()?)
        .context("PRIVATE_KEY is not a valid secp256k1 key")?;
    let path = config.state_path.as_path();
    let owner = wallet.address();
    let load = || Devnet::load(path);

    let output = match command {
        Command::Init { force } => {
            if path.exists() && !force {
                bail!(
                    "devnet state already exists at {} (use --force to replace it)",
                    path.display()
                );
            }
            let devnet = GenesisBuilder::new(GenesisConfig::from_runtime(config))
                .build(owner)
                .context("Failed to deploy devnet")?;
            devnet.save(path)?;
            log_event!(info, "cli", "Devnet initialized", path = %path.display());
            describe(&devnet)
        }

        Command::Sign { hash } => {
            let signature = wallet.sign_hash(&hash)?;
            json!({
                "signer": owner,
                "hash": encode_hex(&hash),
                "signature": signature.to_string(),
            })
        }

        Command::Swap {
            network,
            amount,
            nonce,
            token,
        } => {
            let devnet = load()?;
            let source = devnet.chain(&network)?;
            let nonce = nonce.unwrap_or_else(|| source.bridge().next_nonce(&owner));
            let proof = source.bridge().swap(owner, amount, nonce, token)?;
            devnet.save(path)?;
            log_event!(info, "cli", "Swap submitted", network = %source.name(), nonce = %nonce);
            proof_json(source, &proof)
        }

        Command::Redeem {
            network,
            amount,
            nonce,
            source_chain,
            remote_token,
            signature,
        } => {
            let devnet = load()?;
            let destination = devnet.chain(&network)?;
            let request = RedeemRequest {
                amount,
                nonce,
                source_chain_id: source_chain,
                remote_token,
                signature: decode_hex(&signature).context("signature is not hex")?,
            };
            let redemption = destination.bridge().redeem(owner, request)?;
            devnet.save(path)?;
            log_event!(info, "cli", "Redeem accepted", network = %destination.name(), nonce = %nonce);
            redemption_json(destination, &redemption)
        }

        Command::Nonce { network, address } => {
            let devnet = load()?;
            let chain = devnet.chain(&network)?;
            let account = address.unwrap_or(owner);
            json!({
                "network": chain.name(),
                "address": account,
                "next_nonce": chain.bridge().next_nonce(&account).to_string(),
            })
        }

        Command::AddToken {
            network,
            local,
            remote,
        } => {
            let devnet = load()?;
            let chain = devnet.chain(&network)?;
            chain.bridge().add_other_token(owner, local, remote)?;
            devnet.save(path)?;
            json!({
                "network": chain.name(),
                "local": local,
                "remote": remote,
            })
        }

        Command::Balance {
            network,
            address,
            token,
        } => {
            let devnet = load()?;
            let chain = devnet.chain(&network)?;
            let account = address.unwrap_or(owner);
            let token = token.unwrap_or_else(|| chain.token());
            json!({
                "network": chain.name(),
                "token": token,
                "address": account,
                "balance": chain.bridge().balance_of(&token, &account)?.to_string(),
                "total_supply": chain.bridge().total_supply(&token)?.to_string(),
            })
        }

        Command::Demo { amount } => {
            let devnet = load()?;
            let [a, b] = devnet.chains();
            let (client_a, client_b) = (a.client(), b.client());

            let there = bridge_transfer(&wallet, &client_a, &client_b, amount, None).await;
            // Burned tokens stay burned; keep the state even if the redeem failed
            devnet.save(path)?;
            let there = there?;

            let back = bridge_transfer(&wallet, &client_b, &client_a, amount, None).await;
            devnet.save(path)?;
            let back = back?;

            json!({
                "transfers": [receipt_json(a, b, &there), receipt_json(b, a, &back)],
                "supplies": devnet
                    .chains()
                    .iter()
                    .map(|chain| -> Result<Value> {
                        let supply = chain.bridge().total_supply(&chain.token())?;
                        Ok(json!({ "network": chain.name(), "total_supply": supply.to_string() }))
                    })
                    .collect::<Result<Vec<_>>>()?,
            })
        }
    };

    Ok(output)
}

fn describe(devnet: &Devnet) -> Value {
    json!({
        "owner": devnet.owner(),
        "networks": devnet
            .chains()
            .iter()
            .map(|chain| json!({
                "name": chain.name(),
                "chain_id": chain.chain_id().0,
                "bridge": chain.bridge().address(),
                "token": chain.token(),
                "remote_token": chain.bridge().other_token(),
                "replay_policy": chain.bridge().config().replay_policy.to_string(),
            }))
            .collect::<Vec<_>>(),
    })
}

fn proof_json(chain: &Chain, proof: &TransferProof) -> Value {
    json!({
        "network": chain.name(),
        "sender": proof.sender,
        "amount": proof.amount.to_string(),
        "nonce": proof.nonce.to_string(),
        "remote_token": proof.remote_token,
        "source_chain_id": proof.source_chain_id.0,
        "hash": encode_hex(&proof.hash),
    })
}

fn redemption_json(chain: &Chain, redemption: &Redemption) -> Value {
    json!({
        "network": chain.name(),
        "recipient": redemption.recipient,
        "token": redemption.token,
        "amount": redemption.amount.to_string(),
        "nonce": redemption.nonce.to_string(),
        "source_chain_id": redemption.source_chain_id.0,
    })
}

fn receipt_json(source: &Chain, destination: &Chain, receipt: &TransferReceipt) -> Value {
    json!({
        "swap": proof_json(source, &receipt.proof),
        "signature": receipt.signature.to_string(),
        "redeem": redemption_json(destination, &receipt.redemption),
    })
}

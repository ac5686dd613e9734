// This is my main entry point for the IOTA node client CLI
// Every subcommand is one API call or one address helper
use clap::Parser;
use data_encoding::HEXLOWER;
use iota_node_client::utils::hex_to_bytes;
use iota_node_client::{
    address_bech32_to_hex, address_from_path, address_to_bech32, default_provider, random_seed,
    ApiResponse, ClientConfig, Command, Message, NodeClient, Opt, Payload, DEFAULT_CONFIG,
};
use log::{error, LevelFilter};
use std::process;

fn main() {
    // I initialize logging at Info; RUST_LOG still wins when it is set
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let opt = Opt::parse();

    // I pick the node from --config if given, otherwise from the environment;
    // IOTA_NODE_* variables still override what the file says
    let config = match &opt.config {
        Some(path) => match ClientConfig::from_toml_file(path)
            .and_then(ClientConfig::with_env_overrides)
        {
            Ok(config) => config,
            Err(e) => {
                error!("Error: {e}");
                process::exit(1);
            }
        },
        None => DEFAULT_CONFIG.clone(),
    };

    if let Err(e) = run_command(opt.command, config) {
        error!("Error: {e}");
        process::exit(1);
    }
}

// I unwrap the envelope here: a node-side error is printed, not propagated
fn print_response<T>(
    response: ApiResponse<T>,
    print: impl FnOnce(T),
) -> Result<(), Box<dyn std::error::Error>> {
    match response {
        ApiResponse::Success(data) => {
            print(data);
            Ok(())
        }
        ApiResponse::Error(err) => Err(format!("Node error: {err}").into()),
    }
}

fn run_command(command: Command, config: ClientConfig) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Info => {
            let mut client = NodeClient::new(config)?;
            print_response(client.node_info()?, |info| {
                println!("Name: {} {}", info.name, info.version);
                println!("Healthy: {}", info.is_healthy);
                println!("Network: {} (hrp {})", info.network_id, info.bech32_hrp);
                println!("Min PoW score: {}", info.min_pow_score);
                println!(
                    "Milestones: latest {}, confirmed {}, pruned {}",
                    info.latest_milestone_index,
                    info.confirmed_milestone_index,
                    info.pruning_index
                );
                println!(
                    "MPS: {:.1}, referenced MPS: {:.1}, referenced rate: {:.1}%",
                    info.messages_per_second,
                    info.referenced_messages_per_second,
                    info.referenced_rate
                );
                println!("Features: {}", info.features.join(", "));
            })?;
        }
        Command::Health => {
            let mut client = NodeClient::new(config)?;
            let healthy = client.health()?;
            println!("{}", if healthy { "healthy" } else { "unhealthy" });
        }
        Command::Tips => {
            let mut client = NodeClient::new(config)?;
            print_response(client.tips()?, |tips| {
                for id in tips.tip_message_ids {
                    println!("{id}");
                }
            })?;
        }
        Command::Find { index } => {
            let mut client = NodeClient::new(config)?;
            print_response(client.find_message_by_index(&index)?, |found| {
                println!("Found {} of max {} messages", found.count, found.max_results);
                for id in found.message_ids {
                    println!("{id}");
                }
            })?;
        }
        Command::Message { id } => {
            let mut client = NodeClient::new(config)?;
            print_response(client.message(&id)?, print_message)?;
        }
        Command::Children { id } => {
            let mut client = NodeClient::new(config)?;
            print_response(client.message_children(&id)?, |children| {
                println!("{} children of {}", children.count, children.message_id);
                for id in children.children {
                    println!("{id}");
                }
            })?;
        }
        Command::Balance { address, kind } => {
            let mut client = NodeClient::new(config)?;
            print_response(client.balance(kind.into(), &address)?, |balance| {
                println!("Address: {}", balance.address);
                println!("Balance: {}", balance.balance);
                println!("Dust allowed: {}", balance.dust_allowed);
                println!("Ledger index: {}", balance.ledger_index);
            })?;
        }
        Command::Outputs { address, kind } => {
            let mut client = NodeClient::new(config)?;
            print_response(client.outputs(kind.into(), &address)?, |outputs| {
                println!(
                    "{} outputs at ledger index {}",
                    outputs.count, outputs.ledger_index
                );
                for id in outputs.output_ids {
                    println!("{id}");
                }
            })?;
        }
        Command::Send { index, data } => {
            let mut client = NodeClient::new(config)?;
            print_response(client.send_indexation(&index, data.as_bytes())?, |id| {
                println!("Message sent: {id}");
            })?;
        }
        Command::DeriveAddress { seed, path, hrp } => {
            let seed = zeroize::Zeroizing::new(hex_to_bytes::<32>(&seed)?);
            let addr = address_from_path(default_provider(), &seed[..], &path)?;
            println!("Path: {path}");
            println!("Address (hex): {}", HEXLOWER.encode(&addr[1..]));
            println!("Address (bech32): {}", address_to_bech32(&addr, &hrp)?);
        }
        Command::Bech32ToHex { address, hrp } => {
            println!("{}", address_bech32_to_hex(&hrp, &address)?);
        }
        Command::NewSeed => {
            let seed = random_seed(default_provider())?;
            println!("{}", HEXLOWER.encode(&seed[..]));
        }
    }
    Ok(())
}

// I print whatever the payload is, keeping ids in the hex the node sent
fn print_message(msg: Message) {
    println!("Network id: {}", msg.network_id);
    println!("Nonce: {}", msg.nonce);
    for (i, parent) in msg.parent_message_ids.iter().enumerate() {
        println!("Parent {i}: {parent}");
    }
    match &msg.payload {
        Payload::Indexation(idx) => {
            println!("Indexation payload");
            println!("  index: {}", idx.index);
            println!("  data: {}", idx.data);
        }
        Payload::Milestone(ms) => {
            println!("Milestone payload #{} at {}", ms.index, ms.timestamp);
            println!("  merkle proof: {}", ms.inclusion_merkle_proof);
            println!("  signatures: {}", ms.signature_count());
        }
        Payload::Transaction(tx) => {
            println!("Transaction payload");
            for i in 0..tx.inputs_count() {
                if let (Some(id), Some(index)) = (tx.inputs_tx_id(i), tx.inputs_tx_output_index(i)) {
                    println!("  input {i}: {id}#{index}");
                }
            }
            for i in 0..tx.outputs_count() {
                if let (Some(addr), Some(amount)) = (tx.outputs_address(i), tx.outputs_amount(i)) {
                    println!("  output {i}: {amount} to {addr}");
                }
            }
            for i in 0..tx.blocks_count() {
                match tx.blocks_reference(i) {
                    Some(target) => println!("  unlock {i}: reference to {target}"),
                    None => println!("  unlock {i}: signature"),
                }
            }
            if let Some(nested) = &tx.essence.payload {
                println!("  nested indexation: {} => {}", nested.index, nested.data);
            }
        }
        Payload::Unknown => println!("Unknown payload"),
    }
}

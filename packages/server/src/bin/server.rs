//! Group chat server with presence tracking.
//!
//! Participants join by name, send heartbeats to stay in the room and are
//! evicted with a departure notice once they fall silent.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin lobby-server
//! cargo run --bin lobby-server -- --host 0.0.0.0 --port 3000 --stale-after-secs 30
//! ```

use std::{sync::Arc, time::Duration};

use clap::Parser;
use lobby_server::{
    domain::{MessageLog, ParticipantRegistry},
    infrastructure::repository::{InMemoryMessageRepository, InMemoryParticipantRepository},
    ui::Server,
    usecase::{
        HeartbeatUseCase, JoinParticipantUseCase, LeaveParticipantUseCase,
        ListParticipantsUseCase, PresenceConfig, PresenceSweeper, ReadMessagesUseCase,
        SendMessageUseCase,
    },
};
use lobby_shared::{
    logger::setup_logger,
    time::{Clock, SystemClock},
};

#[derive(Parser, Debug)]
#[command(name = "lobby-server")]
#[command(about = "Group chat server with presence tracking", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,

    /// Seconds of silence after which a participant is evicted
    #[arg(long, default_value = "10")]
    stale_after_secs: u64,

    /// Seconds between two presence sweeps
    #[arg(long, default_value = "15", value_parser = clap::value_parser!(u64).range(1..))]
    sweep_interval_secs: u64,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "debug")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    // Initialize dependencies in order:
    // 1. Clock and repositories
    // 2. ParticipantRegistry and MessageLog
    // 3. UseCases and PresenceSweeper
    // 4. Server

    // 1. Create Clock and repositories (in-memory database)
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let participant_repository = Arc::new(InMemoryParticipantRepository::new());
    let message_repository = Arc::new(InMemoryMessageRepository::new());

    // 2. Create the registry and the log
    let registry = Arc::new(ParticipantRegistry::new(
        participant_repository,
        clock.clone(),
    ));
    let message_log = match MessageLog::resume(message_repository, clock).await {
        Ok(log) => Arc::new(log),
        Err(e) => {
            tracing::error!("Failed to open message log: {}", e);
            std::process::exit(1);
        }
    };

    // 3. Create UseCases
    let join_participant_usecase = Arc::new(JoinParticipantUseCase::new(
        registry.clone(),
        message_log.clone(),
    ));
    let list_participants_usecase = Arc::new(ListParticipantsUseCase::new(registry.clone()));
    let heartbeat_usecase = Arc::new(HeartbeatUseCase::new(registry.clone()));
    let leave_participant_usecase = Arc::new(LeaveParticipantUseCase::new(
        registry.clone(),
        message_log.clone(),
    ));
    let send_message_usecase = Arc::new(SendMessageUseCase::new(
        registry.clone(),
        message_log.clone(),
    ));
    let read_messages_usecase = Arc::new(ReadMessagesUseCase::new(message_log.clone()));
    let presence_sweeper = Arc::new(PresenceSweeper::new(
        registry,
        message_log,
        PresenceConfig {
            stale_after: Duration::from_secs(args.stale_after_secs),
            sweep_interval: Duration::from_secs(args.sweep_interval_secs),
        },
    ));

    // 4. Create and run the server
    let server = Server::new(
        join_participant_usecase,
        list_participants_usecase,
        heartbeat_usecase,
        leave_participant_usecase,
        send_message_usecase,
        read_messages_usecase,
        presence_sweeper,
    );
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use reversi::{
    init_logging, parse_record, piece_code, Envelope, Game, GameApi, GamePayload, GameServer,
    Hub, InMemoryTransport, PutPieceRequest, Skeleton, Stub, Winner,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Replay a move record (e.g. f5d6c5f4) from the starting position.
    Replay {
        record: String,
        #[arg(long, help = "Print one JSON payload per move instead of boards")]
        json: bool,
    },
    /// Submit a move record to a local game server and print its broadcasts.
    Local { record: String },
}

#[cfg(feature = "std")]
fn replay(record: &str, json: bool) -> anyhow::Result<()> {
    let mut game = Game::new();
    if !json {
        println!("{}\n", game.board());
    }
    for (i, pos) in parse_record(record)
        .map_err(|e| anyhow::anyhow!(e))?
        .into_iter()
        .enumerate()
    {
        let piece = game.next_piece();
        game.put_piece(pos.row, pos.column, piece)
            .map_err(|e| anyhow::anyhow!("move {} ({}): {}", i + 1, pos, e))?;
        if json {
            println!("{}", serde_json::to_string(&GamePayload::from(&game))?);
        } else {
            println!("{}. {} {}\n{}\n", i + 1, piece_code(piece), pos, game.board());
        }
    }
    if !json {
        match game.winner() {
            Winner::None => println!("{} to move", game.next_piece()),
            winner => println!("{}", winner),
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
async fn local(record: &str) -> anyhow::Result<()> {
    let moves = parse_record(record).map_err(|e| anyhow::anyhow!(e))?;
    let hub = Hub::default();
    let mut frames = hub.subscribe();

    let (server_transport, client_transport) = InMemoryTransport::pair();
    let server = tokio::spawn(async move {
        let mut skeleton = Skeleton::new(GameServer::new(hub), server_transport);
        skeleton.run().await
    });

    let mut stub = Stub::new(client_transport);
    for pos in moves {
        let piece = stub.get_game().await?.next_piece;
        stub.put_piece(PutPieceRequest::new(pos.row as i64, pos.column as i64, piece))
            .await?;
        let frame = frames.recv().await?;
        let envelope = Envelope::decode(&frame)?;
        println!("{}", serde_json::to_string(&envelope)?);
    }

    drop(stub);
    server.await??;
    Ok(())
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Replay { record, json } => replay(&record, json),
        Commands::Local { record } => local(&record).await,
    }
}

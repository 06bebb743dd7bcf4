use reversi::{
    Envelope, GameApi, GameServer, Hub, InMemoryTransport, Message, Piece, PutPieceRequest,
    Skeleton, Stub, Transport, Winner,
};
use tokio::sync::broadcast::error::TryRecvError;
use tokio::time::Duration;

fn request(row: i64, column: i64, piece: &str) -> PutPieceRequest {
    PutPieceRequest {
        row,
        column,
        piece: piece.to_string(),
    }
}

#[tokio::test]
async fn test_accepted_move_is_broadcast() {
    let hub = Hub::new(8);
    let mut frames = hub.subscribe();
    let mut server = GameServer::new(hub);

    server.submit(&request(2, 3, "B")).unwrap();

    let envelope = Envelope::decode(&frames.recv().await.unwrap()).unwrap();
    assert_eq!(envelope.payload, server.payload());
    assert_eq!(envelope.payload.next_piece, Piece::Second);
}

#[tokio::test]
async fn test_rejections_are_not_broadcast() {
    let hub = Hub::new(8);
    let mut frames = hub.subscribe();
    let mut server = GameServer::new(hub);

    let err = server.submit(&request(2, 3, "X")).unwrap_err();
    assert!(err.to_string().contains("invalid piece"), "{}", err);

    let err = server.submit(&request(2, 3, "W")).unwrap_err();
    assert!(err.to_string().contains("not your turn"), "{}", err);

    let err = server.submit(&request(0, 0, "B")).unwrap_err();
    assert!(err.to_string().contains("invalid placement"), "{}", err);

    let err = server.submit(&request(-1, 3, "B")).unwrap_err();
    assert!(err.to_string().contains("outside the board"), "{}", err);

    assert!(matches!(frames.try_recv(), Err(TryRecvError::Empty)));
}

#[tokio::test]
async fn test_failed_submit_leaves_the_game_alone() {
    let hub = Hub::new(8);
    let mut frames = hub.subscribe();
    let mut server = GameServer::new(hub);
    server.submit(&request(2, 3, "B")).unwrap();
    let _ = frames.recv().await.unwrap();
    let before = server.game().clone();

    for req in [request(2, 3, "W"), request(9, 9, "W"), request(2, 2, "B")] {
        assert!(server.submit(&req).is_err());
        assert_eq!(server.game(), &before);
    }
    assert!(matches!(frames.try_recv(), Err(TryRecvError::Empty)));

    server.submit(&request(2, 2, "W")).unwrap();
    let envelope = Envelope::decode(&frames.recv().await.unwrap()).unwrap();
    assert_eq!(envelope.payload, server.payload());
    assert_ne!(server.game(), &before);
}

#[tokio::test]
async fn test_reset_replaces_the_game() {
    let hub = Hub::new(8);
    let mut frames = hub.subscribe();
    let mut server = GameServer::new(hub);
    server.submit(&request(2, 3, "B")).unwrap();
    server.restart().unwrap();

    let _after_move = frames.recv().await.unwrap();
    let after_reset = Envelope::decode(&frames.recv().await.unwrap()).unwrap();
    assert_eq!(after_reset.payload.next_piece, Piece::First);
    assert_eq!(after_reset.payload.next_moves.len(), 4);
    assert_eq!(server.game().board().count(Piece::First), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_stub_skeleton_in_memory() -> anyhow::Result<()> {
    let hub = Hub::default();
    let mut frames = hub.subscribe();
    let (server_transport, client_transport) = InMemoryTransport::pair();

    let server = tokio::spawn(async move {
        let mut skeleton = Skeleton::new(GameServer::new(hub), server_transport);
        skeleton.run().await
    });

    let mut stub = Stub::new(client_transport.with_timeout(Duration::from_secs(5)));

    let game = stub.get_game().await?;
    assert_eq!(game.next_piece, Piece::First);

    for (row, column, piece) in [(4, 5, "B"), (5, 3, "W"), (4, 2, "B")] {
        stub.put_piece(request(row, column, piece)).await?;
        let frame = Envelope::decode(&frames.recv().await?)?;
        assert_eq!(frame.payload, stub.get_game().await?);
    }

    let err = stub.put_piece(request(4, 2, "W")).await.unwrap_err();
    assert!(err.to_string().contains("invalid placement"), "{}", err);

    stub.reset().await?;
    let fresh = stub.get_game().await?;
    assert_eq!(fresh.next_moves.len(), 4);
    assert_eq!(fresh.winner, Winner::None);

    drop(stub);
    server.await??;
    Ok(())
}

#[tokio::test]
async fn test_skeleton_rejects_responses_sent_as_requests() -> anyhow::Result<()> {
    let (server_transport, mut client) = InMemoryTransport::pair();
    let server = tokio::spawn(async move {
        let mut skeleton = Skeleton::new(GameServer::new(Hub::default()), server_transport);
        skeleton.run().await
    });

    client.send(Message::Accepted).await?;
    match client.recv().await? {
        Message::Rejected { reason } => assert!(reason.contains("unexpected message")),
        other => panic!("expected Rejected, got {:?}", other),
    }

    drop(client);
    server.await??;
    Ok(())
}

#[test]
fn test_hub_fans_out() {
    let hub = Hub::new(4);
    assert_eq!(hub.enqueue(b"nobody".to_vec()), 0);

    let mut a = hub.subscribe();
    let mut b = hub.subscribe();
    assert_eq!(hub.subscriber_count(), 2);
    assert_eq!(hub.enqueue(b"frame".to_vec()), 2);
    assert_eq!(a.try_recv().unwrap(), b"frame".to_vec());
    assert_eq!(b.try_recv().unwrap(), b"frame".to_vec());
}

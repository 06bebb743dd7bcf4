use reversi::{InMemoryTransport, Message, Transport};
use tokio::time::Duration;

#[tokio::test]
async fn test_messages_arrive_in_order() -> anyhow::Result<()> {
    let (mut a, mut b) = InMemoryTransport::pair();
    a.send(Message::GetGame).await?;
    a.send(Message::Reset).await?;
    b.send(Message::Accepted).await?;

    assert_eq!(b.recv().await?, Message::GetGame);
    assert_eq!(b.recv().await?, Message::Reset);
    assert_eq!(a.recv().await?, Message::Accepted);
    Ok(())
}

#[tokio::test]
async fn test_recv_fails_once_peer_is_gone() {
    let (mut a, b) = InMemoryTransport::pair();
    drop(b);
    assert!(a.recv().await.is_err());
    assert!(a.send(Message::GetGame).await.is_err());
}

#[tokio::test]
async fn test_recv_timeout() {
    let (a, _b) = InMemoryTransport::pair();
    let mut a = a.with_timeout(Duration::from_millis(20));
    let err = a.recv().await.unwrap_err();
    assert!(err.to_string().contains("timed out"), "{}", err);
}

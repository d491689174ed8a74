use crate::config::SmokeConfig;
use crate::types::ProbeError;

#[cfg(feature = "websocket")]
const TEST_MESSAGE: &str = "Test WebSocket connection";

/// Opens the notifications socket, sends one test payload and waits for a
/// single reply. The reply is printed verbatim and handed back so callers can
/// look at it too.
#[cfg(feature = "websocket")]
pub async fn run(config: &SmokeConfig) -> Result<String, ProbeError> {
    use std::borrow::Cow;

    use futures::{SinkExt, StreamExt};
    use tokio_tungstenite::connect_async;
    use tracing::debug;
    use tungstenite::{
        Message,
        protocol::{CloseFrame, frame::coding::CloseCode},
    };

    println!("\nTesting WebSocket connection...");

    debug!("connecting to {}", config.ws_url);
    let (mut stream, _response) = connect_async(config.ws_url.as_str()).await?;

    let payload = serde_json::json!({
        "type": "test",
        "message": TEST_MESSAGE,
    });
    stream.send(Message::Text(payload.to_string())).await?;

    // block until the server says something back, whatever it is
    let reply = loop {
        match stream.next().await {
            // keepalive frames are not the reply we are waiting for
            Some(Ok(Message::Ping(_) | Message::Pong(_))) => continue,
            Some(Ok(Message::Close(_))) | None => {
                return Err(tungstenite::Error::ConnectionClosed.into());
            }
            Some(Ok(msg)) => break render_reply(msg),
            Some(Err(err)) => return Err(err.into()),
        }
    };

    println!("✅ WebSocket response: {reply}");

    // one reply is all we wanted, close cleanly
    if let Err(err) = stream
        .send(Message::Close(Some(CloseFrame {
            code: CloseCode::Normal,
            reason: Cow::from("Goodbye"),
        })))
        .await
    {
        debug!("could not send close frame: {err:?}");
    }

    Ok(reply)
}

/// The probe was compiled without a websocket client. Reporting that is kept
/// apart from network failures so nobody chases a phantom server problem.
#[cfg(not(feature = "websocket"))]
pub async fn run(_config: &SmokeConfig) -> Result<String, ProbeError> {
    println!("\nTesting WebSocket connection...");

    Err(ProbeError::CapabilityUnavailable)
}

#[cfg(feature = "websocket")]
fn render_reply(msg: tungstenite::Message) -> String {
    use tungstenite::Message;

    match msg {
        Message::Text(text) => text,
        Message::Binary(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        // filtered out by the receive loop before we get here
        Message::Ping(_) | Message::Pong(_) | Message::Close(_) => String::new(),
        Message::Frame(_) => {
            unreachable!("raw frames do not surface on a client stream")
        }
    }
}

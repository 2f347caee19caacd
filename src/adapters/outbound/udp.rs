use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::net::UdpSocket;
use tokio::time::{sleep, timeout};
use tracing::{debug, warn};

use crate::common::{ClientError, ClientResult};
use crate::config::Config;
use crate::domains::arena::{
    AgentPose, ArenaClient, ArenaConfig, CanonStatus, Reply, Request, TransportStats,
};

const MAX_DATAGRAM: usize = 4096;

/// Outbound adapter implementing the [`ArenaClient`] port over UDP with
/// JSON-encoded datagrams, one request per datagram, one reply expected
/// back on the same socket.
pub struct UdpArenaClient {
    socket: UdpSocket,
    server: String,
    reply_timeout: Duration,
    join_retries: u32,
    join_delay: Duration,
    join_delay_multiplier: f64,
    sent: AtomicU64,
    received: AtomicU64,
    errors: AtomicU64,
}

impl UdpArenaClient {
    pub async fn bind(config: &Config) -> ClientResult<Self> {
        let socket = UdpSocket::bind((config.agent.ip.as_str(), config.agent.port)).await?;
        let server = format!("{}:{}", config.server.ip, config.server.port);
        socket.connect(server.as_str()).await?;

        Ok(Self {
            socket,
            server,
            reply_timeout: Duration::from_millis(config.transport.reply_timeout_ms),
            join_retries: config.join.retries,
            join_delay: Duration::from_millis(config.join.delay_ms),
            join_delay_multiplier: config.join.delay_multiplier,
            sent: AtomicU64::new(0),
            received: AtomicU64::new(0),
            errors: AtomicU64::new(0),
        })
    }

    async fn send_recv(&self, request: &Request) -> ClientResult<Reply> {
        match self.exchange(request).await {
            Ok(reply) => Ok(reply),
            Err(error) => {
                self.errors.fetch_add(1, Ordering::Relaxed);
                Err(error)
            }
        }
    }

    /// Discard datagrams already queued on the socket. A reply that arrives
    /// after its request timed out would otherwise be consumed as the answer
    /// to the next request, leaving every later exchange off by one.
    fn drain_stale_replies(&self) {
        let mut buf = [0u8; MAX_DATAGRAM];
        while self.socket.try_recv(&mut buf).is_ok() {
            debug!("discarded a stale datagram left over from a timed out request");
        }
    }

    async fn exchange(&self, request: &Request) -> ClientResult<Reply> {
        self.drain_stale_replies();

        let payload = serde_json::to_vec(request)?;
        self.socket.send(&payload).await?;
        self.sent.fetch_add(1, Ordering::Relaxed);

        let mut buf = [0u8; MAX_DATAGRAM];
        let len = timeout(self.reply_timeout, self.socket.recv(&mut buf))
            .await
            .map_err(|_| ClientError::retryable("timed out waiting for a reply"))??;
        self.received.fetch_add(1, Ordering::Relaxed);

        let reply: Reply = serde_json::from_slice(&buf[..len])?;
        if let Reply::Error { result } = reply {
            // Normal whenever our health dropped to zero since the last
            // request; the decision loop plays through it.
            return Err(ClientError::retryable(result));
        }
        Ok(reply)
    }

    fn unexpected(reply: Reply) -> ClientError {
        ClientError::retryable(format!("unexpected reply: {}", reply.kind()))
    }
}

#[async_trait]
impl ArenaClient for UdpArenaClient {
    async fn join(&self, name: &str) -> ClientResult<ArenaConfig> {
        let mut delay = self.join_delay;
        let mut attempts = 0u32;

        loop {
            attempts += 1;
            let request = Request::Join {
                name: name.to_string(),
            };
            match self.send_recv(&request).await {
                Ok(Reply::Join { conf }) => return Ok(conf),
                Ok(other) => warn!(reply = other.kind(), "unexpected join reply"),
                Err(error) => debug!(%error, attempt = attempts, "join attempt failed"),
            }

            if attempts > self.join_retries {
                return Err(ClientError::JoinFailed {
                    server: self.server.clone(),
                    attempts,
                });
            }
            sleep(delay).await;
            delay = delay.mul_f64(self.join_delay_multiplier);
        }
    }

    async fn location(&self) -> ClientResult<AgentPose> {
        match self.send_recv(&Request::GetLocation).await? {
            Reply::Location { x, y } => Ok(AgentPose { x, y }),
            other => Err(Self::unexpected(other)),
        }
    }

    async fn set_direction(&self, radians: f64) -> ClientResult<()> {
        let request = Request::SetDirection {
            requested_direction: radians,
        };
        match self.send_recv(&request).await? {
            Reply::SetDirection => Ok(()),
            other => Err(Self::unexpected(other)),
        }
    }

    async fn set_speed(&self, speed: f64) -> ClientResult<()> {
        let request = Request::SetSpeed {
            requested_speed: speed,
        };
        match self.send_recv(&request).await? {
            Reply::SetSpeed => Ok(()),
            other => Err(Self::unexpected(other)),
        }
    }

    async fn canon(&self) -> ClientResult<CanonStatus> {
        match self.send_recv(&Request::GetCanon).await? {
            Reply::Canon { shell_in_progress } => Ok(CanonStatus { shell_in_progress }),
            other => Err(Self::unexpected(other)),
        }
    }

    async fn scan(&self, start_radians: f64, end_radians: f64) -> ClientResult<f64> {
        let request = Request::Scan {
            start_radians,
            end_radians,
        };
        match self.send_recv(&request).await? {
            Reply::Scan { distance } => Ok(distance),
            other => Err(Self::unexpected(other)),
        }
    }

    async fn fire_canon(&self, direction: f64, distance: f64) -> ClientResult<()> {
        let request = Request::FireCanon {
            direction,
            distance,
        };
        match self.send_recv(&request).await? {
            Reply::FireCanon => Ok(()),
            other => Err(Self::unexpected(other)),
        }
    }

    fn stats(&self) -> TransportStats {
        TransportStats {
            sent: self.sent.load(Ordering::Relaxed),
            received: self.received.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
        }
    }
}

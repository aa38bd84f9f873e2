//! Zone source client: full zone transfer (AXFR) over TCP.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use hickory_client::client::Client;
use hickory_proto::op::{Query, ResponseCode};
use hickory_proto::rr::{Name, RData, RecordType};
use hickory_proto::runtime::TokioRuntimeProvider;
use hickory_proto::tcp::TcpClientStream;
use hickory_proto::xfer::{DnsHandle, DnsRequestOptions};

use crate::error::{SyncError, SyncResult};
use crate::names::full_name_to_relative;
use crate::types::{RecordSetKey, Zone};

/// Default DNS port.
const DNS_PORT: u16 = 53;

/// IANA code for the deprecated dedicated SPF record type.
const TYPE_SPF: RecordType = RecordType::Unknown(99);

/// Default time budget for one complete transfer.
const DEFAULT_TRANSFER_TIMEOUT_SECS: u64 = 60;

/// Source of zones for the pipeline.
///
/// The shipped implementation is [`AxfrClient`]; tests substitute their
/// own to feed the pipeline synthetic zones.
#[async_trait]
pub trait ZoneSource: Send + Sync {
    /// Fetch the full zone for `domain`.
    async fn transfer(&self, domain: &str) -> SyncResult<Zone>;
}

/// AXFR client against one source name server.
///
/// Performs a standard full zone transfer (RFC 5936) over TCP and
/// relativizes owner names against the zone origin. No retries: a failed
/// transfer aborts the run.
pub struct AxfrClient {
    server: String,
    timeout: Duration,
}

impl AxfrClient {
    /// Create a client for `server` (`host[:port]`, port defaults to 53).
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            timeout: Duration::from_secs(DEFAULT_TRANSFER_TIMEOUT_SECS),
        }
    }

    /// Override the whole-transfer time budget.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn transfer_error(&self, detail: impl ToString) -> SyncError {
        SyncError::Transfer {
            server: self.server.clone(),
            detail: detail.to_string(),
        }
    }

    /// Resolve the configured server to a socket address.
    async fn resolve_server(&self) -> SyncResult<SocketAddr> {
        let (host, port) = parse_server(&self.server)?;
        let mut addrs = tokio::net::lookup_host((host.as_str(), port))
            .await
            .map_err(|e| self.transfer_error(format!("could not resolve '{host}': {e}")))?;
        addrs
            .next()
            .ok_or_else(|| self.transfer_error(format!("'{host}' resolved to no addresses")))
    }

    async fn run_transfer(&self, addr: SocketAddr, origin: Name, domain: &str) -> SyncResult<Zone> {
        let (stream, sender) = TcpClientStream::new(addr, None, None, TokioRuntimeProvider::new());
        let (client, bg) = Client::new(stream, sender, None)
            .await
            .map_err(|e| self.transfer_error(e))?;
        tokio::spawn(bg);

        let query = Query::query(origin, RecordType::AXFR);
        let mut responses = client.lookup(query, DnsRequestOptions::default());

        let mut zone = Zone::new();
        let mut soa_seen: u32 = 0;
        let mut first_record = true;

        'transfer: while let Some(message) = responses.next().await {
            let message = message.map_err(|e| self.transfer_error(e))?;

            if message.response_code() != ResponseCode::NoError {
                return Err(self.transfer_error(format!(
                    "server refused the transfer: {:?}",
                    message.response_code()
                )));
            }

            for record in message.answers() {
                let rtype = record.record_type();

                if first_record {
                    if rtype != RecordType::SOA {
                        return Err(
                            self.transfer_error("response did not start with an SOA record")
                        );
                    }
                    first_record = false;
                }

                if rtype == RecordType::SOA {
                    soa_seen += 1;
                    // The closing SOA repeats the opening one.
                    if soa_seen == 2 {
                        break 'transfer;
                    }
                }

                let owner = full_name_to_relative(&record.name().to_utf8(), domain);
                let key = RecordSetKey {
                    class_code: u16::from(record.dns_class()),
                    type_code: u16::from(rtype),
                };
                zone.insert_record(&owner, key, record.ttl(), render_rdata(record.data()));
            }
        }

        Ok(zone)
    }
}

#[async_trait]
impl ZoneSource for AxfrClient {
    async fn transfer(&self, domain: &str) -> SyncResult<Zone> {
        if self.server.trim().is_empty() {
            return Err(SyncError::Configuration(
                "no DNS server set to make the zone transfer request against".to_string(),
            ));
        }
        if domain.trim().is_empty() {
            return Err(SyncError::Configuration(
                "no domain set to request the zone transfer for".to_string(),
            ));
        }

        let mut origin = Name::from_ascii(domain)
            .map_err(|e| SyncError::Configuration(format!("invalid domain '{domain}': {e}")))?;
        origin.set_fqdn(true);

        let addr = self.resolve_server().await?;
        log::debug!("Requesting AXFR for {domain} from {addr}");

        tokio::time::timeout(self.timeout, self.run_transfer(addr, origin, domain))
            .await
            .map_err(|_| {
                self.transfer_error(format!(
                    "transfer timed out after {}s",
                    self.timeout.as_secs()
                ))
            })?
    }
}

/// Render rdata in presentation form.
///
/// SPF has no native type in the protocol library; it arrives as unknown
/// rdata whose default rendering is base64 of the raw wire bytes. Its
/// wire format is the same character-string sequence as TXT, so decode
/// it to text the way the native TXT rendering does.
fn render_rdata(data: &RData) -> String {
    match data {
        RData::Unknown { code, rdata } if *code == TYPE_SPF => {
            decode_character_strings(rdata.anything())
        }
        other => other.to_string(),
    }
}

/// Decode a wire-format character-string sequence (length-prefixed
/// chunks) into concatenated text, lossy on non-UTF-8 bytes.
fn decode_character_strings(wire: &[u8]) -> String {
    let mut text = String::new();
    let mut rest = wire;
    while let Some((&len, tail)) = rest.split_first() {
        let take = usize::from(len).min(tail.len());
        let (chunk, remainder) = tail.split_at(take);
        text.push_str(&String::from_utf8_lossy(chunk));
        rest = remainder;
    }
    text
}

/// Split a `host[:port]` server string, defaulting to port 53.
///
/// Accepts bare IPv4/IPv6 literals, `ip:port`, and hostnames.
fn parse_server(server: &str) -> SyncResult<(String, u16)> {
    let server = server.trim();
    if server.is_empty() {
        return Err(SyncError::Configuration(
            "no DNS server set to make the zone transfer request against".to_string(),
        ));
    }

    if server.parse::<IpAddr>().is_ok() {
        return Ok((server.to_string(), DNS_PORT));
    }
    if let Ok(sock) = server.parse::<SocketAddr>() {
        return Ok((sock.ip().to_string(), sock.port()));
    }
    if let Some((host, port)) = server.rsplit_once(':') {
        if let Ok(port) = port.parse::<u16>() {
            return Ok((host.to_string(), port));
        }
    }
    Ok((server.to_string(), DNS_PORT))
}

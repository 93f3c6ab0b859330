use crate::download::certs;
use crate::error::{Error, Result};
use std::io::Read;
use std::sync::Arc;
use std::time::Duration;
use ureq::{Agent, AgentBuilder};

const USER_AGENT: &str = concat!("easy-add/", env!("EASY_ADD_VERSION"));

/// Build a blocking HTTP agent that trusts platform and embedded roots
///
/// Without a timeout a stalled connection blocks until the process is killed.
pub fn build_agent(timeout: Option<Duration>) -> Result<Agent> {
    let mut builder = AgentBuilder::new()
        .tls_config(Arc::new(certs::tls_config()?))
        .user_agent(USER_AGENT);

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    Ok(builder.build())
}

/// GET an archive and return its body positioned at the first byte
///
/// Dropping the returned reader releases the connection.
pub fn open_archive_stream(agent: &Agent, url: &str) -> Result<Box<dyn Read + Send + Sync>> {
    let response = match agent.get(url).call() {
        Ok(response) => response,
        Err(ureq::Error::Status(status, _)) => {
            return Err(Error::Status {
                url: url.to_string(),
                status,
            });
        }
        Err(ureq::Error::Transport(transport)) => {
            return Err(Error::Transport {
                url: url.to_string(),
                reason: transport.to_string(),
            });
        }
    };

    if !(200..300).contains(&response.status()) {
        return Err(Error::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    Ok(response.into_reader())
}

use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::cli::Args;

/// A run needs at least two requests for the pause schedule to mean anything.
pub const MIN_COUNT: u32 = 2;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid target URL {given:?}: {source}")]
    InvalidUrl {
        given: String,
        #[source]
        source: url::ParseError,
    },
    #[error("count must be at least {min}, got {given}")]
    CountTooSmall { min: u32, given: u32 },
}

/// Validated probe parameters. Built once from the CLI surface, never mutated.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub target: Url,
    pub count: u32,
    /// Base pause between requests, in seconds.
    pub pause: u32,
    /// Seconds added to the pause after each attempt.
    pub increment: u32,
    /// Keepalive period in seconds; 0 leaves the client default in place.
    pub keep_alive: u16,
    /// Per-connection idle timeout in milliseconds.
    pub idle_timeout: u32,
}

impl TryFrom<Args> for ProbeConfig {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let target = Url::parse(&args.url).map_err(|source| ConfigError::InvalidUrl {
            given: args.url.clone(),
            source,
        })?;

        if args.count < MIN_COUNT {
            return Err(ConfigError::CountTooSmall {
                min: MIN_COUNT,
                given: args.count,
            });
        }

        Ok(Self {
            target,
            count: args.count,
            pause: args.pause,
            increment: args.increment,
            keep_alive: args.keep_alive,
            idle_timeout: args.idle_timeout,
        })
    }
}

impl ProbeConfig {
    /// Pause to observe after the 0-based attempt `iteration`:
    /// `pause + iteration * increment` seconds, saturating rather than wrapping.
    pub fn delay_after(&self, iteration: u32) -> Duration {
        let seconds = u64::from(self.pause)
            .saturating_add(u64::from(iteration).saturating_mul(u64::from(self.increment)));
        Duration::from_secs(seconds)
    }
}

use clap::Parser;

/// Sends a series of GET requests to a URL over HTTP/3, pausing between attempts.
#[derive(Parser, Debug)]
#[command(name = "http3ping", version, about)]
pub struct Args {
    /// The URL to send requests to
    #[arg(long)]
    pub url: String,

    /// Pause duration between requests in seconds
    #[arg(long, default_value_t = 1)]
    pub pause: u32,

    /// Number of requests to send
    #[arg(long, default_value_t = 1)]
    pub count: u32,

    /// Increment the pause length by this amount
    #[arg(long, default_value_t = 0)]
    pub increment: u32,

    /// Keepalive period in seconds
    #[arg(long, default_value_t = 0)]
    pub keep_alive: u16,

    /// Idle timeout in milliseconds
    #[arg(long, default_value_t = 600_000)]
    pub idle_timeout: u32,
}

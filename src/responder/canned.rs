//! Canned academic advice responder
//!
//! Stands in for a real response backend: waits a fixed delay to simulate
//! inference latency, then picks one reply uniformly at random from a fixed
//! set of pre-written academic advice. The user's input never influences
//! the pick.

use async_trait::async_trait;
use rand::seq::IndexedRandom;
use std::time::Duration;
use tracing::debug;

use super::Responder;
use crate::error::Result;

/// The fixed reply set; selection is uniform and input-independent
pub const CANNED_REPLIES: [&str; 5] = [
    "Based on your query about machine learning algorithms, I recommend exploring decision trees and random forests for your classification task. These algorithms provide good interpretability while maintaining high accuracy.",
    "For your database design project, consider implementing a normalized schema up to 3NF to reduce data redundancy while maintaining query performance through proper indexing strategies.",
    "In software engineering methodologies, Agile practices combined with DevOps principles can significantly improve your project delivery timeline and code quality metrics.",
    "Regarding your cybersecurity concerns, implementing multi-factor authentication and regular security audits should be prioritized in your network architecture design.",
    "For your cloud computing project, AWS offers a comprehensive free tier that includes EC2 instances, S3 storage, and RDS databases suitable for academic prototypes.",
];

/// Default simulated-latency delay in milliseconds
pub const DEFAULT_REPLY_DELAY_MS: u64 = 500;

/// Responder that returns a random canned reply after a fixed delay
///
/// # Examples
///
/// ```
/// use mentora::responder::{CannedResponder, Responder, CANNED_REPLIES};
///
/// # #[tokio::main]
/// # async fn main() -> anyhow::Result<()> {
/// let responder = CannedResponder::new(0);
/// let reply = responder.reply("What is 3NF?").await?;
/// assert!(CANNED_REPLIES.contains(&reply.as_str()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CannedResponder {
    delay: Duration,
}

impl CannedResponder {
    /// Creates a responder with the given simulated latency
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
        }
    }

    /// Delay applied before each reply
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for CannedResponder {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY_DELAY_MS)
    }
}

#[async_trait]
impl Responder for CannedResponder {
    async fn reply(&self, user_content: &str) -> Result<String> {
        debug!(
            "Simulating {}ms of latency for a {}-char submission",
            self.delay.as_millis(),
            user_content.chars().count()
        );
        tokio::time::sleep(self.delay).await;

        let mut rng = rand::rng();
        // choose only misses on an empty slice; the set is a non-empty constant
        let reply = CANNED_REPLIES
            .choose(&mut rng)
            .copied()
            .unwrap_or(CANNED_REPLIES[0]);
        Ok(reply.to_string())
    }

    fn name(&self) -> &str {
        "canned"
    }
}

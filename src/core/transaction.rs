//! Transaction records
//!
//! A plain transfer between two named parties. No signatures or balance
//! checks; the chain only stores what it is given.

use serde::Serialize;
use std::fmt;

/// A transfer of `amount` from `sender` to `recipient`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Transaction {
    sender: String,
    recipient: String,
    amount: f64,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(sender: &str, recipient: &str, amount: f64) -> Self {
        Self {
            sender: sender.to_string(),
            recipient: recipient.to_string(),
            amount,
        }
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}, amount: {:.2}", self.sender, self.recipient, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_getters() {
        let tx = Transaction::new("Alice", "Bob", 5.0);
        assert_eq!(tx.sender(), "Alice");
        assert_eq!(tx.recipient(), "Bob");
        assert_eq!(tx.amount(), 5.0);
    }

    #[test]
    fn test_display() {
        let tx = Transaction::new("Bob", "Charlie", 2.5);
        assert_eq!(tx.to_string(), "Bob -> Charlie, amount: 2.50");
    }

    #[test]
    fn test_json_shape() {
        let tx = Transaction::new("Bob", "Dave", 0.5);
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"sender": "Bob", "recipient": "Dave", "amount": 0.5})
        );
    }
}

//! Activation ticket generation.

use rand::distr::{Alphanumeric, SampleString};

/// Length of generated activation tickets.
const TICKET_LEN: usize = 6;

/// Generate a short random alphanumeric activation ticket.
///
/// Tickets are issued at account creation and identify the account in
/// activation links.
pub fn activation_ticket() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), TICKET_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_shape() {
        let ticket = activation_ticket();
        assert_eq!(ticket.len(), TICKET_LEN);
        assert!(ticket.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_tickets_are_random() {
        let tickets: std::collections::HashSet<String> =
            (0..8).map(|_| activation_ticket()).collect();
        assert!(tickets.len() > 1);
    }
}

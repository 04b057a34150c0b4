use rand::Rng;

/// One ticket per $10 invested.
pub const CENTS_PER_TICKET: u64 = 1_000;

/// Number of tickets an investment earns. Every investor gets at least one.
pub fn tickets_for_investment(amount_cents: u64) -> u64 {
    (amount_cents / CENTS_PER_TICKET).max(1)
}

/// Generate ticket identifiers in the platform's `LT-ABC123` shape.
pub fn generate_ticket_numbers(count: usize, rng: &mut impl Rng) -> Vec<String> {
    (0..count)
        .map(|_| {
            let letters: String = (0..3)
                .map(|_| char::from(rng.gen_range(b'A'..=b'Z')))
                .collect();
            let digits: String = (0..3)
                .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
                .collect();
            format!("LT-{letters}{digits}")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn one_ticket_per_ten_dollars() {
        assert_eq!(tickets_for_investment(10_000), 10);
        assert_eq!(tickets_for_investment(1_000), 1);
        assert_eq!(tickets_for_investment(1_999), 1);
    }

    #[test]
    fn small_investments_still_get_one_ticket() {
        assert_eq!(tickets_for_investment(0), 1);
        assert_eq!(tickets_for_investment(500), 1);
    }

    #[test]
    fn ticket_numbers_have_the_expected_shape() {
        let mut rng = StdRng::seed_from_u64(5);
        let tickets = generate_ticket_numbers(20, &mut rng);

        assert_eq!(tickets.len(), 20);
        for ticket in &tickets {
            let bytes = ticket.as_bytes();
            assert_eq!(bytes.len(), 9, "bad length: {ticket}");
            assert_eq!(&ticket[..3], "LT-");
            assert!(bytes[3..6].iter().all(u8::is_ascii_uppercase), "{ticket}");
            assert!(bytes[6..9].iter().all(u8::is_ascii_digit), "{ticket}");
        }
    }
}

//! Pseudonym labelling and assignment policy

use chatanon_core::SpeakerMap;

const FRIEND_PREFIX: &str = "Friend_";

/// Label for the `index`-th (zero-based) non-self sender.
///
/// Letters run `A..=Z`, then continue as spreadsheet columns:
/// `AA`, `AB`, ..., `AZ`, `BA`, ...
pub fn friend_label(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();

    let mut label = String::with_capacity(FRIEND_PREFIX.len() + letters.len());
    label.push_str(FRIEND_PREFIX);
    label.extend(letters.into_iter().map(char::from));
    label
}

/// Check whether `label` belongs to the `Friend_<letters>` scheme
pub fn is_friend_label(label: &str) -> bool {
    label
        .strip_prefix(FRIEND_PREFIX)
        .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_uppercase()))
}

/// Decides which pseudonym a newly seen sender receives.
#[derive(Debug, Clone)]
pub struct PseudonymPolicy {
    self_real_name: String,
    self_label: String,
    next_friend: usize,
}

impl PseudonymPolicy {
    pub fn new(self_real_name: impl Into<String>, self_label: impl Into<String>) -> Self {
        Self {
            self_real_name: self_real_name.into().to_lowercase(),
            self_label: self_label.into(),
            next_friend: 0,
        }
    }

    pub fn is_self(&self, real_name: &str) -> bool {
        real_name.to_lowercase() == self.self_real_name
    }

    /// Return the pseudonym for `real_name`, assigning the next label on
    /// first encounter.
    ///
    /// The second element is `true` when a new entry was added to `speakers`.
    pub fn assign<'a>(&mut self, speakers: &'a mut SpeakerMap, real_name: &str) -> (&'a str, bool) {
        speakers.get_or_insert_with(real_name, || self.next_pseudonym(real_name))
    }

    fn next_pseudonym(&mut self, real_name: &str) -> String {
        if self.is_self(real_name) {
            return self.self_label.clone();
        }
        let label = friend_label(self.next_friend);
        self.next_friend += 1;
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friend_labels() {
        assert_eq!(friend_label(0), "Friend_A");
        assert_eq!(friend_label(1), "Friend_B");
        assert_eq!(friend_label(25), "Friend_Z");
        assert_eq!(friend_label(26), "Friend_AA");
        assert_eq!(friend_label(27), "Friend_AB");
        assert_eq!(friend_label(51), "Friend_AZ");
        assert_eq!(friend_label(52), "Friend_BA");
        assert_eq!(friend_label(701), "Friend_ZZ");
        assert_eq!(friend_label(702), "Friend_AAA");
    }

    #[test]
    fn test_friend_labels_are_distinct() {
        let labels: std::collections::HashSet<_> = (0..1000).map(friend_label).collect();
        assert_eq!(labels.len(), 1000);
    }

    #[test]
    fn test_is_friend_label() {
        assert!(is_friend_label("Friend_A"));
        assert!(is_friend_label("Friend_AB"));
        assert!(!is_friend_label("Friend_"));
        assert!(!is_friend_label("Friend_a"));
        assert!(!is_friend_label("Me"));
    }

    #[test]
    fn test_assignment_order() {
        let mut policy = PseudonymPolicy::new("Your name", "Me");
        let mut speakers = SpeakerMap::new();

        assert_eq!(policy.assign(&mut speakers, "John Smith"), ("Friend_A", true));
        assert_eq!(policy.assign(&mut speakers, "your NAME"), ("Me", true));
        assert_eq!(policy.assign(&mut speakers, "Jane Doe"), ("Friend_B", true));
        assert_eq!(policy.assign(&mut speakers, "John Smith"), ("Friend_A", false));
        assert_eq!(policy.assign(&mut speakers, "Alex"), ("Friend_C", true));

        let order: Vec<_> = speakers.iter().collect();
        assert_eq!(
            order,
            vec![
                ("John Smith", "Friend_A"),
                ("your NAME", "Me"),
                ("Jane Doe", "Friend_B"),
                ("Alex", "Friend_C"),
            ]
        );
    }

    #[test]
    fn test_self_does_not_consume_friend_letter() {
        let mut policy = PseudonymPolicy::new("Your name", "Me");
        let mut speakers = SpeakerMap::new();

        policy.assign(&mut speakers, "Your name");
        assert_eq!(policy.assign(&mut speakers, "Bob").0, "Friend_A");
    }

    #[test]
    fn test_overflow_past_z() {
        let mut policy = PseudonymPolicy::new("Your name", "Me");
        let mut speakers = SpeakerMap::new();

        for i in 0..26 {
            policy.assign(&mut speakers, &format!("Sender {i}"));
        }
        assert_eq!(policy.assign(&mut speakers, "Sender 26").0, "Friend_AA");
    }
}

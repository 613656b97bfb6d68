use crossbeam::channel::{unbounded, Receiver, Sender};

/// FIFO queue of raw `source=destination` job tokens, drained in the order they were added.
///
/// Tokens are parsed only when a worker reaches them, so a malformed token
/// fails at its own position in the batch.
pub struct Worklist {
    sender: Sender<String>,
    receiver: Receiver<String>,
}

impl Worklist {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    pub fn add(&self, token: String) {
        self.sender
            .send(token)
            .expect("worklist owns its receiver");
    }

    /// Returns the oldest pending token, or `None` once the worklist is drained.
    pub fn next(&self) -> Option<String> {
        self.receiver.try_recv().ok()
    }

    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

impl FromIterator<String> for Worklist {
    fn from_iter<I: IntoIterator<Item = String>>(tokens: I) -> Self {
        let worklist = Worklist::new();
        for token in tokens {
            worklist.add(token);
        }
        worklist
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_insertion_order() {
        let worklist: Worklist = vec!["a=a.js".to_string(), "b".to_string()]
            .into_iter()
            .collect();
        assert_eq!(worklist.len(), 2);
        assert_eq!(worklist.next().as_deref(), Some("a=a.js"));
        assert_eq!(worklist.next().as_deref(), Some("b"));
        assert_eq!(worklist.next(), None);
        assert!(worklist.is_empty());
    }
}

use std::borrow::Cow;

/// Protospacer adjacent motif following the guide sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct PAM {
    pam: Vec<u8>,
}

impl PAM {
    pub fn tail(query: &[u8]) -> PAM {
        PAM {
            pam: query.to_ascii_uppercase(),
        }
    }

    pub fn cas9() -> PAM {
        Self::tail(b"NGG")
    }

    /// Tests the PAM against the end of `window`. An `N` in the motif matches
    /// any nucleotide, while an `N` in the window matches any motif symbol.
    pub fn matches(&self, window: &[u8]) -> bool {
        if self.len() <= window.len() {
            self.pam
                .iter()
                .rev()
                .zip(window.iter().rev())
                .all(|(&query, &candidate)| {
                    query == b'N' || candidate == b'N' || query == candidate
                })
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.pam.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pam.is_empty()
    }

    pub fn to_string(&self) -> Cow<str> {
        String::from_utf8_lossy(&self.pam)
    }
}

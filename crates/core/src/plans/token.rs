use crate::errors::{Error, Result};

/// Credential verification seam for the plan gateway.
///
/// The gateway only needs a yes/no answer; swapping the scheme (signed
/// tokens, session lookup) must not touch the dispatch logic.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<()>;
}

/// Verifier that compares against a single configured token value.
pub struct StaticTokenVerifier {
    accepted: String,
}

impl StaticTokenVerifier {
    pub fn new(accepted: impl Into<String>) -> Self {
        StaticTokenVerifier {
            accepted: accepted.into(),
        }
    }
}

impl TokenVerifier for StaticTokenVerifier {
    fn verify(&self, token: &str) -> Result<()> {
        if token == self.accepted {
            Ok(())
        } else {
            Err(Error::Unauthorized("invalid token".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_configured_token() {
        let verifier = StaticTokenVerifier::new("valid_token");
        assert!(verifier.verify("valid_token").is_ok());
    }

    #[test]
    fn rejects_any_other_token() {
        let verifier = StaticTokenVerifier::new("valid_token");
        assert!(matches!(
            verifier.verify("VALID_TOKEN"),
            Err(Error::Unauthorized(_))
        ));
        assert!(matches!(verifier.verify(""), Err(Error::Unauthorized(_))));
    }
}

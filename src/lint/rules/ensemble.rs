//! Leader election and ensemble rules.

use crate::config::{ConfigValue, ZooCfg};
use crate::error::Result;
use crate::lint::{Rule, RuleId, RuleOutcome};

const ELECTION_ALG: &str = "electionAlg";
const LEADER_SERVERS: &str = "leaderServers";

/// Ensembles larger than this benefit from a leader that does not serve clients.
const LEADER_SERVES_LIMIT: usize = 3;

/// Validates the leader election implementation.
pub struct ElectionAlgRule;

impl Rule for ElectionAlgRule {
    fn id(&self) -> RuleId {
        RuleId::new("election-alg")
    }

    fn name(&self) -> &str {
        "ElectionAlg"
    }

    fn description(&self) -> &str {
        "Ensures electionAlg names a known implementation and flags deprecated ones"
    }

    fn check(&self, config: &ZooCfg) -> Result<RuleOutcome> {
        let mut outcome = RuleOutcome::new();

        match config.get(ELECTION_ALG) {
            Err(_) => outcome.error(format!("`{ELECTION_ALG}` is missing")),
            Ok(ConfigValue::Integer(alg @ (1 | 2))) => outcome.warn(format!(
                "`{ELECTION_ALG}` {alg} is deprecated; use 3 (fast leader election)"
            )),
            Ok(ConfigValue::Integer(0 | 3)) => {}
            Ok(other) => outcome.error(format!(
                "`{ELECTION_ALG}` should be one of 0, 1, 2, 3, found '{other}'"
            )),
        }

        Ok(outcome)
    }
}

/// Validates whether the leader accepts client connections.
///
/// The ensemble is only read when the value is `yes`; malformed
/// `server.<id>` entries then surface here as a failed check.
pub struct LeaderServersRule;

impl Rule for LeaderServersRule {
    fn id(&self) -> RuleId {
        RuleId::new("leader-servers")
    }

    fn name(&self) -> &str {
        "LeaderServers"
    }

    fn description(&self) -> &str {
        "Ensures leaderServers is yes or no and recommends no for large ensembles"
    }

    fn check(&self, config: &ZooCfg) -> Result<RuleOutcome> {
        let mut outcome = RuleOutcome::new();

        let value = match config.get(LEADER_SERVERS) {
            Ok(value) => value,
            Err(_) => {
                outcome.error(format!("`{LEADER_SERVERS}` is missing"));
                return Ok(outcome);
            }
        };

        match value.as_str() {
            Some("yes") => {
                let servers = config.servers()?;
                if servers.len() > LEADER_SERVES_LIMIT {
                    outcome.warn(format!(
                        "`{LEADER_SERVERS}` is yes with {} servers; \
                         set it to no so the leader can focus on coordination",
                        servers.len()
                    ));
                }
            }
            Some("no") => {}
            _ => outcome.error(format!(
                "`{LEADER_SERVERS}` should be yes or no, found '{value}'"
            )),
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Overlay;
    use crate::error::ZooCfgError;
    use std::collections::BTreeMap;

    fn config(text: &str) -> ZooCfg {
        ZooCfg::parse(text).unwrap()
    }

    fn bare() -> ZooCfg {
        ZooCfg::build(BTreeMap::new(), Overlay::new())
    }

    fn ensemble(size: usize) -> String {
        (1..=size)
            .map(|id| format!("server.{id}=zoo{id}:2888:3888"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn election_alg_default_passes() {
        assert!(ElectionAlgRule.check(&ZooCfg::default()).unwrap().is_clean());
        assert!(ElectionAlgRule.check(&config("electionAlg=0")).unwrap().is_clean());
    }

    #[test]
    fn election_alg_deprecated_warns() {
        for text in ["electionAlg=1", "electionAlg=2"] {
            let outcome = ElectionAlgRule.check(&config(text)).unwrap();
            assert!(outcome.errors.is_empty());
            assert_eq!(outcome.warnings.len(), 1, "{text}");
            assert!(outcome.warnings[0].contains("deprecated"));
        }
    }

    #[test]
    fn election_alg_unknown_errors() {
        for text in ["electionAlg=4", "electionAlg=-1", "electionAlg=fast"] {
            let outcome = ElectionAlgRule.check(&config(text)).unwrap();
            assert_eq!(outcome.errors.len(), 1, "{text}");
            assert!(outcome.warnings.is_empty());
        }
    }

    #[test]
    fn election_alg_missing_errors() {
        let outcome = ElectionAlgRule.check(&bare()).unwrap();
        assert_eq!(outcome.errors, vec!["`electionAlg` is missing"]);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn leader_servers_missing_errors() {
        let outcome = LeaderServersRule.check(&bare()).unwrap();
        assert_eq!(outcome.errors, vec!["`leaderServers` is missing"]);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn leader_servers_default_passes() {
        assert!(LeaderServersRule.check(&ZooCfg::default()).unwrap().is_clean());
    }

    #[test]
    fn leader_servers_invalid_value_errors() {
        let outcome = LeaderServersRule.check(&config("leaderServers=true")).unwrap();
        assert_eq!(
            outcome.errors,
            vec!["`leaderServers` should be yes or no, found 'true'"]
        );
    }

    #[test]
    fn leader_servers_is_case_sensitive() {
        let outcome = LeaderServersRule.check(&config("leaderServers=YES")).unwrap();
        assert_eq!(outcome.errors.len(), 1);
    }

    #[test]
    fn small_ensemble_passes() {
        let outcome = LeaderServersRule.check(&config(&ensemble(3))).unwrap();
        assert!(outcome.is_clean());
    }

    #[test]
    fn large_ensemble_warns_when_leader_serves() {
        let outcome = LeaderServersRule.check(&config(&ensemble(5))).unwrap();
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].contains("5 servers"));
    }

    #[test]
    fn large_ensemble_with_no_passes() {
        let text = format!("{}\nleaderServers=no", ensemble(5));
        assert!(LeaderServersRule.check(&config(&text)).unwrap().is_clean());
    }

    #[test]
    fn bad_server_entry_fails_the_check() {
        let err = LeaderServersRule
            .check(&config("server.300=zoo:2888:3888"))
            .unwrap_err();
        assert!(matches!(err, ZooCfgError::InvalidServerId { .. }));
    }

    #[test]
    fn invalid_value_is_reported_despite_bad_server_entry() {
        let outcome = LeaderServersRule
            .check(&config("leaderServers=maybe\nserver.0=zoo:2888:3888"))
            .unwrap();
        assert_eq!(
            outcome.errors,
            vec!["`leaderServers` should be yes or no, found 'maybe'"]
        );
    }

    #[test]
    fn ensemble_is_not_read_when_leader_does_not_serve() {
        let outcome = LeaderServersRule
            .check(&config("leaderServers=no\nserver.0=zoo:2888:3888"))
            .unwrap();
        assert!(outcome.is_clean());
    }
}

// Guard Invariants Tests
//
// 1. A blocked entry always rejects the proposal; the wrapped handler never runs
// 2. A clear proposal gets exactly the wrapped handler's result and state
// 3. Rejection is atomic: earlier legal entries leave no trace
// 4. An empty blocklist is indistinguishable from the bare handler
// 5. The proposed value never matters to the block decision

use super::{proposal, TestApp};
use crate::filter::{BlockedPair, FilteringProposalHandler, ParamBlockList};
use crate::gov::{ProposalError, ProposalHandler};
use crate::params::{Context, ParamsError};
use crate::types::*;
use proptest::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Wrapped handler that only counts its invocations
#[derive(Default)]
struct CountingHandler {
    calls: AtomicUsize,
}

impl ProposalHandler for CountingHandler {
    fn handle(
        &self,
        _ctx: &mut Context,
        _proposal: &ParameterChangeProposal,
    ) -> Result<(), ProposalError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn blocked(subspace: &str, key: &str) -> Result<(), ProposalError> {
    Err(ProposalError::BlockedParameter {
        subspace: subspace.to_string(),
        key: key.to_string(),
    })
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[cfg(test)]
mod scenarios {
    use super::*;

    /// Blocked bank.SendEnabled is refused and bank state is unchanged
    #[test]
    fn test_blocked_send_enabled() {
        let mut app = TestApp::new([(BANK_SUBSPACE, KEY_SEND_ENABLED)]);
        let before = app.ctx.clone();

        let p = proposal(&[(
            BANK_SUBSPACE,
            KEY_SEND_ENABLED,
            r#"[{"denom": "test", "enabled": false}]"#,
        )]);

        let result = app.guard.handle(&mut app.ctx, &p);
        assert_eq!(result, blocked(BANK_SUBSPACE, KEY_SEND_ENABLED));
        assert_eq!(
            app.ctx.store().get(BANK_SUBSPACE, KEY_SEND_ENABLED),
            before.store().get(BANK_SUBSPACE, KEY_SEND_ENABLED)
        );
    }

    /// Unblocked staking.BondDenom goes through
    #[test]
    fn test_unblocked_bond_denom() {
        let mut app = TestApp::new([(BANK_SUBSPACE, KEY_SEND_ENABLED)]);

        let p = proposal(&[(STAKING_SUBSPACE, KEY_BOND_DENOM, r#""test""#)]);
        app.guard.handle(&mut app.ctx, &p).unwrap();

        assert_eq!(
            app.ctx.store().get(STAKING_SUBSPACE, KEY_BOND_DENOM),
            Some(&ParamValue::Denom("test".to_string()))
        );
    }

    /// Empty blocklist applies consensus block params as the bare handler would
    #[test]
    fn test_empty_blocklist_consensus_params() {
        let mut app = TestApp::permissive();
        let mut bare_ctx = app.ctx.clone();

        let p = proposal(&[(
            BASEAPP_SUBSPACE,
            KEY_BLOCK_PARAMS,
            r#"{"max_bytes": "2048", "max_gas": "-1", "time_iota_ms": "500"}"#,
        )]);

        let guarded = app.guard.handle(&mut app.ctx, &p);
        let bare = app.raw.handle(&mut bare_ctx, &p);

        assert!(guarded.is_ok());
        assert_eq!(guarded, bare);
        assert_eq!(app.ctx, bare_ctx);
    }

    /// A legal first entry is not applied when the second is blocked
    #[test]
    fn test_legal_then_blocked() {
        let mut app = TestApp::new([(BANK_SUBSPACE, KEY_SEND_ENABLED)]);
        let before = app.ctx.clone();

        let p = proposal(&[
            (STAKING_SUBSPACE, KEY_MAX_VALIDATORS, "1"),
            (BANK_SUBSPACE, KEY_SEND_ENABLED, "[]"),
        ]);

        let result = app.guard.handle(&mut app.ctx, &p);
        assert_eq!(result, blocked(BANK_SUBSPACE, KEY_SEND_ENABLED));
        assert_eq!(
            app.ctx.store().get(STAKING_SUBSPACE, KEY_MAX_VALIDATORS),
            before.store().get(STAKING_SUBSPACE, KEY_MAX_VALIDATORS)
        );
        assert_eq!(app.ctx, before);
    }
}

// =============================================================================
// INVARIANTS
// =============================================================================

#[cfg(test)]
mod invariants {
    use super::*;

    /// The wrapped handler never sees a proposal with a blocked entry
    #[test]
    fn test_block_is_absolute() {
        let counter = CountingHandler::default();
        let list = Arc::new(ParamBlockList::new([(BASEAPP_SUBSPACE, KEY_VERSION_PARAMS)]));
        let guard = FilteringProposalHandler::new(list, &counter);

        let proposals = [
            proposal(&[(BASEAPP_SUBSPACE, KEY_VERSION_PARAMS, r#"{"app_version": "2"}"#)]),
            proposal(&[
                (STAKING_SUBSPACE, KEY_MAX_VALIDATORS, "1"),
                (BASEAPP_SUBSPACE, KEY_VERSION_PARAMS, "garbage"),
            ]),
            proposal(&[
                (BASEAPP_SUBSPACE, KEY_VERSION_PARAMS, r#"{"app_version": "2"}"#),
                (BASEAPP_SUBSPACE, KEY_VERSION_PARAMS, r#"{"app_version": "2"}"#),
            ]),
        ];

        for p in &proposals {
            let result = guard.handle(&mut Context::default(), p);
            assert_eq!(result, blocked(BASEAPP_SUBSPACE, KEY_VERSION_PARAMS));
        }
        assert_eq!(counter.calls.load(Ordering::SeqCst), 0);
    }

    /// A no-op assignment of the current value is still refused
    #[test]
    fn test_value_independence() {
        let mut app = TestApp::new([(STAKING_SUBSPACE, KEY_BOND_DENOM)]);

        let current = app
            .ctx
            .store()
            .get(STAKING_SUBSPACE, KEY_BOND_DENOM)
            .unwrap()
            .to_json()
            .unwrap();

        for value in [current.as_str(), r#""test""#, "", "not json", "null"] {
            let p = proposal(&[(STAKING_SUBSPACE, KEY_BOND_DENOM, value)]);
            let result = app.guard.handle(&mut app.ctx, &p);
            assert_eq!(result, blocked(STAKING_SUBSPACE, KEY_BOND_DENOM), "value {:?}", value);
        }
    }

    /// Domain errors of the wrapped handler come back unchanged
    #[test]
    fn test_delegated_errors_unchanged() {
        let mut app = TestApp::new([(BANK_SUBSPACE, KEY_SEND_ENABLED)]);

        let p = proposal(&[("mint", "InflationRateChange", r#""0.1""#)]);
        assert_eq!(
            app.guard.handle(&mut app.ctx, &p),
            Err(ProposalError::Params(ParamsError::UnknownSubspace("mint".to_string())))
        );

        let p = proposal(&[(STAKING_SUBSPACE, "MinCommissionRate", r#""0.05""#)]);
        assert_eq!(
            app.guard.handle(&mut app.ctx, &p),
            Err(ProposalError::Params(ParamsError::UnknownKey {
                subspace: STAKING_SUBSPACE.to_string(),
                key: "MinCommissionRate".to_string(),
            }))
        );

        let p = ParameterChangeProposal::default();
        assert_eq!(
            app.guard.handle(&mut app.ctx, &p),
            Err(ProposalError::Params(ParamsError::EmptyProposal))
        );
    }

    /// Many proposal executions share one blocklist without locking
    #[test]
    fn test_concurrent_evaluation() {
        let list = Arc::new(ParamBlockList::new([(BANK_SUBSPACE, KEY_SEND_ENABLED)]));
        let counter = CountingHandler::default();
        let guard = FilteringProposalHandler::new(list, &counter);

        let clear = proposal(&[(STAKING_SUBSPACE, KEY_MAX_VALIDATORS, "1")]);
        let refused = proposal(&[(BANK_SUBSPACE, KEY_SEND_ENABLED, "[]")]);

        std::thread::scope(|scope| {
            for i in 0..8 {
                let guard = &guard;
                let p = if i % 2 == 0 { &clear } else { &refused };
                scope.spawn(move || {
                    for _ in 0..100 {
                        let result = guard.handle(&mut Context::default(), p);
                        assert_eq!(result.is_err(), i % 2 == 1);
                    }
                });
            }
        });

        assert_eq!(counter.calls.load(Ordering::SeqCst), 400);
    }
}

// =============================================================================
// PROPERTIES
// =============================================================================

/// Changes drawn from a small pool so that blocklists and proposals collide
const CHANGE_POOL: &[(&str, &str, &str)] = &[
    (BANK_SUBSPACE, KEY_SEND_ENABLED, r#"[{"denom": "test", "enabled": false}]"#),
    (BANK_SUBSPACE, KEY_DEFAULT_SEND_ENABLED, "false"),
    (STAKING_SUBSPACE, KEY_BOND_DENOM, r#""test""#),
    (STAKING_SUBSPACE, KEY_MAX_VALIDATORS, "1"),
    (STAKING_SUBSPACE, KEY_MAX_VALIDATORS, "0"),
    (STAKING_SUBSPACE, KEY_UNBONDING_TIME, r#""1""#),
    (BASEAPP_SUBSPACE, KEY_BLOCK_PARAMS, r#"{"max_bytes": "1", "max_gas": "1", "time_iota_ms": "1"}"#),
    (BASEAPP_SUBSPACE, KEY_VALIDATOR_PARAMS, r#"{"pub_key_types": ["secp256k1"]}"#),
    (BASEAPP_SUBSPACE, KEY_VERSION_PARAMS, r#"{"app_version": "3"}"#),
    (BASEAPP_SUBSPACE, KEY_VERSION_PARAMS, "not json"),
    ("mint", "InflationMax", r#""0.2""#),
];

fn change_strategy() -> impl Strategy<Value = ParamChange> {
    prop::sample::select(CHANGE_POOL.to_vec())
        .prop_map(|(subspace, key, value)| ParamChange::new(subspace, key, value))
}

fn pair_strategy() -> impl Strategy<Value = BlockedPair> {
    prop::sample::select(CHANGE_POOL.to_vec())
        .prop_map(|(subspace, key, _)| BlockedPair::new(subspace, key))
}

proptest! {
    /// The guard either refuses before any write, or behaves exactly like the bare handler
    #[test]
    fn prop_guard_is_blocklist_gate(
        changes in prop::collection::vec(change_strategy(), 0..6),
        pairs in prop::collection::vec(pair_strategy(), 0..4),
    ) {
        let mut app = TestApp::new(pairs.clone());
        let mut bare_ctx = app.ctx.clone();
        let before = app.ctx.clone();
        let p = ParameterChangeProposal::with_changes(changes.clone());

        let guarded = app.guard.handle(&mut app.ctx, &p);
        let first_blocked = changes
            .iter()
            .find(|c| pairs.iter().any(|b| b.subspace == c.subspace && b.key == c.key));

        match first_blocked {
            Some(change) => {
                prop_assert_eq!(guarded, blocked(&change.subspace, &change.key));
                prop_assert_eq!(&app.ctx, &before);
            }
            None => {
                let bare = app.raw.handle(&mut bare_ctx, &p);
                prop_assert_eq!(guarded, bare);
                prop_assert_eq!(&app.ctx, &bare_ctx);
            }
        }
    }

    /// With nothing blocked the guard is the bare handler
    #[test]
    fn prop_empty_blocklist_is_noop(changes in prop::collection::vec(change_strategy(), 0..6)) {
        let mut app = TestApp::permissive();
        let mut bare_ctx = app.ctx.clone();
        let p = ParameterChangeProposal::with_changes(changes);

        let guarded = app.guard.handle(&mut app.ctx, &p);
        let bare = app.raw.handle(&mut bare_ctx, &p);

        prop_assert_eq!(guarded, bare);
        prop_assert_eq!(&app.ctx, &bare_ctx);
    }

    /// Blocking ignores the value entirely
    #[test]
    fn prop_any_value_of_blocked_key_refused(value in ".*") {
        let mut app = TestApp::new([(BASEAPP_SUBSPACE, KEY_BLOCK_PARAMS)]);
        let before = app.ctx.clone();
        let p = ParameterChangeProposal::with_changes(vec![
            ParamChange::new(BASEAPP_SUBSPACE, KEY_BLOCK_PARAMS, value),
        ]);

        prop_assert_eq!(
            app.guard.handle(&mut app.ctx, &p),
            blocked(BASEAPP_SUBSPACE, KEY_BLOCK_PARAMS)
        );
        prop_assert_eq!(&app.ctx, &before);
    }
}

//! Transaction lifecycle tests: commit on success, discard on failure,
//! and read-only queries, driven through the full peer.

mod common;

use chaincode_peer::{EntryPoint, PeerConfig, PeerError, Peer};
use chaincode_shim::{ErrorCode, MemStore, ShimError, StubConfig};
use chaincode_start::{ChaincodeError, SimpleChaincode, HELLO_WORLD_KEY};

use common::*;

// ── Test: init then read hello_world ──

#[test]
fn test_init_then_query_hello_world() {
    let mut peer = simple_peer();

    let payload = peer.init("init", &args(&["hi there"])).unwrap();
    assert!(payload.is_empty());

    let value = peer.query("read", &args(&[HELLO_WORLD_KEY])).unwrap();
    assert_eq!(value, b"hi there");
}

// ── Test: init argument count ──

#[test]
fn test_init_wrong_arg_count_commits_nothing() {
    let mut peer = simple_peer();

    for bad in [args(&[]), args(&["a", "b"])] {
        let err = peer.init("init", &bad).unwrap_err();
        assert!(matches!(
            err.chaincode_error::<ChaincodeError>(),
            Some(ChaincodeError::ArgumentCount { expected: 1, .. })
        ));
    }
    assert!(!peer.store().contains(HELLO_WORLD_KEY).unwrap());
}

// ── Test: write then read ──

#[test]
fn test_write_then_read() {
    let mut peer = simple_peer();
    peer.invoke("write", &args(&["k", "v"])).unwrap();
    assert_eq!(peer.query("read", &args(&["k"])).unwrap(), b"v");
}

// ── Test: overwrite ──

#[test]
fn test_write_overwrites_committed_value() {
    let mut peer = seeded_peer(&[("k", "old")]);
    peer.invoke("write", &args(&["k", "new"])).unwrap();
    assert_eq!(peer.query("read", &args(&["k"])).unwrap(), b"new");
}

// ── Test: invoke init resets ──

#[test]
fn test_invoke_init_resets_hello_world() {
    let mut peer = seeded_peer(&[(HELLO_WORLD_KEY, "first")]);
    peer.invoke("init", &args(&["second"])).unwrap();
    assert_eq!(
        peer.query("read", &args(&[HELLO_WORLD_KEY])).unwrap(),
        b"second"
    );
}

// ── Test: error taxonomy through the peer ──

#[test]
fn test_argument_count_errors() {
    let mut peer = simple_peer();

    let err = peer.invoke("write", &args(&["only-key"])).unwrap_err();
    assert!(matches!(
        err.chaincode_error::<ChaincodeError>(),
        Some(ChaincodeError::ArgumentCount { expected: 2, got: 1, .. })
    ));

    let err = peer.query("read", &args(&["a", "b"])).unwrap_err();
    assert!(matches!(
        err.chaincode_error::<ChaincodeError>(),
        Some(ChaincodeError::ArgumentCount { expected: 1, got: 2, .. })
    ));
}

#[test]
fn test_read_missing_key_names_key() {
    let peer = simple_peer();
    let err = peer.query("read", &args(&["nonexistent"])).unwrap_err();

    assert!(matches!(
        err,
        PeerError::Chaincode {
            entry: EntryPoint::Query,
            ..
        }
    ));
    let inner = err.chaincode_error::<ChaincodeError>().unwrap();
    assert_eq!(
        inner.to_string(),
        r#"{"Error":"Failed to get state for nonexistent"}"#
    );
}

#[test]
fn test_unknown_functions() {
    let mut peer = simple_peer();

    let err = peer.invoke("bogus", &args(&[])).unwrap_err();
    assert!(matches!(
        err.chaincode_error::<ChaincodeError>(),
        Some(ChaincodeError::UnknownInvoke(f)) if f == "bogus"
    ));

    let err = peer.query("bogus", &args(&[])).unwrap_err();
    assert!(matches!(
        err.chaincode_error::<ChaincodeError>(),
        Some(ChaincodeError::UnknownQuery(f)) if f == "bogus"
    ));
}

// ── Test: stub limits surface as state errors ──

#[test]
fn test_value_limit_rejects_write() {
    let config = PeerConfig {
        stub: StubConfig {
            max_value_len: 3,
            ..StubConfig::default()
        },
        ..PeerConfig::default()
    };
    let mut peer = Peer::new(SimpleChaincode::new(), Box::new(MemStore::new()), config);

    let err = peer.invoke("write", &args(&["k", "toolong"])).unwrap_err();
    match err.chaincode_error::<ChaincodeError>() {
        Some(ChaincodeError::State(shim)) => {
            assert_eq!(shim.to_error_code(), ErrorCode::ValueTooLarge)
        }
        other => panic!("expected state error, got {:?}", other),
    }
    assert!(!peer.store().contains("k").unwrap());
}

// ── Test: failed transaction discards all its writes ──

#[test]
fn test_failed_invoke_discards_every_write() {
    let mut peer = batch_peer();
    peer.invoke("commit", &args(&["a=1"])).unwrap();

    let err = peer
        .invoke("abort", &args(&["a=2", "b=2", "c=2"]))
        .unwrap_err();
    assert!(matches!(
        err.chaincode_error::<BatchError>(),
        Some(BatchError::Aborted(3))
    ));

    assert_eq!(peer.store().get("a").unwrap(), Some(b"1".to_vec()));
    assert!(!peer.store().contains("b").unwrap());
    assert!(!peer.store().contains("c").unwrap());
}

#[test]
fn test_successful_invoke_commits_every_write() {
    let mut peer = batch_peer();
    peer.invoke("commit", &args(&["a=1", "b=2", "a=3"])).unwrap();

    assert_eq!(peer.store().get("a").unwrap(), Some(b"3".to_vec()));
    assert_eq!(peer.store().get("b").unwrap(), Some(b"2".to_vec()));
}

#[test]
fn test_write_limit_aborts_transaction() {
    let config = PeerConfig {
        stub: StubConfig {
            max_write_bytes: 4,
            ..StubConfig::default()
        },
        ..PeerConfig::default()
    };
    let mut peer = Peer::new(BatchChaincode, Box::new(MemStore::new()), config);

    // "a"+"1" fits, "b"+"22" pushes the total past 4 bytes.
    let err = peer.invoke("commit", &args(&["a=1", "b=22"])).unwrap_err();
    assert!(matches!(
        err.chaincode_error::<BatchError>(),
        Some(BatchError::State(ShimError::Code(_)))
    ));
    assert!(!peer.store().contains("a").unwrap());
}

// ── Test: queries never commit ──

#[test]
fn test_query_sees_committed_state_only() {
    let mut peer = batch_peer();
    peer.invoke("commit", &args(&["x=hello", "y=world"])).unwrap();

    let out = peer.query("get", &args(&["x", "y", "z"])).unwrap();
    assert_eq!(out, b"helloworld");
    assert_eq!(peer.tx_count(), 2);
}

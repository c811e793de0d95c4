//! Unit tests for IpFilteringHandler.

use chain_core::{Handler, Outcome, Request};

use super::ProbeHandler;
use crate::{IpFilteringHandler, DEFAULT_BLOCKED_IPS};

#[tokio::test]
async fn test_ip_filter_blocks_default_entries() {
    let handler = IpFilteringHandler::new();
    let probe = ProbeHandler::new();
    handler.set_next(probe.clone()).unwrap();

    for ip in DEFAULT_BLOCKED_IPS {
        let outcome = handler.handle(&Request::new("1", "x", ip)).await.unwrap();
        assert_eq!(outcome, Outcome::rejected(format!("Blocked IP {}", ip)));
    }
    assert_eq!(probe.calls(), 0);
}

#[tokio::test]
async fn test_ip_filter_forwards_allowed_origin() {
    let handler = IpFilteringHandler::new();
    let probe = ProbeHandler::new();
    handler.set_next(probe.clone()).unwrap();

    let outcome = handler.handle(&Request::new("2", "x", "192.168.1.5")).await.unwrap();
    assert_eq!(outcome, Outcome::complete("Probe 2"));
    assert_eq!(probe.calls(), 1);
}

#[tokio::test]
async fn test_ip_filter_custom_blocklist_replaces_default() {
    let handler = IpFilteringHandler::with_blocked(["172.16.0.1"]);
    assert!(handler.is_blocked("172.16.0.1"));
    assert!(!handler.is_blocked("192.168.0.10"));

    let outcome = handler.handle(&Request::new("3", "x", "172.16.0.1")).await.unwrap();
    assert_eq!(outcome.to_string(), "Rejected: Blocked IP 172.16.0.1");
}

#[tokio::test]
async fn test_ip_filter_empty_blocklist_completes_without_successor() {
    let handler = IpFilteringHandler::with_blocked(Vec::<String>::new());
    let outcome = handler.handle(&Request::new("4", "x", "10.0.0.1")).await.unwrap();
    assert_eq!(outcome.to_string(), "IP Check Complete");
}

#[test]
fn test_ip_filter_instances_own_their_blocklist() {
    let first = IpFilteringHandler::new();
    let second = IpFilteringHandler::with_blocked(["1.1.1.1"]);
    assert_eq!(first.blocked_ips().len(), 2);
    assert_eq!(second.blocked_ips().len(), 1);
}

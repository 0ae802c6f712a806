use super::*;

/// Tests near-simultaneous accept and decline presses.
///
/// The window only ever yields the first press, so the decline queued behind the accept is
/// never evaluated.
///
/// Expected: one window, accept branch only, decline left unobserved
#[tokio::test]
async fn first_response_wins() {
    let platform = vikings_platform(3)
        .with_responses(&[OfferResponse::Accept, OfferResponse::Decline]);

    let machine = OfferLifecycle::new(&platform).run(offer_for("Vikings")).await;

    assert_eq!(machine.outcome(), OfferOutcome::Accepted);
    assert_eq!(
        platform.count_calls(|call| matches!(call, Call::AwaitResponse { .. })),
        1
    );
    assert!(!platform.player_notices().contains(&DECLINED_NOTICE.to_string()));
    assert_eq!(platform.responses.lock().unwrap().len(), 1);
}

/// Tests decline arriving first.
///
/// Expected: decline branch only, no role mutation
#[tokio::test]
async fn decline_first_ignores_accept() {
    let platform = vikings_platform(3)
        .with_responses(&[OfferResponse::Decline, OfferResponse::Accept]);

    let machine = OfferLifecycle::new(&platform).run(offer_for("Vikings")).await;

    assert_eq!(machine.outcome(), OfferOutcome::Declined);
    assert_eq!(
        platform.count_calls(|call| matches!(call, Call::AddTeamRole { .. })),
        0
    );
}

/// Tests two offers to the same player running side by side.
///
/// Expected: each offer resolves independently with its own window
#[tokio::test]
async fn concurrent_offers_are_independent() {
    let vikings = vikings_platform(3).with_responses(&[OfferResponse::Accept]);
    let bears = FakePlatform::new()
        .with_team(999, "Bears", 10)
        .with_responses(&[OfferResponse::Decline]);

    let vikings_lifecycle = OfferLifecycle::new(&vikings);
    let bears_lifecycle = OfferLifecycle::new(&bears);

    let (vikings_machine, bears_machine) = tokio::join!(
        vikings_lifecycle.run(offer_for("Vikings")),
        bears_lifecycle.run(offer_for("Bears")),
    );

    assert_eq!(vikings_machine.outcome(), OfferOutcome::Accepted);
    assert_eq!(bears_machine.outcome(), OfferOutcome::Declined);
}
